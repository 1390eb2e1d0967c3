pub mod api;
pub mod cards;
pub mod error;
pub mod games;
pub mod rng;
pub mod scan;

/// dimensional analysis types
pub type Nonce = u64;
pub type Cursor = u32;
pub type Metric = f64;

/// surfaced in every scan result so downstream persistence
/// can detect algorithm changes between runs
pub const ENGINE_VERSION: &str = "0.3.1";

// scan orchestrator parameters
const BATCH_SIZE: u64 = 1024;
const HIT_CEILING: usize = 1_000_000;
const RANGE_CEILING: u64 = 10_000_000_000;

// evaluator parameters
const MAX_FLOAT_BUDGET: usize = 52;
const HOUSE_EDGE: f64 = 0.01;

/// trait for random generation, mainly (strictly?) for testing
pub trait Arbitrary {
    fn random() -> Self;
}

/// progress bar
pub fn progress(n: u64) -> indicatif::ProgressBar {
    let tick = std::time::Duration::from_millis(250);
    let style = "{spinner:.cyan} {elapsed} ~ {percent:>3}% {wide_bar:.cyan}";
    let style = indicatif::ProgressStyle::with_template(style).unwrap();
    let progress = indicatif::ProgressBar::new(n);
    progress.set_style(style);
    progress.enable_steady_tick(tick);
    progress
}

/// initialize logging
pub fn init() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
