//! Scan Binary
//!
//! Drives one scan from the command line: replay a seed pair over a
//! nonce range and print every hit as a JSON line.

use anyhow::Context;
use clap::Parser;
use fairscan::rng::Seeds;
use fairscan::scan::Op;
use fairscan::scan::Predicate;
use fairscan::scan::ScanRequest;
use fairscan::scan::Sweep;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "scan", about = "replay a provably-fair seed pair and scan its outcomes")]
struct Args {
    /// game id (see `list` output of the shell), e.g. dice
    game: String,
    /// unhashed server seed, used verbatim
    #[arg(long)]
    server: String,
    /// client seed
    #[arg(long)]
    client: String,
    #[arg(long, default_value_t = 0)]
    start: u64,
    #[arg(long)]
    end: u64,
    /// predicate operator: = != < <= > >=
    #[arg(long, default_value = ">=")]
    op: String,
    #[arg(long)]
    target: f64,
    /// equality slack; ignored by ordered operators
    #[arg(long, default_value_t = 0.0)]
    tolerance: f64,
    /// stop after this many hits (0 = unbounded)
    #[arg(long, default_value_t = 0)]
    limit: usize,
    #[arg(long, default_value_t = 0)]
    timeout_ms: u64,
    /// inline JSON object with game parameters
    #[arg(long)]
    params: Option<String>,
    /// attach evaluator details to each hit
    #[arg(long)]
    details: bool,
}

fn main() -> anyhow::Result<()> {
    fairscan::init();
    let args = Args::parse();
    let params = match &args.params {
        Some(s) => serde_json::from_str(s).context("parse --params")?,
        None => Default::default(),
    };
    let request = ScanRequest {
        game: args.game,
        seeds: Seeds::new(args.server, args.client),
        nonce_start: args.start,
        nonce_end: args.end,
        params,
        predicate: Predicate {
            op: args.op.parse::<Op>()?,
            target: args.target,
            tolerance: args.tolerance,
        },
        hit_limit: args.limit,
        timeout_ms: args.timeout_ms,
        with_details: args.details,
    };
    let range = request.range_size();
    let sweep = Sweep::new(request)?;

    let bar = fairscan::progress(range);
    let done = Arc::new(AtomicBool::new(false));
    let ticker = {
        let bar = bar.clone();
        let done = Arc::clone(&done);
        let evaluated = sweep.evaluated();
        std::thread::spawn(move || {
            while !done.load(Ordering::Relaxed) {
                bar.set_position(evaluated.load(Ordering::Relaxed));
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        })
    };

    let outcome = sweep.run();
    done.store(true, Ordering::Relaxed);
    let _ = ticker.join();
    bar.finish_and_clear();
    let outcome = outcome?;

    for hit in &outcome.hits {
        println!("{}", serde_json::to_string(hit)?);
    }
    log::info!(
        "engine {} seed hash {}",
        outcome.engine_version,
        outcome.server_seed_hash
    );
    log::info!("{}", serde_json::to_string(&outcome.summary)?);
    Ok(())
}
