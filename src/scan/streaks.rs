use super::sweep::CancelToken;
use crate::error::EngineError;
use crate::games::keno;
use crate::games::picker;
use crate::games::tables;
use crate::games::KenoRisk;
use crate::rng::hash_server_seed;
use crate::rng::ByteStream;
use crate::rng::FloatStream;
use crate::rng::Seeds;
use crate::Cursor;
use crate::Nonce;
use crate::ENGINE_VERSION;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

/// nonces per shard. shards re-evaluate a little past their edges to own
/// their runs outright, so they are kept considerably larger than the
/// plain scan batches.
const SHARD: u64 = 4096;

/// the reproducible pick stream starts past the two draw blocks
/// (10 draw floats = 40 bytes = cursors 0 and 1)
const PICK_CURSOR: Cursor = 2;

/// where the player picks for each window come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PickMode {
    /// derived per nonce from a secondary float stream on the same seeds
    #[default]
    Reproducible,
    /// drawn once per scan from system entropy, recorded on every window
    Entropy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakRequest {
    pub seeds: Seeds,
    pub nonce_start: Nonce,
    pub nonce_end: Nonce,
    #[serde(default)]
    pub risk: KenoRisk,
    pub pick_count: usize,
    #[serde(default)]
    pub mode: PickMode,
    /// every nonce in a window must multiply at least this
    pub min_multiplier: f64,
    /// and the window's cumulative product must reach this
    pub min_product: f64,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// 0 means no deadline
    #[serde(default)]
    pub timeout_ms: u64,
}

fn default_min_length() -> usize {
    2
}

/// a maximal run of consecutive nonces clearing both thresholds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Streak {
    pub start: Nonce,
    pub len: usize,
    pub product: f64,
    pub multipliers: Vec<f64>,
    /// the entropy pick set, when that mode was used; reproducible picks
    /// are re-derivable from the seeds and carried nowhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picks: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreakOutcome {
    pub streaks: Vec<Streak>,
    pub total_evaluated: u64,
    pub timed_out: bool,
    pub cancelled: bool,
    pub engine_version: &'static str,
    pub server_seed_hash: String,
}

/// The streak finder: the same sharded parallel sweep as the plain scan,
/// but each worker carries an open-window accumulator across its shard.
/// shards overlap by one run on each side - a worker skips the run its
/// left neighbour owns and follows its own trailing run past the right
/// edge - so every window is emitted exactly once, by the shard owning
/// its start.
pub struct StreakScan {
    request: StreakRequest,
    entropy_picks: Option<Vec<u8>>,
    cancel: CancelToken,
}

impl StreakScan {
    pub fn new(request: StreakRequest) -> Result<Self, EngineError> {
        if request.nonce_end < request.nonce_start {
            return Err(EngineError::InvalidRange {
                start: request.nonce_start,
                end: request.nonce_end,
            });
        }
        if !(1..=10).contains(&request.pick_count) {
            return Err(EngineError::params(format!(
                "pick_count must be in [1, 10], got {}",
                request.pick_count
            )));
        }
        if !(request.min_multiplier > 0.0) {
            return Err(EngineError::params(
                "min_multiplier must be positive".to_string(),
            ));
        }
        if request.min_length < 1 {
            return Err(EngineError::params(
                "min_length must be at least 1".to_string(),
            ));
        }
        let entropy_picks = match request.mode {
            PickMode::Reproducible => None,
            PickMode::Entropy => {
                let mut board: Vec<u8> = (0..keno::SQUARES as u8).collect();
                board.shuffle(&mut rand::thread_rng());
                board.truncate(request.pick_count);
                Some(board)
            }
        };
        Ok(Self {
            request,
            entropy_picks,
            cancel: CancelToken::new(),
        })
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn run(self) -> Result<StreakOutcome, EngineError> {
        let start = self.request.nonce_start;
        let end = self.request.nonce_end;
        log::info!("streak scan over [{}, {}]", start, end);
        let workers = num_cpus::get().max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .expect("build scan pool");
        let n_shards = ((end - start) / SHARD) + 1;
        let next = AtomicU64::new(0);
        let evaluated = AtomicU64::new(0);
        let timed_out = AtomicBool::new(false);
        let cancelled = AtomicBool::new(false);
        let found = Mutex::new(Vec::<Streak>::new());
        let deadline = (self.request.timeout_ms > 0)
            .then(|| Instant::now() + Duration::from_millis(self.request.timeout_ms));

        pool.scope(|scope| {
            for _ in 0..workers {
                let scan = &self;
                let next = &next;
                let evaluated = &evaluated;
                let timed_out = &timed_out;
                let cancelled = &cancelled;
                let found = &found;
                scope.spawn(move |_| {
                    let mut lens = Lens::new(scan);
                    loop {
                        // stop conditions precede the claim: a claimed
                        // shard always completes, so results cover a
                        // contiguous prefix of the range
                        let remaining = next.load(Ordering::SeqCst) < n_shards;
                        if scan.cancel.is_cancelled() {
                            if remaining {
                                cancelled.store(true, Ordering::SeqCst);
                            }
                            break;
                        }
                        if deadline.is_some_and(|d| Instant::now() >= d) {
                            if remaining {
                                timed_out.store(true, Ordering::SeqCst);
                            }
                            break;
                        }
                        let shard = next.fetch_add(1, Ordering::SeqCst);
                        if shard >= n_shards {
                            break;
                        }
                        let lo = start + shard * SHARD;
                        let hi = lo.saturating_add(SHARD - 1).min(end);
                        let (streaks, count) = scan.shard(&mut lens, lo, hi);
                        evaluated.fetch_add(count, Ordering::Relaxed);
                        if !streaks.is_empty() {
                            found.lock().expect("streaks").extend(streaks);
                        }
                    }
                });
            }
        });

        let mut streaks = found.into_inner().expect("streaks");
        streaks.sort_by_key(|s| s.start);
        log::info!("streak scan finished: {} windows", streaks.len());
        Ok(StreakOutcome {
            streaks,
            total_evaluated: evaluated.load(Ordering::Relaxed),
            timed_out: timed_out.load(Ordering::SeqCst),
            cancelled: cancelled.load(Ordering::SeqCst),
            engine_version: ENGINE_VERSION,
            server_seed_hash: hash_server_seed(&self.request.seeds.server),
        })
    }

    /// sweep one shard, skipping the run the left neighbour owns and
    /// following a trailing run past the right edge until it closes
    fn shard(&self, lens: &mut Lens, lo: u64, hi: u64) -> (Vec<Streak>, u64) {
        let mut streaks = Vec::new();
        let mut count = 0u64;
        let threshold = self.request.min_multiplier;
        let mut n = lo;
        if lo > self.request.nonce_start {
            count += 1;
            if lens.multiplier(lo - 1) >= threshold {
                // the run crossing our left edge belongs to the neighbour
                loop {
                    if n > hi {
                        return (streaks, count);
                    }
                    count += 1;
                    let miss = lens.multiplier(n) < threshold;
                    n += 1;
                    if miss {
                        break;
                    }
                }
            }
        }
        let mut run: Vec<f64> = Vec::new();
        let mut run_start = n;
        while n <= self.request.nonce_end {
            let past_edge = n > hi;
            if past_edge && run.is_empty() {
                break;
            }
            let m = lens.multiplier(n);
            count += 1;
            if m >= threshold {
                if run.is_empty() {
                    run_start = n;
                }
                run.push(m);
            } else {
                self.flush(&mut streaks, run_start, &mut run);
                if past_edge {
                    break;
                }
            }
            n += 1;
        }
        self.flush(&mut streaks, run_start, &mut run);
        (streaks, count)
    }

    fn flush(&self, streaks: &mut Vec<Streak>, start: Nonce, run: &mut Vec<f64>) {
        if run.len() >= self.request.min_length {
            let product: f64 = run.iter().product();
            if product >= self.request.min_product {
                streaks.push(Streak {
                    start,
                    len: run.len(),
                    product,
                    multipliers: run.clone(),
                    picks: self.entropy_picks.clone(),
                });
            }
        }
        run.clear();
    }
}

/// per-worker evaluation state: one keyed stream for draws, one for the
/// reproducible picks, both rewound per nonce
struct Lens<'a> {
    scan: &'a StreakScan,
    draws: FloatStream,
    picks: FloatStream,
    draw_buf: [f64; keno::DRAWS],
    pick_buf: [f64; 10],
}

impl<'a> Lens<'a> {
    fn new(scan: &'a StreakScan) -> Self {
        let stream = ByteStream::from(&scan.request.seeds);
        Self {
            scan,
            draws: FloatStream::new(stream.clone(), 0),
            picks: FloatStream::seek(stream, 0, PICK_CURSOR),
            draw_buf: [0.0; keno::DRAWS],
            pick_buf: [0.0; 10],
        }
    }

    fn multiplier(&mut self, nonce: Nonce) -> f64 {
        self.draws.rewind(nonce, 0);
        self.draws.fill(&mut self.draw_buf);
        let draws = keno::draw(&self.draw_buf);
        let k = self.scan.request.pick_count;
        let hits = match &self.scan.entropy_picks {
            Some(picks) => picks.iter().filter(|p| draws.contains(p)).count(),
            None => {
                self.picks.rewind(nonce, PICK_CURSOR);
                self.picks.fill(&mut self.pick_buf[..k]);
                picker::draw(&self.pick_buf[..k], keno::SQUARES, k)
                    .iter()
                    .filter(|p| draws.contains(p))
                    .count()
            }
        };
        tables::keno(self.scan.request.risk, k)[hits]
    }
}
