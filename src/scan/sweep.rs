use super::collector::Collector;
use super::request::Hit;
use super::request::ScanOutcome;
use super::request::ScanRequest;
use super::request::ScanSummary;
use crate::error::EngineError;
use crate::games::Game;
use crate::games::GameParams;
use crate::rng::hash_server_seed;
use crate::rng::ByteStream;
use crate::rng::FloatStream;
use crate::BATCH_SIZE;
use crate::ENGINE_VERSION;
use crate::HIT_CEILING;
use crossbeam_channel::Sender;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

/// external cancellation: a single monotone signal observed by every
/// worker at batch boundaries. in-progress batches run to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// One scan call.
///
/// Construction validates everything upfront (game, range, predicate,
/// params) and resolves the typed parameters and float budget once;
/// nothing in the per-nonce loop touches a map or a registry. `run`
/// builds a scheduler private to this call, shards the range into
/// contiguous batches claimed off an atomic cursor, and funnels
/// per-batch hit buffers over a bounded channel into the ordered
/// collector. memory is independent of the range size.
pub struct Sweep {
    request: ScanRequest,
    game: Game,
    params: GameParams,
    budget: usize,
    limit: usize,
    cancel: CancelToken,
    evaluated: Arc<AtomicU64>,
}

struct Shared<'a> {
    next: &'a AtomicU64,
    full: &'a AtomicBool,
    timed_out: &'a AtomicBool,
    cancelled: &'a AtomicBool,
    failure: &'a Mutex<Option<EngineError>>,
    bounds: &'a Mutex<Option<(f64, f64)>>,
    deadline: Option<Instant>,
    n_batches: u64,
}

impl Sweep {
    pub fn new(request: ScanRequest) -> Result<Self, EngineError> {
        let game: Game = request.game.parse()?;
        request.validate_range()?;
        request.predicate.validate()?;
        let params = game.parse_params(&request.params)?;
        let budget = game.float_count(&params);
        let limit = match request.hit_limit {
            0 => HIT_CEILING,
            n => n.min(HIT_CEILING),
        };
        Ok(Self {
            request,
            game,
            params,
            budget,
            limit,
            cancel: CancelToken::new(),
            evaluated: Arc::new(AtomicU64::new(0)),
        })
    }

    /// handle for cancelling this scan from another thread
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// live count of completed evaluations, for progress display
    pub fn evaluated(&self) -> Arc<AtomicU64> {
        self.evaluated.clone()
    }

    pub fn run(self) -> Result<ScanOutcome, EngineError> {
        log::info!(
            "scanning {} over [{}, {}]",
            self.game,
            self.request.nonce_start,
            self.request.nonce_end
        );
        let workers = num_cpus::get().max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .expect("build scan pool");

        let full = Arc::new(AtomicBool::new(false));
        let (tx, rx) = crossbeam_channel::bounded::<Vec<Hit>>(workers);
        let limit = self.limit;
        let collector_full = Arc::clone(&full);
        let collector = std::thread::spawn(move || {
            let mut collector = Collector::new(limit);
            for batch in rx {
                for hit in batch {
                    collector.push(hit);
                }
                // keep draining once full: in-flight batches may hold
                // lower-nonce hits that displace the tail
                if collector.full() {
                    collector_full.store(true, Ordering::SeqCst);
                }
            }
            collector
        });

        let next = AtomicU64::new(0);
        let timed_out = AtomicBool::new(false);
        let cancelled = AtomicBool::new(false);
        let failure = Mutex::new(None::<EngineError>);
        let bounds = Mutex::new(None::<(f64, f64)>);
        let shared = Shared {
            next: &next,
            full: full.as_ref(),
            timed_out: &timed_out,
            cancelled: &cancelled,
            failure: &failure,
            bounds: &bounds,
            deadline: (self.request.timeout_ms > 0)
                .then(|| Instant::now() + Duration::from_millis(self.request.timeout_ms)),
            n_batches: (self.request.range_size() + BATCH_SIZE - 1) / BATCH_SIZE,
        };

        let sweep = &self;
        let shared = &shared;
        pool.scope(|scope| {
            for _ in 0..workers {
                let tx = tx.clone();
                scope.spawn(move |_| sweep.worker(shared, tx));
            }
        });
        drop(tx);
        let collector = collector.join().expect("join collector thread");

        if let Some(error) = failure.into_inner().expect("failure slot") {
            log::warn!("scan aborted: {}", error);
            return Err(error);
        }
        let hits = collector.into_sorted();
        let bounds = bounds.into_inner().expect("metric bounds");
        let summary = ScanSummary {
            total_evaluated: self.evaluated.load(Ordering::Relaxed),
            hits_found: hits.len() as u64,
            min_metric: bounds.map(|(lo, _)| lo),
            max_metric: bounds.map(|(_, hi)| hi),
            timed_out: timed_out.load(Ordering::SeqCst),
            cancelled: cancelled.load(Ordering::SeqCst),
        };
        log::info!(
            "scan finished: {} evaluated, {} hits",
            summary.total_evaluated,
            summary.hits_found
        );
        Ok(ScanOutcome {
            hits,
            summary,
            engine_version: ENGINE_VERSION,
            server_seed_hash: hash_server_seed(&self.request.seeds.server),
        })
    }

    /// pull batches off the shared cursor until the range, the hit
    /// limit, the deadline, or the caller says stop
    fn worker(&self, shared: &Shared, tx: Sender<Vec<Hit>>) {
        let mut floats = FloatStream::new(
            ByteStream::from(&self.request.seeds),
            self.request.nonce_start,
        );
        // one reusable slice per worker, sized to the largest budget any
        // game can ask for; footprint stays flat across the range
        let mut buf = [0.0f64; crate::MAX_FLOAT_BUDGET];
        loop {
            // stop conditions are read before claiming, so a claimed
            // batch always runs to completion. claims hand out ascending
            // indices, which keeps the completed set a contiguous prefix
            // and the retained hits the lowest-nonce matches.
            if shared.full.load(Ordering::SeqCst) {
                break;
            }
            if shared.failure.lock().expect("failure slot").is_some() {
                break;
            }
            let remaining = shared.next.load(Ordering::SeqCst) < shared.n_batches;
            if self.cancel.is_cancelled() {
                if remaining {
                    shared.cancelled.store(true, Ordering::SeqCst);
                }
                break;
            }
            if shared.deadline.is_some_and(|d| Instant::now() >= d) {
                if remaining {
                    shared.timed_out.store(true, Ordering::SeqCst);
                }
                break;
            }
            let batch = shared.next.fetch_add(1, Ordering::SeqCst);
            if batch >= shared.n_batches {
                break;
            }

            let lo = self.request.nonce_start + batch * BATCH_SIZE;
            let hi = lo.saturating_add(BATCH_SIZE - 1).min(self.request.nonce_end);
            let mut hits = Vec::new();
            let mut count = 0u64;
            let mut lo_metric = f64::INFINITY;
            let mut hi_metric = f64::NEG_INFINITY;
            for nonce in lo..=hi {
                floats.rewind(nonce, 0);
                floats.fill(&mut buf[..self.budget]);
                let result = match self.game.evaluate_with_floats(&buf[..self.budget], &self.params) {
                    Ok(result) => result,
                    Err(e) => {
                        // validation passed upfront, so this is a logic
                        // bug; abort the whole scan with a diagnostic
                        let mut slot = shared.failure.lock().expect("failure slot");
                        if slot.is_none() {
                            *slot = Some(EngineError::InternalEvaluator {
                                nonce,
                                message: e.to_string(),
                            });
                        }
                        break;
                    }
                };
                count += 1;
                let metric = result.metric;
                lo_metric = lo_metric.min(metric);
                hi_metric = hi_metric.max(metric);
                if self.request.predicate.matches(metric) {
                    hits.push(Hit {
                        nonce,
                        metric,
                        details: self.request.with_details.then_some(result.details),
                    });
                }
            }
            self.evaluated.fetch_add(count, Ordering::Relaxed);
            if count > 0 {
                let mut merged = shared.bounds.lock().expect("metric bounds");
                match merged.as_mut() {
                    Some((lo, hi)) => {
                        *lo = lo.min(lo_metric);
                        *hi = hi.max(hi_metric);
                    }
                    None => *merged = Some((lo_metric, hi_metric)),
                }
            }
            if !hits.is_empty() && tx.send(hits).is_err() {
                break;
            }
        }
    }
}
