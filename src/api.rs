//! The library surface the desktop shell and the script engine consume.
//! Everything here is a thin delegation; the semantics live in the
//! modules underneath.

use crate::error::EngineError;
use crate::games;
use crate::games::Game;
use crate::games::GameResult;
use crate::games::GameSpec;
use crate::games::RawParams;
use crate::rng::Seeds;
use crate::scan::ScanOutcome;
use crate::scan::ScanRequest;
use crate::scan::StreakOutcome;
use crate::scan::StreakRequest;
use crate::scan::StreakScan;
use crate::scan::Sweep;
use crate::Nonce;

pub use crate::rng::hash_server_seed;

/// the closed game registry, in id order
pub fn list_games() -> Vec<GameSpec> {
    games::list()
}

/// reconstruct one outcome
pub fn verify(
    game: &str,
    seeds: &Seeds,
    nonce: Nonce,
    params: &RawParams,
) -> Result<GameResult, EngineError> {
    let game: Game = game.parse()?;
    game.evaluate(seeds, nonce, params)
}

/// sweep a nonce range for predicate matches
pub fn scan(request: ScanRequest) -> Result<ScanOutcome, EngineError> {
    Sweep::new(request)?.run()
}

/// sweep for back-to-back keno windows
pub fn keno_streak_scan(request: StreakRequest) -> Result<StreakOutcome, EngineError> {
    StreakScan::new(request)?.run()
}

/// live-ingest support: does an externally observed metric match the
/// reconstruction for the same seeds and nonce?
pub fn matches_observed(
    game: &str,
    seeds: &Seeds,
    nonce: Nonce,
    params: &RawParams,
    observed: f64,
) -> Result<bool, EngineError> {
    let result = verify(game, seeds, nonce, params)?;
    Ok((result.metric - observed).abs() <= 1e-9)
}
