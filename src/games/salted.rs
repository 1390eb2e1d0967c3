use super::GameResult;
use crate::rng::crash_point;
use crate::rng::fallback_point;
use serde_json::json;

/// the crash/slide family. with a round hash and salt supplied the
/// multiplier is the authentic salt-chain value and no floats are
/// consumed; without them the scanner falls back to a float-based
/// approximation so the family can still be enumerated over nonces.
/// results are tagged with the mode so consumers can tell them apart.
pub fn float_count(game_hash: Option<&str>, salt: Option<&str>) -> usize {
    match (game_hash, salt) {
        (Some(_), Some(_)) => 0,
        _ => 1,
    }
}

pub fn evaluate(floats: &[f64], game_hash: Option<&str>, salt: Option<&str>) -> GameResult {
    let (multiplier, mode) = match (game_hash, salt) {
        (Some(hash), Some(salt)) => (crash_point(hash, salt), "authentic"),
        _ => (fallback_point(floats[0]), "approximate"),
    };
    GameResult {
        metric: multiplier,
        metric_label: "multiplier",
        details: json!({ "multiplier": multiplier, "mode": mode }),
    }
}
