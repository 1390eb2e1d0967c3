use super::GameResult;
use serde_json::json;

pub const FLOATS: usize = 1;

/// one float, 10,001 discrete points on [0.00, 100.00]. the top roll of
/// exactly 100.00 is reachable; that is intentional, not an off-by-one.
pub fn evaluate(f: f64) -> GameResult {
    let roll = (f * 10_001.0).floor() / 100.0;
    GameResult {
        metric: roll,
        metric_label: "roll",
        details: json!({ "roll": roll }),
    }
}
