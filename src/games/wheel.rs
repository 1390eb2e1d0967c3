use super::params::Risk;
use super::tables;
use super::GameResult;
use serde_json::json;

pub const FLOATS: usize = 1;

/// one float picks a segment; the payout row is embedded data
pub fn evaluate(f: f64, segments: usize, risk: Risk) -> GameResult {
    let segment = ((f * segments as f64) as usize).min(segments - 1);
    let multiplier = tables::wheel(risk, segments)[segment];
    GameResult {
        metric: multiplier,
        metric_label: "multiplier",
        details: json!({ "segment": segment, "multiplier": multiplier }),
    }
}
