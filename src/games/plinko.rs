use super::params::Risk;
use super::tables;
use super::GameResult;
use serde_json::json;

/// one float per row of pegs
pub fn float_count(rows: usize) -> usize {
    rows
}

/// binary walk: the ball steps right on f >= 0.5, and the prize slot is
/// the count of rightward steps
pub fn evaluate(floats: &[f64], rows: usize, risk: Risk) -> GameResult {
    let path: String = floats
        .iter()
        .take(rows)
        .map(|&f| if f >= 0.5 { 'R' } else { 'L' })
        .collect();
    let prize = path.chars().filter(|&c| c == 'R').count();
    let multiplier = tables::plinko(risk, rows)[prize];
    GameResult {
        metric: multiplier,
        metric_label: "multiplier",
        details: json!({ "path": path, "prize_index": prize, "multiplier": multiplier }),
    }
}
