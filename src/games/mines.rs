use super::picker;
use super::GameResult;
use serde_json::json;

pub const GRID: usize = 25;

pub fn float_count(mines: usize) -> usize {
    mines
}

/// mine positions drawn from the 5x5 grid by ordered splice. the metric
/// is the 1-based position of the earliest mine in grid order, which is
/// how far a row-major sweep would get before blowing up.
pub fn evaluate(floats: &[f64], mines: usize) -> GameResult {
    let positions = picker::draw(floats, GRID, mines);
    let first = positions.iter().min().copied().unwrap_or(0) as u64 + 1;
    GameResult {
        metric: first as f64,
        metric_label: "first_mine",
        details: json!({ "mines": positions, "first_mine": first }),
    }
}
