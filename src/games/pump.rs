use super::params::Difficulty;
use super::picker;
use super::tables;
use super::GameResult;
use serde_json::json;

pub const SLOTS: usize = 25;

pub fn float_count(difficulty: Difficulty) -> usize {
    difficulty.pops()
}

/// pop positions drawn from the 25 pump slots by ordered splice. the
/// balloon survives up to the slot before the earliest pop, capped at
/// the number of poppable-free slots, and the safe-step count maps
/// through the difficulty table.
pub fn evaluate(floats: &[f64], difficulty: Difficulty) -> GameResult {
    let pops_n = difficulty.pops();
    let pops = picker::draw(floats, SLOTS, pops_n);
    let min_pop = pops.iter().min().copied().unwrap_or(0) as usize;
    let safe = min_pop.min(SLOTS - pops_n);
    let multiplier = tables::pump(difficulty)[safe];
    GameResult {
        metric: multiplier,
        metric_label: "multiplier",
        details: json!({ "pops": pops, "safe_steps": safe, "multiplier": multiplier }),
    }
}
