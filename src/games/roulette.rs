use super::GameResult;
use serde_json::json;

pub const FLOATS: usize = 1;

const REDS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// single-zero wheel: one float picks a pocket in [0, 36]
pub fn evaluate(f: f64) -> GameResult {
    let pocket = ((f * 37.0) as u8).min(36);
    let colour = match pocket {
        0 => "green",
        p if REDS.contains(&p) => "red",
        _ => "black",
    };
    let parity = match pocket {
        0 => "none",
        p if p % 2 == 0 => "even",
        _ => "odd",
    };
    let range = match pocket {
        0 => "none",
        1..=18 => "low",
        _ => "high",
    };
    GameResult {
        metric: pocket as f64,
        metric_label: "pocket",
        details: json!({
            "pocket": pocket,
            "colour": colour,
            "parity": parity,
            "range": range,
        }),
    }
}
