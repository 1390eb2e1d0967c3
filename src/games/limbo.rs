use super::GameResult;
use crate::rng::trunc2;
use serde_json::json;

pub const FLOATS: usize = 1;

/// target multiplier from one float: house / f, truncated to 2 decimals
/// and floored at 1. `house` defaults to 0.99.
pub fn evaluate(f: f64, house: f64) -> GameResult {
    let multiplier = trunc2(house / f).max(1.0);
    GameResult {
        metric: multiplier,
        metric_label: "multiplier",
        details: json!({ "multiplier": multiplier }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_below_one() {
        assert_eq!(evaluate(0.999, 0.99).metric, 1.0);
        assert!(evaluate(0.5, 0.99).metric >= 1.0);
    }

    #[test]
    fn small_floats_blow_up() {
        assert!(evaluate(0.0001, 0.99).metric > 9_000.0);
    }

    #[test]
    fn truncated_to_hundredths() {
        let m = evaluate(0.3, 0.99).metric;
        assert_eq!(m, trunc2(m));
    }
}
