use super::picker;
use super::GameResult;
use serde_json::json;

pub const ROUNDS: usize = 20;

pub fn float_count(deaths: usize) -> usize {
    deaths
}

/// death rounds drawn from the 20 crossing rounds by ordered splice.
/// rounds are 1-based; the metric is the first round the run ends on.
pub fn evaluate(floats: &[f64], deaths: usize) -> GameResult {
    let rounds: Vec<u8> = picker::draw(floats, ROUNDS, deaths)
        .into_iter()
        .map(|r| r + 1)
        .collect();
    let first = rounds.iter().min().copied().unwrap_or(1) as u64;
    GameResult {
        metric: first as f64,
        metric_label: "first_death",
        details: json!({ "deaths": rounds, "first_death": first }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_death_round() {
        // f = 0.5 on the 20 pool picks slot 10, round 11
        let r = evaluate(&[0.5], 1);
        assert_eq!(r.metric, 11.0);
    }

    #[test]
    fn smallest_death_round_wins() {
        let r = evaluate(&[0.5, 0.0, 0.9], 3);
        assert_eq!(r.metric, 1.0);
    }

    #[test]
    fn rounds_are_one_based() {
        let r = evaluate(&[0.0], 1);
        assert_eq!(r.metric, 1.0);
        let r = evaluate(&[0.999_999], 1);
        assert_eq!(r.metric, 20.0);
    }
}
