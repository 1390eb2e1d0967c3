use super::params::KenoRisk;
use super::picker;
use super::tables;
use super::GameResult;
use serde_json::json;

pub const SQUARES: usize = 40;
pub const DRAWS: usize = 10;

/// ten squares drawn from the 40-square board by ordered splice; the
/// metric is the payout for how many of the player's picks were drawn.
/// with no picks supplied the draw is still reconstructed (the board is
/// what live feeds correlate on) and the metric is 0.
pub fn evaluate(floats: &[f64], risk: KenoRisk, picks: &[u8]) -> GameResult {
    let draws = draw(floats);
    let hits = picks.iter().filter(|p| draws.contains(p)).count();
    let multiplier = match picks.len() {
        0 => 0.0,
        n => tables::keno(risk, n)[hits],
    };
    GameResult {
        metric: multiplier,
        metric_label: "multiplier",
        details: json!({ "draws": draws, "hits": hits, "multiplier": multiplier }),
    }
}

/// the bare draw sequence, order preserved
pub fn draw(floats: &[f64]) -> Vec<u8> {
    picker::draw(floats, SQUARES, DRAWS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::floats;
    use crate::rng::Seeds;

    #[test]
    fn draws_are_ten_distinct_squares() {
        let seeds = Seeds::new("s", "c");
        let fs = floats(&seeds, 1, 0, DRAWS);
        let drawn = draw(&fs);
        assert_eq!(drawn.len(), 10);
        let mut unique = drawn.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 10);
        assert!(drawn.iter().all(|&d| d < 40));
    }

    #[test]
    fn hits_count_the_intersection() {
        let seeds = Seeds::new("s", "c");
        let fs = floats(&seeds, 3, 0, DRAWS);
        let drawn = draw(&fs);
        let picks = [drawn[0], drawn[4], drawn[9]];
        let r = evaluate(&fs, KenoRisk::Classic, &picks);
        assert_eq!(r.details["hits"], 3);
        assert_eq!(r.metric, tables::keno(KenoRisk::Classic, 3)[3]);
    }

    #[test]
    fn missing_every_draw_pays_the_zero_column() {
        let seeds = Seeds::new("s", "c");
        let fs = floats(&seeds, 3, 0, DRAWS);
        let drawn = draw(&fs);
        let picks: Vec<u8> = (0..40).filter(|n| !drawn.contains(n)).take(5).collect();
        let r = evaluate(&fs, KenoRisk::Classic, &picks);
        assert_eq!(r.details["hits"], 0);
        assert_eq!(r.metric, tables::keno(KenoRisk::Classic, 5)[0]);
    }

    #[test]
    fn no_picks_still_reconstructs_the_board() {
        let seeds = Seeds::new("s", "c");
        let fs = floats(&seeds, 1, 0, DRAWS);
        let r = evaluate(&fs, KenoRisk::Classic, &[]);
        assert_eq!(r.metric, 0.0);
        assert_eq!(r.details["draws"].as_array().unwrap().len(), 10);
    }
}
