use super::GameResult;
use crate::cards::card_from_float;
use crate::cards::Card;
use serde_json::json;

pub const FLOATS: usize = 52;

/// the full hilo rail: 52 cards dealt with replacement, one float each.
/// unlike the splice games, repeats are possible. the metric is the
/// index of the opening card.
pub fn evaluate(floats: &[f64]) -> GameResult {
    let cards: Vec<Card> = floats.iter().take(FLOATS).map(|&f| card_from_float(f)).collect();
    let first = cards[0];
    GameResult {
        metric: first.index() as f64,
        metric_label: "first_card",
        details: json!({
            "first_card": first.to_string(),
            "cards": cards.iter().map(Card::to_string).collect::<Vec<_>>(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_is_the_opening_card_index() {
        let mut floats = [0.5; 52];
        floats[0] = 0.0;
        assert_eq!(evaluate(&floats).metric, 0.0);
        floats[0] = 0.999_999;
        assert_eq!(evaluate(&floats).metric, 51.0);
    }

    #[test]
    fn deals_with_replacement() {
        // identical floats deal identical cards, which a splice could not
        let floats = [0.25; 52];
        let r = evaluate(&floats);
        let cards = r.details["cards"].as_array().unwrap();
        assert_eq!(cards[0], cards[51]);
    }

    #[test]
    fn rail_is_52_cards_long() {
        let floats = [0.1; 52];
        let r = evaluate(&floats);
        assert_eq!(r.details["cards"].as_array().unwrap().len(), 52);
    }
}
