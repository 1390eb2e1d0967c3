use super::picker;
use super::GameResult;
use crate::cards::Card;
use crate::cards::Classifier;
use serde_json::json;

pub const FLOATS: usize = 52;

/// the whole deck is spliced into a permutation: the first five cards are
/// the dealt hand, the next five stand by as replacements. the dealt hand
/// is classified on the jacks-or-better ladder.
pub fn evaluate(floats: &[f64]) -> GameResult {
    let order = picker::draw(floats, 52, 52);
    let hand: [Card; 5] = [
        Card::from(order[0]),
        Card::from(order[1]),
        Card::from(order[2]),
        Card::from(order[3]),
        Card::from(order[4]),
    ];
    let replacements: Vec<Card> = order[5..10].iter().map(|&i| Card::from(i)).collect();
    let ranking = Classifier::from(hand).classify();
    GameResult {
        metric: order[0] as f64,
        metric_label: "first_card",
        details: json!({
            "hand": hand.iter().map(Card::to_string).collect::<Vec<_>>(),
            "replacements": replacements.iter().map(Card::to_string).collect::<Vec<_>>(),
            "ranking": ranking.label(),
        }),
    }
}
