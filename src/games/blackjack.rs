use super::GameResult;
use crate::cards::card_from_float;
use crate::cards::Card;
use serde_json::json;

pub const FLOATS: usize = 4;

/// opening deal only: player, dealer, player, dealer, with replacement.
/// hand values score aces soft at 11 and demote them while the hand busts.
pub fn evaluate(floats: &[f64]) -> GameResult {
    let cards: Vec<Card> = floats.iter().take(FLOATS).map(|&f| card_from_float(f)).collect();
    let player = [cards[0], cards[2]];
    let dealer = [cards[1], cards[3]];
    let player_value = hand_value(&player);
    let dealer_value = hand_value(&dealer);
    GameResult {
        metric: cards[0].index() as f64,
        metric_label: "first_card",
        details: json!({
            "player": player.iter().map(Card::to_string).collect::<Vec<_>>(),
            "dealer": dealer.iter().map(Card::to_string).collect::<Vec<_>>(),
            "player_value": player_value,
            "dealer_value": dealer_value,
        }),
    }
}

/// soft-ace-aware total
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut total: u8 = cards.iter().map(|c| c.rank().blackjack()).sum();
    let mut soft_aces = cards.iter().filter(|c| c.rank().blackjack() == 11).count();
    while total > 21 && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    total
}
