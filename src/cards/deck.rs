use super::card::Card;
use once_cell::sync::Lazy;

/// the fixed replay ordering, materialized once: ranks 2..A outer,
/// suits diamond, heart, spade, club inner
pub static DECK: Lazy<[Card; 52]> = Lazy::new(|| {
    let cards: Vec<Card> = (0..52).map(Card::from).collect();
    cards.try_into().expect("52 cards")
});

/// a float in [0, 1) addresses exactly one deck slot
pub fn index_from_float(f: f64) -> u8 {
    ((f * 52.0) as u8).min(51)
}

pub fn card_from_float(f: f64) -> Card {
    DECK[index_from_float(f) as usize]
}
