#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// position in the replay deck: diamond of rank R sits at 4 * (R - 2)
    pub fn index(&self) -> u8 {
        (self.rank as u8) * 4 + (self.suit as u8)
    }
}

// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.index()
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}
impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

use super::rank::Rank;
use super::suit::Suit;
use std::fmt::{Display, Formatter, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for n in 0..52u8 {
            assert_eq!(u8::from(Card::from(n)), n);
        }
    }

    #[test]
    fn replay_ordering() {
        assert_eq!(Card::from(0u8), Card::from((Rank::Two, Suit::Diamond)));
        assert_eq!(Card::from(8u8), Card::from((Rank::Four, Suit::Diamond)));
        assert_eq!(Card::from(12u8), Card::from((Rank::Five, Suit::Diamond)));
        assert_eq!(Card::from(51u8), Card::from((Rank::Ace, Suit::Club)));
    }
}
