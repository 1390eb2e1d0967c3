/// suit order follows the replay deck: diamonds first, clubs last.
/// this is load-bearing; card indices are rank-major with this order inner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Diamond = 0,
    Heart = 1,
    Spade = 2,
    Club = 3,
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Diamond,
            1 => Suit::Heart,
            2 => Suit::Spade,
            3 => Suit::Club,
            _ => panic!("invalid suit"),
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Diamond => "♦",
                Suit::Heart => "♥",
                Suit::Spade => "♠",
                Suit::Club => "♣",
            }
        )
    }
}

use std::fmt::{Display, Formatter, Result};
