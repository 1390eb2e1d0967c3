#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    /// hilo / video poker comparison value. the ace is low: A=1, J=11, Q=12, K=13
    pub fn hilo(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            rank => *rank as u8 + 2,
        }
    }

    /// baccarat points: A=1, pips face value, tens and faces are worth nothing
    pub fn baccarat(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 0,
            rank => *rank as u8 + 2,
        }
    }

    /// blackjack value with the ace soft at 11; demotion to 1 happens at the hand level
    pub fn blackjack(&self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            rank => *rank as u8 + 2,
        }
    }
}

impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("invalid rank"),
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

use std::fmt::{Display, Formatter, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hilo_values() {
        assert_eq!(Rank::Ace.hilo(), 1);
        assert_eq!(Rank::Two.hilo(), 2);
        assert_eq!(Rank::Ten.hilo(), 10);
        assert_eq!(Rank::Jack.hilo(), 11);
        assert_eq!(Rank::King.hilo(), 13);
    }

    #[test]
    fn baccarat_values() {
        assert_eq!(Rank::Ace.baccarat(), 1);
        assert_eq!(Rank::Nine.baccarat(), 9);
        assert_eq!(Rank::Ten.baccarat(), 0);
        assert_eq!(Rank::King.baccarat(), 0);
    }

    #[test]
    fn blackjack_values() {
        assert_eq!(Rank::Ace.blackjack(), 11);
        assert_eq!(Rank::Ten.blackjack(), 10);
        assert_eq!(Rank::Queen.blackjack(), 10);
        assert_eq!(Rank::Six.blackjack(), 6);
    }
}
