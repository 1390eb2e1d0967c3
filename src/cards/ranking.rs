/// A video poker hand's class.
///
/// Ordered by strength. Kickers are irrelevant at this layer; the replay
/// surface only reports which class the dealt hand falls into.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard,
    Pair,
    JacksOrBetter,
    TwoPair,
    ThreeOAK,
    Straight,
    Flush,
    FullHouse,
    FourOAK,
    StraightFlush,
    RoyalFlush,
}

impl Ranking {
    pub fn label(&self) -> &'static str {
        match self {
            Ranking::HighCard => "High Card",
            Ranking::Pair => "Pair",
            Ranking::JacksOrBetter => "Jacks or Better",
            Ranking::TwoPair => "Two Pair",
            Ranking::ThreeOAK => "Three of a Kind",
            Ranking::Straight => "Straight",
            Ranking::Flush => "Flush",
            Ranking::FullHouse => "Full House",
            Ranking::FourOAK => "Four of a Kind",
            Ranking::StraightFlush => "Straight Flush",
            Ranking::RoyalFlush => "Royal Flush",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
