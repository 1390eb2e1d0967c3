use super::card::Card;
use super::ranking::Ranking;

/// Classifier for a dealt 5-card video poker hand.
///
/// Works on the hilo value scale where the ace is encoded as 1 but still
/// counts as a high pair and completes both the 1-2-3-4-5 and the
/// 10-J-Q-K-1 straights.
pub struct Classifier {
    values: [u8; 5],
    counts: [u8; 14],
    suited: bool,
}

impl From<[Card; 5]> for Classifier {
    fn from(cards: [Card; 5]) -> Self {
        let mut values = [0u8; 5];
        let mut counts = [0u8; 14];
        for (v, card) in values.iter_mut().zip(cards.iter()) {
            *v = card.rank().hilo();
            counts[*v as usize] += 1;
        }
        values.sort_unstable();
        let suited = cards.iter().all(|c| c.suit() == cards[0].suit());
        Self {
            values,
            counts,
            suited,
        }
    }
}

impl Classifier {
    pub fn classify(&self) -> Ranking {
        None.or_else(|| self.royal_flush())
            .or_else(|| self.straight_flush())
            .or_else(|| self.four_oak())
            .or_else(|| self.full_house())
            .or_else(|| self.flush())
            .or_else(|| self.straight())
            .or_else(|| self.three_oak())
            .or_else(|| self.two_pair())
            .or_else(|| self.jacks_or_better())
            .or_else(|| self.pair())
            .unwrap_or(Ranking::HighCard)
    }

    ///

    fn royal_flush(&self) -> Option<Ranking> {
        (self.suited && self.is_ace_high_run()).then_some(Ranking::RoyalFlush)
    }
    fn straight_flush(&self) -> Option<Ranking> {
        (self.suited && self.is_run()).then_some(Ranking::StraightFlush)
    }
    fn four_oak(&self) -> Option<Ranking> {
        self.of_a_kind(4).map(|_| Ranking::FourOAK)
    }
    fn full_house(&self) -> Option<Ranking> {
        (self.of_a_kind(3).is_some() && self.of_a_kind(2).is_some())
            .then_some(Ranking::FullHouse)
    }
    fn flush(&self) -> Option<Ranking> {
        self.suited.then_some(Ranking::Flush)
    }
    fn straight(&self) -> Option<Ranking> {
        self.is_run().then_some(Ranking::Straight)
    }
    fn three_oak(&self) -> Option<Ranking> {
        self.of_a_kind(3).map(|_| Ranking::ThreeOAK)
    }
    fn two_pair(&self) -> Option<Ranking> {
        (self.count_pairs() == 2).then_some(Ranking::TwoPair)
    }
    fn jacks_or_better(&self) -> Option<Ranking> {
        // the qualifying pair ranks: J, Q, K, and the ace encoded as 1
        self.of_a_kind(2)
            .filter(|&v| v >= 11 || v == 1)
            .map(|_| Ranking::JacksOrBetter)
    }
    fn pair(&self) -> Option<Ranking> {
        self.of_a_kind(2).map(|_| Ranking::Pair)
    }

    ///

    /// five distinct values forming a straight, the broadway run included
    fn is_run(&self) -> bool {
        if self.values.windows(2).any(|w| w[0] == w[1]) {
            return false;
        }
        self.values[4] - self.values[0] == 4 || self.is_ace_high_run()
    }
    /// sorted values 1-10-J-Q-K: the straight that ends at the high ace
    fn is_ace_high_run(&self) -> bool {
        self.values == [1, 10, 11, 12, 13]
    }
    /// highest value held exactly n times
    fn of_a_kind(&self, n: u8) -> Option<u8> {
        (1..=13u8).rev().find(|&v| self.counts[v as usize] == n)
    }
    fn count_pairs(&self) -> usize {
        (1..=13).filter(|&v| self.counts[v as usize] == 2).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn classify(cards: [(Rank, Suit); 5]) -> Ranking {
        Classifier::from(cards.map(Card::from)).classify()
    }

    #[test]
    fn high_card() {
        let hand = [
            (Rank::Ace, Suit::Spade),
            (Rank::King, Suit::Heart),
            (Rank::Queen, Suit::Diamond),
            (Rank::Jack, Suit::Club),
            (Rank::Nine, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::HighCard);
    }

    #[test]
    fn low_pair_is_just_a_pair() {
        let hand = [
            (Rank::Ten, Suit::Spade),
            (Rank::Ten, Suit::Heart),
            (Rank::King, Suit::Diamond),
            (Rank::Queen, Suit::Club),
            (Rank::Two, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::Pair);
    }

    #[test]
    fn jacks_qualify() {
        let hand = [
            (Rank::Jack, Suit::Spade),
            (Rank::Jack, Suit::Heart),
            (Rank::King, Suit::Diamond),
            (Rank::Queen, Suit::Club),
            (Rank::Two, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::JacksOrBetter);
    }

    #[test]
    fn aces_qualify_despite_low_encoding() {
        let hand = [
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::King, Suit::Diamond),
            (Rank::Queen, Suit::Club),
            (Rank::Two, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::JacksOrBetter);
    }

    #[test]
    fn two_pair() {
        let hand = [
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::King, Suit::Diamond),
            (Rank::King, Suit::Club),
            (Rank::Queen, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::TwoPair);
    }

    #[test]
    fn three_oak() {
        let hand = [
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::Ace, Suit::Diamond),
            (Rank::King, Suit::Club),
            (Rank::Queen, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::ThreeOAK);
    }

    #[test]
    fn ace_low_straight() {
        let hand = [
            (Rank::Ace, Suit::Spade),
            (Rank::Two, Suit::Heart),
            (Rank::Three, Suit::Diamond),
            (Rank::Four, Suit::Club),
            (Rank::Five, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::Straight);
    }

    #[test]
    fn ace_high_straight() {
        let hand = [
            (Rank::Ten, Suit::Spade),
            (Rank::Jack, Suit::Heart),
            (Rank::Queen, Suit::Diamond),
            (Rank::King, Suit::Club),
            (Rank::Ace, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::Straight);
    }

    #[test]
    fn queen_high_is_not_a_straight() {
        // J-Q-K-A-2 must not wrap
        let hand = [
            (Rank::Jack, Suit::Spade),
            (Rank::Queen, Suit::Heart),
            (Rank::King, Suit::Diamond),
            (Rank::Ace, Suit::Club),
            (Rank::Two, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::HighCard);
    }

    #[test]
    fn flush() {
        let hand = [
            (Rank::Ace, Suit::Spade),
            (Rank::King, Suit::Spade),
            (Rank::Queen, Suit::Spade),
            (Rank::Jack, Suit::Spade),
            (Rank::Nine, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::Flush);
    }

    #[test]
    fn full_house() {
        let hand = [
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::Ace, Suit::Diamond),
            (Rank::King, Suit::Club),
            (Rank::King, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::FullHouse);
    }

    #[test]
    fn four_oak() {
        let hand = [
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::Ace, Suit::Diamond),
            (Rank::Ace, Suit::Club),
            (Rank::King, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::FourOAK);
    }

    #[test]
    fn wheel_straight_flush() {
        let hand = [
            (Rank::Ace, Suit::Spade),
            (Rank::Two, Suit::Spade),
            (Rank::Three, Suit::Spade),
            (Rank::Four, Suit::Spade),
            (Rank::Five, Suit::Spade),
        ];
        assert_eq!(classify(hand), Ranking::StraightFlush);
    }

    #[test]
    fn royal_flush() {
        let hand = [
            (Rank::Ten, Suit::Heart),
            (Rank::Jack, Suit::Heart),
            (Rank::Queen, Suit::Heart),
            (Rank::King, Suit::Heart),
            (Rank::Ace, Suit::Heart),
        ];
        assert_eq!(classify(hand), Ranking::RoyalFlush);
    }

    #[test]
    fn ranking_order_is_total() {
        assert!(Ranking::RoyalFlush > Ranking::StraightFlush);
        assert!(Ranking::StraightFlush > Ranking::FourOAK);
        assert!(Ranking::JacksOrBetter > Ranking::Pair);
        assert!(Ranking::Pair > Ranking::HighCard);
    }
}
