use super::GameResult;
use crate::cards::card_from_float;
use crate::cards::Card;
use serde_json::json;
use std::cmp::Ordering;

pub const FLOATS: usize = 6;

/// six cards dealt with replacement in fixed positions P1 B1 P2 B2 P3 B3.
/// the third-card positions are always dealt; whether they join a hand
/// follows the tableau:
///
///   natural 8/9 on either side -> both stand
///   player draws on 0..=5
///   banker, player standing    -> draws on 0..=5
///   banker, player drew        -> draws per the third-card table
pub fn evaluate(floats: &[f64]) -> GameResult {
    let cards: Vec<Card> = floats.iter().take(FLOATS).map(|&f| card_from_float(f)).collect();
    let mut player = vec![cards[0], cards[2]];
    let mut banker = vec![cards[1], cards[3]];
    let natural = score(&player) >= 8 || score(&banker) >= 8;
    let player_draws = !natural && score(&player) <= 5;
    let banker_draws = !natural
        && match player_draws {
            false => score(&banker) <= 5,
            true => banker_rule(score(&banker), cards[4].rank().baccarat()),
        };
    if player_draws {
        player.push(cards[4]);
    }
    if banker_draws {
        banker.push(cards[5]);
    }
    let player_score = score(&player);
    let banker_score = score(&banker);
    let winner = match player_score.cmp(&banker_score) {
        Ordering::Greater => "player",
        Ordering::Less => "banker",
        Ordering::Equal => "tie",
    };
    GameResult {
        metric: cards[0].index() as f64,
        metric_label: "first_card",
        details: json!({
            "player": player.iter().map(Card::to_string).collect::<Vec<_>>(),
            "banker": banker.iter().map(Card::to_string).collect::<Vec<_>>(),
            "player_score": player_score,
            "banker_score": banker_score,
            "player_draws": player_draws,
            "banker_draws": banker_draws,
            "winner": winner,
        }),
    }
}

fn score(cards: &[Card]) -> u8 {
    cards.iter().map(|c| c.rank().baccarat()).sum::<u8>() % 10
}

/// banker third-card table, keyed on the banker score and the point
/// value of the player's third card
fn banker_rule(banker: u8, player_third: u8) -> bool {
    match banker {
        0..=2 => true,
        3 => player_third != 8,
        4 => (2..=7).contains(&player_third),
        5 => (4..=7).contains(&player_third),
        6 => player_third == 6 || player_third == 7,
        _ => false,
    }
}
