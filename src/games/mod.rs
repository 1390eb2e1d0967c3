pub mod baccarat;
pub mod blackjack;
pub mod chicken;
pub mod dice;
pub mod hilo;
pub mod keno;
pub mod limbo;
pub mod mines;
pub mod params;
pub mod picker;
pub mod plinko;
pub mod pump;
pub mod roulette;
pub mod salted;
pub mod tables;
pub mod video_poker;
pub mod wheel;

pub use params::Difficulty;
pub use params::GameParams;
pub use params::KenoRisk;
pub use params::RawParams;
pub use params::Risk;

use crate::error::EngineError;
use crate::rng;
use crate::rng::Seeds;
use crate::Nonce;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// outcome of one evaluation. the metric is the scalar the scan predicate
/// is applied to; details carry game state for display and correlation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameResult {
    pub metric: f64,
    pub metric_label: &'static str,
    pub details: serde_json::Value,
}

/// registry row surfaced to consumers
#[derive(Debug, Clone, Serialize)]
pub struct GameSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub metric_label: &'static str,
}

/// the closed set of games. evaluation dispatches through an exhaustive
/// match, so the hot loop is a direct call once the game is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Game {
    Dice,
    Limbo,
    Roulette,
    Wheel,
    Plinko,
    Keno,
    Mines,
    Pump,
    Chicken,
    VideoPoker,
    Hilo,
    Blackjack,
    Baccarat,
    Crash,
    Slide,
}

impl Game {
    pub const ALL: [Game; 15] = [
        Game::Dice,
        Game::Limbo,
        Game::Roulette,
        Game::Wheel,
        Game::Plinko,
        Game::Keno,
        Game::Mines,
        Game::Pump,
        Game::Chicken,
        Game::VideoPoker,
        Game::Hilo,
        Game::Blackjack,
        Game::Baccarat,
        Game::Crash,
        Game::Slide,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Game::Dice => "dice",
            Game::Limbo => "limbo",
            Game::Roulette => "roulette",
            Game::Wheel => "wheel",
            Game::Plinko => "plinko",
            Game::Keno => "keno",
            Game::Mines => "mines",
            Game::Pump => "pump",
            Game::Chicken => "chicken",
            Game::VideoPoker => "video_poker",
            Game::Hilo => "hilo",
            Game::Blackjack => "blackjack",
            Game::Baccarat => "baccarat",
            Game::Crash => "crash",
            Game::Slide => "slide",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Game::Dice => "Dice",
            Game::Limbo => "Limbo",
            Game::Roulette => "Roulette",
            Game::Wheel => "Wheel",
            Game::Plinko => "Plinko",
            Game::Keno => "Keno",
            Game::Mines => "Mines",
            Game::Pump => "Pump",
            Game::Chicken => "Chicken",
            Game::VideoPoker => "Video Poker",
            Game::Hilo => "HiLo",
            Game::Blackjack => "Blackjack",
            Game::Baccarat => "Baccarat",
            Game::Crash => "Crash",
            Game::Slide => "Slide",
        }
    }

    pub fn metric_label(&self) -> &'static str {
        match self {
            Game::Dice => "roll",
            Game::Roulette => "pocket",
            Game::Mines => "first_mine",
            Game::Chicken => "first_death",
            Game::VideoPoker | Game::Hilo | Game::Blackjack | Game::Baccarat => "first_card",
            _ => "multiplier",
        }
    }

    pub fn spec(&self) -> GameSpec {
        GameSpec {
            id: self.id(),
            name: self.name(),
            metric_label: self.metric_label(),
        }
    }

    /// coerce the raw JSON map into this game's typed parameters.
    /// called once per scan; the hot loop never touches the map.
    pub fn parse_params(&self, raw: &RawParams) -> Result<GameParams, EngineError> {
        match self {
            Game::Dice
            | Game::Roulette
            | Game::VideoPoker
            | Game::Hilo
            | Game::Blackjack
            | Game::Baccarat => Ok(GameParams::None),
            Game::Limbo => {
                let house = params::f64_field(raw, "house", 0.99)?;
                if !(house > 0.0 && house <= 1.0) {
                    return Err(EngineError::params(format!(
                        "house must be in (0, 1], got {}",
                        house
                    )));
                }
                Ok(GameParams::Limbo { house })
            }
            Game::Wheel => {
                let segments = params::usize_field(raw, "segments", 10..=50, 10)?;
                if segments % 10 != 0 {
                    return Err(EngineError::params(format!(
                        "segments must be one of 10/20/30/40/50, got {}",
                        segments
                    )));
                }
                let risk = params::enum_field(raw, "risk", Risk::Medium)?;
                Ok(GameParams::Wheel { segments, risk })
            }
            Game::Plinko => {
                let rows = params::usize_field(raw, "rows", 8..=16, 8)?;
                let risk = params::enum_field(raw, "risk", Risk::Medium)?;
                Ok(GameParams::Plinko { rows, risk })
            }
            Game::Keno => {
                let risk = params::enum_field(raw, "risk", KenoRisk::Classic)?;
                let picks = params::squares_field(raw, "picks", keno::SQUARES as u8, 10)?;
                Ok(GameParams::Keno { risk, picks })
            }
            Game::Mines => {
                let mines = params::usize_field(raw, "mines", 1..=24, 3)?;
                Ok(GameParams::Mines { mines })
            }
            Game::Pump => {
                let difficulty = params::enum_field(raw, "difficulty", Difficulty::Easy)?;
                Ok(GameParams::Pump { difficulty })
            }
            Game::Chicken => {
                let deaths = params::usize_field(raw, "deaths", 1..=19, 1)?;
                Ok(GameParams::Chicken { deaths })
            }
            Game::Crash | Game::Slide => Ok(GameParams::Salted {
                game_hash: params::str_field(raw, "game_hash")?.map(String::from),
                salt: params::str_field(raw, "salt")?.map(String::from),
            }),
        }
    }

    /// how many floats one evaluation consumes at these parameters.
    /// the scanner prefetches exactly this many in one call per nonce.
    pub fn float_count(&self, params: &GameParams) -> usize {
        match (self, params) {
            (Game::Dice, _) => dice::FLOATS,
            (Game::Limbo, _) => limbo::FLOATS,
            (Game::Roulette, _) => roulette::FLOATS,
            (Game::Wheel, _) => wheel::FLOATS,
            (Game::Plinko, GameParams::Plinko { rows, .. }) => plinko::float_count(*rows),
            (Game::Keno, _) => keno::DRAWS,
            (Game::Mines, GameParams::Mines { mines }) => mines::float_count(*mines),
            (Game::Pump, GameParams::Pump { difficulty }) => pump::float_count(*difficulty),
            (Game::Chicken, GameParams::Chicken { deaths }) => chicken::float_count(*deaths),
            (Game::VideoPoker, _) => video_poker::FLOATS,
            (Game::Hilo, _) => hilo::FLOATS,
            (Game::Blackjack, _) => blackjack::FLOATS,
            (Game::Baccarat, _) => baccarat::FLOATS,
            (Game::Crash | Game::Slide, GameParams::Salted { game_hash, salt }) => {
                salted::float_count(game_hash.as_deref(), salt.as_deref())
            }
            _ => 0,
        }
    }

    /// hot-path evaluation against a prefetched float slice
    pub fn evaluate_with_floats(
        &self,
        floats: &[f64],
        params: &GameParams,
    ) -> Result<GameResult, EngineError> {
        let need = self.float_count(params);
        if floats.len() < need {
            return Err(EngineError::params(format!(
                "{} needs {} floats, got {}",
                self.id(),
                need,
                floats.len()
            )));
        }
        match (self, params) {
            (Game::Dice, GameParams::None) => Ok(dice::evaluate(floats[0])),
            (Game::Limbo, GameParams::Limbo { house }) => Ok(limbo::evaluate(floats[0], *house)),
            (Game::Roulette, GameParams::None) => Ok(roulette::evaluate(floats[0])),
            (Game::Wheel, GameParams::Wheel { segments, risk }) => {
                Ok(wheel::evaluate(floats[0], *segments, *risk))
            }
            (Game::Plinko, GameParams::Plinko { rows, risk }) => {
                Ok(plinko::evaluate(floats, *rows, *risk))
            }
            (Game::Keno, GameParams::Keno { risk, picks }) => {
                Ok(keno::evaluate(floats, *risk, picks))
            }
            (Game::Mines, GameParams::Mines { mines }) => Ok(mines::evaluate(floats, *mines)),
            (Game::Pump, GameParams::Pump { difficulty }) => {
                Ok(pump::evaluate(floats, *difficulty))
            }
            (Game::Chicken, GameParams::Chicken { deaths }) => {
                Ok(chicken::evaluate(floats, *deaths))
            }
            (Game::VideoPoker, GameParams::None) => Ok(video_poker::evaluate(floats)),
            (Game::Hilo, GameParams::None) => Ok(hilo::evaluate(floats)),
            (Game::Blackjack, GameParams::None) => Ok(blackjack::evaluate(floats)),
            (Game::Baccarat, GameParams::None) => Ok(baccarat::evaluate(floats)),
            (Game::Crash | Game::Slide, GameParams::Salted { game_hash, salt }) => Ok(
                salted::evaluate(floats, game_hash.as_deref(), salt.as_deref()),
            ),
            _ => Err(EngineError::params(format!(
                "parameters do not fit {}",
                self.id()
            ))),
        }
    }

    /// convenience path: coerce params, pull floats, evaluate
    pub fn evaluate(
        &self,
        seeds: &Seeds,
        nonce: Nonce,
        raw: &RawParams,
    ) -> Result<GameResult, EngineError> {
        let params = self.parse_params(raw)?;
        let floats = rng::floats(seeds, nonce, 0, self.float_count(&params));
        self.evaluate_with_floats(&floats, &params)
    }
}

impl std::str::FromStr for Game {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .get(s)
            .copied()
            .ok_or_else(|| EngineError::UnknownGame(s.to_string()))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// process-wide immutable id -> game mapping, closed at build time
static REGISTRY: Lazy<BTreeMap<&'static str, Game>> =
    Lazy::new(|| Game::ALL.iter().map(|g| (g.id(), *g)).collect());

pub fn list() -> Vec<GameSpec> {
    REGISTRY.values().map(Game::spec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(v: serde_json::Value) -> RawParams {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn registry_is_closed_over_all_games() {
        assert_eq!(list().len(), Game::ALL.len());
        for game in Game::ALL {
            assert_eq!(game.id().parse::<Game>().unwrap(), game);
        }
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert_eq!(
            "warclicker".parse::<Game>(),
            Err(EngineError::UnknownGame("warclicker".to_string()))
        );
    }

    #[test]
    fn dice_verify_is_deterministic_and_bounded() {
        let seeds = Seeds::new("test_server", "test_client");
        let a = Game::Dice.evaluate(&seeds, 1, &RawParams::new()).unwrap();
        let b = Game::Dice.evaluate(&seeds, 1, &RawParams::new()).unwrap();
        assert_eq!(a.metric, b.metric);
        assert_eq!(a.details, b.details);
        assert!((0.0..=100.0).contains(&a.metric));
    }

    #[test]
    fn float_budgets_track_parameters() {
        let p = Game::Plinko.parse_params(&raw(json!({ "rows": 12 }))).unwrap();
        assert_eq!(Game::Plinko.float_count(&p), 12);
        let p = Game::Mines.parse_params(&raw(json!({ "mines": 7 }))).unwrap();
        assert_eq!(Game::Mines.float_count(&p), 7);
        let p = Game::VideoPoker.parse_params(&RawParams::new()).unwrap();
        assert_eq!(Game::VideoPoker.float_count(&p), 52);
        let authentic = Game::Crash
            .parse_params(&raw(json!({ "game_hash": "h", "salt": "s" })))
            .unwrap();
        assert_eq!(Game::Crash.float_count(&authentic), 0);
    }

    #[test]
    fn max_float_budget_is_the_deck() {
        for game in Game::ALL {
            let p = game.parse_params(&RawParams::new()).unwrap();
            assert!(game.float_count(&p) <= crate::MAX_FLOAT_BUDGET);
        }
    }

    #[test]
    fn insufficient_floats_are_a_validation_error() {
        let p = Game::Baccarat.parse_params(&RawParams::new()).unwrap();
        assert!(Game::Baccarat.evaluate_with_floats(&[0.5; 3], &p).is_err());
    }

    #[test]
    fn mismatched_params_are_rejected() {
        let p = Game::Mines.parse_params(&RawParams::new()).unwrap();
        assert!(Game::Dice.evaluate_with_floats(&[0.5], &p).is_err());
    }

    #[test]
    fn bad_enum_values_are_structured_errors() {
        assert!(Game::Wheel.parse_params(&raw(json!({ "risk": "insane" }))).is_err());
        assert!(Game::Wheel.parse_params(&raw(json!({ "segments": 15 }))).is_err());
        assert!(Game::Pump
            .parse_params(&raw(json!({ "difficulty": "nightmare" })))
            .is_err());
    }
}
