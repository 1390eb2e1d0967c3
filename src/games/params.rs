use crate::error::EngineError;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// the wire shape of game parameters: an untyped JSON map. coercion into
/// the typed [`GameParams`] variants happens exactly once per scan, never
/// in the per-nonce loop.
pub type RawParams = serde_json::Map<String, Value>;

/// typed per-game parameters, resolved upfront from the raw map
#[derive(Debug, Clone, PartialEq)]
pub enum GameParams {
    None,
    Limbo { house: f64 },
    Wheel { segments: usize, risk: Risk },
    Plinko { rows: usize, risk: Risk },
    Keno { risk: KenoRisk, picks: Vec<u8> },
    Mines { mines: usize },
    Pump { difficulty: Difficulty },
    Chicken { deaths: usize },
    Salted { game_hash: Option<String>, salt: Option<String> },
}

/// risk tiers shared by wheel and plinko
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    Medium,
    High,
}

/// keno carries a fourth tier below low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KenoRisk {
    #[default]
    Classic,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// how many pop positions the difficulty seeds among the 25 pumps
    pub fn pops(&self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
            Difficulty::Expert => 10,
        }
    }
}

///

pub fn f64_field(raw: &RawParams, key: &str, default: f64) -> Result<f64, EngineError> {
    match raw.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| EngineError::params(format!("{} is not a finite number", key))),
        Some(other) => Err(EngineError::params(format!(
            "{} must be a number, got {}",
            key, other
        ))),
    }
}

pub fn usize_field(
    raw: &RawParams,
    key: &str,
    range: std::ops::RangeInclusive<usize>,
    default: usize,
) -> Result<usize, EngineError> {
    let n = match raw.get(key) {
        None | Some(Value::Null) => default,
        Some(Value::Number(n)) => match n.as_u64() {
            Some(n) => n as usize,
            None => {
                return Err(EngineError::params(format!(
                    "{} must be a non-negative integer, got {}",
                    key, n
                )))
            }
        },
        Some(other) => {
            return Err(EngineError::params(format!(
                "{} must be an integer, got {}",
                key, other
            )))
        }
    };
    if range.contains(&n) {
        Ok(n)
    } else {
        Err(EngineError::params(format!(
            "{} must be in [{}, {}], got {}",
            key,
            range.start(),
            range.end(),
            n
        )))
    }
}

pub fn str_field<'a>(raw: &'a RawParams, key: &str) -> Result<Option<&'a str>, EngineError> {
    match raw.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(EngineError::params(format!(
            "{} must be a string, got {}",
            key, other
        ))),
    }
}

/// parse a serde-tagged enum (risk tiers, difficulty) out of a string field
pub fn enum_field<T>(raw: &RawParams, key: &str, default: T) -> Result<T, EngineError>
where
    T: serde::de::DeserializeOwned,
{
    match str_field(raw, key)? {
        None => Ok(default),
        Some(s) => serde_json::from_value(Value::String(s.to_string()))
            .map_err(|_| EngineError::params(format!("unknown {}: {:?}", key, s))),
    }
}

/// a list of distinct board squares in [0, bound)
pub fn squares_field(
    raw: &RawParams,
    key: &str,
    bound: u8,
    max_len: usize,
) -> Result<Vec<u8>, EngineError> {
    let list = match raw.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(list)) => list,
        Some(other) => {
            return Err(EngineError::params(format!(
                "{} must be an array, got {}",
                key, other
            )))
        }
    };
    if list.len() > max_len {
        return Err(EngineError::params(format!(
            "{} holds at most {} squares, got {}",
            key,
            max_len,
            list.len()
        )));
    }
    let mut out = Vec::with_capacity(list.len());
    for v in list {
        let n = v
            .as_u64()
            .filter(|&n| n < bound as u64)
            .ok_or_else(|| {
                EngineError::params(format!("{} squares must be integers in [0, {})", key, bound))
            })?;
        if out.contains(&(n as u8)) {
            return Err(EngineError::params(format!(
                "{} squares must be distinct",
                key
            )));
        }
        out.push(n as u8);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(v: Value) -> RawParams {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn defaults_apply_when_absent() {
        let p = raw(json!({}));
        assert_eq!(f64_field(&p, "house", 0.99).unwrap(), 0.99);
        assert_eq!(usize_field(&p, "mines", 1..=24, 3).unwrap(), 3);
        assert_eq!(enum_field(&p, "risk", KenoRisk::Classic).unwrap(), KenoRisk::Classic);
    }

    #[test]
    fn numbers_coerce_through_recognized_types() {
        let p = raw(json!({ "mines": 5, "house": 1 }));
        assert_eq!(usize_field(&p, "mines", 1..=24, 3).unwrap(), 5);
        assert_eq!(f64_field(&p, "house", 0.99).unwrap(), 1.0);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let p = raw(json!({ "mines": 25 }));
        assert!(usize_field(&p, "mines", 1..=24, 3).is_err());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let p = raw(json!({ "mines": "three" }));
        assert!(usize_field(&p, "mines", 1..=24, 3).is_err());
    }

    #[test]
    fn unknown_enum_variants_are_rejected() {
        let p = raw(json!({ "risk": "extreme" }));
        assert!(enum_field(&p, "risk", Risk::Low).is_err());
    }

    #[test]
    fn squares_must_be_distinct_and_bounded() {
        let p = raw(json!({ "picks": [1, 2, 2] }));
        assert!(squares_field(&p, "picks", 40, 10).is_err());
        let p = raw(json!({ "picks": [1, 40] }));
        assert!(squares_field(&p, "picks", 40, 10).is_err());
        let p = raw(json!({ "picks": [0, 39] }));
        assert_eq!(squares_field(&p, "picks", 40, 10).unwrap(), vec![0, 39]);
    }
}
