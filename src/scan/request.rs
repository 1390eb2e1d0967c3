use crate::error::EngineError;
use crate::games::RawParams;
use crate::rng::Seeds;
use crate::Metric;
use crate::Nonce;
use crate::RANGE_CEILING;
use serde::Deserialize;
use serde::Serialize;

/// comparison operator applied to the metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl std::str::FromStr for Op {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Op::Eq),
            "!=" => Ok(Op::Ne),
            "<" => Ok(Op::Lt),
            "<=" => Ok(Op::Le),
            ">" => Ok(Op::Gt),
            ">=" => Ok(Op::Ge),
            other => Err(EngineError::InvalidPredicate(format!(
                "unknown operator {:?}",
                other
            ))),
        }
    }
}

/// the filter every evaluated nonce passes through. tolerance widens the
/// two equality forms and is ignored by the ordered comparisons, which
/// are exact against discretized metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub op: Op,
    pub target: f64,
    #[serde(default)]
    pub tolerance: f64,
}

impl Predicate {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.target.is_nan() {
            return Err(EngineError::InvalidPredicate("target is NaN".to_string()));
        }
        if !(self.tolerance >= 0.0) {
            return Err(EngineError::InvalidPredicate(format!(
                "tolerance must be >= 0, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    pub fn matches(&self, metric: Metric) -> bool {
        match self.op {
            Op::Eq => (metric - self.target).abs() <= self.tolerance,
            Op::Ne => (metric - self.target).abs() > self.tolerance,
            Op::Lt => metric < self.target,
            Op::Le => metric <= self.target,
            Op::Gt => metric > self.target,
            Op::Ge => metric >= self.target,
        }
    }
}

/// a nonce whose metric satisfied the predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub nonce: Nonce,
    pub metric: Metric,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    pub game: String,
    pub seeds: Seeds,
    pub nonce_start: Nonce,
    pub nonce_end: Nonce,
    #[serde(default)]
    pub params: RawParams,
    pub predicate: Predicate,
    /// 0 means unbounded, up to the safety ceiling
    #[serde(default)]
    pub hit_limit: usize,
    /// 0 means no deadline
    #[serde(default)]
    pub timeout_ms: u64,
    /// attach evaluator details to every hit
    #[serde(default)]
    pub with_details: bool,
}

impl ScanRequest {
    pub fn validate_range(&self) -> Result<(), EngineError> {
        let invalid = EngineError::InvalidRange {
            start: self.nonce_start,
            end: self.nonce_end,
        };
        if self.nonce_end < self.nonce_start {
            return Err(invalid);
        }
        let size = self.nonce_end as u128 - self.nonce_start as u128 + 1;
        if size > RANGE_CEILING as u128 {
            return Err(invalid);
        }
        Ok(())
    }

    pub fn range_size(&self) -> u64 {
        self.nonce_end - self.nonce_start + 1
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total_evaluated: u64,
    pub hits_found: u64,
    pub min_metric: Option<f64>,
    pub max_metric: Option<f64>,
    pub timed_out: bool,
    pub cancelled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    pub hits: Vec<Hit>,
    pub summary: ScanSummary,
    pub engine_version: &'static str,
    pub server_seed_hash: String,
}
