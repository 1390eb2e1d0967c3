use thiserror::Error;

/// everything that can go wrong before or during a scan. timeouts and
/// cancellation are not errors; they come back as summary flags with
/// whatever partial results were collected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("unknown game: {0}")]
    UnknownGame(String),

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("invalid range: [{start}, {end}]")]
    InvalidRange { start: u64, end: u64 },

    #[error("invalid predicate: {0}")]
    InvalidPredicate(String),

    #[error("evaluator failed at nonce {nonce} after validation: {message}")]
    InternalEvaluator { nonce: u64, message: String },
}

impl EngineError {
    pub fn params(message: impl Into<String>) -> Self {
        Self::InvalidParams(message.into())
    }
}
