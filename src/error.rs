use thiserror::Error;

/// Errors raised by match resolution, recording and batch runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Malformed input to a single operation (bad participant list, unknown winner).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A referenced row does not exist in the store.
    #[error("{kind} {id} not found")]
    Lookup { kind: &'static str, id: u64 },

    /// A batch run cannot start (e.g. fewer than two competitors).
    #[error("constraint violated: {reason}")]
    Constraint { reason: String },

    /// The backing store failed for a reason unrelated to the request.
    #[error("storage error: {0}")]
    Storage(String),
}

impl SimError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SimError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn lookup(kind: &'static str, id: u64) -> Self {
        SimError::Lookup { kind, id }
    }

    pub fn constraint(reason: impl Into<String>) -> Self {
        SimError::Constraint {
            reason: reason.into(),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
