//! Error types for minigrad-ops

use thiserror::Error;

/// Result type for minigrad-ops operations
pub type OpsResult<T> = Result<T, OpsError>;

/// minigrad-ops error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpsError {
    #[error("Division by zero in `{op}`")]
    DivisionByZero { op: &'static str },

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}

impl OpsError {
    pub(crate) fn division_by_zero(op: &'static str) -> Self {
        tracing::debug!(op, "division by zero");
        OpsError::DivisionByZero { op }
    }
}
