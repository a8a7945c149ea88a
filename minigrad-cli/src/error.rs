//! Error types for the minigrad CLI

use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid number list '{input}': {reason}")]
    InvalidList { input: String, reason: String },
}
