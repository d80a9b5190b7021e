use std::io;

use thiserror::Error;

/// Error type that captures rejected ledger input.
///
/// Missing records are not errors: lookups that miss are reported as `None` or `false`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failures raised while reading or writing user preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("Unknown setting `{0}`")]
    UnknownKey(String),

    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err.to_string())
    }
}
