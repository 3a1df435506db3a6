use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the budget engine, its mutation boundary, and storage.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
    #[error("Invalid backup: {0}")]
    Format(#[from] FormatError),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

/// Reasons a backup payload is refused by `import_data`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("payload is not valid JSON: {0}")]
    Malformed(String),
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("unsupported backup version {0}")]
    UnsupportedVersion(String),
    #[error("`transactions` must be an array")]
    TransactionsNotSequence,
    #[error("field `{field}` is invalid: {reason}")]
    InvalidField { field: String, reason: String },
    #[error("duplicate transaction id `{0}`")]
    DuplicateId(String),
}

impl BudgetError {
    pub fn validation(message: impl Into<String>) -> Self {
        BudgetError::Validation(message.into())
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}

impl From<crate::config::ConfigError> for BudgetError {
    fn from(err: crate::config::ConfigError) -> Self {
        BudgetError::Config(err.to_string())
    }
}
