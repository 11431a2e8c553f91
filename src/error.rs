use thiserror::Error;

use crate::review::validate::ReviewValidationError;

#[derive(Error, Debug)]
pub enum ValuatorError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown program: {0}")]
    UnknownProgram(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("{0}")]
    Review(#[from] ReviewValidationError),

    #[error("Daily review limit reached ({0} per day)")]
    DailyLimitReached(usize),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ValuatorError>;
