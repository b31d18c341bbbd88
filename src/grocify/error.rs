use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrocifyError {
    #[error("Ledger not found at {} (run `grocify init` to create it)", .0.display())]
    LedgerNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed ledger at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Invalid item: {0}")]
    Invalid(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl GrocifyError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        GrocifyError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GrocifyError>;
