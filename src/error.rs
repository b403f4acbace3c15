//! Error types for the top-N filter

use thiserror::Error;

/// Filter errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column `{0}`")]
    MissingColumn(String),

    #[error("Line {line}: too many fields (expected {expected}, found {found})")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: column `{column}` is not a number: {value:?}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for filter operations
pub type Result<T> = std::result::Result<T, Error>;
