//! Error types for wishwell-core

use thiserror::Error;

/// Result type alias using wishwell-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wishwell-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Sound cue rendering error
    #[error("Audio error: {0}")]
    Audio(String),

    /// Theme lookup error
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Errors raised by theme catalog lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Reasons an idea submission was not accepted.
///
/// Every variant is recoverable: the form keeps the entered text and the
/// visitor may submit again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Please enter your website idea")]
    EmptyInput,
    #[error("Your idea needs at least {min} characters (got {len})")]
    TooShort { len: usize, min: usize },
    #[error("Your idea can be at most {max} characters (got {len})")]
    TooLong { len: usize, max: usize },
    #[error("A submission is already in progress")]
    Busy,
    #[error("The idea form is not open")]
    FormClosed,
    #[error("Failed to save your wish: {0}")]
    RemoteInsertFailed(String),
}

impl SubmissionError {
    /// Whether the error was raised before any remote call was attempted.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::TooShort { .. } | Self::TooLong { .. }
        )
    }
}
