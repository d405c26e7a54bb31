//! Error types for datebook.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in datebook operations.
#[derive(Error, Debug)]
pub enum DatebookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not parse store file {}: {message}", .path.display())]
    StoreParse { path: PathBuf, message: String },

    #[error("Invalid {kind} '{input}': {message}")]
    InputParse {
        kind: InputKind,
        input: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// What a piece of user-typed text was expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Uid,
    Date,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Uid => write!(f, "uid"),
            InputKind::Date => write!(f, "date"),
        }
    }
}

/// Result type alias for datebook operations.
pub type DatebookResult<T> = Result<T, DatebookError>;
