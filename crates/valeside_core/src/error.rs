//! Error types for the Vale adapter.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while talking to Vale or preparing its output.
#[derive(Debug, Error)]
pub enum ValeError {
    /// The Vale binary could not be located.
    #[error("Vale binary not found: {}", .0.display())]
    BinaryNotFound(PathBuf),

    /// Vale wrote to standard error.
    #[error("Vale reported an error: {0}")]
    Invocation(String),

    /// Vale's output was not the JSON we expected.
    #[error("Failed to decode Vale output: {0}")]
    Decode(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template formatting error.
    #[error("Template error: {0}")]
    Template(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ValeError {
    /// Creates an invocation error.
    pub fn invocation(message: impl Into<String>) -> Self {
        Self::Invocation(message.into())
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a template error.
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template(message.into())
    }
}

impl From<serde_json::Error> for ValeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
