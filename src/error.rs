//! Error types for UniHash
//!
//! This module defines the error taxonomy used throughout the application.
//! A verification mismatch is a counted outcome, not an error, and never
//! appears here.

use thiserror::Error;

/// Main error type for UniHash operations
#[derive(Error, Debug)]
pub enum UnihashError {
    /// Bad invocation: wrong arity, missing or invalid count
    #[error("{0}")]
    Usage(String),

    /// An input record could not be decoded
    #[error("malformed record on line {line}: {message}")]
    MalformedRecord {
        /// 1-based line number in the input stream
        line: usize,
        /// What was wrong with the record
        message: String,
    },

    /// I/O error on the input or output stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or rendering error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl UnihashError {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Create a malformed record error for the given 1-based line
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Check if this error stems from a bad invocation
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_usage_error() {
            2
        } else {
            1
        }
    }

    /// Get the input line associated with this error, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedRecord { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for UniHash operations
pub type Result<T> = std::result::Result<T, UnihashError>;

impl From<serde_json::Error> for UnihashError {
    fn from(err: serde_json::Error) -> Self {
        UnihashError::Config(err.to_string())
    }
}
