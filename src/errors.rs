/*!
 * Error types for the srt-processor application.
 *
 * Callers of the controller see a single failure kind per operation,
 * `AppError::OperationFailed`, carrying a readable description of whatever
 * went wrong underneath (missing file, invalid UTF-8, failed write).
 */

use std::fmt;

use thiserror::Error;

/// The three file operations offered by the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Append sentence-final marks to caption lines
    Punctuate,
    /// Separate a subtitle file into skeleton and content
    Split,
    /// Rebuild a subtitle file from skeleton and content
    Reattach,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Punctuate => "Punctuation",
            Self::Split => "Split",
            Self::Reattach => "Reattachment",
        };
        write!(f, "{}", name)
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// An operation aborted; `message` holds the whole cause chain
    #[error("{operation} failed: {message}")]
    OperationFailed {
        operation: Operation,
        message: String,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Wrap an `anyhow` error raised while running `operation`.
    pub fn operation(operation: Operation, error: anyhow::Error) -> Self {
        Self::OperationFailed {
            operation,
            message: format!("{:#}", error),
        }
    }
}
