//! Parse error types for strict template parsing.

use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}
