//! Miette diagnostic wrapper for spintax parse errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use spintax::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic for spintax parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(spintax::syntax))]
pub struct SpintaxDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl SpintaxDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    ///
    /// `name` labels the source in the rendered report; for file-based
    /// checks it carries the `path:line` of the offending template.
    pub fn from_parse_error(name: &str, content: &str, err: &ParseError) -> Self {
        let ParseError::Syntax {
            line,
            column,
            message,
        } = err;

        // Convert line:column to byte offset.
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        SpintaxDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span: (offset, 1).into(),
            message: message.clone(),
        }
    }
}
