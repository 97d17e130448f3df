//! Template string parser using winnow.
//!
//! Parses spintax template strings into an AST. Handles:
//! - Literal text segments (a bare `|` outside any group is literal)
//! - Brace-delimited groups with pipe-separated alternatives
//! - Arbitrary nesting of groups inside alternatives
//!
//! There is no escape mechanism: a literal `{`, `}`, or in-group `|` cannot
//! be expressed. Stray or unclosed braces are syntax errors here; the lenient
//! resolver tolerates them instead.

use super::ast::{Group, Segment, Template};
use super::error::ParseError;
use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) => {
            if remaining.is_empty() {
                Ok(t)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {}", e),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., top_segment).parse_next(input)?;
    Ok(Template { segments })
}

/// Parse a single top-level segment (group or literal run).
fn top_segment(input: &mut &str) -> ModalResult<Segment> {
    alt((group.map(Segment::Group), top_literal)).parse_next(input)
}

/// Parse a maximal run of top-level literal text. `|` is literal here.
fn top_literal(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{' && c != '}')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Parse a group: '{' alternative ('|' alternative)* '}'
fn group(input: &mut &str) -> ModalResult<Group> {
    delimited('{', alternatives, '}')
        .map(|alternatives| Group { alternatives })
        .parse_next(input)
}

/// Parse the pipe-separated alternative list of a group.
///
/// An alternative may be empty, so the separator is consumed explicitly to
/// keep every repeat iteration making progress.
fn alternatives(input: &mut &str) -> ModalResult<Vec<Template>> {
    let first = alternative(input)?;
    let rest: Vec<Template> = repeat(0.., preceded('|', alternative)).parse_next(input)?;
    let mut alts = Vec::with_capacity(1 + rest.len());
    alts.push(first);
    alts.extend(rest);
    Ok(alts)
}

/// Parse one alternative: a possibly empty sequence of nested segments.
fn alternative(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., alt_segment).parse_next(input)?;
    Ok(Template { segments })
}

/// Parse a single in-group segment (nested group or literal run).
fn alt_segment(input: &mut &str) -> ModalResult<Segment> {
    alt((group.map(Segment::Group), alt_literal)).parse_next(input)
}

/// Parse a maximal run of in-group literal text. `|` separates alternatives,
/// so it ends the run along with braces.
fn alt_literal(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{' && c != '}' && c != '|')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}
