//! Public AST types for spintax templates.
//!
//! These types are public to enable external tooling (linters, analyzers, etc.).
//! `Display` renders a node back to spintax source text.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    /// Literal text outside any group.
    Literal(String),
    /// A brace-delimited group of alternatives: {alt1|alt2|...}
    Group(Group),
}

/// A group of pipe-separated alternatives.
///
/// Each alternative is itself a template, which is how nesting is
/// represented: `{A|{B|C}}` is a group whose second alternative contains one
/// group segment. The parser guarantees at least one alternative (`{}` parses
/// as a single empty alternative).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub alternatives: Vec<Template>,
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Group(group) => write!(f, "{group}"),
        }
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("{")?;
        for (i, alternative) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{alternative}")?;
        }
        f.write_str("}")
    }
}
