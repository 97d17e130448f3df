//! Strict spintax template parser.
//!
//! This module parses spintax templates into an AST for interpretation by
//! tooling that wants hard errors instead of silent degradation: lints,
//! expansion enumeration, and diagnostics with source positions. The lenient
//! [`resolve`](crate::resolve) path never goes through this parser.

pub mod ast;
pub mod error;
mod template;

pub use ast::{Group, Segment, Template};
pub use error::ParseError;
pub use template::parse_template;
