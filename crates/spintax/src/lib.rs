pub mod parser;
pub mod resolver;

pub use parser::{Group, ParseError, Segment, Template, parse_template};
pub use resolver::{
    LintWarning, MAX_PASSES, Resolver, TemplateStats, expansions, lint, resolve, resolve_with,
    stats,
};

// Re-export the template! macro
pub use spintax_macros::template;

/// Returns true iff `template` has balanced spintax braces.
///
/// Scans once with a depth counter: `{` increments, `}` decrements. The scan
/// fails as soon as depth would go negative and succeeds only when the final
/// depth is zero. Only brace balance is checked; pipe placement inside groups
/// is always legal.
///
/// [`resolve`] does not require balanced input — it degrades silently on
/// malformed templates. Callers that want strict guarantees should validate
/// first and reject templates that fail.
///
/// # Example
///
/// ```
/// assert!(spintax::validate(""));
/// assert!(spintax::validate("{a|b}"));
/// assert!(!spintax::validate("{a|b"));
/// assert!(!spintax::validate("a}{b"));
/// ```
pub fn validate(template: &str) -> bool {
    spintax_syntax::is_balanced(template)
}
