//! Template resolution engine.
//!
//! Two resolution paths share the same selection semantics:
//! - [`resolve`]/[`resolve_with`] rewrite the raw string innermost-first.
//!   They are total over all inputs; malformed templates degrade to partial
//!   output instead of failing.
//! - [`Template::spin`] selects over a strictly parsed AST. For well-formed
//!   templates the output distribution is identical, since every group's
//!   pick is independent and uniform.

use bon::Builder;
use rand::Rng;
use spintax_syntax::{innermost_spans, split_alternatives};

use crate::parser::ast::{Segment, Template};

/// Maximum rewrite passes before resolution gives up on remaining braces.
///
/// A well-formed template needs one pass per nesting level, so the cap is
/// only reachable for absurdly deep nesting or input that keeps a brace
/// unmatched. Whatever string the final pass produced is returned as-is.
pub const MAX_PASSES: usize = 100;

/// Configuration for spintax resolution.
///
/// # Example
///
/// ```
/// use spintax::Resolver;
///
/// let resolver = Resolver::builder().max_passes(10).build();
/// assert_eq!(resolver.resolve("no groups here"), "no groups here");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Resolver {
    /// Upper bound on rewrite passes for a single resolution.
    #[builder(default = MAX_PASSES)]
    max_passes: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::builder().build()
    }
}

impl Resolver {
    /// Resolve a template using thread-local randomness.
    pub fn resolve(&self, template: &str) -> String {
        self.resolve_with(template, &mut rand::thread_rng())
    }

    /// Resolve a template, drawing selections from `rng`.
    ///
    /// Each pass finds every innermost group in one left-to-right scan and
    /// replaces it, braces included, with one of its pipe-separated
    /// alternatives chosen uniformly at random. Passes repeat until no
    /// innermost span remains or the pass cap is reached. Unmatched braces
    /// are left in place.
    pub fn resolve_with<R: Rng>(&self, template: &str, rng: &mut R) -> String {
        let mut current = template.to_string();
        for _ in 0..self.max_passes {
            let spans = innermost_spans(&current);
            if spans.is_empty() {
                break;
            }
            let mut next = String::with_capacity(current.len());
            let mut cursor = 0;
            for span in spans {
                next.push_str(&current[cursor..span.start]);
                let payload = &current[span.start + 1..span.end - 1];
                let alternatives = split_alternatives(payload);
                let pick = rng.gen_range(0..alternatives.len());
                next.push_str(alternatives[pick]);
                cursor = span.end;
            }
            next.push_str(&current[cursor..]);
            current = next;
        }
        current
    }
}

/// Resolve a spintax template into one concrete string.
///
/// Convenience wrapper over a default [`Resolver`] and thread-local
/// randomness. Never fails: brace-free input is returned unchanged, and
/// unbalanced braces survive into the output.
///
/// # Example
///
/// ```
/// let out = spintax::resolve("{Hello|Hi}, world");
/// assert!(out == "Hello, world" || out == "Hi, world");
/// ```
pub fn resolve(template: &str) -> String {
    Resolver::default().resolve(template)
}

/// Resolve a spintax template, drawing selections from `rng`.
///
/// Use this with a seeded [`rand::rngs::StdRng`] for reproducible output.
pub fn resolve_with<R: Rng>(template: &str, rng: &mut R) -> String {
    Resolver::default().resolve_with(template, rng)
}

impl Template {
    /// Produce one concrete string from a parsed template.
    ///
    /// Each group contributes one alternative chosen uniformly from `rng`,
    /// and chosen alternatives are spun recursively. Hand-built groups with
    /// no alternatives (which the parser never produces) expand to nothing.
    pub fn spin<R: Rng>(&self, rng: &mut R) -> String {
        let mut out = String::new();
        self.spin_into(&mut out, rng);
        out
    }

    fn spin_into<R: Rng>(&self, out: &mut String, rng: &mut R) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Group(group) => {
                    if !group.alternatives.is_empty() {
                        let pick = rng.gen_range(0..group.alternatives.len());
                        group.alternatives[pick].spin_into(out, rng);
                    }
                }
            }
        }
    }
}
