//! Shared spintax scanning primitives used by both runtime and macro validation.
//!
//! This crate centralizes brace scanning to avoid drift between compile-time
//! (`spintax-macros`) and runtime (`spintax`) behavior.

use std::ops::Range;

/// Returns true iff `template` has balanced, non-negatively nested braces.
///
/// Runs a depth counter over the input: `{` increments, `}` decrements. The
/// scan fails the moment depth would go negative and succeeds only when the
/// final depth is exactly zero. Pipe syntax inside groups is not checked.
pub fn is_balanced(template: &str) -> bool {
    let mut depth: usize = 0;
    for byte in template.bytes() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}

/// Byte ranges (braces included) of every innermost group, left to right.
///
/// An innermost group is a `{...}` span whose payload contains no nested
/// braces. Found in a single scan: each `{` becomes the pending opener, and
/// the next `}` closes it. A `}` with no pending opener is skipped; the
/// caller decides whether that is an error (`is_balanced`) or tolerated
/// (lenient resolution).
///
/// Braces are ASCII, so the returned byte ranges always fall on UTF-8
/// boundaries.
pub fn innermost_spans(template: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;
    for (i, byte) in template.bytes().enumerate() {
        match byte {
            b'{' => open = Some(i),
            b'}' => {
                if let Some(start) = open.take() {
                    spans.push(start..i + 1);
                }
            }
            _ => {}
        }
    }
    spans
}

/// Splits a group payload into its pipe-separated alternatives.
///
/// Always yields at least one element; empty alternatives are preserved, so
/// `"|x"` splits to `["", "x"]` and `""` splits to `[""]`.
pub fn split_alternatives(payload: &str) -> Vec<&str> {
    payload.split('|').collect()
}
