//! Expansion-space analysis for parsed templates.

use serde::Serialize;

use crate::parser::ast::{Segment, Template};

/// Summary of a template's expansion space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateStats {
    /// Number of groups, nested groups included.
    pub groups: usize,
    /// Total number of alternatives across all groups.
    pub alternatives: usize,
    /// Maximum group nesting depth (0 for a brace-free template).
    pub max_depth: usize,
    /// Number of selection paths through the template, saturating at
    /// `u128::MAX`. Duplicate alternatives are counted separately, so this
    /// can exceed the number of distinct output strings.
    pub combinations: u128,
}

/// Computes summary statistics for a parsed template.
pub fn stats(template: &Template) -> TemplateStats {
    let mut result = TemplateStats {
        groups: 0,
        alternatives: 0,
        max_depth: 0,
        combinations: 0,
    };
    let combinations = walk(template, 1, &mut result);
    result.combinations = combinations;
    result
}

/// Accumulates group/alternative/depth counts into `acc` and returns the
/// number of selection paths for `template`.
fn walk(template: &Template, depth: usize, acc: &mut TemplateStats) -> u128 {
    let mut combinations: u128 = 1;
    for segment in &template.segments {
        if let Segment::Group(group) = segment {
            acc.groups += 1;
            acc.alternatives += group.alternatives.len();
            acc.max_depth = acc.max_depth.max(depth);
            let mut group_paths: u128 = 0;
            for alternative in &group.alternatives {
                group_paths = group_paths.saturating_add(walk(alternative, depth + 1, acc));
            }
            combinations = combinations.saturating_mul(group_paths);
        }
    }
    combinations
}

/// Enumerates expansions in deterministic left-to-right order.
///
/// Alternatives are taken in source order, leftmost group varying slowest.
/// Enumeration stops once `limit` strings have been produced; expansion
/// counts grow multiplicatively, so callers should always bound this.
pub fn expansions(template: &Template, limit: usize) -> Vec<String> {
    let mut out = Vec::new();
    if limit > 0 {
        expand_segments(&template.segments, String::new(), limit, &mut out);
    }
    out
}

fn expand_segments(segments: &[Segment], prefix: String, limit: usize, out: &mut Vec<String>) {
    if out.len() >= limit {
        return;
    }
    let Some((first, rest)) = segments.split_first() else {
        out.push(prefix);
        return;
    };
    match first {
        Segment::Literal(text) => {
            let mut next = prefix;
            next.push_str(text);
            expand_segments(rest, next, limit, out);
        }
        Segment::Group(group) => {
            for alternative in &group.alternatives {
                if out.len() >= limit {
                    break;
                }
                let mut combined = alternative.segments.clone();
                combined.extend(rest.iter().cloned());
                expand_segments(&combined, prefix.clone(), limit, out);
            }
        }
    }
}
