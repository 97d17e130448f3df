//! Integration tests for static template lints.

use spintax::{lint, parse_template, LintWarning};

fn lint_source(source: &str) -> Vec<LintWarning> {
    lint(&parse_template(source).unwrap())
}

#[test]
fn clean_template_has_no_warnings() {
    assert!(lint_source("{a|b} and {c|d}").is_empty());
    assert!(lint_source("plain text").is_empty());
}

#[test]
fn empty_group_is_flagged() {
    assert_eq!(lint_source("{}"), vec![LintWarning::EmptyGroup { group: 1 }]);
}

#[test]
fn all_empty_alternatives_are_flagged_once() {
    // `{|}` is both empty and a duplicate of the empty alternative.
    assert_eq!(
        lint_source("{|}"),
        vec![
            LintWarning::EmptyGroup { group: 1 },
            LintWarning::DuplicateAlternative {
                group: 1,
                alternative: String::new(),
            },
        ]
    );
}

#[test]
fn single_alternative_is_flagged() {
    assert_eq!(
        lint_source("{only}"),
        vec![LintWarning::SingleAlternative { group: 1 }]
    );
}

#[test]
fn duplicate_alternative_is_flagged() {
    assert_eq!(
        lint_source("{a|b|a}"),
        vec![LintWarning::DuplicateAlternative {
            group: 1,
            alternative: "a".to_string(),
        }]
    );
}

#[test]
fn duplicate_detection_sees_nested_structure() {
    // Both alternatives render to the same source text, nested group included.
    assert_eq!(
        lint_source("{a{x|y}|a{x|y}}"),
        vec![LintWarning::DuplicateAlternative {
            group: 1,
            alternative: "a{x|y}".to_string(),
        }]
    );
}

#[test]
fn groups_are_numbered_in_document_order() {
    let warnings = lint_source("{x|y}{a|{b|b}}");
    assert_eq!(
        warnings,
        vec![LintWarning::DuplicateAlternative {
            group: 3,
            alternative: "b".to_string(),
        }]
    );
}

#[test]
fn warnings_render_readably() {
    let warnings = lint_source("{only}");
    assert_eq!(
        warnings[0].to_string(),
        "group #1 has a single alternative; braces are redundant"
    );
}
