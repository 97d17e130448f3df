//! Integration tests for spintax resolution.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use spintax::{parse_template, resolve, resolve_with, validate, Resolver, MAX_PASSES};

// =============================================================================
// Deterministic resolution
// =============================================================================

#[test]
fn brace_free_input_unchanged() {
    assert_eq!(resolve("hello world"), "hello world");
    assert_eq!(resolve("with | a pipe"), "with | a pipe");
    assert_eq!(resolve("día soleado"), "día soleado");
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(resolve(""), "");
}

#[test]
fn single_alternative_is_deterministic() {
    assert_eq!(resolve("{only} choice"), "only choice");
    assert_eq!(resolve("{a}{b}"), "ab");
    assert_eq!(resolve("{{{x}}}"), "x");
}

#[test]
fn empty_group_resolves_to_nothing() {
    assert_eq!(resolve("a{}b"), "ab");
}

// =============================================================================
// Random selection
// =============================================================================

#[test]
fn simple_group_yields_one_alternative() {
    for _ in 0..100 {
        let out = resolve("{red|green|blue}");
        assert!(out == "red" || out == "green" || out == "blue");
    }
}

#[test]
fn nested_group_yields_inner_or_outer_alternative() {
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let out = resolve("{A|{B|C}}");
        assert!(out == "A" || out == "B" || out == "C");
        seen.insert(out);
    }
    // All three outcomes are reachable and show up over enough draws.
    assert!(seen.contains("A"));
    assert!(seen.contains("B"));
    assert!(seen.contains("C"));
}

#[test]
fn empty_alternative_can_be_selected() {
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let out = resolve("{|x}");
        assert!(out.is_empty() || out == "x");
        seen.insert(out);
    }
    assert!(seen.contains(""));
    assert!(seen.contains("x"));
}

#[test]
fn selection_is_roughly_uniform() {
    let mut a_count = 0;
    for _ in 0..10_000 {
        if resolve("{a|b}") == "a" {
            a_count += 1;
        }
    }
    // Binomial(10000, 0.5): mean 5000, sd 50. A 500-wide window around the
    // mean is ten sigma; a uniform selector essentially never leaves it.
    assert!(
        (4500..=5500).contains(&a_count),
        "selection skewed: {a_count}/10000"
    );
}

#[test]
fn seeded_resolution_is_reproducible() {
    let template = "{a|b|c}{1|2|3}{x|y|z}";
    let mut first = StdRng::seed_from_u64(42);
    let mut second = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        assert_eq!(
            resolve_with(template, &mut first),
            resolve_with(template, &mut second)
        );
    }
}

// =============================================================================
// Totality on malformed input
// =============================================================================

#[test]
fn unclosed_brace_left_in_place() {
    assert_eq!(resolve("{a|b"), "{a|b");
    assert_eq!(resolve("a}b"), "a}b");
}

#[test]
fn partial_resolution_of_mixed_input() {
    // The balanced group resolves; the stray braces survive.
    assert_eq!(resolve("{a}{"), "a{");
    assert_eq!(resolve("}{a|a}"), "}a");
}

#[test]
fn malformed_input_never_panics() {
    for input in ["{", "}", "{{", "}}", "{|", "|}", "a{b}c}d", "{a{b{c"] {
        let _ = resolve(input);
    }
}

#[test]
fn validate_gates_malformed_templates() {
    assert!(validate("{a|b}"));
    assert!(!validate("{a|b"));
    assert!(!validate("a}{b"));
}

// =============================================================================
// Pass cap
// =============================================================================

#[test]
fn pass_cap_contract_value() {
    assert_eq!(MAX_PASSES, 100);
}

#[test]
fn custom_pass_cap_bounds_rewriting() {
    // One nesting level resolves per pass, so a cap of 2 leaves the
    // outermost level of a triple-nested template unresolved.
    let resolver = Resolver::builder().max_passes(2).build();
    assert_eq!(resolver.resolve("{{{x}}}"), "{x}");
    assert_eq!(Resolver::default().resolve("{{{x}}}"), "x");
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn resolved_output_is_stable() {
    for _ in 0..50 {
        let once = resolve("{Hi|Hello} {there|friend}{!|.}");
        assert!(!once.contains('{') && !once.contains('}'));
        assert_eq!(resolve(&once), once);
    }
}

// =============================================================================
// AST-based spinning
// =============================================================================

#[test]
fn spin_matches_resolution_outcomes() {
    let template = parse_template("{A|{B|C}}").unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let out = template.spin(&mut rng);
        assert!(out == "A" || out == "B" || out == "C");
    }
}

#[test]
fn spin_of_literal_template_is_identity() {
    let template = parse_template("no groups here").unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(template.spin(&mut rng), "no groups here");
}

#[test]
fn spin_is_reproducible_with_equal_seeds() {
    let template = parse_template("{a|b}{c|d}{e|f}").unwrap();
    let mut first = StdRng::seed_from_u64(99);
    let mut second = StdRng::seed_from_u64(99);
    for _ in 0..10 {
        assert_eq!(template.spin(&mut first), template.spin(&mut second));
    }
}
