// Tests for report ordering across a whole file
use crate::common::generators::generate_go_source;
use crate::common::{check, names};

#[test]
fn test_violations_follow_declaration_order() {
    let violations = check(
        r#"package main

var alpha int

type Beta struct{}

func gamma(delta int) {
    epsilon := []int{}
    _ = epsilon
}

var zeta = map[string]int{}
"#,
    );
    assert_eq!(
        names(&violations),
        vec!["alpha", "Beta", "delta", "epsilon", "epsilon", "zeta", "zeta"]
    );
}

#[test]
fn test_generated_file_positions_never_go_backwards() {
    let source = generate_go_source(20, 10, 8);
    let violations = check(&source);
    assert!(!violations.is_empty());
    let positions: Vec<(u32, u32)> = violations.iter().map(|v| (v.line, v.column)).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_repeated_runs_are_identical() {
    let source = generate_go_source(8, 4, 8);
    assert_eq!(check(&source), check(&source));
}
