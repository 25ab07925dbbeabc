// Tests for package-scope variable classification and deduplication
use crate::common::{check, names};

#[test]
fn test_each_unprefixed_global_reported_once() {
    let violations = check(
        r#"package main

var version = "1.0"

var (
    GDebug   bool
    timeout  int
    retries, GLimit int
)
"#,
    );
    assert_eq!(names(&violations), vec!["version", "timeout", "retries"]);
    for v in &violations {
        assert_eq!(
            v.message,
            format!("Global variable '{}' should start with 'G'", v.name)
        );
    }
    assert_eq!((violations[0].line, violations[0].column), (3, 5));
    assert_eq!((violations[2].line, violations[2].column), (8, 5));
}

#[test]
fn test_repeated_global_in_two_groups_is_evaluated_once() {
    let violations = check(
        r#"package main

var (
    registry map[string]int
)

var (
    registry map[string]int
)
"#,
    );
    // One kind and one shape violation, both from the first declaration.
    assert_eq!(violations.len(), 2);
    assert!(violations.iter().all(|v| v.line == 4));
}

#[test]
fn test_blank_globals_are_silent() {
    let violations = check("package main\n\nvar _ = 42\nvar _, GOk = 1, true\n");
    assert!(violations.is_empty());
}

#[test]
fn test_constants_are_not_checked() {
    let violations = check("package main\n\nconst limit = 3\n\nconst (\n    a = iota\n    b\n)\n");
    assert!(violations.is_empty());
}
