// Tests for local variables and short-form declarations
use crate::common::{check, names};

#[test]
fn test_prefixed_scalar_locals_pass() {
    let violations = check(
        r#"package main

func run() {
    var lCount int
    lName := "gopher"
    lRatio := 0.5
    lCount, lOther := 1, 2
    _, _, _ = lName, lRatio, lOther
}
"#,
    );
    assert!(violations.is_empty());
}

#[test]
fn test_unprefixed_locals() {
    let violations = check(
        r#"package main

func run() {
    var count int
    name := "gopher"
    _, _ = count, name
}
"#,
    );
    assert_eq!(names(&violations), vec!["count", "name"]);
    assert_eq!(violations[1].message, "Local variable 'name' should start with 'l'");
    assert_eq!((violations[1].line, violations[1].column), (5, 5));
}

#[test]
fn test_local_named_like_global_is_local() {
    let violations = check(
        r#"package main

var GCount int

func run() {
    GCount := 1
    _ = GCount
}
"#,
    );
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].message, "Local variable 'GCount' should start with 'l'");
}

#[test]
fn test_function_literal_bodies() {
    let violations = check(
        r#"package main

func run() {
    lHandler := func() {
        inner := 1
        var other string
        _, _ = inner, other
    }
    lHandler()
}
"#,
    );
    assert_eq!(names(&violations), vec!["inner", "other"]);
}

#[test]
fn test_statement_initializers() {
    let violations = check(
        r#"package main

func find(pKey string) (int, bool) { return 0, false }

func run() {
    if idx, lOk := find("x"); lOk {
        _ = idx
    }
    for n := 0; n < 2; n++ {
    }
}
"#,
    );
    assert_eq!(names(&violations), vec!["idx", "n"]);
}

#[test]
fn test_range_and_type_switch_bindings_are_not_checked() {
    let violations = check(
        r#"package main

func run(pItemsArr []int, pAny interface{}) {
    for i, v := range pItemsArr {
        _, _ = i, v
    }
    switch t := pAny.(type) {
    case int:
        _ = t
    }
}
"#,
    );
    assert!(violations.is_empty());
}
