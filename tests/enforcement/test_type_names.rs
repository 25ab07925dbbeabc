// Tests for the struct type name suffix rule
use crate::common::{check, names};

#[test]
fn test_struct_type_without_suffix() {
    let violations = check("package main\n\ntype Config struct {\n    Port int\n}\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].name, "Config");
    assert!(violations[0].message.contains("Struct"));
    assert_eq!((violations[0].line, violations[0].column), (3, 6));
}

#[test]
fn test_grouped_and_generic_struct_types() {
    let violations = check(
        r#"package main

type (
    Request struct{}
    ResponseStruct struct{}
    Stack[T any] struct{ items []T }
)
"#,
    );
    assert_eq!(names(&violations), vec!["Request", "Stack"]);
}

#[test]
fn test_aliases_and_named_chains_ending_in_struct() {
    let violations = check(
        r#"package main

type BaseStruct struct{}
type Copy BaseStruct
type Same = BaseStruct
type Ptr *BaseStruct
"#,
    );
    assert_eq!(names(&violations), vec!["Copy", "Same"]);
}

#[test]
fn test_non_struct_types_are_ignored() {
    let violations = check(
        r#"package main

import "net/http"

type Handler func()
type Names []string
type Reader interface{ Read() }
type Client http.Client
"#,
    );
    assert!(violations.is_empty());
}

#[test]
fn test_local_struct_types() {
    let violations = check(
        r#"package main

func run() {
    type pair struct{ a, b int }
    lP := pair{}
    _ = lP
}
"#,
    );
    assert_eq!(names(&violations), vec!["pair", "lP"]);
    assert_eq!(violations[1].message, "Struct variable 'lP' should end with 'Rec'");
}

#[test]
fn test_local_struct_type_shadowing_package_type() {
    let violations = check(
        r#"package main

type Rows []int

func run() {
    type Rows struct{ n int }
    lRows := Rows{}
    _ = lRows
}

func other() {
    lRowsArr := Rows{}
    _ = lRowsArr
}
"#,
    );
    assert_eq!(names(&violations), vec!["Rows", "lRows"]);
    assert_eq!((violations[0].line, violations[0].column), (6, 10));
}
