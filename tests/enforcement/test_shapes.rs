// Tests for shape suffix rules on variables
use crate::common::{check, names};

#[test]
fn test_sequence_locals() {
    let violations = check(
        r#"package main

func run() {
    lDataArr := []int{}
    dataArr := []int{}
    lData := []int{}
    _, _, _ = lDataArr, dataArr, lData
}
"#,
    );
    assert_eq!(names(&violations), vec!["dataArr", "lData"]);
    assert_eq!(violations[0].message, "Local variable 'dataArr' should start with 'l'");
    assert_eq!(violations[1].message, "Array variable 'lData' should end with 'Arr'");
}

#[test]
fn test_fixed_arrays_are_sequences() {
    let violations = check("package main\n\nvar GBuf [16]byte\nvar GHashArr [32]byte\n");
    assert_eq!(names(&violations), vec!["GBuf"]);
}

#[test]
fn test_map_shapes() {
    let violations = check(
        r#"package main

var GIndex = map[string]int{}
var GIndexMap = make(map[string][]int)

func run() {
    lCache := make(map[int]string)
    _ = lCache
}
"#,
    );
    assert_eq!(names(&violations), vec!["GIndex", "lCache"]);
    assert_eq!(violations[1].message, "Map variable 'lCache' should end with 'Map'");
}

#[test]
fn test_channel_globals() {
    let violations = check(
        r#"package main

var GEvents = make(chan string)
var GEventsChan chan string
"#,
    );
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].name, "GEvents");
    assert_eq!(violations[0].message, "Channel variable 'GEvents' should end with 'Chan'");
}

#[test]
fn test_struct_values_need_rec_suffix() {
    let violations = check(
        r#"package main

type PointStruct struct{ X, Y int }

func run() {
    lOrigin := PointStruct{}
    lOriginRec := PointStruct{}
    lAnon := struct{ ok bool }{}
    lPtr := &PointStruct{}
    _, _, _, _ = lOrigin, lOriginRec, lAnon, lPtr
}
"#,
    );
    assert_eq!(names(&violations), vec!["lOrigin", "lAnon"]);
    assert_eq!(violations[0].message, "Struct variable 'lOrigin' should end with 'Rec'");
}

#[test]
fn test_named_types_resolve_to_underlying_shape() {
    let violations = check(
        r#"package main

type Ids []int
type Lookup = map[string]Ids
type Queue chan Ids

var GIds Ids
var GLookup Lookup
var GQueue Queue
"#,
    );
    let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Array variable 'GIds' should end with 'Arr'",
            "Map variable 'GLookup' should end with 'Map'",
            "Channel variable 'GQueue' should end with 'Chan'",
        ]
    );
}

#[test]
fn test_inferred_through_calls_and_indexing() {
    let violations = check(
        r#"package main

func load() ([]string, map[string]int, error) { return nil, nil, nil }

func run() {
    lLines, lCounts, lErr := load()
    lFirst := lLines[0]
    lTail := lLines[1:]
    lMore := append(lTail, lFirst)
    _, _, _ = lCounts, lErr, lMore
}
"#,
    );
    assert_eq!(names(&violations), vec!["lLines", "lCounts", "lTail", "lMore"]);
}

#[test]
fn test_two_violations_share_position() {
    let violations = check("package main\n\nvar events = make(chan int)\n");
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].message, "Global variable 'events' should start with 'G'");
    assert_eq!(violations[1].message, "Channel variable 'events' should end with 'Chan'");
    assert_eq!(
        (violations[0].line, violations[0].column),
        (violations[1].line, violations[1].column)
    );
}

#[test]
fn test_unresolvable_types_fail_open() {
    let violations = check(
        r#"package main

import (
    "os"
    "strings"
)

var GArgs = os.Args

func run[T any](pItems []T) {
    lParts := strings.Split("a,b", ",")
    var lNothing = nil
    lFirst := pItems
    _, _, _ = lParts, lNothing, lFirst
}
"#,
    );
    // A slice of a type parameter is still a slice.
    assert_eq!(names(&violations), vec!["lFirst"]);
}

#[test]
fn test_local_type_shadows_package_type() {
    let violations = check(
        r#"package main

type ItemStruct struct{}

func fn1() {
    type ItemStruct []int
    lItemsArr := ItemStruct{1}
    _ = lItemsArr
}

func fn2() {
    lItemRec := ItemStruct{}
    _ = lItemRec
}
"#,
    );
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn test_same_named_local_types_in_different_functions() {
    let violations = check(
        r#"package main

func fa() {
    type tS []int
    lXArr := tS{}
    _ = lXArr
}

func fb() {
    type tS map[string]int
    lYMap := tS{}
    _ = lYMap
}
"#,
    );
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn test_local_type_is_out_of_scope_after_its_block() {
    let violations = check(
        r#"package main

type ids []int

func run() {
    if true {
        type ids map[int]bool
        lSeenMap := ids{}
        _ = lSeenMap
    }
    lIdsArr := ids{}
    _ = lIdsArr
}
"#,
    );
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn test_type_params_shadow_package_types() {
    let violations = check(
        r#"package main

type T []int

func Id[T any](pV T) T {
    lOut := pV
    return lOut
}

func use() {
    lRes := Id(3)
    lRawArr := T{}
    _, _ = lRes, lRawArr
}
"#,
    );
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn test_receiver_type_params_shadow_package_types() {
    let violations = check(
        r#"package main

type V map[string]int

type ListStruct[V any] struct {
    items []V
}

func (l *ListStruct[V]) Head() V {
    lHead := l.items[0]
    lItemsArr := l.items
    _ = lItemsArr
    return lHead
}
"#,
    );
    assert!(violations.is_empty(), "{violations:?}");
}
