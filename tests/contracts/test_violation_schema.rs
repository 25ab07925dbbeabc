/// Contract tests for the violation array printed on stdout.
use gocheck_enforce::types::AnalyzeResult;
use gocheck_output::json::JsonFormatter;
use gocheck_output::OutputFormatter;

use crate::common::check;
use crate::common::generators::generate_go_source;
use crate::test_schema_helpers::validate_against_schema;

const SCHEMA: &str = include_str!("../schemas/violations.schema.json");

fn formatted(source: &str, formatter: &JsonFormatter) -> serde_json::Value {
    let result = AnalyzeResult {
        file: "main.go".to_string(),
        violations: check(source),
    };
    serde_json::from_str(&formatter.format_violations(&result)).unwrap()
}

#[test]
fn clean_output_matches_schema() {
    let json = formatted("package main\n\nvar GOk bool\n", &JsonFormatter::default());
    assert_eq!(json, serde_json::json!([]));
    validate_against_schema(&json, SCHEMA);
}

#[test]
fn every_rule_family_matches_schema() {
    let source = r#"package main

type Config struct{}

var count int
var GEvents = make(chan int)

func run(arg int) {
    data := []int{}
    lIndex := map[string]int{}
    lConf := Config{}
    _, _, _ = data, lIndex, lConf
}
"#;
    let json = formatted(source, &JsonFormatter::default());
    assert_eq!(json.as_array().unwrap().len(), 8);
    validate_against_schema(&json, SCHEMA);
}

#[test]
fn generated_output_matches_schema() {
    let source = generate_go_source(40, 12, 12);
    let json = formatted(&source, &JsonFormatter::pretty());
    assert!(!json.as_array().unwrap().is_empty());
    validate_against_schema(&json, SCHEMA);
}

#[test]
#[should_panic(expected = "JSON schema validation failed")]
fn extra_fields_are_rejected() {
    let json = serde_json::json!([
        { "name": "x", "message": "Local variable 'x' should start with 'l'", "line": 1, "column": 1, "kind": "local" }
    ]);
    validate_against_schema(&json, SCHEMA);
}
