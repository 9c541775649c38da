//! Integration tests for string rules.

use rulebook::{ErrorKind, Rule, Schema, SchemaNode, ValidatorConfig};
use serde_json::{json, Value};

fn field(rule: Rule) -> Schema {
    Schema::new(SchemaNode::keyed([("a", rule)]))
}

fn kinds(schema: &Schema, data: Value) -> Vec<ErrorKind> {
    schema
        .validate(&data)
        .unwrap()
        .errors()
        .iter()
        .map(|e| e.kind)
        .collect()
}

#[test]
fn test_type() {
    let schema = field(Rule::string());

    assert!(kinds(&schema, json!({"a": "one"})).is_empty());
    assert_eq!(kinds(&schema, json!({"a": 1})), vec![ErrorKind::TypeMismatch]);
    assert_eq!(kinds(&schema, json!({"a": {}})), vec![ErrorKind::TypeMismatch]);
}

#[test]
fn test_min_length() {
    let schema = field(Rule::string().min(2));

    assert!(kinds(&schema, json!({"a": "one"})).is_empty());
    assert!(kinds(&schema, json!({"a": "tw"})).is_empty());
    assert_eq!(kinds(&schema, json!({"a": "1"})), vec![ErrorKind::LengthGt]);
    assert_eq!(kinds(&schema, json!({"a": ""})), vec![ErrorKind::LengthGt]);
}

#[test]
fn test_max_length() {
    let schema = field(Rule::string().max(2));

    assert_eq!(kinds(&schema, json!({"a": "one"})), vec![ErrorKind::LengthLt]);
    assert!(kinds(&schema, json!({"a": "tw"})).is_empty());
    assert!(kinds(&schema, json!({"a": ""})).is_empty());
}

#[test]
fn test_length_counts_characters() {
    let schema = field(Rule::string().max(2));
    assert!(kinds(&schema, json!({"a": "éé"})).is_empty());
}

#[test]
fn test_exact_length() {
    let schema = field(Rule::string().len(5));

    assert!(kinds(&schema, json!({"a": "12345"})).is_empty());
    assert_eq!(kinds(&schema, json!({"a": "1234"})), vec![ErrorKind::LengthEq]);
    assert_eq!(kinds(&schema, json!({"a": "123456"})), vec![ErrorKind::LengthEq]);

    let input = json!({"a": "1234"});
    let result = schema.validate(&input).unwrap();
    assert_eq!(result.errors()[0].message, "the length must be == 5, got 4.");
}

#[test]
fn test_one_of() {
    let schema = field(Rule::string().one_of(["one", "two"]));

    assert!(kinds(&schema, json!({"a": "one"})).is_empty());
    assert!(kinds(&schema, json!({"a": "two"})).is_empty());

    let input = json!({"a": "three"});
    let result = schema.validate(&input).unwrap();
    assert_eq!(result.errors()[0].kind, ErrorKind::ValueOneOf);
    assert_eq!(result.errors()[0].message, "the value must be one of one,two, got three.");
}

#[test]
fn test_pattern_reports_value_one_of_by_default() {
    let schema = field(Rule::string().pattern(r"^\d+$").unwrap());

    assert!(kinds(&schema, json!({"a": "123"})).is_empty());
    assert_eq!(kinds(&schema, json!({"a": "1a3"})), vec![ErrorKind::ValueOneOf]);
    assert_eq!(kinds(&schema, json!({"a": "asd"})), vec![ErrorKind::ValueOneOf]);
}

#[test]
fn test_pattern_kind_is_configurable() {
    let schema = field(Rule::string().pattern(r"^\d+$").unwrap())
        .with_config(ValidatorConfig::default().pattern_error_kind(ErrorKind::PatternMismatch));

    let input = json!({"a": "asd"});
    let result = schema.validate(&input).unwrap();
    assert_eq!(result.errors()[0].errno(), 11);
    assert_eq!(result.errors()[0].message, r"the value must match ^\d+$, got asd.");
}

#[test]
fn test_invalid_pattern_is_rejected_at_build_time() {
    assert!(Rule::string().pattern("(unclosed").is_err());
}

#[test]
fn test_first_failing_constraint_wins() {
    let schema = field(Rule::string().min(3).one_of(["abcd"]));
    assert_eq!(kinds(&schema, json!({"a": "ab"})), vec![ErrorKind::LengthGt]);
    assert_eq!(kinds(&schema, json!({"a": "abc"})), vec![ErrorKind::ValueOneOf]);
}

#[test]
fn test_contradictory_bounds_match_nothing() {
    let schema = field(Rule::string().min(5).max(3));
    assert_eq!(kinds(&schema, json!({"a": "four"})), vec![ErrorKind::LengthGt]);
    assert_eq!(kinds(&schema, json!({"a": "sixsix"})), vec![ErrorKind::LengthLt]);
}
