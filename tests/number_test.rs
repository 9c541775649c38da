//! Integration tests for number rules.

use rulebook::{ErrorKind, Rule, Schema, SchemaNode};
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
    let schema = field(Rule::number());

    assert!(kinds(&schema, json!({})).is_empty());
    assert!(kinds(&schema, json!({"a": 5})).is_empty());
    assert!(kinds(&schema, json!({"a": 5.5})).is_empty());
    assert_eq!(kinds(&schema, json!({"a": ""})), vec![ErrorKind::TypeMismatch]);
}

#[test]
fn test_min() {
    let schema = field(Rule::number().min(2));

    assert!(kinds(&schema, json!({"a": 5})).is_empty());
    assert!(kinds(&schema, json!({"a": 2})).is_empty());
    assert_eq!(kinds(&schema, json!({"a": 1})), vec![ErrorKind::ValueGt]);
    assert_eq!(kinds(&schema, json!({"a": 1.99})), vec![ErrorKind::ValueGt]);

    let input = json!({"a": 1});
    let result = schema.validate(&input).unwrap();
    assert_eq!(result.errors()[0].message, "the value must be >= 2, got 1.");
}

#[test]
fn test_max() {
    let schema = field(Rule::number().max(2));

    assert!(kinds(&schema, json!({"a": 1})).is_empty());
    assert!(kinds(&schema, json!({"a": 2})).is_empty());
    assert_eq!(kinds(&schema, json!({"a": 5})), vec![ErrorKind::ValueLt]);
}

#[test]
fn test_negative_bounds() {
    let schema = field(Rule::number().min(-10).max(-1));

    assert!(kinds(&schema, json!({"a": -5})).is_empty());
    assert_eq!(kinds(&schema, json!({"a": 0})), vec![ErrorKind::ValueLt]);
    assert_eq!(kinds(&schema, json!({"a": -11})), vec![ErrorKind::ValueGt]);
}

#[test]
fn test_one_of() {
    let schema = field(Rule::number().one_of([1, 2]));

    assert!(kinds(&schema, json!({"a": 1})).is_empty());
    assert!(kinds(&schema, json!({"a": 2})).is_empty());
    assert!(kinds(&schema, json!({"a": 2.0})).is_empty());
    assert_eq!(kinds(&schema, json!({"a": 5})), vec![ErrorKind::ValueOneOf]);
}

#[test]
fn test_boolean_has_only_a_type_check() {
    let schema = field(Rule::boolean());

    assert!(kinds(&schema, json!({"a": false})).is_empty());
    assert_eq!(kinds(&schema, json!({"a": "true"})), vec![ErrorKind::TypeMismatch]);
    assert_eq!(kinds(&schema, json!({"a": 1})), vec![ErrorKind::TypeMismatch]);
}
