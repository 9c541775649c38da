//! Tests for concurrent read-only use of schemas and the registry.

use rulebook::{Rule, Schema, SchemaNode, SchemaRegistry};
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn person() -> Schema {
    Schema::new(SchemaNode::keyed([
        ("name", Rule::string().required()),
        ("age", Rule::number().min(0)),
    ]))
}

#[test]
fn test_concurrent_validation() {
    let schema = Arc::new(person());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let data = json!({"name": format!("User{}", i), "age": i});
                assert!(schema.validate(&data).unwrap().is_valid());

                let data = json!({"age": -1 - i});
                assert_eq!(schema.validate(&data).unwrap().errors().len(), 2);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_registry_reads_and_writes() {
    let registry = SchemaRegistry::new();
    registry.register("Person", person()).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                registry
                    .register(format!("Extra{}", i), Schema::new(Rule::number()))
                    .unwrap();
                let errors = registry.errors_for("Person", &json!({"name": 1})).unwrap();
                assert_eq!(errors.len(), 1);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), 9);
    assert_eq!(registry.names()[0], "Person");
}

#[test]
fn test_parallel_batch_matches_sequential() {
    let schema = person();
    let batch: Vec<_> = (0..64)
        .map(|i| {
            if i % 3 == 0 {
                json!({"age": i})
            } else {
                json!({"name": "x", "age": i})
            }
        })
        .collect();

    let parallel: Vec<_> = schema
        .validate_all(&batch)
        .unwrap()
        .into_iter()
        .map(|r| r.into_errors())
        .collect();
    let sequential: Vec<_> = batch
        .iter()
        .map(|data| schema.validate(data).unwrap().into_errors())
        .collect();

    assert_eq!(parallel, sequential);
}
