//! Projection of data onto the paths a schema declares.
//!
//! Cleanup re-walks the schema with container-producing visits and builds a
//! fresh value: undeclared keys are dropped, declared primitives are copied
//! when present, and array element templates are replicated once per element
//! actually present. It never looks at validation errors and never fails on
//! data.

use serde_json::{Map, Value};

use crate::error::SchemaFault;
use crate::rule::Rule;
use crate::schema::{walk, Cursor, SchemaNode};
use crate::types::TypeTag;

/// Returns `data` restricted to the paths declared by `root`.
///
/// A keyed root yields an object and an ordered root an array; a primitive
/// root rule yields the data itself, or `null` when absent.
///
/// # Errors
///
/// Only schema faults; any data shape is accepted.
pub fn project(root: &SchemaNode, data: Option<&Value>) -> Result<Value, SchemaFault> {
    let mut result = Value::Null;

    walk(root, |_| true, |cursor, node| {
        let found = data.and_then(|d| cursor.data.lookup(d));
        Ok(match node {
            SchemaNode::Keyed(fields) => {
                cursor.data.assign(&mut result, Value::Object(Map::new()));
                fields.keys().map(|key| cursor.key(key)).collect()
            }
            SchemaNode::Ordered(items) => {
                cursor.data.assign(&mut result, Value::Array(Vec::new()));
                let present = found.and_then(Value::as_array).map_or(0, Vec::len);
                (0..present.min(items.len())).map(|i| cursor.index(i)).collect()
            }
            SchemaNode::Rule(rule) => project_rule(rule, cursor, found, &mut result),
        })
    })?;

    tracing::debug!(shape = %root.shape(), "projected data onto schema");
    Ok(result)
}

fn project_rule(rule: &Rule, cursor: &Cursor, found: Option<&Value>, result: &mut Value) -> Vec<Cursor> {
    match rule.declared_type() {
        TypeTag::Object => {
            cursor.data.assign(result, Value::Object(Map::new()));
            match rule.nested_schema() {
                Some(_) => vec![cursor.nested()],
                None => Vec::new(),
            }
        }
        TypeTag::Array => {
            let elements = found.and_then(Value::as_array);
            match (rule.nested_schema(), elements) {
                (None, Some(items)) => {
                    cursor.data.assign(result, Value::Array(items.clone()));
                    Vec::new()
                }
                (Some(SchemaNode::Ordered(_)), Some(_)) => {
                    cursor.data.assign(result, Value::Array(Vec::new()));
                    vec![cursor.nested()]
                }
                (Some(_), Some(items)) => {
                    cursor.data.assign(result, Value::Array(Vec::new()));
                    let template = cursor.nested();
                    (0..items.len()).map(|i| template.element(i)).collect()
                }
                (_, None) => {
                    cursor.data.assign(result, Value::Array(Vec::new()));
                    Vec::new()
                }
            }
        }
        _ => {
            if let Some(value) = found {
                cursor.data.assign(result, value.clone());
            }
            Vec::new()
        }
    }
}
