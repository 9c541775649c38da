//! Lock-step traversal of the schema tree and the data tree.
//!
//! The walker keeps a FIFO worklist of [`Cursor`]s, each pairing a schema
//! path with the data path it applies to. Visiting order is declaration
//! order, breadth first, so repeated walks over the same schema are
//! identical.

use std::collections::VecDeque;

use super::node::{SchemaNode, SchemaPath, SchemaStep};
use crate::error::SchemaFault;
use crate::path::Path;

/// A pending location: where we are in the schema and in the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub schema: SchemaPath,
    pub data: Path,
}

impl Cursor {
    pub fn root() -> Self {
        Self {
            schema: SchemaPath::root(),
            data: Path::root(),
        }
    }

    /// A keyed child, present in both trees.
    pub fn key(&self, key: &str) -> Self {
        Self {
            schema: self.schema.push(SchemaStep::Key(key.to_string())),
            data: self.data.push_field(key),
        }
    }

    /// A positional child, present in both trees.
    pub fn index(&self, index: usize) -> Self {
        Self {
            schema: self.schema.push(SchemaStep::Index(index)),
            data: self.data.push_index(index),
        }
    }

    /// The current rule's nested schema, applied to the same data.
    pub fn nested(&self) -> Self {
        Self {
            schema: self.schema.push(SchemaStep::Nested),
            data: self.data.clone(),
        }
    }

    /// The same schema node, applied to element `index` of the data.
    pub fn element(&self, index: usize) -> Self {
        Self {
            schema: self.schema.clone(),
            data: self.data.push_index(index),
        }
    }
}

/// Walks `root`, calling `visit` on every node for which `stop` holds.
///
/// Nodes where `stop` is false are containers to look through: their
/// declared children are queued. Whatever cursors `visit` returns are queued
/// after them, which is how rules re-enter their nested schemas without a
/// second pass. A root for which `stop` holds is visited directly.
///
/// # Errors
///
/// Returns [`SchemaFault::UnresolvedPath`] if a queued cursor does not
/// resolve, and propagates any fault returned by `visit`.
pub fn walk<'s, S, V>(root: &'s SchemaNode, stop: S, mut visit: V) -> Result<(), SchemaFault>
where
    S: Fn(&SchemaNode) -> bool,
    V: FnMut(&Cursor, &'s SchemaNode) -> Result<Vec<Cursor>, SchemaFault>,
{
    let mut pending = VecDeque::from([Cursor::root()]);

    while let Some(cursor) = pending.pop_front() {
        let node = root
            .resolve(&cursor.schema)
            .ok_or_else(|| SchemaFault::UnresolvedPath(cursor.schema.to_string()))?;

        tracing::trace!(schema = %cursor.schema, data = %cursor.data, "visiting schema node");

        if stop(node) {
            pending.extend(visit(&cursor, node)?);
            continue;
        }

        match node {
            SchemaNode::Keyed(fields) => pending.extend(fields.keys().map(|key| cursor.key(key))),
            SchemaNode::Ordered(items) => pending.extend((0..items.len()).map(|i| cursor.index(i))),
            SchemaNode::Rule(_) => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn visited(root: &SchemaNode) -> Vec<String> {
        let mut seen = Vec::new();
        walk(root, SchemaNode::is_rule, |cursor, _| {
            seen.push(cursor.data.to_string());
            Ok(Vec::new())
        })
        .unwrap();
        seen
    }

    #[test]
    fn test_visits_rules_in_declaration_order() {
        let root = SchemaNode::keyed([
            ("z", SchemaNode::from(Rule::string())),
            ("o", SchemaNode::keyed([("b", Rule::number()), ("a", Rule::number())])),
            ("list", SchemaNode::ordered([Rule::string()])),
            ("m", SchemaNode::from(Rule::string())),
        ]);

        assert_eq!(visited(&root), vec!["z", "m", "o.b", "o.a", "list.0"]);
    }

    #[test]
    fn test_root_rule_is_visited_directly() {
        let root = SchemaNode::from(Rule::array());
        assert_eq!(visited(&root), vec![""]);
    }

    #[test]
    fn test_visit_can_queue_nested_cursors() {
        let root = SchemaNode::keyed([(
            "items",
            Rule::array().schema(SchemaNode::keyed([("name", Rule::string())])),
        )]);

        let mut seen = Vec::new();
        walk(&root, |_| true, |cursor, node| {
            seen.push((cursor.schema.to_string(), cursor.data.to_string()));
            Ok(match node {
                SchemaNode::Rule(rule) if rule.nested_schema().is_some() => {
                    vec![cursor.nested().element(0), cursor.nested().element(1)]
                }
                SchemaNode::Keyed(fields) => fields.keys().map(|k| cursor.key(k)).collect(),
                _ => Vec::new(),
            })
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![
                (String::new(), String::new()),
                ("items".to_string(), "items".to_string()),
                ("items.$schema".to_string(), "items.0".to_string()),
                ("items.$schema".to_string(), "items.1".to_string()),
                ("items.$schema.name".to_string(), "items.0.name".to_string()),
                ("items.$schema.name".to_string(), "items.1.name".to_string()),
            ]
        );
    }

    #[test]
    fn test_unresolvable_cursor_is_a_fault() {
        let root = SchemaNode::from(Rule::string());
        let err = walk(&root, |_| true, |cursor, _| Ok(vec![cursor.key("ghost")])).unwrap_err();
        assert_eq!(err, SchemaFault::UnresolvedPath("ghost".to_string()));
    }
}
