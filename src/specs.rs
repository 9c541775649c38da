//! Schema introspection.
//!
//! [`generate`] walks a schema (no data involved) and emits a
//! [`SpecsDescriptor`] tree mirroring every declared constraint, suitable for
//! documentation or for mirroring the rules on a client.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::SchemaFault;
use crate::rule::Rule;
use crate::schema::{walk, Cursor, SchemaNode, SchemaPath, SchemaStep};
use crate::types::TypeTag;

/// Serializable description of a schema node.
///
/// Unset constraints are omitted when serialized. `child` appears only on
/// nodes with declared sub-structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecsDescriptor {
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    pub required: bool,
    #[serde(rename = "null")]
    pub nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<usize>,
    #[serde(rename = "oneOf", skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Value>>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "typeOf", skip_serializing_if = "Option::is_none")]
    pub element_type: Option<TypeTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<SpecsChild>,
}

/// Declared sub-structure of a descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SpecsChild {
    /// Object-shaped: one descriptor per key.
    Keyed(IndexMap<String, SpecsDescriptor>),
    /// Tuple-shaped: one descriptor per position.
    Ordered(Vec<SpecsDescriptor>),
    /// A nested schema that is itself a single rule.
    Element(Box<SpecsDescriptor>),
}

impl SpecsDescriptor {
    fn container(type_tag: TypeTag) -> Self {
        Self {
            type_tag,
            required: false,
            nullable: false,
            min: None,
            max: None,
            len: None,
            one_of: None,
            pattern: None,
            element_type: None,
            child: None,
        }
    }

    fn of_rule(rule: &Rule) -> Self {
        Self {
            type_tag: rule.declared_type(),
            required: rule.is_required(),
            nullable: rule.is_nullable(),
            min: rule.min_bound().cloned(),
            max: rule.max_bound().cloned(),
            len: rule.exact_len(),
            one_of: rule.allowed().map(<[Value]>::to_vec),
            pattern: rule.pattern_source().map(str::to_string),
            element_type: rule.element_type(),
            child: None,
        }
    }

    /// Serializes into a plain JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Describes the schema rooted at `root`.
///
/// # Errors
///
/// Returns [`SchemaFault::UnresolvedPath`] if the walk produces a location
/// with no parent descriptor, which means the schema tree is malformed.
pub fn generate(root: &SchemaNode) -> Result<SpecsDescriptor, SchemaFault> {
    let mut described: Option<SpecsDescriptor> = None;
    let mut count = 0usize;

    walk(root, |_| true, |cursor, node| {
        let (descriptor, next) = match node {
            SchemaNode::Keyed(fields) => (
                SpecsDescriptor::container(TypeTag::Object),
                fields.keys().map(|key| cursor.key(key)).collect(),
            ),
            SchemaNode::Ordered(items) => (
                SpecsDescriptor::container(TypeTag::Array),
                (0..items.len()).map(|i| cursor.index(i)).collect(),
            ),
            SchemaNode::Rule(rule) => (SpecsDescriptor::of_rule(rule), nested_cursors(rule, cursor)),
        };
        place(&mut described, root, &cursor.schema, descriptor)?;
        count += 1;
        Ok(next)
    })?;

    tracing::debug!(nodes = count, "generated schema specs");
    described.ok_or_else(|| SchemaFault::UnresolvedPath(String::new()))
}

fn nested_cursors(rule: &Rule, cursor: &Cursor) -> Vec<Cursor> {
    let nested = cursor.nested();
    match rule.nested_schema() {
        Some(SchemaNode::Keyed(fields)) => fields.keys().map(|key| nested.key(key)).collect(),
        Some(SchemaNode::Ordered(items)) => (0..items.len()).map(|i| nested.index(i)).collect(),
        Some(SchemaNode::Rule(_)) => vec![nested],
        None => Vec::new(),
    }
}

/// Hangs `descriptor` at `path` under the descriptors already placed.
fn place(
    described: &mut Option<SpecsDescriptor>,
    schema: &SchemaNode,
    path: &SchemaPath,
    descriptor: SpecsDescriptor,
) -> Result<(), SchemaFault> {
    let unresolved = || SchemaFault::UnresolvedPath(path.to_string());

    let Some((last, parents)) = path.as_slice().split_last() else {
        *described = Some(descriptor);
        return Ok(());
    };
    let parent = described
        .as_mut()
        .and_then(|root| navigate(root, schema, parents))
        .ok_or_else(unresolved)?;

    let child = &mut parent.child;
    match last {
        SchemaStep::Key(key) => match child {
            None => *child = Some(SpecsChild::Keyed(IndexMap::from([(key.clone(), descriptor)]))),
            Some(SpecsChild::Keyed(fields)) => {
                fields.insert(key.clone(), descriptor);
            }
            Some(_) => return Err(unresolved()),
        },
        SchemaStep::Index(_) => match child {
            None => *child = Some(SpecsChild::Ordered(vec![descriptor])),
            Some(SpecsChild::Ordered(items)) => items.push(descriptor),
            Some(_) => return Err(unresolved()),
        },
        SchemaStep::Nested => *child = Some(SpecsChild::Element(Box::new(descriptor))),
    }
    Ok(())
}

/// Finds the descriptor for the node at `steps`.
///
/// A `Nested` step into a keyed or ordered schema stays on the rule's own
/// descriptor, whose `child` holds the nested children; a `Nested` step into
/// a single rule enters the element descriptor.
fn navigate<'d>(
    mut current: &'d mut SpecsDescriptor,
    schema: &SchemaNode,
    steps: &[SchemaStep],
) -> Option<&'d mut SpecsDescriptor> {
    for (i, step) in steps.iter().enumerate() {
        if matches!(step, SchemaStep::Nested) && !schema.resolve_steps(&steps[..=i])?.is_rule() {
            continue;
        }
        current = match (step, current.child.as_mut()?) {
            (SchemaStep::Key(key), SpecsChild::Keyed(fields)) => fields.get_mut(key)?,
            (SchemaStep::Index(idx), SpecsChild::Ordered(items)) => items.get_mut(*idx)?,
            (SchemaStep::Nested, SpecsChild::Element(inner)) => &mut **inner,
            _ => return None,
        };
    }
    Some(current)
}
