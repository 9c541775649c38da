//! The schema tree and its addressing.

use std::fmt::{self, Display};

use indexmap::IndexMap;

use crate::rule::Rule;
use crate::types::TypeTag;

/// A node of the schema tree.
///
/// Containers are structural placeholders: a keyed container stands for an
/// object and an ordered container for an array, neither carrying
/// constraints. `Rule::object().schema(..)` and `Rule::array().schema(..)`
/// express the same shapes with room for `required`, bounds and `nullable`.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    Rule(Rule),
    Keyed(IndexMap<String, SchemaNode>),
    Ordered(Vec<SchemaNode>),
}

impl SchemaNode {
    /// Builds a keyed container, keeping declaration order.
    ///
    /// ```rust
    /// use rulebook::{Rule, SchemaNode};
    ///
    /// let node = SchemaNode::keyed([
    ///     ("name", SchemaNode::from(Rule::string().required())),
    ///     ("address", SchemaNode::keyed([("city", Rule::string())])),
    /// ]);
    /// assert!(!node.is_rule());
    /// ```
    pub fn keyed<I, K, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: Into<SchemaNode>,
    {
        SchemaNode::Keyed(
            entries
                .into_iter()
                .map(|(key, node)| (key.into(), node.into()))
                .collect(),
        )
    }

    /// Builds an ordered container; element `i` is described by item `i`.
    pub fn ordered<I, N>(items: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<SchemaNode>,
    {
        SchemaNode::Ordered(items.into_iter().map(Into::into).collect())
    }

    pub fn is_rule(&self) -> bool {
        matches!(self, SchemaNode::Rule(_))
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            SchemaNode::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    /// The shape this node stands for: a rule's declared type, `Object` for
    /// keyed containers and `Array` for ordered ones.
    pub fn shape(&self) -> TypeTag {
        match self {
            SchemaNode::Rule(rule) => rule.declared_type(),
            SchemaNode::Keyed(_) => TypeTag::Object,
            SchemaNode::Ordered(_) => TypeTag::Array,
        }
    }

    /// Follows `path` from this node.
    pub fn resolve(&self, path: &SchemaPath) -> Option<&SchemaNode> {
        self.resolve_steps(path.as_slice())
    }

    pub(crate) fn resolve_steps(&self, steps: &[SchemaStep]) -> Option<&SchemaNode> {
        steps.iter().try_fold(self, |node, step| match (step, node) {
            (SchemaStep::Key(key), SchemaNode::Keyed(fields)) => fields.get(key),
            (SchemaStep::Index(idx), SchemaNode::Ordered(items)) => items.get(*idx),
            (SchemaStep::Nested, SchemaNode::Rule(rule)) => rule.nested_schema(),
            _ => None,
        })
    }
}

impl From<Rule> for SchemaNode {
    fn from(rule: Rule) -> Self {
        SchemaNode::Rule(rule)
    }
}

impl From<IndexMap<String, SchemaNode>> for SchemaNode {
    fn from(fields: IndexMap<String, SchemaNode>) -> Self {
        SchemaNode::Keyed(fields)
    }
}

impl From<Vec<SchemaNode>> for SchemaNode {
    fn from(items: Vec<SchemaNode>) -> Self {
        SchemaNode::Ordered(items)
    }
}

/// One step through the schema tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaStep {
    Key(String),
    Index(usize),
    /// Into a rule's nested schema. Has no counterpart in the data tree.
    Nested,
}

/// A location in the schema tree.
///
/// Differs from a data [`Path`](crate::Path) by the [`SchemaStep::Nested`]
/// steps taken into rules' nested schemas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SchemaPath {
    steps: Vec<SchemaStep>,
}

impl SchemaPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn push(&self, step: SchemaStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> impl Iterator<Item = &SchemaStep> {
        self.steps.iter()
    }

    pub(crate) fn as_slice(&self) -> &[SchemaStep] {
        &self.steps
    }
}

impl Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match step {
                SchemaStep::Key(key) => write!(f, "{}", key)?,
                SchemaStep::Index(idx) => write!(f, "{}", idx)?,
                SchemaStep::Nested => write!(f, "$schema")?,
            }
        }
        Ok(())
    }
}
