//! Validation results.
//!
//! A [`ValidationResult`] is built once per [`Schema::validate`] call: it
//! walks the schema against the data, collects every violation and renders
//! their messages, then stays immutable.

use serde_json::Value;

use crate::cleanup;
use crate::config::ValidationContext;
use crate::error::{ErrorAggregator, SchemaFault, ValidationError, Violation};
use crate::schema::{walk, Schema, SchemaNode};

/// The outcome of validating one value against a schema.
#[derive(Debug, Clone)]
pub struct ValidationResult<'a> {
    schema: &'a Schema,
    data: Option<&'a Value>,
    errors: Vec<ValidationError>,
}

impl<'a> ValidationResult<'a> {
    pub(crate) fn new(schema: &'a Schema, data: Option<&'a Value>) -> Result<Self, SchemaFault> {
        let context = schema.context();
        let messages = context.config().message_table();

        let errors = collect(schema.root(), data, context)?
            .into_iter()
            .map(|violation| ValidationError::render(violation, messages))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(errors = errors.len(), "validated value against schema");

        Ok(Self {
            schema,
            data,
            errors,
        })
    }

    /// True when no violation was found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Every error, in walk order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The errors as `[{"errno", "path", "message"}, ..]`.
    pub fn error_records(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.errors)
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn data(&self) -> Option<&'a Value> {
        self.data
    }

    /// Copies the data restricted to the paths the schema declares.
    ///
    /// Works the same whether or not the data was valid.
    pub fn cleanup(&self) -> Result<Value, SchemaFault> {
        cleanup::project(self.schema.root(), self.data)
    }
}

/// Walks `root` against `data` and returns every violation, paths relative
/// to `data`.
pub(crate) fn collect(
    root: &SchemaNode,
    data: Option<&Value>,
    context: &ValidationContext,
) -> Result<Vec<Violation>, SchemaFault> {
    let mut aggregator = ErrorAggregator::new();

    walk(root, SchemaNode::is_rule, |cursor, node| {
        if let SchemaNode::Rule(rule) = node {
            let value = data.and_then(|d| cursor.data.lookup(d));
            aggregator.record(rule.check(value, &cursor.data, context)?);
        }
        Ok(Vec::new())
    })?;

    Ok(aggregator.finish())
}
