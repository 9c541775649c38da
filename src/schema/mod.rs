//! Schemas: the rule tree and its single entry point.
//!
//! A [`Schema`] wraps a root [`SchemaNode`] (a rule, a keyed container or an
//! ordered container, composed recursively) and is what callers validate
//! against, clean data with and introspect.
//!
//! # Example
//!
//! ```rust
//! use rulebook::{Rule, Schema, SchemaNode};
//! use serde_json::json;
//!
//! let schema = Schema::new(SchemaNode::keyed([
//!     ("name", Rule::string().required()),
//!     ("age", Rule::number().min(0)),
//! ]));
//!
//! let data = json!({"name": "Ada", "age": 36});
//! assert!(schema.validate(&data).unwrap().is_valid());
//!
//! let data = json!({"age": -1});
//! let result = schema.validate(&data).unwrap();
//! assert_eq!(result.errors().len(), 2);
//! ```

mod node;
mod walker;

pub use node::{SchemaNode, SchemaPath, SchemaStep};
pub use walker::{walk, Cursor};

use rayon::prelude::*;
use serde_json::Value;

use crate::config::{ValidationContext, ValidatorConfig};
use crate::error::SchemaFault;
use crate::specs::{self, SpecsDescriptor};
use crate::validation::ValidationResult;

/// A validation schema.
///
/// Schemas are read-only once built and are `Send + Sync`, so a single
/// instance can serve any number of concurrent validations.
#[derive(Debug, Clone)]
pub struct Schema {
    root: SchemaNode,
    context: ValidationContext,
}

impl Schema {
    /// Creates a schema with the default configuration.
    pub fn new(root: impl Into<SchemaNode>) -> Self {
        Self {
            root: root.into(),
            context: ValidationContext::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.context = ValidationContext::new(config);
        self
    }

    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Validates `data`.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaFault`] on a programming error (for instance a
    /// message table missing a kind). Invalid data is never an `Err`.
    pub fn validate<'a>(&'a self, data: &'a Value) -> Result<ValidationResult<'a>, SchemaFault> {
        ValidationResult::new(self, Some(data))
    }

    /// Validates possibly absent data; an absent root only fails a required
    /// root rule.
    pub fn validate_optional<'a>(
        &'a self,
        data: Option<&'a Value>,
    ) -> Result<ValidationResult<'a>, SchemaFault> {
        ValidationResult::new(self, data)
    }

    /// Validates every item of `batch` in parallel, keeping input order.
    pub fn validate_all<'a>(
        &'a self,
        batch: &'a [Value],
    ) -> Result<Vec<ValidationResult<'a>>, SchemaFault> {
        batch.par_iter().map(|data| self.validate(data)).collect()
    }

    /// Describes the schema's declared constraints.
    pub fn specs(&self) -> Result<SpecsDescriptor, SchemaFault> {
        specs::generate(&self.root)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Schema>();
    assert_sync::<Schema>();
};
