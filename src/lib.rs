//! # Rulebook
//!
//! Declarative validation and cleanup of JSON-like data.
//!
//! ## Overview
//!
//! A schema is a tree of [`Rule`]s arranged in keyed containers (objects) and
//! ordered containers (tuples). Validating data against it collects every
//! violation, each tagged with a stable numeric kind and the dotted path of
//! the offending value, instead of stopping at the first failure. The same
//! schema projects data onto its declared paths ([`ValidationResult::cleanup`])
//! and describes itself as a serializable tree ([`Schema::specs`]).
//!
//! ## Core Types
//!
//! - [`Rule`]: one declared type plus optional constraints
//! - [`SchemaNode`]: a rule, keyed container or ordered container
//! - [`Schema`]: the entry point for validation, cleanup and introspection
//! - [`ValidationError`]: a reported error (`errno`, `path`, `message`)
//! - [`SchemaFault`]: a programming error, always returned as `Err`
//!
//! ## Example
//!
//! ```rust
//! use rulebook::{rule, Rule, Schema, SchemaNode, TypeTag};
//! use serde_json::json;
//!
//! let schema = Schema::new(SchemaNode::keyed([
//!     ("a", rule(TypeTag::String)),
//!     ("b", Rule::number()),
//! ]));
//!
//! let data = json!({"a": "asd", "b": "", "c": true});
//! let result = schema.validate(&data).unwrap();
//!
//! assert_eq!(result.errors().len(), 1);
//! assert_eq!(result.errors()[0].errno(), 2);
//! assert_eq!(result.errors()[0].path.to_string(), "b");
//!
//! assert_eq!(result.cleanup().unwrap(), json!({"a": "asd", "b": ""}));
//! ```

pub mod cleanup;
pub mod config;
pub mod error;
pub mod path;
pub mod registry;
pub mod rule;
pub mod schema;
pub mod specs;
pub mod types;
pub mod validation;

pub use config::{ValidationContext, ValidatorConfig};
pub use error::{
    ErrorAggregator, ErrorKind, MessageFn, MessageTable, SchemaFault, ValidationError, Violation,
    Violations,
};
pub use path::{Path, PathSegment};
pub use registry::{RegistryError, SchemaRegistry};
pub use rule::{CheckOutcome, Rule};
pub use schema::{walk, Cursor, Schema, SchemaNode, SchemaPath, SchemaStep};
pub use specs::{SpecsChild, SpecsDescriptor};
pub use types::TypeTag;
pub use validation::ValidationResult;

/// Creates an unconstrained rule for `tag`.
///
/// Equivalent to [`Rule::new`]; the type shortcuts ([`Rule::string`],
/// [`Rule::number`], ...) read better when the tag is known up front.
pub fn rule(tag: TypeTag) -> Rule {
    Rule::new(tag)
}
