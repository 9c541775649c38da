//! Named schema storage.
//!
//! [`SchemaRegistry`] keeps schemas under string names so that services can
//! validate incoming payloads by name and publish the declared constraints of
//! everything they accept in one document.

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

use crate::error::{SchemaFault, ValidationError};
use crate::schema::Schema;
use crate::specs::SpecsDescriptor;

type SchemaMap = Arc<RwLock<IndexMap<String, Arc<Schema>>>>;

/// A thread-safe registry of named schemas.
///
/// Clones share the same storage. Lookups take a read lock and hand out an
/// `Arc<Schema>`, so validation never holds the lock.
///
/// # Example
///
/// ```rust
/// use rulebook::{Rule, Schema, SchemaNode, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry
///     .register("User", Schema::new(SchemaNode::keyed([("name", Rule::string().required())])))
///     .unwrap();
///
/// let errors = registry.errors_for("User", &json!({})).unwrap();
/// assert_eq!(errors[0].message, "required");
///
/// // Duplicate registration fails
/// assert!(registry.register("User", Schema::new(Rule::object())).is_err());
/// ```
#[derive(Clone, Default)]
pub struct SchemaRegistry {
    schemas: SchemaMap,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `schema` under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already taken.
    pub fn register(&self, name: impl Into<String>, schema: Schema) -> Result<(), RegistryError> {
        let name = name.into();
        let mut schemas = self.schemas.write();

        if schemas.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(name = %name, "registered schema");
        schemas.insert(name, Arc::new(schema));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<Schema>> {
        self.schemas.read().get(name).cloned()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.schemas.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    /// Validates `data` against the schema registered as `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaNotFound` for an unknown name, or the
    /// schema fault raised while validating.
    pub fn errors_for(&self, name: &str, data: &Value) -> Result<Vec<ValidationError>, RegistryError> {
        let schema = self
            .get(name)
            .ok_or_else(|| RegistryError::SchemaNotFound(name.to_string()))?;

        Ok(schema.validate(data)?.into_errors())
    }

    /// Every registered schema's descriptor, keyed by name.
    pub fn specs(&self) -> Result<IndexMap<String, SpecsDescriptor>, RegistryError> {
        let schemas = self.schemas.read();
        schemas
            .iter()
            .map(|(name, schema)| Ok((name.clone(), schema.specs()?)))
            .collect()
    }

    /// [`specs`](Self::specs) as a single JSON document.
    ///
    /// ```rust
    /// use rulebook::{Rule, Schema, SchemaRegistry};
    /// use serde_json::json;
    ///
    /// let registry = SchemaRegistry::new();
    /// registry.register("Age", Schema::new(Rule::number().min(0))).unwrap();
    ///
    /// assert_eq!(
    ///     registry.export_specs().unwrap(),
    ///     json!({"Age": {"type": "Number", "required": false, "null": false, "min": 0}})
    /// );
    /// ```
    pub fn export_specs(&self) -> Result<Value, RegistryError> {
        Ok(serde_json::to_value(self.specs()?)?)
    }
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a schema with a name that already exists.
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to use a schema name that doesn't exist.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),

    #[error(transparent)]
    Fault(#[from] SchemaFault),

    #[error("failed to serialize specs: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rule, SchemaNode};
    use serde_json::json;

    #[test]
    fn test_names_keep_registration_order() {
        let registry = SchemaRegistry::new();
        registry.register("b", Schema::new(Rule::string())).unwrap();
        registry.register("a", Schema::new(Rule::number())).unwrap();

        assert_eq!(registry.names(), vec!["b", "a"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_clones_share_storage() {
        let registry = SchemaRegistry::new();
        let other = registry.clone();
        other.register("x", Schema::new(Rule::boolean())).unwrap();

        assert!(registry.get("x").is_some());
    }

    #[test]
    fn test_unknown_name() {
        let registry = SchemaRegistry::new();
        let err = registry.errors_for("nope", &json!({})).unwrap_err();
        assert!(matches!(err, RegistryError::SchemaNotFound(name) if name == "nope"));
    }

    #[test]
    fn test_errors_for_reports_paths() {
        let registry = SchemaRegistry::new();
        registry
            .register("Point", Schema::new(SchemaNode::keyed([("x", Rule::number()), ("y", Rule::number())])))
            .unwrap();

        let errors = registry.errors_for("Point", &json!({"x": 1, "y": "2"})).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.to_string(), "y");
    }
}
