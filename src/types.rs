//! Declared and runtime type tags.

use std::fmt::{self, Display};

use serde::Serialize;
use serde_json::Value;

/// The closed set of value types a [`Rule`](crate::Rule) can declare.
///
/// A value's runtime tag is computed once with [`TypeTag::of`] and compared
/// against the declared tag; per-type checks dispatch on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

impl TypeTag {
    /// Classifies a data value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
        }
    }

    /// The name used in error payloads and specs descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::String => "String",
            TypeTag::Number => "Number",
            TypeTag::Boolean => "Boolean",
            TypeTag::Object => "Object",
            TypeTag::Array => "Array",
            TypeTag::Null => "Null",
        }
    }

    /// Returns true for the two tags that may carry a nested schema.
    pub fn is_composite(&self) -> bool {
        matches!(self, TypeTag::Object | TypeTag::Array)
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TypeTag> for Value {
    fn from(tag: TypeTag) -> Self {
        Value::String(tag.name().to_string())
    }
}
