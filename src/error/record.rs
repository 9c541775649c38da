use std::fmt::{self, Display};

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::fault::SchemaFault;
use super::kind::ErrorKind;
use super::messages::MessageTable;
use super::violation::Violation;
use crate::path::Path;

/// A validation error as reported by a [`ValidationResult`](crate::ValidationResult).
///
/// The message is rendered once, when the result is built, and never changes
/// afterwards. Serializes as `{"errno", "path", "message"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    #[serde(rename = "errno", serialize_with = "errno")]
    pub kind: ErrorKind,
    #[serde(serialize_with = "dotted")]
    pub path: Path,
    #[serde(skip)]
    pub expected: Value,
    #[serde(skip)]
    pub actual: Value,
    pub message: String,
}

impl ValidationError {
    pub(crate) fn render(violation: Violation, messages: &MessageTable) -> Result<Self, SchemaFault> {
        let message = messages.format(violation.kind, &violation.expected, &violation.actual)?;
        Ok(Self {
            kind: violation.kind,
            path: violation.path,
            expected: violation.expected,
            actual: violation.actual,
            message,
        })
    }

    /// The stable numeric identifier of this error's kind.
    pub fn errno(&self) -> u8 {
        self.kind.errno()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

fn errno<S: Serializer>(kind: &ErrorKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(kind.errno())
}

fn dotted<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_public_shape() {
        let violation = Violation::new(ErrorKind::TypeMismatch, Path::from_field("a").push_index(0))
            .with_expected("String")
            .with_actual("Number");
        let error = ValidationError::render(violation, &MessageTable::default()).unwrap();

        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "errno": 2,
                "path": "a.0",
                "message": "type of the value must be String, got Number."
            })
        );
        assert_eq!(error.to_string(), "a.0: type of the value must be String, got Number.");
    }
}
