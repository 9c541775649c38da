//! The message-formatting table.
//!
//! Rendering an error kind into text is delegated to a [`MessageTable`]: one
//! formatter per kind taking `(expected, actual)`. The default table carries
//! the stock English templates; callers can build their own.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use super::fault::SchemaFault;
use super::kind::ErrorKind;

/// A formatter turning `(expected, actual)` into a message.
pub type MessageFn = Arc<dyn Fn(&Value, &Value) -> String + Send + Sync>;

/// Maps each [`ErrorKind`] to its formatter.
///
/// # Example
///
/// ```rust
/// use rulebook::{ErrorKind, MessageTable};
/// use serde_json::json;
///
/// let table = MessageTable::empty()
///     .with(ErrorKind::Required, |_, _| "missing".to_string());
///
/// let text = table.format(ErrorKind::Required, &json!(null), &json!(null)).unwrap();
/// assert_eq!(text, "missing");
/// assert!(table.format(ErrorKind::LengthEq, &json!(1), &json!(2)).is_err());
/// ```
#[derive(Clone)]
pub struct MessageTable {
    formatters: IndexMap<ErrorKind, MessageFn>,
}

impl MessageTable {
    /// Creates a table with no formatters.
    pub fn empty() -> Self {
        Self {
            formatters: IndexMap::new(),
        }
    }

    /// Registers (or replaces) the formatter for `kind`.
    pub fn with<F>(mut self, kind: ErrorKind, formatter: F) -> Self
    where
        F: Fn(&Value, &Value) -> String + Send + Sync + 'static,
    {
        self.formatters.insert(kind, Arc::new(formatter));
        self
    }

    /// Returns true if `kind` has a formatter.
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.formatters.contains_key(&kind)
    }

    /// Renders the message for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaFault::UnmappedErrorKind`] if the table has no
    /// formatter for `kind`.
    pub fn format(
        &self,
        kind: ErrorKind,
        expected: &Value,
        actual: &Value,
    ) -> Result<String, SchemaFault> {
        let formatter = self
            .formatters
            .get(&kind)
            .ok_or(SchemaFault::UnmappedErrorKind(kind))?;
        Ok(formatter(expected, actual))
    }
}

impl Default for MessageTable {
    fn default() -> Self {
        Self::empty()
            .with(ErrorKind::Required, |_, _| "required".to_string())
            .with(ErrorKind::TypeMismatch, |e, a| {
                format!("type of the value must be {}, got {}.", text(e), text(a))
            })
            .with(ErrorKind::TypeMismatchOneOf, |e, a| {
                format!("type of the value must be one of {}, got {}.", text(e), text(a))
            })
            .with(ErrorKind::TypeMismatchOrNull, |e, a| {
                format!("type of the value must be {} or Null, got {}.", text(e), text(a))
            })
            .with(ErrorKind::LengthEq, |e, a| {
                format!("the length must be == {}, got {}.", text(e), text(a))
            })
            .with(ErrorKind::LengthGt, |e, a| {
                format!("the length must be >= {}, got {}.", text(e), text(a))
            })
            .with(ErrorKind::LengthLt, |e, a| {
                format!("the length must be <= {}, got {}.", text(e), text(a))
            })
            .with(ErrorKind::ValueOneOf, |e, a| {
                format!("the value must be one of {}, got {}.", text(e), text(a))
            })
            .with(ErrorKind::ValueGt, |e, a| {
                format!("the value must be >= {}, got {}.", text(e), text(a))
            })
            .with(ErrorKind::ValueLt, |e, a| {
                format!("the value must be <= {}, got {}.", text(e), text(a))
            })
            .with(ErrorKind::PatternMismatch, |e, a| {
                format!("the value must match {}, got {}.", text(e), text(a))
            })
    }
}

impl fmt::Debug for MessageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageTable")
            .field("kinds", &self.formatters.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Plain-text rendering of a payload: strings unquoted, arrays comma-joined.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
