//! Validator configuration and the context handed to every check.

use std::sync::Arc;

use crate::error::{ErrorKind, MessageTable};

/// Behaviour knobs attached to a [`Schema`](crate::Schema).
///
/// # Example
///
/// ```rust
/// use rulebook::{ErrorKind, ValidatorConfig};
///
/// let config = ValidatorConfig::default()
///     .pattern_error_kind(ErrorKind::PatternMismatch);
/// assert_eq!(config.pattern_kind(), ErrorKind::PatternMismatch);
/// ```
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pattern_kind: ErrorKind,
    messages: MessageTable,
}

impl ValidatorConfig {
    /// Sets the kind reported when a string fails its `match` pattern.
    ///
    /// Defaults to [`ErrorKind::ValueOneOf`].
    pub fn pattern_error_kind(mut self, kind: ErrorKind) -> Self {
        self.pattern_kind = kind;
        self
    }

    /// Replaces the message table.
    pub fn messages(mut self, messages: MessageTable) -> Self {
        self.messages = messages;
        self
    }

    pub fn pattern_kind(&self) -> ErrorKind {
        self.pattern_kind
    }

    pub fn message_table(&self) -> &MessageTable {
        &self.messages
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            pattern_kind: ErrorKind::ValueOneOf,
            messages: MessageTable::default(),
        }
    }
}

/// Read-only context passed through the validation call chain.
///
/// Cloning is cheap; the configuration is shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    config: Arc<ValidatorConfig>,
}

impl ValidationContext {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
}
