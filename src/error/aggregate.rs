use stillwater::Validation;

use super::violation::{Violation, Violations};
use crate::path::Path;

/// Collects leaf violations in walk order.
///
/// Violations raised inside a nested schema carry paths relative to the
/// nested value; [`ErrorAggregator::lift`] rewrites them under the parent so
/// that recursion never shows in the output.
#[derive(Debug, Default)]
pub struct ErrorAggregator {
    violations: Vec<Violation>,
}

impl ErrorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefixes every nested path with `parent`.
    ///
    /// A root `parent` leaves the paths untouched.
    pub fn lift(parent: &Path, nested: Violations) -> Violations {
        if parent.is_root() {
            return nested;
        }
        nested.map_paths(|p| parent.join(p))
    }

    /// Appends the violations of a failed check; a success records nothing.
    pub fn record(&mut self, outcome: Validation<(), Violations>) {
        if let Validation::Failure(violations) = outcome {
            self.violations.extend(violations);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn finish(self) -> Vec<Violation> {
        self.violations
    }
}
