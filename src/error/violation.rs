//! Leaf-level validation violations.
//!
//! This module provides [`Violation`] for a single failed check and
//! [`Violations`] for the non-empty list a failing check returns.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::prelude::*;

use super::kind::ErrorKind;
use crate::path::Path;

/// A single failed check, before its message is rendered.
///
/// - **kind**: which constraint failed
/// - **path**: where in the data tree it failed
/// - **expected**: the constraint's operand (a type name, a bound, a set)
/// - **actual**: what was found (`null` when nothing was)
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub kind: ErrorKind,
    pub path: Path,
    pub expected: Value,
    pub actual: Value,
}

impl Violation {
    /// Creates a violation with no expected or actual payload.
    pub fn new(kind: ErrorKind, path: Path) -> Self {
        Self {
            kind,
            path,
            expected: Value::Null,
            actual: Value::Null,
        }
    }

    /// Sets the expected payload and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<Value>) -> Self {
        self.expected = expected.into();
        self
    }

    /// Sets the actual payload and returns self for chaining.
    pub fn with_actual(mut self, actual: impl Into<Value>) -> Self {
        self.actual = actual.into();
        self
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path_str = if self.path.is_root() {
            "(root)".to_string()
        } else {
            self.path.to_string()
        };
        write!(f, "{}: {}", path_str, self.kind)?;
        if !self.expected.is_null() {
            write!(f, " (expected: {})", self.expected)?;
        }
        if !self.actual.is_null() {
            write!(f, " (got: {})", self.actual)?;
        }
        Ok(())
    }
}

/// A non-empty collection of violations.
///
/// A failing check always reports at least one violation, so the type carries
/// that guarantee instead of the caller having to test for an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct Violations(NonEmptyVec<Violation>);

impl Violations {
    /// Creates a collection containing a single violation.
    pub fn single(violation: Violation) -> Self {
        Self(NonEmptyVec::singleton(violation))
    }

    /// Creates a collection from a vec, or `None` if the vec is empty.
    pub fn try_from_vec(violations: Vec<Violation>) -> Option<Self> {
        NonEmptyVec::from_vec(violations).map(Self)
    }

    /// Returns the number of violations in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Returns the first violation.
    pub fn first(&self) -> &Violation {
        self.0.head()
    }

    /// Returns all violations of the given kind.
    pub fn of_kind(&self, kind: ErrorKind) -> Vec<&Violation> {
        self.0.iter().filter(|v| v.kind == kind).collect()
    }

    /// Converts this collection into a `Vec<Violation>`.
    pub fn into_vec(self) -> Vec<Violation> {
        self.0.into_vec()
    }

    /// Rewrites every path through `f`, keeping order and count.
    pub(crate) fn map_paths(self, f: impl Fn(&Path) -> Path) -> Self {
        let mapped = self
            .into_vec()
            .into_iter()
            .map(|mut v| {
                v.path = f(&v.path);
                v
            })
            .collect();
        Self(NonEmptyVec::from_vec(mapped).expect("mapping preserves length"))
    }
}

impl Semigroup for Violations {
    fn combine(self, other: Self) -> Self {
        Violations(self.0.combine(other.0))
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} violation(s):", self.len())?;
        for (i, violation) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Violations>();
    assert_sync::<Violations>();
};
