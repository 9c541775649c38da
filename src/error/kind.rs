//! Stable error kinds.

use std::fmt::{self, Display};

use serde::Serialize;

/// The kind of a validation error.
///
/// The numeric identifier returned by [`ErrorKind::errno`] is part of the
/// public contract; consumers match on it, so the values never change.
///
/// | errno | kind |
/// |---|---|
/// | 1 | `Required` |
/// | 2 | `TypeMismatch` |
/// | 3 | `TypeMismatchOneOf` |
/// | 4 | `TypeMismatchOrNull` |
/// | 5 | `LengthEq` |
/// | 6 | `LengthGt` |
/// | 7 | `LengthLt` |
/// | 8 | `ValueOneOf` |
/// | 9 | `ValueGt` |
/// | 10 | `ValueLt` |
/// | 11 | `PatternMismatch` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ErrorKind {
    /// A required value is absent.
    Required,
    /// The value's type differs from the declared type.
    TypeMismatch,
    /// An array element's type differs from the declared element type.
    TypeMismatchOneOf,
    /// The value's type differs from the declared type on a nullable rule.
    TypeMismatchOrNull,
    /// Length differs from the exact length.
    LengthEq,
    /// Length is below the minimum (the length must be `>=` expected).
    LengthGt,
    /// Length is above the maximum (the length must be `<=` expected).
    LengthLt,
    /// The value is not in the allowed set.
    ValueOneOf,
    /// The number is below the minimum.
    ValueGt,
    /// The number is above the maximum.
    ValueLt,
    /// The string does not match the pattern. Only emitted when configured
    /// through [`ValidatorConfig::pattern_error_kind`](crate::ValidatorConfig::pattern_error_kind).
    PatternMismatch,
}

impl ErrorKind {
    /// Every kind, in errno order.
    pub const ALL: [ErrorKind; 11] = [
        ErrorKind::Required,
        ErrorKind::TypeMismatch,
        ErrorKind::TypeMismatchOneOf,
        ErrorKind::TypeMismatchOrNull,
        ErrorKind::LengthEq,
        ErrorKind::LengthGt,
        ErrorKind::LengthLt,
        ErrorKind::ValueOneOf,
        ErrorKind::ValueGt,
        ErrorKind::ValueLt,
        ErrorKind::PatternMismatch,
    ];

    /// The stable numeric identifier of this kind.
    pub fn errno(&self) -> u8 {
        match self {
            ErrorKind::Required => 1,
            ErrorKind::TypeMismatch => 2,
            ErrorKind::TypeMismatchOneOf => 3,
            ErrorKind::TypeMismatchOrNull => 4,
            ErrorKind::LengthEq => 5,
            ErrorKind::LengthGt => 6,
            ErrorKind::LengthLt => 7,
            ErrorKind::ValueOneOf => 8,
            ErrorKind::ValueGt => 9,
            ErrorKind::ValueLt => 10,
            ErrorKind::PatternMismatch => 11,
        }
    }

    /// Looks a kind up by its numeric identifier.
    pub fn from_errno(errno: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.errno() == errno)
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.errno())
    }
}
