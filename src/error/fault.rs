use super::kind::ErrorKind;

/// A programming fault raised while walking a schema.
///
/// Faults are never recorded as validation errors; they end the call that
/// raised them and reach the caller as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaFault {
    /// The message table has no formatter for this kind.
    #[error("no message formatter registered for error kind {0}")]
    UnmappedErrorKind(ErrorKind),

    /// A pending schema path no longer resolves to a node.
    #[error("schema path '{0}' does not resolve to a node")]
    UnresolvedPath(String),
}
