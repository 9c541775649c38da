//! Error types for validation failures and schema faults.
//!
//! Two disjoint classes live here. Validation errors ([`Violation`],
//! [`ValidationError`]) are data-dependent and always collected; schema
//! faults ([`SchemaFault`]) are programming errors and always propagated.

mod aggregate;
mod fault;
mod kind;
mod messages;
mod record;
mod violation;

pub use aggregate::ErrorAggregator;
pub use fault::SchemaFault;
pub use kind::ErrorKind;
pub use messages::{MessageFn, MessageTable};
pub use record::ValidationError;
pub use violation::{Violation, Violations};
