//! Plain person record used at the serialization boundary.

use serde::{Deserialize, Serialize};

/// An unconstrained `{name, age}` record.
///
/// Any combination of values is representable here, including ones that would
/// fail validation; constraints only apply once the record is fed through
/// [`PersonBuilder`](crate::PersonBuilder).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct PersonRecord {
    /// Full name
    pub name: String,

    /// Age in years
    pub age: i64,
}

impl PersonRecord {
    /// Create a record with the given values.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}
