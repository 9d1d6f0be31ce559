//! Person entity and its fluent builder.

use super::errors::ValidationError;
use super::validation::{self, ValidationReport};
use crate::models::PersonRecord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An immutable, validated person.
///
/// The fields are private and no public constructor exists: the only way to
/// obtain a `Person` is [`PersonBuilder::build`], which runs the full
/// validation rule set first. Holding a `Person` is therefore a guarantee
/// that its name is non-empty (after trimming) and its age is non-negative.
///
/// # Example
///
/// ```
/// use person_builder::PersonBuilder;
///
/// let person = PersonBuilder::new("Alice", 18).build().unwrap();
/// assert_eq!(person.name(), "Alice");
/// assert_eq!(person.age(), 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    age: i64,
}

impl Person {
    /// Start an empty draft (name `""`, age `0`).
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    /// The person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's age in years. Guaranteed non-negative.
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Project back to a plain record for serialization.
    pub fn to_record(&self) -> PersonRecord {
        PersonRecord {
            name: self.name.clone(),
            age: self.age,
        }
    }
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        person.to_record()
    }
}

// Serde support - serialize as the plain record
impl Serialize for Person {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_record().serialize(serializer)
    }
}

// Serde support - deserialize through the builder so invalid data is rejected
impl<'de> Deserialize<'de> for Person {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = PersonRecord::deserialize(deserializer)?;
        PersonBuilder::from_record(record)
            .build()
            .map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

/// Mutable draft state for a [`Person`] under construction.
///
/// Setters consume and return the builder, so calls chain. The draft is
/// unconstrained until [`build`](PersonBuilder::build) runs validation and,
/// on success, freezes the current values into a `Person`.
///
/// # Example
///
/// ```
/// use person_builder::PersonBuilder;
///
/// let builder = PersonBuilder::new("John", 20).set_age(30);
/// assert!(builder.is_valid());
///
/// let person = builder.set_name("John Smith").build().unwrap();
/// assert_eq!(person.name(), "John Smith");
/// assert_eq!(person.age(), 30);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    name: String,
    age: i64,
}

impl PersonBuilder {
    /// Create a draft initialized with the given values.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Create a draft from an untyped record.
    ///
    /// Equivalent to [`new`](PersonBuilder::new) with the record's fields.
    pub fn from_record(record: PersonRecord) -> Self {
        Self {
            name: record.name,
            age: record.age,
        }
    }

    /// Replace the draft's name.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the draft's age.
    pub fn set_age(mut self, age: i64) -> Self {
        self.age = age;
        self
    }

    /// Run validation, discarding the per-rule details.
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid
    }

    /// Run the full rule set and report every failure.
    pub fn validate(&self) -> ValidationReport {
        validation::check(&self.name, self.age)
    }

    /// Consume the draft and produce an immutable [`Person`].
    ///
    /// The stored values are the draft's values verbatim; trimming only
    /// applies while checking the name rule, never to the result.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every failed rule if the draft
    /// does not satisfy the validation rule set.
    pub fn build(self) -> Result<Person, ValidationError> {
        let report = self.validate();
        if !report.is_valid {
            tracing::debug!(
                failed_rules = report.errors.len(),
                "Person draft failed validation"
            );
            return Err(ValidationError::new(report.errors));
        }

        tracing::trace!(age = self.age, "Person draft validated");
        Ok(Person {
            name: self.name,
            age: self.age,
        })
    }
}

impl From<PersonRecord> for PersonBuilder {
    fn from(record: PersonRecord) -> Self {
        Self::from_record(record)
    }
}
