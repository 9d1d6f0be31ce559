//! Person Builder - an immutable, validated person entity behind a fluent builder.
//!
//! This library provides a two-field `Person` entity (name, age) that can only
//! be constructed through [`PersonBuilder::build`], which runs the full
//! validation rule set first. `Person` has no public constructor, so holding
//! one is a guarantee that its values passed validation.
//!
//! # Architecture
//!
//! - **domain**: the validated `Person` entity, its builder, validation rules,
//!   and the error type raised when building an invalid draft
//! - **models**: the plain `PersonRecord` used at the serialization boundary
//!
//! # Example
//!
//! ```
//! use person_builder::PersonBuilder;
//!
//! let person = PersonBuilder::new("John", 20)
//!     .set_age(30)
//!     .set_name("John Smith")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(person.name(), "John Smith");
//! assert_eq!(person.age(), 30);
//! ```

// Re-export commonly used types
pub mod domain;
pub mod models;

pub use domain::{Person, PersonBuilder, ValidationError, ValidationReport};
pub use models::PersonRecord;
