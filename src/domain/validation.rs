//! Validation rules for person drafts.

use serde::Serialize;

/// Outcome of running the validation rule set over a draft.
///
/// Rules are applied in a fixed order and every failure is collected, so
/// `errors` lists all problems with the draft, not just the first one.
///
/// # Example
///
/// ```
/// use person_builder::PersonBuilder;
///
/// let report = PersonBuilder::new("", -1).validate();
/// assert!(!report.is_valid);
/// assert_eq!(report.errors.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// True when every rule passed.
    pub is_valid: bool,

    /// Human-readable failure messages, in rule order.
    pub errors: Vec<String>,
}

/// Apply every rule in order, collecting all failures without short-circuiting.
///
/// Rule order: name first, then age.
pub(crate) fn check(name: &str, age: i64) -> ValidationReport {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push("Name cannot be empty.".to_string());
    }

    if age < 0 {
        errors.push("Age cannot be negative.".to_string());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
