//! Domain validation errors.
//!
//! This module defines the error type raised when building an invalid draft,
//! using `thiserror` for precise error handling.

use thiserror::Error;

/// Raised by [`PersonBuilder::build`](crate::PersonBuilder::build) when one or
/// more validation rules fail.
///
/// Carries every failed rule's message, in rule order. The `Display`
/// rendering joins them into a single line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", .messages.join(" "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub(crate) fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// The individual rule-failure messages, in rule order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}
