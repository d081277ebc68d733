//! Input validation for a talk pool.
//!
//! Checks the parsed talks before scheduling. Detects:
//! - Talks longer than every session (they can never be scheduled)
//! - Titles listed more than once
//!
//! Validation only reports. The scheduler applies its own rejection policy
//! to talks that cannot be placed.

use std::collections::HashSet;

use crate::config::SessionLimits;
use crate::models::Talk;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A talk is longer than the longest session.
    ExceedsCapacity,
    /// Two talks share the same title.
    DuplicateTitle,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a talk pool against session limits.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue in
/// input order.
pub fn validate_talks(talks: &[Talk], limits: &SessionLimits) -> ValidationResult {
    let mut errors = Vec::new();
    let longest = limits.longest_session();
    let mut titles = HashSet::new();

    for talk in talks {
        if !talk.fits_longest_session(longest) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExceedsCapacity,
                format!(
                    "Talk '{}' lasts {}min, longer than any session ({}min)",
                    talk.title(), talk.duration(), longest
                ),
            ));
        }

        if !titles.insert(talk.title()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTitle,
                format!("Duplicate talk title: {}", talk.title()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
