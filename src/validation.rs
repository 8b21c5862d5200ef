//! Roster validation.
//!
//! Checks structural integrity of a roster before any allocation runs.
//! Detects:
//! - Duplicate pilgrim IDs
//! - Missing gender (the engine must not guess; segregation depends on it)
//!
//! All problems are accumulated and reported together rather than
//! failing on the first one.

use std::collections::HashSet;

use crate::models::Pilgrim;

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
    /// Two pilgrims share the same ID.
    DuplicateId,
    /// A pilgrim record carries no gender.
    MissingGender,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster for allocation.
///
/// Checks:
/// 1. No duplicate pilgrim IDs (assignments are keyed by ID)
/// 2. Every pilgrim has a gender
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &[Pilgrim]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for pilgrim in roster {
        if !seen.insert(pilgrim.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate pilgrim ID: {}", pilgrim.id),
            ));
        }

        if pilgrim.gender.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingGender,
                format!("Pilgrim '{}' has no gender", pilgrim.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
