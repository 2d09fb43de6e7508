//! Input validation for a planning run.
//!
//! Structural integrity checks over the loaded groups and registry, run
//! between loading and allocation. Detects:
//! - Empty rosters
//! - Inverted grade ranges
//! - Preference or priority entries referencing unknown workshop IDs
//!
//! All issues are collected, not first-error-only. Unknown references are
//! flagged but non-fatal: the allocator logs and skips them (spec'd
//! lookup-error behavior), so callers may choose to warn and proceed.

use crate::models::{Group, WorkshopRegistry};

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
    /// A group has no students, so it consumes no seats.
    EmptyRoster,
    /// A workshop's minimum grade exceeds its maximum.
    InvertedGradeRange,
    /// A preference or priority entry names a workshop that doesn't exist.
    UnknownWorkshopReference,
}

impl ValidationErrorKind {
    /// Whether the run should abort on this error.
    ///
    /// Unknown references are survivable: the allocator skips them with a
    /// warning, matching the non-fatal lookup-error class.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ValidationErrorKind::UnknownWorkshopReference)
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates loaded groups against the workshop registry.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(groups: &[Group], registry: &WorkshopRegistry) -> ValidationResult {
    let mut errors = Vec::new();

    for w in registry.workshops() {
        if w.min_grade > w.max_grade {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedGradeRange,
                format!(
                    "Workshop '{}' has inverted grade range {}-{}",
                    w.id, w.min_grade, w.max_grade
                ),
            ));
        }
    }

    for group in groups {
        if group.students.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyRoster,
                format!("Group '{}' has no students", group.display_id()),
            ));
        }

        let references = group
            .art_preferences
            .iter()
            .chain(group.science_preferences.iter())
            .chain(group.priority_ids.iter());
        for id in references {
            if registry.lookup(id).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownWorkshopReference,
                    format!(
                        "Group '{}' references unknown workshop '{}'",
                        group.display_id(),
                        id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
