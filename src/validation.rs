//! Input validation for timetabling catalogs.
//!
//! Checks structural integrity of the problem data before a run.
//! Detects:
//! - Duplicate room names, facilitator names, activity codes, slot indices
//! - Preference lists referencing unknown facilitators
//! - Zero room capacity or expected enrollment
//! - Empty pools (nothing to draw genes from)
//!
//! All errors are collected rather than failing on the first.

use std::collections::HashSet;

use crate::models::Catalog;

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
    /// Two entities of the same pool share an identifier.
    DuplicateId,
    /// A preference list names a facilitator not in the pool.
    UnknownFacilitator,
    /// A room has zero capacity or an activity expects zero enrollment.
    ZeroSize,
    /// A pool the GA must draw from is empty.
    EmptyPool,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog before it is handed to the GA.
///
/// # Example
///
/// ```
/// use timetable_ga::models::Catalog;
/// use timetable_ga::validation::validate_catalog;
///
/// assert!(validate_catalog(&Catalog::sample()).is_ok());
/// assert!(validate_catalog(&Catalog::new()).is_err());
/// ```
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    if catalog.rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPool,
            "catalog has no rooms",
        ));
    }
    if catalog.times.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPool,
            "catalog has no time slots",
        ));
    }
    if catalog.facilitators.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPool,
            "catalog has no facilitators",
        ));
    }
    if catalog.activities.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPool,
            "catalog has no activities",
        ));
    }

    check_duplicates(
        catalog.rooms.iter().map(|r| r.name.as_str()),
        "room",
        &mut errors,
    );
    check_duplicates(
        catalog.facilitators.iter().map(|f| f.name.as_str()),
        "facilitator",
        &mut errors,
    );
    check_duplicates(
        catalog.activities.iter().map(|a| a.code.as_str()),
        "activity",
        &mut errors,
    );

    let mut seen_indices = HashSet::new();
    for slot in &catalog.times {
        if !seen_indices.insert(slot.index) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate time slot index {}", slot.index),
            ));
        }
    }

    for room in &catalog.rooms {
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroSize,
                format!("room '{}' has zero capacity", room.name),
            ));
        }
    }

    let known: HashSet<&str> = catalog
        .facilitators
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    for activity in &catalog.activities {
        if activity.expected_enroll == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroSize,
                format!("activity '{}' expects zero enrollment", activity.code),
            ));
        }
        for name in activity.preferred.iter().chain(&activity.other) {
            if !known.contains(name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownFacilitator,
                    format!(
                        "activity '{}' references unknown facilitator '{}'",
                        activity.code, name
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

fn check_duplicates<'a>(
    ids: impl Iterator<Item = &'a str>,
    pool: &str,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate {pool} '{id}'"),
            ));
        }
    }
}
