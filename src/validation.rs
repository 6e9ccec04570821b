//! Input validation for optimization runs and network datasets.
//!
//! Checks structural integrity before trains are dispatched. Detects:
//! - Duplicate IDs
//! - Blank train IDs
//! - Routes and sections referencing unknown stations
//! - Empty routes and degenerate sections

use crate::models::{NetworkSection, Station, Train};
use std::collections::HashSet;

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
    /// Two entities share the same ID.
    DuplicateId,
    /// A train has a blank ID.
    BlankId,
    /// A route or section references a station that doesn't exist.
    UnknownStation,
    /// A train has no stations in its route.
    EmptyRoute,
    /// A section starts and ends at the same station.
    DegenerateSection,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a train list for one optimization run.
///
/// Checks:
/// 1. No blank train IDs
/// 2. No duplicate train IDs
///
/// Only identity is checked here: the optimizer never reads routes.
pub fn validate_trains(trains: &[Train]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for train in trains {
        if train.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankId,
                format!("Train '{}' has a blank ID", train.display_name()),
            ));
        } else if !seen.insert(train.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate train ID: {}", train.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a complete network dataset.
///
/// Checks:
/// 1. No duplicate station IDs
/// 2. No duplicate section IDs
/// 3. Section endpoints exist and differ
/// 4. Train list passes [`validate_trains`]
/// 5. Every train has a route and every route stop exists
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_network(
    stations: &[Station],
    sections: &[NetworkSection],
    trains: &[Train],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut station_ids = HashSet::new();
    for s in stations {
        if !station_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate station ID: {}", s.id),
            ));
        }
    }

    let mut section_ids = HashSet::new();
    for section in sections {
        if !section_ids.insert(section.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate section ID: {}", section.id),
            ));
        }
        for end in [&section.from, &section.to] {
            if !station_ids.contains(end.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownStation,
                    format!("Section '{}' references unknown station '{}'", section.id, end),
                ));
            }
        }
        if section.from == section.to {
            errors.push(ValidationError::new(
                ValidationErrorKind::DegenerateSection,
                format!("Section '{}' starts and ends at '{}'", section.id, section.from),
            ));
        }
    }

    if let Err(train_errors) = validate_trains(trains) {
        errors.extend(train_errors);
    }

    for train in trains {
        if train.route.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyRoute,
                format!("Train '{}' has an empty route", train.id),
            ));
        }
        for stop in &train.route {
            if !station_ids.contains(stop.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownStation,
                    format!("Train '{}' routes via unknown station '{}'", train.id, stop),
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
