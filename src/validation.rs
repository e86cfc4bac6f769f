//! Input validation for timetable generation.
//!
//! Two levels:
//! - [`validate_request`]: hard checks on the request. Any finding stops
//!   the run before a snapshot is read.
//! - [`audit_snapshot`]: soft checks on the loaded entities. Findings
//!   (unknown references, repeated IDs) are reported but never fatal; the
//!   assigner simply skips what it cannot resolve.

use std::collections::HashSet;

use crate::config::GeneratorConfig;
use crate::models::{EntityKind, EntitySnapshot, GenerationRequest};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The request names no batches.
    EmptyBatchList,
    /// A requested batch ID is empty or whitespace.
    BlankBatchId,
    /// Semester outside the configured range.
    SemesterOutOfRange,
    /// The same ID appears more than once.
    DuplicateId,
    /// A requested batch does not exist.
    UnknownBatch,
    /// A batch enrolls a subject that does not exist.
    UnknownSubject,
    /// A subject lists a faculty member that does not exist.
    UnknownFaculty,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a generation request.
///
/// Checks:
/// 1. At least one batch is requested
/// 2. No requested batch ID is blank
/// 3. Semester lies within `config.min_semester..=config.max_semester`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every finding.
pub fn validate_request(request: &GenerationRequest, config: &GeneratorConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if request.batches.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatchList,
            "batches are required",
        ));
    }

    for (i, id) in request.batches.iter().enumerate() {
        if id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankBatchId,
                format!("batch ID at position {i} is blank"),
            ));
        }
    }

    let range = config.min_semester..=config.max_semester;
    if !range.contains(&request.semester) {
        errors.push(ValidationError::new(
            ValidationErrorKind::SemesterOutOfRange,
            format!(
                "semester {} outside {}..={}",
                request.semester, config.min_semester, config.max_semester
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reports unresolved references and repeated IDs in a snapshot.
///
/// Only batches named in `batch_order` (and what they reference) are
/// inspected. Findings come back in a stable order.
pub fn audit_snapshot(snapshot: &EntitySnapshot, batch_order: &[String]) -> Vec<ValidationError> {
    let mut findings = Vec::new();

    for (kind, id) in snapshot.duplicates() {
        findings.push(ValidationError::new(
            ValidationErrorKind::DuplicateId,
            format!("duplicate {} ID: {id}", kind_label(*kind)),
        ));
    }

    let mut seen_batches = HashSet::new();
    let mut seen_subjects = HashSet::new();
    let mut reported_faculty = HashSet::new();

    for batch_id in batch_order {
        if !seen_batches.insert(batch_id.as_str()) {
            findings.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("batch '{batch_id}' requested more than once"),
            ));
            continue;
        }

        let Some(batch) = snapshot.batch(batch_id) else {
            findings.push(ValidationError::new(
                ValidationErrorKind::UnknownBatch,
                format!("batch '{batch_id}' not found"),
            ));
            continue;
        };

        for subject_id in &batch.subjects {
            let Some(subject) = snapshot.subject(subject_id) else {
                findings.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!("batch '{batch_id}' enrolls unknown subject '{subject_id}'"),
                ));
                continue;
            };
            if !seen_subjects.insert(subject.id.as_str()) {
                continue;
            }
            for faculty_id in &subject.assigned_faculty {
                if snapshot.faculty(faculty_id).is_none()
                    && reported_faculty.insert((subject.id.as_str(), faculty_id.as_str()))
                {
                    findings.push(ValidationError::new(
                        ValidationErrorKind::UnknownFaculty,
                        format!(
                            "subject '{}' lists unknown faculty '{faculty_id}'",
                            subject.id
                        ),
                    ));
                }
            }
        }
    }

    findings
}

fn kind_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Batch => "batch",
        EntityKind::Subject => "subject",
        EntityKind::Faculty => "faculty",
        EntityKind::Classroom => "classroom",
    }
}
