//! Timetable and timetable slot models.
//!
//! A generation run produces [`SlotDraft`]s. The persistence layer
//! allocates a timetable ID and stamps it onto each draft, yielding
//! [`TimetableSlot`]s. Slots are immutable once stored.
//!
//! # Lifecycle
//!
//! ```text
//! draft ──approve──▶ approved
//!   │
//!   └───reject────▶ rejected
//! ```
//!
//! Transitions are recorded here as plain state changes; who may perform
//! them is decided outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Cell, TimeSlot, Weekday};

/// A committed assignment not yet attached to a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDraft {
    pub batch_id: String,
    pub faculty_id: String,
    pub subject_id: String,
    pub classroom_id: String,
    pub day_of_week: Weekday,
    pub time_slot: TimeSlot,
}

/// A persisted assignment belonging to a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableSlot {
    pub batch_id: String,
    pub faculty_id: String,
    pub subject_id: String,
    pub classroom_id: String,
    pub day_of_week: Weekday,
    pub time_slot: TimeSlot,
    pub timetable_id: String,
}

impl SlotDraft {
    pub fn new(
        batch_id: impl Into<String>,
        faculty_id: impl Into<String>,
        subject_id: impl Into<String>,
        classroom_id: impl Into<String>,
        cell: Cell,
    ) -> Self {
        Self {
            batch_id: batch_id.into(),
            faculty_id: faculty_id.into(),
            subject_id: subject_id.into(),
            classroom_id: classroom_id.into(),
            day_of_week: cell.day,
            time_slot: cell.slot,
        }
    }

    /// The grid cell this draft occupies.
    #[inline]
    pub fn cell(&self) -> Cell {
        Cell::new(self.day_of_week, self.time_slot)
    }

    /// Attaches the draft to a timetable.
    pub fn into_slot(self, timetable_id: impl Into<String>) -> TimetableSlot {
        TimetableSlot {
            batch_id: self.batch_id,
            faculty_id: self.faculty_id,
            subject_id: self.subject_id,
            classroom_id: self.classroom_id,
            day_of_week: self.day_of_week,
            time_slot: self.time_slot,
            timetable_id: timetable_id.into(),
        }
    }
}

impl TimetableSlot {
    #[inline]
    pub fn cell(&self) -> Cell {
        Cell::new(self.day_of_week, self.time_slot)
    }
}

/// Review state of a timetable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimetableStatus {
    #[default]
    Draft,
    Approved,
    Rejected,
}

/// Header fields for a timetable about to be stored.
///
/// Carries everything except the ID, which the store allocates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTimetable {
    pub name: String,
    pub semester: u8,
    pub academic_year: String,
    pub created_by: String,
    pub batches: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A stored timetable (grouping of one run's slots).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    pub id: String,
    pub name: String,
    pub semester: u8,
    pub academic_year: String,
    pub status: TimetableStatus,
    pub created_by: String,
    pub approved_by: Option<String>,
    pub approval_date: Option<DateTime<Utc>>,
    pub batches: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Timetable {
    /// Materializes a stored draft from its header.
    pub fn from_new(id: impl Into<String>, new: NewTimetable) -> Self {
        Self {
            id: id.into(),
            name: new.name,
            semester: new.semester,
            academic_year: new.academic_year,
            status: TimetableStatus::Draft,
            created_by: new.created_by,
            approved_by: None,
            approval_date: None,
            batches: new.batches,
            created_at: new.created_at,
        }
    }

    /// Marks the timetable approved by `reviewer` at `at`.
    pub fn approve(&mut self, reviewer: impl Into<String>, at: DateTime<Utc>) {
        self.status = TimetableStatus::Approved;
        self.approved_by = Some(reviewer.into());
        self.approval_date = Some(at);
    }

    /// Marks the timetable rejected, clearing any earlier approval.
    pub fn reject(&mut self) {
        self.status = TimetableStatus::Rejected;
        self.approved_by = None;
        self.approval_date = None;
    }

    pub fn is_draft(&self) -> bool {
        self.status == TimetableStatus::Draft
    }
}
