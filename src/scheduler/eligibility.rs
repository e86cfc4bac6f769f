//! Eligibility policies for faculty and classrooms.
//!
//! Before the conflict tracker is consulted, each candidate must pass the
//! run's eligibility policy for the cell under consideration. The default,
//! [`Unrestricted`], admits everyone: availability windows and workload
//! caps on the records are informational only.
//!
//! [`AvailabilityWindows`] is the stricter variant that honours declared
//! availability on both faculty and classrooms.

use std::fmt::Debug;

use crate::models::{Cell, Classroom, Faculty};

/// Decides whether a resource may be booked at a cell.
///
/// Implementations must be pure: the same inputs always give the same
/// answer, otherwise runs stop being deterministic.
pub trait EligibilityPolicy: Send + Sync + Debug {
    /// Policy name (for logs).
    fn name(&self) -> &'static str;

    /// Whether `faculty` may teach at `cell`.
    fn faculty_eligible(&self, _faculty: &Faculty, _cell: &Cell) -> bool {
        true
    }

    /// Whether `classroom` may host a session at `cell`.
    fn classroom_eligible(&self, _classroom: &Classroom, _cell: &Cell) -> bool {
        true
    }
}

/// Admits every resource at every cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl EligibilityPolicy for Unrestricted {
    fn name(&self) -> &'static str {
        "unrestricted"
    }
}

/// Admits a resource only where its availability schedule allows.
///
/// Records with an empty schedule stay available everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityWindows;

impl EligibilityPolicy for AvailabilityWindows {
    fn name(&self) -> &'static str {
        "availability-windows"
    }

    fn faculty_eligible(&self, faculty: &Faculty, cell: &Cell) -> bool {
        faculty.is_available_at(cell)
    }

    fn classroom_eligible(&self, classroom: &Classroom, cell: &Cell) -> bool {
        classroom.is_available_at(cell)
    }
}
