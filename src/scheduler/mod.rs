//! Timetable assignment: conflict tracking, eligibility, and the greedy
//! first-fit assigner.
//!
//! # Algorithm
//!
//! `SlotAssigner` walks batches in caller order, subjects in enrollment
//! order, and grid cells in day-then-slot order, committing the first
//! (faculty, classroom) pair that is free for the batch at each cell. It
//! never backtracks and never optimizes; whatever it places is
//! conflict-free.
//!
//! # KPI
//!
//! `CoverageReport` measures how much of the requested load was placed.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod assigner;
mod eligibility;
mod kpi;
mod tracker;

pub use assigner::SlotAssigner;
pub use eligibility::{AvailabilityWindows, EligibilityPolicy, Unrestricted};
pub use kpi::CoverageReport;
pub use tracker::{ConflictKey, ConflictTracker, ResourceKind};
