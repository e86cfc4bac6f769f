//! Academic timetable generation.
//!
//! Assigns each required weekly session of every (batch, subject) pair to a
//! (faculty, classroom, day, time slot) tuple so that no faculty member,
//! classroom, or batch is double-booked and every room seats its batch.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Batch`, `Subject`, `Faculty`, `Classroom`,
//!   `Grid`, `Cell`, `SlotDraft`, `Timetable`, `ResultSet`, `EntitySnapshot`
//! - **`scheduler`**: `ConflictTracker`, eligibility policies, the greedy
//!   `SlotAssigner`, and `CoverageReport`
//! - **`validation`**: Request checks and snapshot audit
//! - **`service`**: `TimetableService`, the end-to-end entry point
//! - **`store`**: Persistence-boundary traits and an in-memory store
//!
//! # Guarantees
//!
//! Whatever is scheduled is conflict-free and within each subject's weekly
//! target. Nothing guarantees the target is reached: the assigner is
//! first-fit and never backtracks, so earlier batches, faculty, and rooms
//! win ties. Identical input always yields identical output.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod service;
pub mod store;
pub mod validation;

pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use service::{GenerationOutcome, TimetableService};
