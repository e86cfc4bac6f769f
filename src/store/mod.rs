//! Collaborator interfaces at the persistence boundary.
//!
//! The generator reads one entity snapshot through [`EntitySource`] and
//! hands its result to [`TimetableSink`]. Both are async because they sit
//! on I/O; everything between them is synchronous.
//!
//! [`InMemoryStore`] implements both and backs the test suite.

mod memory;

pub use memory::InMemoryStore;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{EntitySnapshot, NewTimetable, SlotDraft, Timetable};

/// Read side: provides the entity snapshot for a run.
#[async_trait]
pub trait EntitySource: Send + Sync {
    /// Loads the requested batches plus the full subject, faculty and
    /// classroom catalogs. Unknown batch IDs are left out, not reported.
    async fn load_snapshot(&self, batch_ids: &[String]) -> Result<EntitySnapshot>;
}

/// Write side: stores a generated timetable and its slots.
#[async_trait]
pub trait TimetableSink: Send + Sync {
    /// Allocates a timetable ID, stamps it onto every draft, and stores
    /// header and slots together. Either both are stored or neither.
    async fn persist(&self, timetable: NewTimetable, slots: Vec<SlotDraft>) -> Result<Timetable>;
}
