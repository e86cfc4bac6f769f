//! In-memory entity and timetable store.

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use super::{EntitySource, TimetableSink};
use crate::models::{
    Batch, Classroom, EntitySnapshot, Faculty, NewTimetable, SlotDraft, Subject, Timetable,
    TimetableSlot,
};

#[derive(Debug, Default)]
struct State {
    batches: Vec<Batch>,
    subjects: Vec<Subject>,
    faculty: Vec<Faculty>,
    classrooms: Vec<Classroom>,
    timetables: Vec<Timetable>,
    slots: Vec<TimetableSlot>,
}

/// Thread-safe store holding catalogs, timetables and slots in memory.
///
/// Catalogs keep insertion order, which is the classroom first-fit order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch(self, batch: Batch) -> Self {
        self.state.write().batches.push(batch);
        self
    }

    pub fn with_subject(self, subject: Subject) -> Self {
        self.state.write().subjects.push(subject);
        self
    }

    pub fn with_faculty(self, faculty: Faculty) -> Self {
        self.state.write().faculty.push(faculty);
        self
    }

    pub fn with_classroom(self, classroom: Classroom) -> Self {
        self.state.write().classrooms.push(classroom);
        self
    }

    /// All timetables, oldest first.
    pub fn timetables(&self) -> Vec<Timetable> {
        self.state.read().timetables.clone()
    }

    pub fn timetable(&self, id: &str) -> Option<Timetable> {
        self.state
            .read()
            .timetables
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Slots of one timetable, in stored order.
    pub fn slots_for(&self, timetable_id: &str) -> Vec<TimetableSlot> {
        self.state
            .read()
            .slots
            .iter()
            .filter(|s| s.timetable_id == timetable_id)
            .cloned()
            .collect()
    }

    /// Approves a timetable. Returns the updated record.
    pub fn approve_timetable(
        &self,
        id: &str,
        reviewer: &str,
        at: DateTime<Utc>,
    ) -> Result<Timetable> {
        let mut state = self.state.write();
        let Some(t) = state.timetables.iter_mut().find(|t| t.id == id) else {
            bail!("timetable '{id}' not found");
        };
        t.approve(reviewer, at);
        Ok(t.clone())
    }

    /// Rejects a timetable. Returns the updated record.
    pub fn reject_timetable(&self, id: &str) -> Result<Timetable> {
        let mut state = self.state.write();
        let Some(t) = state.timetables.iter_mut().find(|t| t.id == id) else {
            bail!("timetable '{id}' not found");
        };
        t.reject();
        Ok(t.clone())
    }

    /// Deletes a timetable and all of its slots. Returns `false` if absent.
    pub fn delete_timetable(&self, id: &str) -> bool {
        let mut state = self.state.write();
        let before = state.timetables.len();
        state.timetables.retain(|t| t.id != id);
        if state.timetables.len() == before {
            return false;
        }
        state.slots.retain(|s| s.timetable_id != id);
        true
    }
}

#[async_trait]
impl EntitySource for InMemoryStore {
    async fn load_snapshot(&self, batch_ids: &[String]) -> Result<EntitySnapshot> {
        let state = self.state.read();
        let batches = state
            .batches
            .iter()
            .filter(|b| batch_ids.contains(&b.id))
            .cloned()
            .collect();
        Ok(EntitySnapshot::new(
            batches,
            state.subjects.clone(),
            state.faculty.clone(),
            state.classrooms.clone(),
        ))
    }
}

#[async_trait]
impl TimetableSink for InMemoryStore {
    async fn persist(&self, timetable: NewTimetable, slots: Vec<SlotDraft>) -> Result<Timetable> {
        let id = Uuid::new_v4().to_string();
        let record = Timetable::from_new(&id, timetable);

        let mut state = self.state.write();
        state
            .slots
            .extend(slots.into_iter().map(|d| d.into_slot(&id)));
        state.timetables.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, Weekday, STANDARD_TIME_SLOTS};
    use chrono::TimeZone;

    fn header() -> NewTimetable {
        NewTimetable {
            name: "T".into(),
            semester: 1,
            academic_year: "2026".into(),
            created_by: "admin".into(),
            batches: vec!["B1".into()],
            created_at: Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap(),
        }
    }

    fn draft(slot: usize) -> SlotDraft {
        SlotDraft::new(
            "B1",
            "F1",
            "S1",
            "R1",
            Cell::new(Weekday::Monday, STANDARD_TIME_SLOTS[slot]),
        )
    }

    #[tokio::test]
    async fn test_snapshot_filters_batches() {
        let store = InMemoryStore::new()
            .with_batch(Batch::new("B1", 30))
            .with_batch(Batch::new("B2", 30))
            .with_subject(Subject::new("S1", 1))
            .with_classroom(Classroom::new("R2", 10))
            .with_classroom(Classroom::new("R1", 10));

        let snap = store
            .load_snapshot(&["B2".to_string(), "B9".to_string()])
            .await
            .unwrap();
        assert!(snap.batch("B1").is_none());
        assert!(snap.batch("B2").is_some());
        assert_eq!(snap.subject_count(), 1);
        assert_eq!(snap.classrooms()[0].id, "R2");
    }

    #[tokio::test]
    async fn test_persist_and_cascade_delete() {
        let store = InMemoryStore::new();
        let t1 = store.persist(header(), vec![draft(0), draft(1)]).await.unwrap();
        let t2 = store.persist(header(), vec![draft(0)]).await.unwrap();

        assert_ne!(t1.id, t2.id);
        assert!(t1.is_draft());
        assert_eq!(store.slots_for(&t1.id).len(), 2);
        assert_eq!(store.slots_for(&t2.id).len(), 1);

        assert!(store.delete_timetable(&t1.id));
        assert!(store.timetable(&t1.id).is_none());
        assert!(store.slots_for(&t1.id).is_empty());
        assert_eq!(store.slots_for(&t2.id).len(), 1);
        assert!(!store.delete_timetable(&t1.id));
    }

    #[tokio::test]
    async fn test_review_transitions() {
        let store = InMemoryStore::new();
        let t = store.persist(header(), vec![]).await.unwrap();
        let at = Utc.with_ymd_and_hms(2026, 1, 6, 12, 0, 0).unwrap();

        let approved = store.approve_timetable(&t.id, "dean", at).unwrap();
        assert_eq!(approved.approved_by.as_deref(), Some("dean"));
        assert_eq!(store.timetable(&t.id).unwrap().approval_date, Some(at));

        let rejected = store.reject_timetable(&t.id).unwrap();
        assert!(rejected.approved_by.is_none());
        assert!(store.approve_timetable("missing", "dean", at).is_err());
    }
}
