//! Result set of a generation run.
//!
//! Holds the ordered slot drafts plus one summary line per
//! (batch, subject) pair that was considered. This is the only thing
//! handed to persistence.
//!
//! [`ResultSet::violations`] re-checks the conflict, capacity and quota
//! invariants against the snapshot the run used. A correct run always
//! yields an empty list.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::{ClockTime, EntitySnapshot, SlotDraft, TimetableSlot, Weekday};

/// Outcome for one (batch, subject) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub batch_id: String,
    pub subject_id: String,
    /// `classes_per_week` at generation time.
    pub target: u32,
    /// Sessions actually placed.
    pub scheduled: u32,
    /// `false` when the subject had no assigned faculty and was never attempted.
    pub attempted: bool,
}

impl SubjectSummary {
    pub fn new(
        batch_id: impl Into<String>,
        subject_id: impl Into<String>,
        target: u32,
        scheduled: u32,
    ) -> Self {
        Self {
            batch_id: batch_id.into(),
            subject_id: subject_id.into(),
            target,
            scheduled,
            attempted: true,
        }
    }

    /// A pair skipped without trying any cell.
    pub fn skipped(
        batch_id: impl Into<String>,
        subject_id: impl Into<String>,
        target: u32,
    ) -> Self {
        Self {
            attempted: false,
            ..Self::new(batch_id, subject_id, target, 0)
        }
    }

    /// Sessions still missing.
    #[inline]
    pub fn shortfall(&self) -> u32 {
        self.target.saturating_sub(self.scheduled)
    }

    pub fn is_complete(&self) -> bool {
        self.scheduled >= self.target
    }
}

/// An invariant breach found by [`ResultSet::violations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub violation_type: ViolationType,
    /// Resource or pair the breach concerns.
    pub entity_id: String,
    pub message: String,
}

/// Classification of invariant breaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationType {
    FacultyDoubleBooked,
    ClassroomDoubleBooked,
    BatchDoubleBooked,
    CapacityExceeded,
    QuotaExceeded,
    /// A slot references a record missing from the snapshot.
    UnknownReference,
}

/// Ordered drafts and per-pair summaries of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Drafts in commit order.
    pub slots: Vec<SlotDraft>,
    /// Summaries in consideration order.
    pub summaries: Vec<SubjectSummary>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_slot(&mut self, slot: SlotDraft) {
        self.slots.push(slot);
    }

    pub fn push_summary(&mut self, summary: SubjectSummary) {
        self.summaries.push(summary);
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Summary for a pair, if it was considered.
    pub fn summary_for(&self, batch_id: &str, subject_id: &str) -> Option<&SubjectSummary> {
        self.summaries
            .iter()
            .find(|s| s.batch_id == batch_id && s.subject_id == subject_id)
    }

    /// Sessions placed for a pair (0 if never considered).
    pub fn scheduled_for(&self, batch_id: &str, subject_id: &str) -> u32 {
        self.summary_for(batch_id, subject_id)
            .map(|s| s.scheduled)
            .unwrap_or(0)
    }

    pub fn slots_for_batch(&self, batch_id: &str) -> Vec<&SlotDraft> {
        self.slots.iter().filter(|s| s.batch_id == batch_id).collect()
    }

    pub fn slots_for_faculty(&self, faculty_id: &str) -> Vec<&SlotDraft> {
        self.slots
            .iter()
            .filter(|s| s.faculty_id == faculty_id)
            .collect()
    }

    pub fn slots_for_classroom(&self, classroom_id: &str) -> Vec<&SlotDraft> {
        self.slots
            .iter()
            .filter(|s| s.classroom_id == classroom_id)
            .collect()
    }

    /// Slot count per batch, keyed in ID order.
    pub fn count_by_batch(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for s in &self.summaries {
            *counts.entry(s.batch_id.clone()).or_insert(0) += s.scheduled as usize;
        }
        counts
    }

    /// Pairs that fell short of their weekly target.
    pub fn under_scheduled(&self) -> Vec<&SubjectSummary> {
        self.summaries.iter().filter(|s| !s.is_complete()).collect()
    }

    /// Stamps every draft with the timetable ID.
    pub fn into_slots(self, timetable_id: &str) -> Vec<TimetableSlot> {
        self.slots
            .into_iter()
            .map(|d| d.into_slot(timetable_id))
            .collect()
    }

    /// Re-checks every slot against the snapshot.
    ///
    /// Detects double bookings per faculty, classroom and batch, rooms too
    /// small for their batch, pairs scheduled beyond `classes_per_week`,
    /// and references to records the snapshot does not hold.
    pub fn violations(&self, snapshot: &EntitySnapshot) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut faculty_cells: HashSet<(&str, Weekday, ClockTime)> = HashSet::new();
        let mut room_cells: HashSet<(&str, Weekday, ClockTime)> = HashSet::new();
        let mut batch_cells: HashSet<(&str, Weekday, ClockTime)> = HashSet::new();
        let mut pair_counts: BTreeMap<(&str, &str), u32> = BTreeMap::new();

        for slot in &self.slots {
            let day = slot.day_of_week;
            let start = slot.time_slot.start;
            let at = slot.cell();

            if !faculty_cells.insert((slot.faculty_id.as_str(), day, start)) {
                violations.push(Violation {
                    violation_type: ViolationType::FacultyDoubleBooked,
                    entity_id: slot.faculty_id.clone(),
                    message: format!("faculty '{}' booked twice at {at}", slot.faculty_id),
                });
            }
            if !room_cells.insert((slot.classroom_id.as_str(), day, start)) {
                violations.push(Violation {
                    violation_type: ViolationType::ClassroomDoubleBooked,
                    entity_id: slot.classroom_id.clone(),
                    message: format!("classroom '{}' booked twice at {at}", slot.classroom_id),
                });
            }
            if !batch_cells.insert((slot.batch_id.as_str(), day, start)) {
                violations.push(Violation {
                    violation_type: ViolationType::BatchDoubleBooked,
                    entity_id: slot.batch_id.clone(),
                    message: format!("batch '{}' booked twice at {at}", slot.batch_id),
                });
            }

            match (snapshot.batch(&slot.batch_id), snapshot.classroom(&slot.classroom_id)) {
                (Some(batch), Some(room)) => {
                    if !room.seats(batch.students_count) {
                        violations.push(Violation {
                            violation_type: ViolationType::CapacityExceeded,
                            entity_id: room.id.clone(),
                            message: format!(
                                "classroom '{}' seats {} but batch '{}' has {}",
                                room.id, room.capacity, batch.id, batch.students_count
                            ),
                        });
                    }
                }
                _ => violations.push(Violation {
                    violation_type: ViolationType::UnknownReference,
                    entity_id: slot.batch_id.clone(),
                    message: format!(
                        "slot references unknown batch '{}' or classroom '{}'",
                        slot.batch_id, slot.classroom_id
                    ),
                }),
            }

            *pair_counts
                .entry((slot.batch_id.as_str(), slot.subject_id.as_str()))
                .or_insert(0) += 1;
        }

        for ((batch_id, subject_id), count) in pair_counts {
            match snapshot.subject(subject_id) {
                Some(subject) if count > subject.classes_per_week => {
                    violations.push(Violation {
                        violation_type: ViolationType::QuotaExceeded,
                        entity_id: format!("{batch_id}/{subject_id}"),
                        message: format!(
                            "{count} sessions placed, limit {}",
                            subject.classes_per_week
                        ),
                    })
                }
                Some(_) => {}
                None => violations.push(Violation {
                    violation_type: ViolationType::UnknownReference,
                    entity_id: subject_id.to_string(),
                    message: format!("slot references unknown subject '{subject_id}'"),
                }),
            }
        }

        violations
    }
}
