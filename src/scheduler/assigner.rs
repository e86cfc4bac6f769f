//! Greedy first-fit slot assigner.
//!
//! # Algorithm
//!
//! 1. Visit batches in caller order (the priority order).
//! 2. Within a batch, visit subjects in enrollment order. Subjects with
//!    no assigned faculty are skipped.
//! 3. For each subject, walk grid cells (days outer, slots inner) until
//!    `classes_per_week` sessions are placed or the grid is exhausted:
//!    - first listed faculty member that is eligible and free,
//!    - first catalog classroom that seats the batch, is eligible and free,
//!    - the batch itself must be free.
//!
//!    If all three hold, commit the session and mark all three occupied.
//! 4. A subject that runs out of cells stays under-scheduled. Nothing is
//!    retried, swapped or undone.
//!
//! Invariants: because every commit checks then marks faculty, classroom
//! and batch before the next cell, no resource is ever double-booked.
//!
//! # Complexity
//! O(b * s * g * (f + r)) where b=batches, s=subjects/batch, g=grid cells,
//! f=faculty/subject, r=classrooms.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use super::eligibility::{EligibilityPolicy, Unrestricted};
use super::tracker::{ConflictTracker, ResourceKind};
use crate::models::{
    Batch, Cell, Classroom, EntitySnapshot, Faculty, Grid, ResultSet, SlotDraft, Subject,
    SubjectSummary,
};

/// Greedy, non-backtracking timetable assigner.
///
/// Stateless between runs: every call to [`assign`](Self::assign) builds
/// a fresh [`ConflictTracker`].
///
/// # Example
///
/// ```
/// use u_timetable::models::{Batch, Classroom, EntitySnapshot, Faculty, Subject};
/// use u_timetable::scheduler::SlotAssigner;
///
/// let snapshot = EntitySnapshot::new(
///     vec![Batch::new("B1", 30).with_subject("S1")],
///     vec![Subject::new("S1", 3).with_faculty("F1")],
///     vec![Faculty::new("F1")],
///     vec![Classroom::new("R1", 40)],
/// );
///
/// let result = SlotAssigner::new().assign(&snapshot, &["B1".to_string()]);
/// assert_eq!(result.slot_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SlotAssigner {
    grid: Grid,
    eligibility: Arc<dyn EligibilityPolicy>,
}

impl SlotAssigner {
    /// Creates an assigner over the standard grid with no eligibility
    /// restrictions.
    pub fn new() -> Self {
        Self {
            grid: Grid::standard(),
            eligibility: Arc::new(Unrestricted),
        }
    }

    /// Replaces the grid.
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the eligibility policy.
    pub fn with_eligibility<P: EligibilityPolicy + 'static>(mut self, policy: P) -> Self {
        self.eligibility = Arc::new(policy);
        self
    }

    /// Sets a shared eligibility policy.
    pub fn with_shared_eligibility(mut self, policy: Arc<dyn EligibilityPolicy>) -> Self {
        self.eligibility = policy;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn eligibility(&self) -> &dyn EligibilityPolicy {
        self.eligibility.as_ref()
    }

    /// Assigns sessions for `batch_order` against `snapshot`.
    ///
    /// Batch IDs missing from the snapshot are skipped, as are repeats of
    /// an ID already visited. Enrolled subject IDs missing from the
    /// snapshot are skipped without a summary line.
    pub fn assign(&self, snapshot: &EntitySnapshot, batch_order: &[String]) -> ResultSet {
        let mut tracker = ConflictTracker::new();
        let mut result = ResultSet::new();
        let mut seen_batches: HashSet<&str> = HashSet::new();

        for batch_id in batch_order {
            if !seen_batches.insert(batch_id.as_str()) {
                continue;
            }
            let Some(batch) = snapshot.batch(batch_id) else {
                debug!(batch_id = %batch_id, "batch not in snapshot; skipping");
                continue;
            };
            self.assign_batch(batch, snapshot, &mut tracker, &mut result);
        }

        info!(
            policy = self.eligibility.name(),
            batches = seen_batches.len(),
            slots = result.slot_count(),
            faculty_bookings = tracker.occupied_count(ResourceKind::Faculty),
            classroom_bookings = tracker.occupied_count(ResourceKind::Classroom),
            under_scheduled = result.under_scheduled().len(),
            "timetable assignment finished"
        );

        result
    }

    fn assign_batch(
        &self,
        batch: &Batch,
        snapshot: &EntitySnapshot,
        tracker: &mut ConflictTracker,
        result: &mut ResultSet,
    ) {
        let mut seen_subjects: HashSet<&str> = HashSet::new();

        for subject_id in &batch.subjects {
            if !seen_subjects.insert(subject_id.as_str()) {
                continue;
            }
            let Some(subject) = snapshot.subject(subject_id) else {
                debug!(
                    batch_id = %batch.id,
                    subject_id = %subject_id,
                    "subject not in snapshot; skipping"
                );
                continue;
            };
            if !subject.has_faculty() {
                debug!(
                    batch_id = %batch.id,
                    subject_id = %subject.id,
                    "no assigned faculty; skipping"
                );
                result.push_summary(SubjectSummary::skipped(
                    &batch.id,
                    &subject.id,
                    subject.classes_per_week,
                ));
                continue;
            }

            let scheduled = self.assign_subject(batch, subject, snapshot, tracker, result);
            if scheduled < subject.classes_per_week {
                debug!(
                    batch_id = %batch.id,
                    subject_id = %subject.id,
                    scheduled,
                    target = subject.classes_per_week,
                    "subject under-scheduled"
                );
            }
            result.push_summary(SubjectSummary::new(
                &batch.id,
                &subject.id,
                subject.classes_per_week,
                scheduled,
            ));
        }
    }

    /// Places up to `classes_per_week` sessions; returns how many landed.
    fn assign_subject(
        &self,
        batch: &Batch,
        subject: &Subject,
        snapshot: &EntitySnapshot,
        tracker: &mut ConflictTracker,
        result: &mut ResultSet,
    ) -> u32 {
        let target = subject.classes_per_week;
        let mut scheduled = 0;

        for cell in self.grid.cells() {
            if scheduled >= target {
                break;
            }

            let Some(faculty) = self.pick_faculty(subject, snapshot, tracker, &cell) else {
                continue;
            };
            let Some(classroom) = self.pick_classroom(batch, snapshot, tracker, &cell) else {
                continue;
            };
            if tracker.is_occupied(ResourceKind::Batch, &batch.id, &cell) {
                continue;
            }

            tracker.mark_occupied(ResourceKind::Faculty, &faculty.id, &cell);
            tracker.mark_occupied(ResourceKind::Classroom, &classroom.id, &cell);
            tracker.mark_occupied(ResourceKind::Batch, &batch.id, &cell);
            result.push_slot(SlotDraft::new(
                &batch.id,
                &faculty.id,
                &subject.id,
                &classroom.id,
                cell,
            ));
            scheduled += 1;
        }

        scheduled
    }

    /// First listed faculty member known to the snapshot, eligible, and free.
    fn pick_faculty<'s>(
        &self,
        subject: &Subject,
        snapshot: &'s EntitySnapshot,
        tracker: &ConflictTracker,
        cell: &Cell,
    ) -> Option<&'s Faculty> {
        subject
            .assigned_faculty
            .iter()
            .filter_map(|id| snapshot.faculty(id))
            .find(|f| {
                self.eligibility.faculty_eligible(f, cell)
                    && !tracker.is_occupied(ResourceKind::Faculty, &f.id, cell)
            })
    }

    /// First catalog classroom that seats the batch, is eligible, and free.
    fn pick_classroom<'s>(
        &self,
        batch: &Batch,
        snapshot: &'s EntitySnapshot,
        tracker: &ConflictTracker,
        cell: &Cell,
    ) -> Option<&'s Classroom> {
        snapshot.classrooms().iter().find(|r| {
            r.seats(batch.students_count)
                && self.eligibility.classroom_eligible(r, cell)
                && !tracker.is_occupied(ResourceKind::Classroom, &r.id, cell)
        })
    }
}

impl Default for SlotAssigner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, ClockTime, TimeSlot, Weekday, STANDARD_TIME_SLOTS};
    use crate::scheduler::AvailabilityWindows;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn make_snapshot(
        batches: Vec<Batch>,
        subjects: Vec<Subject>,
        faculty: Vec<Faculty>,
        classrooms: Vec<Classroom>,
    ) -> EntitySnapshot {
        EntitySnapshot::new(batches, subjects, faculty, classrooms)
    }

    fn at(day: Weekday, slot: usize) -> Cell {
        Cell::new(day, STANDARD_TIME_SLOTS[slot])
    }

    #[test]
    fn test_single_subject_fills_monday_morning() {
        let snap = make_snapshot(
            vec![Batch::new("B1", 30).with_subject("S1")],
            vec![Subject::new("S1", 3).with_faculty("F1")],
            vec![Faculty::new("F1")],
            vec![Classroom::new("R1", 40)],
        );

        let result = SlotAssigner::new().assign(&snap, &ids(&["B1"]));

        assert_eq!(result.slot_count(), 3);
        let starts: Vec<ClockTime> = result.slots.iter().map(|s| s.time_slot.start).collect();
        assert_eq!(
            starts,
            vec![ClockTime::hm(9, 0), ClockTime::hm(10, 0), ClockTime::hm(11, 0)]
        );
        assert!(result.slots.iter().all(|s| s.day_of_week == Weekday::Monday));
        assert_eq!(result.scheduled_for("B1", "S1"), 3);
        assert!(result.violations(&snap).is_empty());
    }

    #[test]
    fn test_batch_order_is_priority() {
        let snap = make_snapshot(
            vec![
                Batch::new("B1", 30).with_subject("S1"),
                Batch::new("B2", 30).with_subject("S2"),
            ],
            vec![
                Subject::new("S1", 1).with_faculty("F1"),
                Subject::new("S2", 1).with_faculty("F1"),
            ],
            vec![Faculty::new("F1")],
            vec![Classroom::new("R1", 40), Classroom::new("R2", 40)],
        );

        let result = SlotAssigner::new().assign(&snap, &ids(&["B2", "B1"]));
        assert_eq!(result.slots_for_batch("B2")[0].cell(), at(Weekday::Monday, 0));
        assert_eq!(result.slots_for_batch("B1")[0].cell(), at(Weekday::Monday, 1));
    }

    #[test]
    fn test_faculty_first_fit_falls_through() {
        let snap = make_snapshot(
            vec![
                Batch::new("B1", 30).with_subject("S1"),
                Batch::new("B2", 30).with_subject("S2"),
            ],
            vec![
                Subject::new("S1", 1).with_faculty("F1"),
                Subject::new("S2", 1).with_faculty("F1").with_faculty("F2"),
            ],
            vec![Faculty::new("F1"), Faculty::new("F2")],
            vec![Classroom::new("R1", 40), Classroom::new("R2", 40)],
        );

        let result = SlotAssigner::new().assign(&snap, &ids(&["B1", "B2"]));
        let b2 = result.slots_for_batch("B2");
        // F1 busy at Monday 09:00, so F2 takes it in the next room
        assert_eq!(b2[0].faculty_id, "F2");
        assert_eq!(b2[0].classroom_id, "R2");
        assert_eq!(b2[0].cell(), at(Weekday::Monday, 0));
    }

    #[test]
    fn test_classroom_capacity_and_order() {
        let snap = make_snapshot(
            vec![Batch::new("B1", 50).with_subject("S1")],
            vec![Subject::new("S1", 1).with_faculty("F1")],
            vec![Faculty::new("F1")],
            vec![
                Classroom::new("small", 30),
                Classroom::new("big", 60),
                Classroom::new("bigger", 90),
            ],
        );

        let result = SlotAssigner::new().assign(&snap, &ids(&["B1"]));
        assert_eq!(result.slots[0].classroom_id, "big");
    }

    #[test]
    fn test_no_room_large_enough() {
        let snap = make_snapshot(
            vec![Batch::new("B1", 50).with_subject("S1").with_subject("S2")],
            vec![
                Subject::new("S1", 2).with_faculty("F1"),
                Subject::new("S2", 2).with_faculty("F1"),
            ],
            vec![Faculty::new("F1")],
            vec![Classroom::new("R1", 49), Classroom::new("R2", 10)],
        );

        let result = SlotAssigner::new().assign(&snap, &ids(&["B1"]));
        assert!(result.is_empty());
        assert_eq!(result.summaries.len(), 2);
        assert_eq!(result.count_by_batch()["B1"], 0);
    }

    #[test]
    fn test_subject_without_faculty_skipped() {
        let snap = make_snapshot(
            vec![Batch::new("B1", 30).with_subject("S1").with_subject("S2")],
            vec![Subject::new("S1", 2), Subject::new("S2", 1).with_faculty("F1")],
            vec![Faculty::new("F1")],
            vec![Classroom::new("R1", 40)],
        );

        let result = SlotAssigner::new().assign(&snap, &ids(&["B1"]));
        assert_eq!(result.slot_count(), 1);
        let s1 = result.summary_for("B1", "S1").unwrap();
        assert!(!s1.attempted);
        assert_eq!(s1.scheduled, 0);
        // S2 still gets the first cell
        assert_eq!(result.slots[0].cell(), at(Weekday::Monday, 0));
    }

    #[test]
    fn test_unknown_references_skipped() {
        let snap = make_snapshot(
            vec![Batch::new("B1", 30).with_subject("S9").with_subject("S1")],
            vec![Subject::new("S1", 2).with_faculty("F9").with_faculty("F1")],
            vec![Faculty::new("F1")],
            vec![Classroom::new("R1", 40)],
        );

        let result = SlotAssigner::new().assign(&snap, &ids(&["B9", "B1"]));
        assert_eq!(result.slot_count(), 2);
        assert!(result.slots.iter().all(|s| s.faculty_id == "F1"));
        assert!(result.summary_for("B1", "S9").is_none());
    }

    #[test]
    fn test_batch_never_double_booked_across_subjects() {
        let snap = make_snapshot(
            vec![Batch::new("B1", 30).with_subject("S1").with_subject("S2")],
            vec![
                Subject::new("S1", 2).with_faculty("F1"),
                Subject::new("S2", 2).with_faculty("F2"),
            ],
            vec![Faculty::new("F1"), Faculty::new("F2")],
            vec![Classroom::new("R1", 40), Classroom::new("R2", 40)],
        );

        let result = SlotAssigner::new().assign(&snap, &ids(&["B1"]));
        let s2: Vec<Cell> = result
            .slots
            .iter()
            .filter(|s| s.subject_id == "S2")
            .map(|s| s.cell())
            .collect();
        // S1 took 09:00 and 10:00; S2 follows at 11:00 and 12:00
        assert_eq!(s2, vec![at(Weekday::Monday, 2), at(Weekday::Monday, 3)]);
        assert!(result.violations(&snap).is_empty());
    }

    #[test]
    fn test_quota_ceiling_with_repeated_ids() {
        let snap = make_snapshot(
            vec![Batch::new("B1", 30).with_subject("S1").with_subject("S1")],
            vec![Subject::new("S1", 2).with_faculty("F1")],
            vec![Faculty::new("F1")],
            vec![Classroom::new("R1", 40)],
        );

        let result = SlotAssigner::new().assign(&snap, &ids(&["B1", "B1"]));
        assert_eq!(result.slot_count(), 2);
        assert_eq!(result.summaries.len(), 1);
        assert!(result.violations(&snap).is_empty());
    }

    #[test]
    fn test_grid_exhaustion_under_schedules() {
        let grid = Grid::new(vec![Weekday::Monday], STANDARD_TIME_SLOTS[..2].to_vec());
        let snap = make_snapshot(
            vec![Batch::new("B1", 30).with_subject("S1")],
            vec![Subject::new("S1", 5).with_faculty("F1")],
            vec![Faculty::new("F1")],
            vec![Classroom::new("R1", 40)],
        );

        let result = SlotAssigner::new().with_grid(grid).assign(&snap, &ids(&["B1"]));
        let summary = result.summary_for("B1", "S1").unwrap();
        assert_eq!(summary.scheduled, 2);
        assert_eq!(summary.shortfall(), 3);
        assert_eq!(result.under_scheduled().len(), 1);
    }

    #[test]
    fn test_availability_policy_restricts_cells() {
        let afternoons = Availability::new().with_day(
            Weekday::Tuesday,
            vec![TimeSlot::new(ClockTime::hm(14, 0), ClockTime::hm(17, 0))],
        );
        let snap = make_snapshot(
            vec![Batch::new("B1", 30).with_subject("S1")],
            vec![Subject::new("S1", 2).with_faculty("F1")],
            vec![Faculty::new("F1").with_availability(afternoons)],
            vec![Classroom::new("R1", 40)],
        );

        let relaxed = SlotAssigner::new().assign(&snap, &ids(&["B1"]));
        assert_eq!(relaxed.slots[0].cell(), at(Weekday::Monday, 0));

        let strict = SlotAssigner::new()
            .with_eligibility(AvailabilityWindows)
            .assign(&snap, &ids(&["B1"]));
        assert_eq!(strict.slots[0].cell(), at(Weekday::Tuesday, 4));
        assert_eq!(strict.slots[1].cell(), at(Weekday::Tuesday, 5));
    }

    #[test]
    fn test_deterministic() {
        let snap = make_snapshot(
            vec![
                Batch::new("B1", 30).with_subject("S1").with_subject("S2"),
                Batch::new("B2", 45).with_subject("S2").with_subject("S3"),
            ],
            vec![
                Subject::new("S1", 4).with_faculty("F1").with_faculty("F2"),
                Subject::new("S2", 3).with_faculty("F2"),
                Subject::new("S3", 5).with_faculty("F3").with_faculty("F1"),
            ],
            vec![Faculty::new("F1"), Faculty::new("F2"), Faculty::new("F3")],
            vec![Classroom::new("R1", 40), Classroom::new("R2", 50)],
        );
        let order = ids(&["B1", "B2"]);
        let assigner = SlotAssigner::new();

        let first = assigner.assign(&snap, &order);
        let second = assigner.assign(&snap, &order);
        assert_eq!(first, second);
        assert!(first.violations(&snap).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = SlotAssigner::new().assign(&EntitySnapshot::default(), &[]);
        assert!(result.is_empty());
        assert!(result.summaries.is_empty());
    }
}
