//! Per-run occupancy bookkeeping.
//!
//! Three independent occupancy sets, one per [`ResourceKind`], each holding
//! [`ConflictKey`]s of committed (resource, day, start) triples.
//!
//! A tracker lives for exactly one run. There is no removal: a run only
//! commits forward.

use std::collections::HashSet;

use crate::models::{Cell, ClockTime, Weekday};

/// Resource dimension that must not be double-booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Faculty,
    Classroom,
    Batch,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Faculty,
        ResourceKind::Classroom,
        ResourceKind::Batch,
    ];

    #[inline]
    fn table(self) -> usize {
        match self {
            ResourceKind::Faculty => 0,
            ResourceKind::Classroom => 1,
            ResourceKind::Batch => 2,
        }
    }
}

/// Structured conflict key: (resource, day, start).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConflictKey {
    pub resource_id: String,
    pub day: Weekday,
    pub start: ClockTime,
}

impl ConflictKey {
    pub fn new(resource_id: impl Into<String>, cell: &Cell) -> Self {
        Self {
            resource_id: resource_id.into(),
            day: cell.day,
            start: cell.start(),
        }
    }
}

/// Occupancy of faculty, classrooms and batches over grid cells.
#[derive(Debug, Clone, Default)]
pub struct ConflictTracker {
    tables: [HashSet<ConflictKey>; 3],
}

impl ConflictTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `resource_id` of `kind` is already committed at `cell`.
    pub fn is_occupied(&self, kind: ResourceKind, resource_id: &str, cell: &Cell) -> bool {
        self.contains(kind, &ConflictKey::new(resource_id, cell))
    }

    /// Records a commitment. Returns `false` if it was already recorded.
    pub fn mark_occupied(&mut self, kind: ResourceKind, resource_id: &str, cell: &Cell) -> bool {
        self.tables[kind.table()].insert(ConflictKey::new(resource_id, cell))
    }

    /// Whether `key` is committed for `kind`.
    pub fn contains(&self, kind: ResourceKind, key: &ConflictKey) -> bool {
        self.tables[kind.table()].contains(key)
    }

    /// Number of committed (resource, cell) pairs of one kind.
    pub fn occupied_count(&self, kind: ResourceKind) -> usize {
        self.tables[kind.table()].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::STANDARD_TIME_SLOTS;

    fn cell(day: Weekday, slot: usize) -> Cell {
        Cell::new(day, STANDARD_TIME_SLOTS[slot])
    }

    #[test]
    fn test_mark_and_query() {
        let mut t = ConflictTracker::new();
        let mon9 = cell(Weekday::Monday, 0);
        let mon10 = cell(Weekday::Monday, 1);

        assert!(!t.is_occupied(ResourceKind::Faculty, "F1", &mon9));
        assert!(t.mark_occupied(ResourceKind::Faculty, "F1", &mon9));
        assert!(t.is_occupied(ResourceKind::Faculty, "F1", &mon9));
        assert!(!t.is_occupied(ResourceKind::Faculty, "F1", &mon10));
        assert!(!t.is_occupied(ResourceKind::Faculty, "F2", &mon9));
        // Re-marking is reported
        assert!(!t.mark_occupied(ResourceKind::Faculty, "F1", &mon9));
        assert_eq!(t.occupied_count(ResourceKind::Faculty), 1);
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut t = ConflictTracker::new();
        let at = cell(Weekday::Thursday, 5);
        t.mark_occupied(ResourceKind::Classroom, "X", &at);

        assert!(t.is_occupied(ResourceKind::Classroom, "X", &at));
        assert!(!t.is_occupied(ResourceKind::Faculty, "X", &at));
        assert!(!t.is_occupied(ResourceKind::Batch, "X", &at));
        for kind in ResourceKind::ALL {
            let expected = usize::from(kind == ResourceKind::Classroom);
            assert_eq!(t.occupied_count(kind), expected);
        }
    }

    #[test]
    fn test_no_collision_on_ambiguous_ids() {
        let mut t = ConflictTracker::new();
        t.mark_occupied(ResourceKind::Faculty, "F1-Monday", &cell(Weekday::Monday, 0));
        assert!(!t.is_occupied(ResourceKind::Faculty, "F1", &cell(Weekday::Monday, 0)));
    }

    #[test]
    fn test_structured_key_lookup() {
        let mut t = ConflictTracker::new();
        let tue14 = cell(Weekday::Tuesday, 4);
        t.mark_occupied(ResourceKind::Batch, "B1", &tue14);

        let key = ConflictKey::new("B1", &tue14);
        assert_eq!(key.day, Weekday::Tuesday);
        assert_eq!(key.start.to_string(), "14:00");
        assert!(t.contains(ResourceKind::Batch, &key));
        assert!(!t.contains(ResourceKind::Faculty, &key));
    }
}
