//! Immutable entity snapshot for one generation run.
//!
//! All referenced records are read once, up front, into id → record
//! maps. The classroom catalog keeps its natural (source) order because
//! room selection is first-fit over that order.

use std::collections::HashMap;

use super::{Batch, Classroom, Faculty, Subject};

/// Kind of record that appeared more than once in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Batch,
    Subject,
    Faculty,
    Classroom,
}

/// Read-only view of every entity a run may touch.
///
/// When an ID appears twice the first record wins and the repeat is
/// remembered in [`duplicates`](Self::duplicates).
#[derive(Debug, Clone, Default)]
pub struct EntitySnapshot {
    batches: HashMap<String, Batch>,
    subjects: HashMap<String, Subject>,
    faculty: HashMap<String, Faculty>,
    classrooms: Vec<Classroom>,
    classroom_index: HashMap<String, usize>,
    duplicates: Vec<(EntityKind, String)>,
}

impl EntitySnapshot {
    pub fn new(
        batches: Vec<Batch>,
        subjects: Vec<Subject>,
        faculty: Vec<Faculty>,
        classrooms: Vec<Classroom>,
    ) -> Self {
        let mut duplicates = Vec::new();

        let batches = index_by_id(batches, |b| &b.id, EntityKind::Batch, &mut duplicates);
        let subjects = index_by_id(subjects, |s| &s.id, EntityKind::Subject, &mut duplicates);
        let faculty = index_by_id(faculty, |f| &f.id, EntityKind::Faculty, &mut duplicates);

        let mut classroom_index = HashMap::with_capacity(classrooms.len());
        for (i, room) in classrooms.iter().enumerate() {
            if classroom_index.contains_key(&room.id) {
                duplicates.push((EntityKind::Classroom, room.id.clone()));
            } else {
                classroom_index.insert(room.id.clone(), i);
            }
        }

        Self {
            batches,
            subjects,
            faculty,
            classrooms,
            classroom_index,
            duplicates,
        }
    }

    pub fn batch(&self, id: &str) -> Option<&Batch> {
        self.batches.get(id)
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.get(id)
    }

    pub fn faculty(&self, id: &str) -> Option<&Faculty> {
        self.faculty.get(id)
    }

    /// First classroom with this ID.
    pub fn classroom(&self, id: &str) -> Option<&Classroom> {
        self.classroom_index.get(id).map(|&i| &self.classrooms[i])
    }

    /// Classroom catalog in natural order.
    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    /// IDs seen more than once while building the snapshot.
    pub fn duplicates(&self) -> &[(EntityKind, String)] {
        &self.duplicates
    }

    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn faculty_count(&self) -> usize {
        self.faculty.len()
    }
}

fn index_by_id<T>(
    records: Vec<T>,
    id_of: impl Fn(&T) -> &String,
    kind: EntityKind,
    duplicates: &mut Vec<(EntityKind, String)>,
) -> HashMap<String, T> {
    let mut map = HashMap::with_capacity(records.len());
    for record in records {
        let id = id_of(&record).clone();
        if map.contains_key(&id) {
            duplicates.push((kind, id));
        } else {
            map.insert(id, record);
        }
    }
    map
}
