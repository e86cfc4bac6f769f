//! Student batch model.
//!
//! A batch is a cohort of students sharing a semester and an enrollment
//! list. Enrollment order is the subject scheduling priority within the
//! batch.

use serde::{Deserialize, Serialize};

/// A student batch (cohort).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Unique batch identifier.
    pub id: String,
    /// Display name (e.g., "CSE-2024-A").
    pub name: String,
    /// Semester number (1-8).
    pub semester: u8,
    /// Head count. Rooms must seat at least this many.
    pub students_count: u32,
    /// Owning department.
    pub department: String,
    /// Enrolled subject IDs, in scheduling priority order.
    pub subjects: Vec<String>,
}

impl Batch {
    /// Creates a batch with no enrollments.
    pub fn new(id: impl Into<String>, students_count: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            semester: 1,
            students_count,
            department: String::new(),
            subjects: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the semester.
    pub fn with_semester(mut self, semester: u8) -> Self {
        self.semester = semester;
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Enrolls a subject (appended at lowest priority).
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subjects.push(subject_id.into());
        self
    }

    /// Whether the batch is enrolled in a subject.
    pub fn is_enrolled(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s == subject_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_builder() {
        let b = Batch::new("B1", 60)
            .with_name("CSE-A")
            .with_semester(3)
            .with_department("CSE")
            .with_subject("S2")
            .with_subject("S1");

        assert_eq!(b.id, "B1");
        assert_eq!(b.students_count, 60);
        assert_eq!(b.semester, 3);
        assert_eq!(b.subjects, vec!["S2".to_string(), "S1".to_string()]);
        assert!(b.is_enrolled("S1"));
        assert!(!b.is_enrolled("S3"));
    }
}
