//! Subject model.
//!
//! A subject carries its weekly session target and the ordered list of
//! faculty allowed to teach it. Faculty order is first-fit priority.

use serde::{Deserialize, Serialize};

/// A taught subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Catalog code (e.g., "CS301").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Owning department.
    pub department: String,
    /// Target number of sessions per week.
    pub classes_per_week: u32,
    /// Session kind.
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    /// Faculty IDs able to teach this subject, in preference order.
    pub assigned_faculty: Vec<String>,
}

/// Session kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    #[default]
    Lecture,
    Lab,
    Tutorial,
}

impl Subject {
    /// Creates a lecture subject with no assigned faculty.
    pub fn new(id: impl Into<String>, classes_per_week: u32) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            name: String::new(),
            department: String::new(),
            classes_per_week,
            subject_type: SubjectType::Lecture,
            assigned_faculty: Vec::new(),
        }
    }

    /// Sets the catalog code (stored uppercase).
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into().trim().to_uppercase();
        self
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the session kind.
    pub fn with_type(mut self, subject_type: SubjectType) -> Self {
        self.subject_type = subject_type;
        self
    }

    /// Appends a faculty member at lowest preference.
    pub fn with_faculty(mut self, faculty_id: impl Into<String>) -> Self {
        self.assigned_faculty.push(faculty_id.into());
        self
    }

    /// Whether anyone is assigned to teach this subject.
    pub fn has_faculty(&self) -> bool {
        !self.assigned_faculty.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_builder() {
        let s = Subject::new("S1", 4)
            .with_code(" cs301 ")
            .with_name("Operating Systems")
            .with_type(SubjectType::Lab)
            .with_faculty("F2")
            .with_faculty("F1");

        assert_eq!(s.code, "CS301");
        assert_eq!(s.classes_per_week, 4);
        assert_eq!(s.subject_type, SubjectType::Lab);
        assert_eq!(s.assigned_faculty, vec!["F2".to_string(), "F1".to_string()]);
        assert!(s.has_faculty());
        assert!(!Subject::new("S2", 1).has_faculty());
    }

    #[test]
    fn test_subject_type_wire_names() {
        let s = Subject::new("S1", 2).with_type(SubjectType::Tutorial);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["type"], "tutorial");
    }
}
