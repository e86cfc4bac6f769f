//! Generation request.

use serde::{Deserialize, Serialize};

/// What a caller asks the generator to build.
///
/// Transport-agnostic: `batches` order is the scheduling priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Batch IDs, highest priority first.
    pub batches: Vec<String>,
    /// Defaults to the current year.
    #[serde(default)]
    pub academic_year: Option<String>,
    pub semester: u8,
    /// Defaults to a date-stamped name.
    #[serde(default)]
    pub name: Option<String>,
}

impl GenerationRequest {
    pub fn new(batches: Vec<String>, semester: u8) -> Self {
        Self {
            batches,
            academic_year: None,
            semester,
            name: None,
        }
    }

    pub fn with_academic_year(mut self, academic_year: impl Into<String>) -> Self {
        self.academic_year = Some(academic_year.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_json() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"batches":["B1","B2"],"academicYear":"2026-27","semester":5}"#,
        )
        .unwrap();

        assert_eq!(req.batches, vec!["B1".to_string(), "B2".to_string()]);
        assert_eq!(req.academic_year.as_deref(), Some("2026-27"));
        assert_eq!(req.semester, 5);
        assert!(req.name.is_none());
    }
}
