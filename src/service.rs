//! Generation entry point.
//!
//! [`TimetableService::generate`] runs one request end to end:
//!
//! 1. validate the request (no I/O yet),
//! 2. load one entity snapshot,
//! 3. audit it and log findings,
//! 4. run the assigner with a fresh conflict tracker,
//! 5. hand header and drafts to the sink.
//!
//! The current time is a parameter so default names and years are
//! reproducible.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use tracing::{info, instrument, warn};

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::models::{GenerationRequest, NewTimetable, ResultSet, Timetable};
use crate::scheduler::{AvailabilityWindows, SlotAssigner};
use crate::store::{EntitySource, TimetableSink};
use crate::validation::{audit_snapshot, validate_request};

/// What a successful run returns.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The stored timetable (status `draft`).
    pub timetable: Timetable,
    /// Number of slots stored.
    pub slot_count: usize,
    /// Drafts and per-pair summaries as produced by the assigner.
    pub result: ResultSet,
}

/// Orchestrates snapshot loading, assignment and persistence.
pub struct TimetableService {
    source: Arc<dyn EntitySource>,
    sink: Arc<dyn TimetableSink>,
    config: GeneratorConfig,
    assigner: SlotAssigner,
}

impl TimetableService {
    /// Creates a service. The assigner honours availability windows only
    /// when `config.enforce_availability` is set.
    pub fn new(
        source: Arc<dyn EntitySource>,
        sink: Arc<dyn TimetableSink>,
        config: GeneratorConfig,
    ) -> Self {
        let assigner = if config.enforce_availability {
            SlotAssigner::new().with_eligibility(AvailabilityWindows)
        } else {
            SlotAssigner::new()
        };
        Self {
            source,
            sink,
            config,
            assigner,
        }
    }

    /// Replaces the assigner (e.g., to plug in a custom eligibility policy).
    pub fn with_assigner(mut self, assigner: SlotAssigner) -> Self {
        self.assigner = assigner;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates and stores a timetable for `request`.
    ///
    /// # Errors
    /// - [`GenerationError::Validation`] before any I/O if the request is malformed.
    /// - [`GenerationError::Snapshot`] if entities cannot be read.
    /// - [`GenerationError::Persistence`] if the sink fails; nothing is
    ///   retried here.
    #[instrument(
        skip(self, request),
        target = "timetable",
        fields(batches = request.batches.len(), semester = request.semester)
    )]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        created_by: &str,
        now: DateTime<Utc>,
    ) -> Result<GenerationOutcome, GenerationError> {
        validate_request(request, &self.config).map_err(GenerationError::Validation)?;

        let snapshot = self
            .source
            .load_snapshot(&request.batches)
            .await
            .map_err(|e| GenerationError::Snapshot(format!("{e:#}")))?;

        for finding in audit_snapshot(&snapshot, &request.batches) {
            warn!(kind = ?finding.kind, "{}", finding.message);
        }

        let result = self.assigner.assign(&snapshot, &request.batches);

        let header = NewTimetable {
            name: non_blank(request.name.as_deref()).unwrap_or_else(|| self.default_name(now)),
            semester: request.semester,
            academic_year: non_blank(request.academic_year.as_deref())
                .unwrap_or_else(|| now.year().to_string()),
            created_by: created_by.to_string(),
            batches: request.batches.clone(),
            created_at: now,
        };

        let timetable = self
            .sink
            .persist(header, result.slots.clone())
            .await
            .map_err(|e| GenerationError::Persistence(format!("{e:#}")))?;

        let slot_count = result.slot_count();
        info!(
            timetable_id = %timetable.id,
            slot_count,
            under_scheduled = result.under_scheduled().len(),
            "timetable generated"
        );

        Ok(GenerationOutcome {
            timetable,
            slot_count,
            result,
        })
    }

    fn default_name(&self, now: DateTime<Utc>) -> String {
        format!("{} {}", self.config.default_name_prefix, now.format("%Y-%m-%d"))
    }
}

/// Trimmed value, or `None` when absent or blank.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use chrono::TimeZone;

    fn service(config: GeneratorConfig) -> TimetableService {
        let store = Arc::new(InMemoryStore::new());
        TimetableService::new(store.clone(), store, config)
    }

    #[test]
    fn test_default_name_uses_now() {
        let svc = service(GeneratorConfig::default());
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 23, 59, 0).unwrap();
        assert_eq!(svc.default_name(now), "Timetable 2026-10-19");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" Fall ")), Some("Fall".to_string()));
    }

    #[test]
    fn test_policy_follows_config() {
        let relaxed = service(GeneratorConfig::default());
        assert_eq!(relaxed.assigner.eligibility().name(), "unrestricted");

        let strict = service(GeneratorConfig {
            enforce_availability: true,
            ..GeneratorConfig::default()
        });
        assert_eq!(strict.assigner.eligibility().name(), "availability-windows");
    }
}
