//! Faculty model.

use serde::{Deserialize, Serialize};

use super::{Availability, Cell};

/// Default weekly teaching cap (sessions).
pub const DEFAULT_WORKLOAD: u32 = 20;

/// A faculty member.
///
/// `availability` and `workload` are informational: the default
/// generator never consults them. See
/// [`AvailabilityWindows`](crate::scheduler::AvailabilityWindows) for the
/// opt-in variant that honours availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    /// Maximum sessions per week.
    pub workload: u32,
    /// When this person can teach. Empty = any time.
    #[serde(rename = "availability_schedule")]
    pub availability: Availability,
}

impl Faculty {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            department: String::new(),
            workload: DEFAULT_WORKLOAD,
            availability: Availability::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_workload(mut self, workload: u32) -> Self {
        self.workload = workload;
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Whether the declared availability admits `cell`.
    pub fn is_available_at(&self, cell: &Cell) -> bool {
        self.availability.is_available(cell)
    }
}
