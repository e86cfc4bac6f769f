//! Timetabling domain models.
//!
//! Entity records are owned by an external store and treated as read-only
//! inputs for the duration of one run. Output types ([`SlotDraft`],
//! [`ResultSet`]) are produced by the assigner and handed back to the store.
//!
//! # Domain Mappings
//!
//! | u-timetable | Role in a run |
//! |-------------|---------------|
//! | Batch | Consumer of sessions; one booking per cell |
//! | Subject | Weekly session target + ordered faculty preference list |
//! | Faculty | Instructor; one booking per cell |
//! | Classroom | Room; one booking per cell, capacity-bound |
//! | Cell | (day, time slot) unit of the grid |
//! | SlotDraft | One committed session |

mod availability;
mod batch;
mod classroom;
mod faculty;
mod grid;
mod request;
mod result;
mod snapshot;
mod subject;
mod timetable;

pub use availability::{Availability, DayAvailability};
pub use batch::Batch;
pub use classroom::{Classroom, RoomType};
pub use faculty::{Faculty, DEFAULT_WORKLOAD};
pub use grid::{
    Cell, ClockTime, Grid, ParseClockTimeError, TimeSlot, Weekday, STANDARD_TIME_SLOTS,
};
pub use request::GenerationRequest;
pub use result::{ResultSet, SubjectSummary, Violation, ViolationType};
pub use snapshot::{EntityKind, EntitySnapshot};
pub use subject::{Subject, SubjectType};
pub use timetable::{NewTimetable, SlotDraft, Timetable, TimetableSlot, TimetableStatus};
