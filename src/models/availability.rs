//! Availability schedules for faculty and classrooms.
//!
//! An availability schedule lists, per weekday, the time windows during
//! which a resource may be booked.
//!
//! # Precedence
//! An empty schedule means "always available". Otherwise a cell is
//! available iff some window on the cell's day covers the cell's slot.
//! A day with no entry is unavailable.

use serde::{Deserialize, Serialize};

use super::{Cell, TimeSlot, Weekday};

/// Windows open on a single weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: Weekday,
    #[serde(rename = "timeSlots")]
    pub time_slots: Vec<TimeSlot>,
}

/// Weekly availability (day → time windows).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability {
    pub days: Vec<DayAvailability>,
}

impl Availability {
    /// Creates an empty schedule (always available).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds windows for a day. Repeated days accumulate.
    pub fn with_day(mut self, day: Weekday, time_slots: Vec<TimeSlot>) -> Self {
        self.days.push(DayAvailability { day, time_slots });
        self
    }

    /// Whether no restriction has been declared.
    pub fn is_unrestricted(&self) -> bool {
        self.days.is_empty()
    }

    /// Whether the resource may be booked at `cell`.
    pub fn is_available(&self, cell: &Cell) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        self.days
            .iter()
            .filter(|d| d.day == cell.day)
            .flat_map(|d| d.time_slots.iter())
            .any(|window| window.covers(&cell.slot))
    }

    /// Total declared window length in minutes, summed over all days.
    pub fn declared_minutes(&self) -> u32 {
        self.days
            .iter()
            .flat_map(|d| d.time_slots.iter())
            .map(|w| u32::from(w.duration_minutes()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, STANDARD_TIME_SLOTS};

    fn window(from: u16, to: u16) -> TimeSlot {
        TimeSlot::new(ClockTime::hm(from, 0), ClockTime::hm(to, 0))
    }

    #[test]
    fn test_empty_is_always_available() {
        let a = Availability::new();
        assert!(a.is_unrestricted());
        assert!(a.is_available(&Cell::new(Weekday::Saturday, STANDARD_TIME_SLOTS[6])));
    }

    #[test]
    fn test_window_covers_cell() {
        let a = Availability::new().with_day(Weekday::Monday, vec![window(9, 12)]);

        assert!(a.is_available(&Cell::new(Weekday::Monday, STANDARD_TIME_SLOTS[0])));
        assert!(a.is_available(&Cell::new(Weekday::Monday, STANDARD_TIME_SLOTS[2])));
        // 12:00-13:00 falls outside the morning window
        assert!(!a.is_available(&Cell::new(Weekday::Monday, STANDARD_TIME_SLOTS[3])));
        // Tuesday not declared
        assert!(!a.is_available(&Cell::new(Weekday::Tuesday, STANDARD_TIME_SLOTS[0])));
    }

    #[test]
    fn test_repeated_day_accumulates() {
        let a = Availability::new()
            .with_day(Weekday::Friday, vec![window(9, 10)])
            .with_day(Weekday::Friday, vec![window(16, 17)]);

        assert!(a.is_available(&Cell::new(Weekday::Friday, STANDARD_TIME_SLOTS[0])));
        assert!(a.is_available(&Cell::new(Weekday::Friday, STANDARD_TIME_SLOTS[6])));
        assert!(!a.is_available(&Cell::new(Weekday::Friday, STANDARD_TIME_SLOTS[4])));
        assert_eq!(a.declared_minutes(), 120);
    }
}
