//! Scheduling grid: weekdays, clock times, time slots, and cells.
//!
//! The grid is the fixed, ordered enumeration of schedulable cells.
//! Iteration is **days outer, time slots inner**. The assigner is
//! first-fit, so this order decides which cells fill first.
//!
//! # Standard Grid
//!
//! | Days | Monday … Saturday (6) |
//! |------|-----------------------|
//! | Slots | 09-10, 10-11, 11-12, 12-13, 14-15, 15-16, 16-17 (7) |
//!
//! The 13:00–14:00 lunch hour is not a slot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Teaching day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All teaching days in calendar order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Zero-based position within the week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day name as exchanged with persistence ("Monday", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a `"HH:MM"` clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time '{0}', expected HH:MM")]
pub struct ParseClockTimeError(String);

/// Wall-clock time of day with minute resolution.
///
/// Serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Creates a clock time. Callers must pass `hour < 24`, `minute < 60`.
    pub const fn hm(hour: u16, minute: u16) -> Self {
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    pub fn hour(self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(self) -> u16 {
        self.minutes % 60
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockTimeError(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(err)?;
        if m.len() != 2 {
            return Err(err());
        }
        let hour: u16 = h.parse().map_err(|_| err())?;
        let minute: u16 = m.parse().map_err(|_| err())?;
        if hour >= 24 || minute >= 60 {
            return Err(err());
        }
        Ok(Self::hm(hour, minute))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseClockTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A time interval [start, end) within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
}

/// The seven teaching hours of the standard grid.
pub const STANDARD_TIME_SLOTS: [TimeSlot; 7] = [
    TimeSlot::new(ClockTime::hm(9, 0), ClockTime::hm(10, 0)),
    TimeSlot::new(ClockTime::hm(10, 0), ClockTime::hm(11, 0)),
    TimeSlot::new(ClockTime::hm(11, 0), ClockTime::hm(12, 0)),
    TimeSlot::new(ClockTime::hm(12, 0), ClockTime::hm(13, 0)),
    TimeSlot::new(ClockTime::hm(14, 0), ClockTime::hm(15, 0)),
    TimeSlot::new(ClockTime::hm(15, 0), ClockTime::hm(16, 0)),
    TimeSlot::new(ClockTime::hm(16, 0), ClockTime::hm(17, 0)),
];

impl TimeSlot {
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether `other` lies entirely within this slot.
    pub fn covers(&self, other: &TimeSlot) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether two slots overlap (touching ends do not overlap).
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// One (day, time slot) unit of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub day: Weekday,
    pub slot: TimeSlot,
}

impl Cell {
    pub fn new(day: Weekday, slot: TimeSlot) -> Self {
        Self { day, slot }
    }

    #[inline]
    pub fn start(&self) -> ClockTime {
        self.slot.start
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.slot)
    }
}

/// Ordered enumeration of schedulable cells.
///
/// Generation always uses [`Grid::standard`]. Custom grids exist so the
/// algorithm can be exercised on smaller calendars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    days: Vec<Weekday>,
    slots: Vec<TimeSlot>,
}

impl Grid {
    /// Creates a grid from explicit days and slots, kept in the given order.
    pub fn new(days: Vec<Weekday>, slots: Vec<TimeSlot>) -> Self {
        Self { days, slots }
    }

    /// The 6 × 7 teaching week.
    pub fn standard() -> Self {
        Self::new(Weekday::ALL.to_vec(), STANDARD_TIME_SLOTS.to_vec())
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.days.len() * self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells in scheduling order: days outer, slots inner.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.days
            .iter()
            .flat_map(move |&day| self.slots.iter().map(move |&slot| Cell::new(day, slot)))
    }

    /// Position of a cell in iteration order, if it belongs to this grid.
    pub fn cell_index(&self, cell: &Cell) -> Option<usize> {
        let d = self.days.iter().position(|&day| day == cell.day)?;
        let s = self.slots.iter().position(|slot| *slot == cell.slot)?;
        Some(d * self.slots.len() + s)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}
