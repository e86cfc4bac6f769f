//! Classroom model.
//!
//! Rooms are considered in catalog order; the first room that seats the
//! batch and is free wins.

use serde::{Deserialize, Serialize};

use super::{Availability, Cell};

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Room label (e.g., "A-101").
    pub room_number: String,
    /// Room classification.
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Seats.
    pub capacity: u32,
    /// Owning department, if any.
    pub department: Option<String>,
    /// When the room can be booked. Empty = any time.
    #[serde(rename = "availability_schedule")]
    pub availability: Availability,
}

/// Room classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    #[default]
    #[serde(rename = "Lecture Hall")]
    LectureHall,
    Lab,
    #[serde(rename = "Tutorial Room")]
    TutorialRoom,
    Auditorium,
}

impl Classroom {
    /// Creates a lecture hall.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            room_number: String::new(),
            room_type: RoomType::LectureHall,
            capacity,
            department: None,
            availability: Availability::new(),
        }
    }

    pub fn with_room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    pub fn with_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Whether the room seats `students`.
    #[inline]
    pub fn seats(&self, students: u32) -> bool {
        self.capacity >= students
    }

    /// Whether the declared availability admits `cell`.
    pub fn is_available_at(&self, cell: &Cell) -> bool {
        self.availability.is_available(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Weekday, STANDARD_TIME_SLOTS};

    #[test]
    fn test_classroom_seats() {
        let r = Classroom::new("R1", 40).with_room_number("A-101");
        assert!(r.seats(40));
        assert!(r.seats(1));
        assert!(!r.seats(41));
        assert_eq!(r.room_type, RoomType::LectureHall);
    }

    #[test]
    fn test_room_type_wire_names() {
        let r = Classroom::new("R1", 20).with_type(RoomType::TutorialRoom);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["type"], "Tutorial Room");
    }

    #[test]
    fn test_availability_schedule_wire_name() {
        let r = Classroom::new("R1", 20).with_availability(
            Availability::new().with_day(Weekday::Friday, vec![STANDARD_TIME_SLOTS[0]]),
        );
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["availability_schedule"][0]["day"], "Friday");
        assert_eq!(json["availability_schedule"][0]["timeSlots"][0]["start"], "09:00");
    }
}
