//! Read-only aggregates: per-room occupancy and fee totals.

use serde::{Deserialize, Serialize};

use crate::id::RoomId;
use crate::room::Room;

/// Occupancy of a single room, including rooms nobody lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOccupancy {
    pub room_id: RoomId,
    pub room_number: i64,
    pub capacity: u32,
    pub student_count: u32,
    pub is_full: bool,
    pub available_seats: u32,
}

impl RoomOccupancy {
    /// Derive the occupancy of `room` from its current `student_count`.
    #[must_use]
    pub fn new(room: &Room, student_count: u32) -> Self {
        Self {
            room_id: room.id,
            room_number: room.room_number,
            capacity: room.capacity,
            student_count,
            is_full: student_count >= room.capacity,
            available_seats: room.capacity.saturating_sub(student_count),
        }
    }
}

/// Paid/unpaid split across all students.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSummary {
    pub paid: u32,
    pub unpaid: u32,
    pub total: u32,
}

impl FeeSummary {
    #[must_use]
    pub fn from_counts(paid: u32, unpaid: u32) -> Self {
        Self {
            paid,
            unpaid,
            total: paid + unpaid,
        }
    }

    /// Tally the `fee_paid` flags of every student.
    pub fn tally(flags: impl IntoIterator<Item = bool>) -> Self {
        let (paid, unpaid) = flags.into_iter().fold((0, 0), |(paid, unpaid), flag| {
            if flag {
                (paid + 1, unpaid)
            } else {
                (paid, unpaid + 1)
            }
        });
        Self::from_counts(paid, unpaid)
    }
}
