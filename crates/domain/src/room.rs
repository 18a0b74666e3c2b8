//! Rooms: an allocatable unit with a fixed, stored capacity.

use serde::{Deserialize, Serialize};

use crate::error::{ConflictError, HostelError, ValidationError};
use crate::id::RoomId;

/// Capacity applied when a room is created without an explicit one.
pub const DEFAULT_CAPACITY: u32 = 2;

/// A persisted room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub room_number: i64,
    pub capacity: u32,
}

impl Room {
    /// Check that one more student fits, given the current `occupants`.
    ///
    /// Callers reassigning an existing student must exclude that student
    /// from `occupants`.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError::RoomFull`] when `occupants` already reaches
    /// the stored capacity.
    pub fn ensure_vacancy(&self, occupants: u32) -> Result<(), HostelError> {
        if occupants >= self.capacity {
            return Err(ConflictError::RoomFull {
                room_id: self.id,
                capacity: self.capacity,
            }
            .into());
        }
        Ok(())
    }

    /// Check that nobody is assigned to this room, so it can be removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError::RoomOccupied`] when `occupants` is non-zero.
    pub fn ensure_vacant(&self, occupants: u32) -> Result<(), HostelError> {
        if occupants > 0 {
            return Err(ConflictError::RoomOccupied {
                room_id: self.id,
                occupants,
            }
            .into());
        }
        Ok(())
    }
}

/// A room that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub room_number: i64,
    pub capacity: u32,
}

impl NewRoom {
    /// Validate raw input and build a [`NewRoom`].
    ///
    /// `capacity` defaults to [`DEFAULT_CAPACITY`] when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::Validation`] when `room_number` is not positive
    /// or `capacity` is below 1.
    pub fn new(room_number: i64, capacity: Option<i64>) -> Result<Self, HostelError> {
        let capacity = match capacity {
            None => DEFAULT_CAPACITY,
            Some(value) => {
                u32::try_from(value).map_err(|_| ValidationError::NonPositiveCapacity(value))?
            }
        };
        let new_room = Self {
            room_number,
            capacity,
        };
        new_room.validate()?;
        Ok(new_room)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::Validation`] when `room_number` is not positive
    /// or `capacity` is zero.
    pub fn validate(&self) -> Result<(), HostelError> {
        if self.room_number <= 0 {
            return Err(ValidationError::NonPositiveRoomNumber(self.room_number).into());
        }
        if self.capacity == 0 {
            return Err(ValidationError::NonPositiveCapacity(0).into());
        }
        Ok(())
    }

    /// Attach the id assigned by the store.
    #[must_use]
    pub fn with_id(self, id: RoomId) -> Room {
        Room {
            id,
            room_number: self.room_number,
            capacity: self.capacity,
        }
    }
}
