//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HostelError`] via `From`, so `?` works from the storage adapter all the
//! way up to the HTTP handlers.

use std::fmt;

use crate::id::RoomId;

/// Top-level error returned by every use-case.
#[derive(Debug, thiserror::Error)]
pub enum HostelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HostelError {
    /// Stable, machine-readable category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Category of a [`HostelError`], for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Storage,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Malformed input rejected before touching the store.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("capacity must be at least 1, got {0}")]
    NonPositiveCapacity(i64),

    #[error("room number must be positive, got {0}")]
    NonPositiveRoomNumber(i64),
}

/// A referenced record does not exist.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A uniqueness or capacity rule would be broken by the requested change.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("room number {0} already exists")]
    DuplicateRoomNumber(i64),

    #[error("cannot delete room {room_id}: room occupied by {occupants} student(s)")]
    RoomOccupied { room_id: RoomId, occupants: u32 },

    #[error("room {room_id} is already full (capacity {capacity})")]
    RoomFull { room_id: RoomId, capacity: u32 },
}
