//! Storage port: repository traits for persistence.
//!
//! Repositories are plain data access: they never decide whether a write is
//! allowed. Capacity, uniqueness and vacancy rules live in
//! [`AllocationService`](crate::services::allocation_service::AllocationService).

use std::future::Future;

use hostel_domain::error::HostelError;
use hostel_domain::id::{RoomId, StudentId};
use hostel_domain::report::{FeeSummary, RoomOccupancy};
use hostel_domain::room::{NewRoom, Room};
use hostel_domain::student::{Student, StudentDetails, StudentListing};

/// Repository for persisting and querying [`Room`]s.
pub trait RoomRepository {
    /// Store a new room and return it with its assigned id.
    fn create(&self, room: NewRoom) -> impl Future<Output = Result<Room, HostelError>> + Send;

    /// Get a room by its unique identifier.
    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, HostelError>> + Send;

    /// Get a room by its business key.
    fn find_by_number(
        &self,
        room_number: i64,
    ) -> impl Future<Output = Result<Option<Room>, HostelError>> + Send;

    /// Get all rooms, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, HostelError>> + Send;

    /// Delete a room by its unique identifier.
    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), HostelError>> + Send;

    /// Occupancy of every room, including empty ones, ordered by room id.
    fn occupancy(&self) -> impl Future<Output = Result<Vec<RoomOccupancy>, HostelError>> + Send;
}

/// Repository for persisting and querying [`Student`]s.
pub trait StudentRepository {
    /// Store a new student and return it with its assigned id.
    fn create(
        &self,
        details: StudentDetails,
    ) -> impl Future<Output = Result<Student, HostelError>> + Send;

    /// Get a student by its unique identifier.
    fn get_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, HostelError>> + Send;

    /// Get all students joined with their room number, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<StudentListing>, HostelError>> + Send;

    /// Count the students assigned to `room_id`, ignoring `excluding` if set.
    fn count_in_room(
        &self,
        room_id: RoomId,
        excluding: Option<StudentId>,
    ) -> impl Future<Output = Result<u32, HostelError>> + Send;

    /// Overwrite every mutable field of an existing student.
    fn update(&self, student: Student)
    -> impl Future<Output = Result<Student, HostelError>> + Send;

    /// Delete a student by its unique identifier.
    fn delete(&self, id: StudentId) -> impl Future<Output = Result<(), HostelError>> + Send;

    /// Paid/unpaid totals across all students.
    fn fee_summary(&self) -> impl Future<Output = Result<FeeSummary, HostelError>> + Send;
}
