//! Allocation service: use-cases for rooms, students and their reports.
//!
//! Every mutating use-case runs its existence, uniqueness and capacity
//! checks and its write while holding a single write gate, so two callers
//! can never both observe a free seat and both take it.

use tokio::sync::Mutex;

use hostel_domain::error::{ConflictError, HostelError, NotFoundError};
use hostel_domain::id::{RoomId, StudentId};
use hostel_domain::report::{FeeSummary, RoomOccupancy};
use hostel_domain::room::{NewRoom, Room};
use hostel_domain::student::{Student, StudentDetails, StudentFilter, StudentListing};

use crate::ports::{RoomRepository, StudentRepository};

fn room_not_found(id: RoomId) -> HostelError {
    NotFoundError {
        entity: "Room",
        id: id.to_string(),
    }
    .into()
}

fn student_not_found(id: StudentId) -> HostelError {
    NotFoundError {
        entity: "Student",
        id: id.to_string(),
    }
    .into()
}

/// Application service for room allocation.
pub struct AllocationService<RR, SR> {
    rooms: RR,
    students: SR,
    write_gate: Mutex<()>,
}

impl<RR, SR> AllocationService<RR, SR>
where
    RR: RoomRepository + Sync,
    SR: StudentRepository + Sync,
{
    /// Create a new service backed by the given repositories.
    pub fn new(rooms: RR, students: SR) -> Self {
        Self {
            rooms,
            students,
            write_gate: Mutex::new(()),
        }
    }

    /// Create a room with a unique room number.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::Validation`] if invariants fail,
    /// [`HostelError::Conflict`] if the room number is taken, or a storage
    /// error propagated from the repository.
    #[tracing::instrument(skip(self, room), fields(room_number = room.room_number))]
    pub async fn create_room(&self, room: NewRoom) -> Result<Room, HostelError> {
        room.validate()?;
        let _guard = self.write_gate.lock().await;

        if self.rooms.find_by_number(room.room_number).await?.is_some() {
            tracing::info!("room number already taken");
            return Err(ConflictError::DuplicateRoomNumber(room.room_number).into());
        }

        let created = self.rooms.create(room).await?;
        tracing::info!(room_id = %created.id, capacity = created.capacity, "room created");
        Ok(created)
    }

    /// Look up a room by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::NotFound`] when no room with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_room(&self, id: RoomId) -> Result<Room, HostelError> {
        self.rooms
            .get_by_id(id)
            .await?
            .ok_or_else(|| room_not_found(id))
    }

    /// List all rooms.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, HostelError> {
        self.rooms.get_all().await
    }

    /// Delete a room nobody is assigned to.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::NotFound`] when the room does not exist,
    /// [`HostelError::Conflict`] while students still live in it, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_room(&self, id: RoomId) -> Result<(), HostelError> {
        let _guard = self.write_gate.lock().await;

        let room = self.get_room(id).await?;
        let occupants = self.students.count_in_room(id, None).await?;
        if let Err(err) = room.ensure_vacant(occupants) {
            tracing::info!(occupants, "refusing to delete occupied room");
            return Err(err);
        }

        self.rooms.delete(id).await?;
        tracing::info!("room deleted");
        Ok(())
    }

    /// Occupancy of every room, including empty ones.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn room_summary(&self) -> Result<Vec<RoomOccupancy>, HostelError> {
        self.rooms.occupancy().await
    }

    /// Assign a new student to a room with a free seat.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::Validation`] if invariants fail,
    /// [`HostelError::NotFound`] if the room does not exist,
    /// [`HostelError::Conflict`] if the room is full, or a storage error.
    #[tracing::instrument(skip(self, details), fields(room_id = %details.room_id))]
    pub async fn create_student(&self, details: StudentDetails) -> Result<Student, HostelError> {
        details.validate()?;
        let _guard = self.write_gate.lock().await;

        self.ensure_seat(details.room_id, None).await?;

        let created = self.students.create(details).await?;
        tracing::info!(student_id = %created.id, "student assigned");
        Ok(created)
    }

    /// Look up a student by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::NotFound`] when no student with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_student(&self, id: StudentId) -> Result<Student, HostelError> {
        self.students
            .get_by_id(id)
            .await?
            .ok_or_else(|| student_not_found(id))
    }

    /// List students with their room number, narrowed by `filter`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_students(
        &self,
        filter: &StudentFilter,
    ) -> Result<Vec<StudentListing>, HostelError> {
        let mut listings = self.students.get_all().await?;
        listings.retain(|listing| filter.matches(listing));
        Ok(listings)
    }

    /// Overwrite a student's details, possibly moving them to another room.
    ///
    /// The student's own seat never counts against the target room, so
    /// re-saving into the current room always fits.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::Validation`] if invariants fail,
    /// [`HostelError::NotFound`] if the student or the target room does not
    /// exist, [`HostelError::Conflict`] if the target room has no seat left
    /// for them, or a storage error.
    #[tracing::instrument(skip(self, details), fields(room_id = %details.room_id))]
    pub async fn update_student(
        &self,
        id: StudentId,
        details: StudentDetails,
    ) -> Result<Student, HostelError> {
        details.validate()?;
        let _guard = self.write_gate.lock().await;

        let current = self.get_student(id).await?;
        self.ensure_seat(details.room_id, Some(id)).await?;

        let updated = self.students.update(current.apply(details)).await?;
        tracing::info!("student updated");
        Ok(updated)
    }

    /// Remove a student, freeing their seat.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::NotFound`] when the student does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_student(&self, id: StudentId) -> Result<(), HostelError> {
        let _guard = self.write_gate.lock().await;

        self.get_student(id).await?;
        self.students.delete(id).await?;
        tracing::info!("student deleted");
        Ok(())
    }

    /// Paid/unpaid totals across all students.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn fee_summary(&self) -> Result<FeeSummary, HostelError> {
        self.students.fee_summary().await
    }

    /// Set only the fee flag of a student.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::NotFound`] when the student does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn update_fee_status(
        &self,
        id: StudentId,
        fee_paid: bool,
    ) -> Result<Student, HostelError> {
        let _guard = self.write_gate.lock().await;

        let mut student = self.get_student(id).await?;
        student.fee_paid = fee_paid;
        self.students.update(student).await
    }

    /// Check that `room_id` exists and has a seat for one more student,
    /// not counting `moving` when they already live there.
    async fn ensure_seat(
        &self,
        room_id: RoomId,
        moving: Option<StudentId>,
    ) -> Result<(), HostelError> {
        let room = self.get_room(room_id).await?;
        let occupants = self.students.count_in_room(room_id, moving).await?;
        if let Err(err) = room.ensure_vacancy(occupants) {
            tracing::warn!(occupants, capacity = room.capacity, "room is already full");
            return Err(err);
        }
        Ok(())
    }
}
