//! `SQLite` implementation of [`StudentRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hostel_app::ports::StudentRepository;
use hostel_domain::error::HostelError;
use hostel_domain::id::{RoomId, StudentId};
use hostel_domain::report::FeeSummary;
use hostel_domain::student::{Student, StudentDetails, StudentListing};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Student`].
struct Wrapper(Student);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Student> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let room_id: i64 = row.try_get("room_id")?;

        Ok(Self(Student {
            id: StudentId::new(id),
            name: row.try_get("name")?,
            semester: row.try_get("semester")?,
            fee_paid: row.try_get("fee_paid")?,
            room_id: RoomId::new(room_id),
        }))
    }
}

/// Wrapper for the student/room join.
struct ListingRow(StudentListing);

impl<'r> FromRow<'r, SqliteRow> for ListingRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let Wrapper(student) = Wrapper::from_row(row)?;
        let room_number: Option<i64> = row.try_get("room_number")?;

        Ok(Self(StudentListing {
            id: student.id,
            name: student.name,
            semester: student.semester,
            fee_paid: student.fee_paid,
            room_id: student.room_id,
            room_number,
        }))
    }
}

const INSERT: &str = "INSERT INTO students (name, semester, fee_paid, room_id) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, name, semester, fee_paid, room_id FROM students WHERE id = ?";
const SELECT_ALL_WITH_ROOM: &str = "\
    SELECT students.id, students.name, students.semester, students.fee_paid, \
           students.room_id, rooms.room_number \
    FROM students \
    LEFT JOIN rooms ON students.room_id = rooms.id \
    ORDER BY students.id";
const COUNT_IN_ROOM: &str =
    "SELECT COUNT(*) FROM students WHERE room_id = ? AND (? IS NULL OR id <> ?)";
const UPDATE: &str =
    "UPDATE students SET name = ?, semester = ?, fee_paid = ?, room_id = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM students WHERE id = ?";
const FEE_COUNTS: &str = "\
    SELECT COALESCE(SUM(CASE WHEN fee_paid THEN 1 ELSE 0 END), 0), \
           COALESCE(SUM(CASE WHEN fee_paid THEN 0 ELSE 1 END), 0) \
    FROM students";

/// `SQLite`-backed student repository.
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StudentRepository for SqliteStudentRepository {
    fn create(
        &self,
        details: StudentDetails,
    ) -> impl Future<Output = Result<Student, HostelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&details.name)
                .bind(&details.semester)
                .bind(details.fee_paid)
                .bind(details.room_id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(details.with_id(StudentId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, HostelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<StudentListing>, HostelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<ListingRow> = sqlx::query_as(SELECT_ALL_WITH_ROOM)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn count_in_room(
        &self,
        room_id: RoomId,
        excluding: Option<StudentId>,
    ) -> impl Future<Output = Result<u32, HostelError>> + Send {
        let pool = self.pool.clone();
        let excluding = excluding.map(StudentId::get);
        async move {
            let count: i64 = sqlx::query_scalar(COUNT_IN_ROOM)
                .bind(room_id.get())
                .bind(excluding)
                .bind(excluding)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(u32::try_from(count).map_err(StorageError::from)?)
        }
    }

    fn update(
        &self,
        student: Student,
    ) -> impl Future<Output = Result<Student, HostelError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&student.name)
                .bind(&student.semester)
                .bind(student.fee_paid)
                .bind(student.room_id.get())
                .bind(student.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(student)
        }
    }

    fn delete(&self, id: StudentId) -> impl Future<Output = Result<(), HostelError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn fee_summary(&self) -> impl Future<Output = Result<FeeSummary, HostelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let (paid, unpaid): (i64, i64) = sqlx::query_as(FEE_COUNTS)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            let paid = u32::try_from(paid).map_err(StorageError::from)?;
            let unpaid = u32::try_from(unpaid).map_err(StorageError::from)?;
            Ok(FeeSummary::from_counts(paid, unpaid))
        }
    }
}
