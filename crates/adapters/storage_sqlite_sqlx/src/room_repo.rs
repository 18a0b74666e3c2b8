//! `SQLite` implementation of [`RoomRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hostel_app::ports::RoomRepository;
use hostel_domain::error::HostelError;
use hostel_domain::id::RoomId;
use hostel_domain::report::RoomOccupancy;
use hostel_domain::room::{NewRoom, Room};

use crate::error::{StorageError, decode_u32};

/// Wrapper for converting database rows into domain [`Room`].
struct Wrapper(Room);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Room> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let room_number: i64 = row.try_get("room_number")?;
        let capacity: i64 = row.try_get("capacity")?;

        Ok(Self(Room {
            id: RoomId::new(id),
            room_number,
            capacity: decode_u32(capacity)?,
        }))
    }
}

/// Wrapper for the grouped occupancy query.
struct OccupancyRow(RoomOccupancy);

impl<'r> FromRow<'r, SqliteRow> for OccupancyRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let Wrapper(room) = Wrapper::from_row(row)?;
        let student_count: i64 = row.try_get("student_count")?;

        Ok(Self(RoomOccupancy::new(&room, decode_u32(student_count)?)))
    }
}

const INSERT: &str = "INSERT INTO rooms (room_number, capacity) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, room_number, capacity FROM rooms WHERE id = ?";
const SELECT_BY_NUMBER: &str = "SELECT id, room_number, capacity FROM rooms WHERE room_number = ?";
const SELECT_ALL: &str = "SELECT id, room_number, capacity FROM rooms ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM rooms WHERE id = ?";
const SELECT_OCCUPANCY: &str = "\
    SELECT rooms.id, rooms.room_number, rooms.capacity, COUNT(students.id) AS student_count \
    FROM rooms \
    LEFT JOIN students ON students.room_id = rooms.id \
    GROUP BY rooms.id \
    ORDER BY rooms.id";

/// `SQLite`-backed room repository.
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomRepository for SqliteRoomRepository {
    fn create(&self, room: NewRoom) -> impl Future<Output = Result<Room, HostelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(room.room_number)
                .bind(i64::from(room.capacity))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(room.with_id(RoomId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, HostelError>> + Send {
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

    fn find_by_number(
        &self,
        room_number: i64,
    ) -> impl Future<Output = Result<Option<Room>, HostelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_NUMBER)
                .bind(room_number)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, HostelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), HostelError>> + Send {
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

    fn occupancy(&self) -> impl Future<Output = Result<Vec<RoomOccupancy>, HostelError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<OccupancyRow> = sqlx::query_as(SELECT_OCCUPANCY)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }
}
