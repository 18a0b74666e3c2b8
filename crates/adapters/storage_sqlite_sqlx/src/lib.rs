//! # hostel-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hostel-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle (bounded acquire and busy timeouts)
//! - Run database migrations (using sqlx embedded migrations); this is the
//!   persistence bootstrap and is safe to run on every startup
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `hostel-app` (for port traits) and `hostel-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod room_repo;
pub mod student_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use room_repo::SqliteRoomRepository;
pub use student_repo::SqliteStudentRepository;
