//! # hostel-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for rooms, students and their reports
//!   (`/rooms`, `/rooms/summary`, `/students`, `/students/fee-summary`, …)
//! - Accept input as query-string parameters, the way the browser client
//!   sends it (`POST /rooms?room_number=101`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into status codes: not found → 404,
//!   conflict and validation → 400, storage → 500
//! - Apply a single-origin CORS policy and per-request tracing
//!
//! ## Dependency rule
//! Depends on `hostel-app` (for port traits and services) and `hostel-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
