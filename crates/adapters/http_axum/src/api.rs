//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod rooms;
#[allow(clippy::missing_errors_doc)]
pub mod students;

use axum::Router;
use axum::routing::{get, put};
use serde::Serialize;

use hostel_app::ports::{RoomRepository, StudentRepository};

use crate::state::AppState;

/// Confirmation body returned by mutating endpoints.
#[derive(Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build the room and student routes.
pub fn routes<RR, SR>() -> Router<AppState<RR, SR>>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    Router::new()
        // Rooms
        .route(
            "/rooms",
            get(rooms::list::<RR, SR>).post(rooms::create::<RR, SR>),
        )
        .route("/rooms/summary", get(rooms::summary::<RR, SR>))
        .route(
            "/rooms/{id}",
            get(rooms::get::<RR, SR>).delete(rooms::delete::<RR, SR>),
        )
        // Students
        .route(
            "/students",
            get(students::list::<RR, SR>).post(students::create::<RR, SR>),
        )
        .route(
            "/students/fee-summary",
            get(students::fee_summary::<RR, SR>),
        )
        .route(
            "/students/{id}",
            get(students::get::<RR, SR>)
                .put(students::update::<RR, SR>)
                .delete(students::delete::<RR, SR>),
        )
        .route(
            "/students/{id}/fee",
            put(students::update_fee::<RR, SR>),
        )
}
