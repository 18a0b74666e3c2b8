//! Axum router assembly.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use hostel_app::ports::{RoomRepository, StudentRepository};

use crate::api::Message;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the API routes at the root, plus a banner at `/` and a `/health`
/// probe. Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level, and a [`CorsLayer`] that only admits `allowed_origin`.
pub fn build<RR, SR>(state: AppState<RR, SR>, allowed_origin: HeaderValue) -> Router
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(banner))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn banner() -> Json<Message> {
    Json(Message::new("Hostel Room Allocation System API is running"))
}

async fn health_check() -> &'static str {
    "OK"
}
