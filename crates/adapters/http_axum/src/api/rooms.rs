//! JSON handlers for rooms.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hostel_app::ports::{RoomRepository, StudentRepository};
use hostel_domain::id::RoomId;
use hostel_domain::report::RoomOccupancy;
use hostel_domain::room::{NewRoom, Room};

use crate::api::Message;
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for creating a room.
#[derive(Deserialize)]
pub struct CreateRoomParams {
    pub room_number: i64,
    pub capacity: Option<i64>,
}

/// Confirmation body for a created room.
#[derive(Serialize)]
pub struct RoomCreated {
    pub message: &'static str,
    pub room: Room,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Room>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Room>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<RoomCreated>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<Message>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the summary endpoint.
pub enum SummaryResponse {
    Ok(Json<Vec<RoomOccupancy>>),
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /rooms`
pub async fn list<RR, SR>(State(state): State<AppState<RR, SR>>) -> Result<ListResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let rooms = state.allocation.list_rooms().await?;
    Ok(ListResponse::Ok(Json(rooms)))
}

/// `GET /rooms/{id}`
pub async fn get<RR, SR>(
    State(state): State<AppState<RR, SR>>,
    Path(id): Path<RoomId>,
) -> Result<GetResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let room = state.allocation.get_room(id).await?;
    Ok(GetResponse::Ok(Json(room)))
}

/// `POST /rooms?room_number=&capacity=`
pub async fn create<RR, SR>(
    State(state): State<AppState<RR, SR>>,
    Query(params): Query<CreateRoomParams>,
) -> Result<CreateResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let new_room = NewRoom::new(params.room_number, params.capacity)?;
    let room = state.allocation.create_room(new_room).await?;
    Ok(CreateResponse::Ok(Json(RoomCreated {
        message: "Room added successfully",
        room,
    })))
}

/// `DELETE /rooms/{id}`
pub async fn delete<RR, SR>(
    State(state): State<AppState<RR, SR>>,
    Path(id): Path<RoomId>,
) -> Result<DeleteResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    state.allocation.delete_room(id).await?;
    Ok(DeleteResponse::Ok(Json(Message::new(format!(
        "Room with id {id} deleted successfully"
    )))))
}

/// `GET /rooms/summary`
pub async fn summary<RR, SR>(
    State(state): State<AppState<RR, SR>>,
) -> Result<SummaryResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let occupancy = state.allocation.room_summary().await?;
    Ok(SummaryResponse::Ok(Json(occupancy)))
}
