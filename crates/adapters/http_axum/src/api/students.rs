//! JSON handlers for students and fee tracking.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hostel_app::ports::{RoomRepository, StudentRepository};
use hostel_domain::error::HostelError;
use hostel_domain::id::{RoomId, StudentId};
use hostel_domain::report::FeeSummary;
use hostel_domain::student::{Student, StudentDetails, StudentFilter, StudentListing};

use crate::api::Message;
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for creating or updating a student.
#[derive(Deserialize)]
pub struct StudentParams {
    pub name: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub fee_paid: bool,
    pub room_id: RoomId,
}

impl StudentParams {
    fn into_details(self) -> Result<StudentDetails, HostelError> {
        StudentDetails::builder(self.room_id)
            .name(self.name)
            .semester(self.semester)
            .fee_paid(self.fee_paid)
            .build()
    }
}

/// Query parameters for the fee endpoint.
#[derive(Deserialize)]
pub struct FeeParams {
    pub fee_paid: bool,
}

/// Confirmation body for a created or updated student.
#[derive(Serialize)]
pub struct StudentSaved {
    pub message: &'static str,
    pub student: Student,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<StudentListing>>),
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
    Ok(Json<Student>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create, update and fee endpoints.
pub enum SaveResponse {
    Ok(Json<StudentSaved>),
}

impl IntoResponse for SaveResponse {
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

/// Possible responses from the fee summary endpoint.
pub enum FeeSummaryResponse {
    Ok(Json<FeeSummary>),
}

impl IntoResponse for FeeSummaryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /students?fee_paid=&search=`
pub async fn list<RR, SR>(
    State(state): State<AppState<RR, SR>>,
    Query(filter): Query<StudentFilter>,
) -> Result<ListResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let students = state.allocation.list_students(&filter).await?;
    Ok(ListResponse::Ok(Json(students)))
}

/// `GET /students/{id}`
pub async fn get<RR, SR>(
    State(state): State<AppState<RR, SR>>,
    Path(id): Path<StudentId>,
) -> Result<GetResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let student = state.allocation.get_student(id).await?;
    Ok(GetResponse::Ok(Json(student)))
}

/// `POST /students?name=&semester=&fee_paid=&room_id=`
pub async fn create<RR, SR>(
    State(state): State<AppState<RR, SR>>,
    Query(params): Query<StudentParams>,
) -> Result<SaveResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let student = state
        .allocation
        .create_student(params.into_details()?)
        .await?;
    Ok(SaveResponse::Ok(Json(StudentSaved {
        message: "Student added successfully",
        student,
    })))
}

/// `PUT /students/{id}?name=&semester=&fee_paid=&room_id=`
pub async fn update<RR, SR>(
    State(state): State<AppState<RR, SR>>,
    Path(id): Path<StudentId>,
    Query(params): Query<StudentParams>,
) -> Result<SaveResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let student = state
        .allocation
        .update_student(id, params.into_details()?)
        .await?;
    Ok(SaveResponse::Ok(Json(StudentSaved {
        message: "Student updated successfully",
        student,
    })))
}

/// `DELETE /students/{id}`
pub async fn delete<RR, SR>(
    State(state): State<AppState<RR, SR>>,
    Path(id): Path<StudentId>,
) -> Result<DeleteResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    state.allocation.delete_student(id).await?;
    Ok(DeleteResponse::Ok(Json(Message::new(format!(
        "Student with id {id} deleted successfully"
    )))))
}

/// `GET /students/fee-summary`
pub async fn fee_summary<RR, SR>(
    State(state): State<AppState<RR, SR>>,
) -> Result<FeeSummaryResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let summary = state.allocation.fee_summary().await?;
    Ok(FeeSummaryResponse::Ok(Json(summary)))
}

/// `PUT /students/{id}/fee?fee_paid=`
pub async fn update_fee<RR, SR>(
    State(state): State<AppState<RR, SR>>,
    Path(id): Path<StudentId>,
    Query(params): Query<FeeParams>,
) -> Result<SaveResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    let student = state
        .allocation
        .update_fee_status(id, params.fee_paid)
        .await?;
    Ok(SaveResponse::Ok(Json(StudentSaved {
        message: "Fee status updated successfully",
        student,
    })))
}
