//! End-to-end tests for the full hosteld stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`; no TCP port is bound.

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, StatusCode};
use hostel_adapter_http_axum::router;
use hostel_adapter_http_axum::state::AppState;
use hostel_adapter_storage_sqlite_sqlx::{Config, SqliteRoomRepository, SqliteStudentRepository};
use hostel_app::services::allocation_service::AllocationService;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config::in_memory()
        .build()
        .await
        .expect("in-memory database should initialise");

    let pool = db.pool().clone();
    let allocation = AllocationService::new(
        SqliteRoomRepository::new(pool.clone()),
        SqliteStudentRepository::new(pool),
    );

    router::build(
        AppState::new(allocation),
        HeaderValue::from_static("http://localhost:3000"),
    )
}

async fn call(app: &axum::Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn add_room(app: &axum::Router, room_number: i64, capacity: i64) -> i64 {
    let (status, body) = call(
        app,
        Method::POST,
        &format!("/rooms?room_number={room_number}&capacity={capacity}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["room"]["id"].as_i64().unwrap()
}

async fn add_student(app: &axum::Router, name: &str, room_id: i64) -> (StatusCode, Value) {
    call(
        app,
        Method::POST,
        &format!("/students?name={name}&semester=3rd&fee_paid=false&room_id={room_id}"),
    )
    .await
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_second_room_with_same_number() {
    let app = app().await;
    add_room(&app, 101, 2).await;

    let (status, body) = call(&app, Method::POST, "/rooms?room_number=101&capacity=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "conflict");

    let (_, rooms) = call(&app, Method::GET, "/rooms").await;
    assert_eq!(rooms.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_get_room_by_id() {
    let app = app().await;
    let id = add_room(&app, 204, 3).await;

    let (status, body) = call(&app, Method::GET, &format!("/rooms/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["room_number"], 204);
    assert_eq!(body["capacity"], 3);
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_room() {
    let app = app().await;

    let (status, body) = call(&app, Method::DELETE, "/rooms/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn should_reject_malformed_room_id() {
    let app = app().await;

    let (status, _) = call(&app, Method::GET, "/rooms/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Capacity
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_third_student_in_room_of_two() {
    let app = app().await;
    let room = add_room(&app, 101, 2).await;
    assert_eq!(add_student(&app, "Ana", room).await.0, StatusCode::OK);
    assert_eq!(add_student(&app, "Ben", room).await.0, StatusCode::OK);

    let (status, body) = add_student(&app, "Cai", room).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "conflict");
    assert!(body["error"].as_str().unwrap().contains("is already full"));

    let (_, students) = call(&app, Method::GET, "/students").await;
    assert_eq!(students.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_return_not_found_when_student_room_missing() {
    let app = app().await;

    let (status, body) = add_student(&app, "Ana", 7).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn should_reject_blank_student_name() {
    let app = app().await;
    let room = add_room(&app, 101, 2).await;

    let (status, body) = add_student(&app, "%20%20", room).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_admit_only_free_seats_under_concurrent_creates() {
    let app = app().await;
    let room = add_room(&app, 301, 3).await;
    assert_eq!(add_student(&app, "Resident", room).await.0, StatusCode::OK);

    let mut handles = Vec::new();
    for i in 0..10 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            add_student(&app, &format!("Applicant{i}"), room).await.0
        }));
    }
    let mut accepted = 0;
    for handle in handles {
        if handle.await.unwrap() == StatusCode::OK {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 2);
    let (_, summary) = call(&app, Method::GET, "/rooms/summary").await;
    assert_eq!(summary[0]["student_count"], 3);
    assert_eq!(summary[0]["is_full"], true);
}

// ---------------------------------------------------------------------------
// Referential integrity
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_refuse_room_delete_until_emptied() {
    let app = app().await;
    let room = add_room(&app, 101, 2).await;
    let (_, created) = add_student(&app, "Ana", room).await;
    let student = created["student"]["id"].as_i64().unwrap();

    let (status, body) = call(&app, Method::DELETE, &format!("/rooms/{room}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "conflict");

    let (status, body) = call(&app, Method::DELETE, &format!("/students/{student}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("Student with id {student} deleted successfully")
    );

    let (status, _) = call(&app, Method::DELETE, &format!("/rooms/{room}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(&app, Method::GET, &format!("/rooms/{room}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_summarise_full_and_empty_rooms() {
    let app = app().await;
    let full = add_room(&app, 101, 2).await;
    add_room(&app, 102, 2).await;
    add_student(&app, "Ana", full).await;
    add_student(&app, "Ben", full).await;

    let (status, summary) = call(&app, Method::GET, "/rooms/summary").await;
    assert_eq!(status, StatusCode::OK);
    let rows = summary.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["room_number"], 101);
    assert_eq!(rows[0]["student_count"], 2);
    assert_eq!(rows[0]["is_full"], true);
    assert_eq!(rows[1]["room_number"], 102);
    assert_eq!(rows[1]["student_count"], 0);
    assert_eq!(rows[1]["is_full"], false);
    assert_eq!(rows[1]["available_seats"], 2);
}

#[tokio::test]
async fn should_report_fee_totals_after_toggling() {
    let app = app().await;
    let room = add_room(&app, 101, 4).await;
    let (_, ana) = add_student(&app, "Ana", room).await;
    add_student(&app, "Ben", room).await;
    add_student(&app, "Cai", room).await;
    let ana = ana["student"]["id"].as_i64().unwrap();

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/students/{ana}/fee?fee_paid=true"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student"]["fee_paid"], true);

    let (_, summary) = call(&app, Method::GET, "/students/fee-summary").await;
    assert_eq!(summary["paid"], 1);
    assert_eq!(summary["unpaid"], 2);
    assert_eq!(summary["total"], 3);

    let (_, unpaid) = call(&app, Method::GET, "/students?fee_paid=false").await;
    assert_eq!(unpaid.as_array().unwrap().len(), 2);
    let (_, found) = call(&app, Method::GET, "/students?search=an").await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["name"], "Ana");
}

#[tokio::test]
async fn should_report_zero_fee_totals_when_empty() {
    let app = app().await;

    let (status, summary) = call(&app, Method::GET, "/students/fee-summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["paid"], 0);
    assert_eq!(summary["unpaid"], 0);
    assert_eq!(summary["total"], 0);
}

// ---------------------------------------------------------------------------
// Reassignment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_refuse_move_into_full_room_but_allow_resave_in_place() {
    let app = app().await;
    let full = add_room(&app, 101, 2).await;
    let other = add_room(&app, 102, 2).await;
    let (_, ana) = add_student(&app, "Ana", full).await;
    add_student(&app, "Ben", full).await;
    let (_, cai) = add_student(&app, "Cai", other).await;
    let ana = ana["student"]["id"].as_i64().unwrap();
    let cai = cai["student"]["id"].as_i64().unwrap();

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/students/{cai}?name=Cai&semester=3rd&fee_paid=false&room_id={full}"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "conflict");

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/students/{ana}?name=Ana%20Lima&semester=4th&fee_paid=true&room_id={full}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student updated successfully");
    assert_eq!(body["student"]["name"], "Ana Lima");
    assert_eq!(body["student"]["semester"], "4th");

    let (_, fetched) = call(&app, Method::GET, &format!("/students/{cai}")).await;
    assert_eq!(fetched["room_id"], other);
}
