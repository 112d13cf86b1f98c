//! End-to-end HTTP tests against the fixture building.

use std::collections::HashMap;
use std::path::PathBuf;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use campusnav_lib::{build_graph, Graph};
use campusnav_service::{router, AppState, PROBLEM_ROUTE_NOT_FOUND, PROBLEM_UNKNOWN_NODE};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

fn fixture_state() -> AppState {
    let dir = fixtures_dir();
    let schedule = dir.join("schedule.json");
    AppState::load(dir.join("campus_map.json"), Some(schedule.as_path()))
        .expect("fixture state loads")
}

fn server(state: AppState) -> TestServer {
    TestServer::new(router(state)).expect("test server starts")
}

fn names(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v.as_str().expect("string"))
        .collect()
}

#[tokio::test]
async fn health_endpoints_report_loaded_map() {
    let server = server(fixture_state());

    let live = server.get("/health/live").await;
    live.assert_status_ok();
    assert_eq!(live.json::<Value>()["status"], "ok");

    let ready = server.get("/health/ready").await;
    ready.assert_status_ok();
    let body = ready.json::<Value>();
    assert_eq!(body["nodes_loaded"], 22);
    assert_eq!(body["schedule_loaded"], true);
}

#[tokio::test]
async fn ready_is_unavailable_for_empty_map() {
    let empty: Graph = build_graph(Vec::new(), HashMap::new());
    let server = server(AppState::from_parts(empty, None));

    let response = server.get("/health/ready").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.json::<Value>()["status"]
        .as_str()
        .unwrap()
        .starts_with("not_ready"));
}

#[tokio::test]
async fn nodes_are_listed_by_name() {
    let server = server(fixture_state());

    let response = server.get("/api/nodes").await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["count"], 22);
    assert_eq!(body["content_type"], "application/json");
    let first = &body["nodes"][0];
    assert_eq!(first["name"], "C0-1");
    assert_eq!(first["type"], "corridor");
    assert_eq!(first["floor"], 0);
}

#[tokio::test]
async fn path_uses_stairs_in_normal_mode() {
    let server = server(fixture_state());

    let response = server
        .post("/api/path")
        .json(&json!({"start": "Reception", "end": "Room 318A", "time": "10:00"}))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(
        names(&body["path"]),
        [
            "Reception",
            "C0-1",
            "Stairs G",
            "Stairs 1",
            "Stairs 2",
            "C2-1",
            "Room 318A"
        ]
    );
    let seconds = body["total_time_seconds"].as_f64().unwrap();
    assert!((seconds - 109.1529).abs() < 1e-3, "got {seconds}");
    assert_eq!(body["path_details"][2]["type"], "stairs");
    assert_eq!(body["path_details"][6]["floor"], 2);
    assert_eq!(body["directions"][0], "Start at Reception");
    assert_eq!(body["mode"], "normal");
}

#[tokio::test]
async fn wheelchair_path_pays_break_window_delay() {
    let server = server(fixture_state());

    let morning = server
        .post("/api/path")
        .json(&json!({"start": "Reception", "end": "Room 318A", "mode": "wheelchair", "time": "10:00"}))
        .await
        .json::<Value>();
    let lunch = server
        .post("/api/path")
        .json(&json!({"start": "Reception", "end": "Room 318A", "mode": "wheelchair", "time": "13:30"}))
        .await
        .json::<Value>();

    assert!(names(&morning["path"]).contains(&"Elevator G"));
    assert!(!names(&morning["path"]).contains(&"Stairs G"));
    let morning_seconds = morning["total_time_seconds"].as_f64().unwrap();
    let lunch_seconds = lunch["total_time_seconds"].as_f64().unwrap();
    assert!((morning_seconds - 193.159).abs() < 1e-2, "got {morning_seconds}");
    assert!((lunch_seconds - morning_seconds - 60.0).abs() < 1e-6);
}

#[tokio::test]
async fn stairs_mode_is_reported_as_stairs() {
    let server = server(fixture_state());

    for label in ["stairs", "energySaver"] {
        let response = server
            .post("/api/path")
            .json(&json!({"start": "Room 101", "end": "Cafeteria", "mode": label}))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["mode"], "stairs", "{label}");
    }
}

#[tokio::test]
async fn unknown_mode_falls_back_to_normal() {
    let server = server(fixture_state());

    let response = server
        .post("/api/path")
        .json(&json!({"start": "Room 101", "end": "Cafeteria", "mode": "jetpack"}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["mode"], "normal");
}

#[tokio::test]
async fn blank_start_is_rejected() {
    let server = server(fixture_state());

    let response = server
        .post("/api/path")
        .json(&json!({"start": " ", "end": "Cafeteria"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.header("content-type"),
        HeaderValue::from_static("application/problem+json")
    );
}

#[tokio::test]
async fn malformed_time_is_rejected() {
    let server = server(fixture_state());

    let response = server
        .post("/api/path")
        .json(&json!({"start": "Room 101", "end": "Cafeteria", "time": "after lunch"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["detail"]
        .as_str()
        .unwrap()
        .contains("after lunch"));
}

#[tokio::test]
async fn unknown_node_is_not_found_with_request_id() {
    let server = server(fixture_state());

    let response = server
        .post("/api/path")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-42"),
        )
        .json(&json!({"start": "Gymnasium", "end": "Cafeteria"}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["type"], PROBLEM_UNKNOWN_NODE);
    assert_eq!(body["instance"], "trace-42");
}

#[tokio::test]
async fn isolated_room_is_route_not_found() {
    let server = server(fixture_state());

    let response = server
        .post("/api/path")
        .json(&json!({"start": "Reception", "end": "Storage"}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["type"], PROBLEM_ROUTE_NOT_FOUND);
}

#[tokio::test]
async fn schedule_reports_occupied_room() {
    let server = server(fixture_state());

    let response = server
        .get("/api/schedule/318A")
        .add_query_param("day", "Monday")
        .add_query_param("at", "09:30")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["room"], "318A");
    assert_eq!(body["day"], "Monday");
    assert_eq!(body["time"], "09:30");
    assert_eq!(body["status"], "Occupied");
    assert_eq!(body["details"]["course"], "Data Structures");
    assert_eq!(body["details"]["time"], "09:00 - 10:30");
}

#[tokio::test]
async fn schedule_counts_the_last_minute_of_a_class() {
    let server = server(fixture_state());

    let response = server
        .get("/api/schedule/318A")
        .add_query_param("day", "Monday")
        .add_query_param("at", "10:30")
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "Occupied");
}

#[tokio::test]
async fn schedule_reports_available_room() {
    let server = server(fixture_state());

    let response = server
        .get("/api/schedule/Lab%201A")
        .add_query_param("day", "Tuesday")
        .add_query_param("at", "12:00")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "Available");
    assert!(body["details"].is_null());
}

#[tokio::test]
async fn schedule_is_unknown_without_timetable() {
    let graph = fixture_state().graph().clone();
    let server = server(AppState::from_parts(graph, None));

    let response = server.get("/api/schedule/318A").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "unknown");
    assert!(body["details"].is_null());
}

#[tokio::test]
async fn schedule_rejects_bad_weekday() {
    let server = server(fixture_state());

    let response = server
        .get("/api/schedule/318A")
        .add_query_param("day", "Caturday")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
