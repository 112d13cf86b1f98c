//! Endpoint handlers. Each one validates, calls into `campusnav-lib` and
//! shapes the JSON reply.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Local};
use serde::Serialize;
use tracing::{info, warn};

use campusnav_lib::{
    node_listing, plan_route, weekday_name, NodeListing, RoomStatusReport, RouteRequest,
    RouteStep, RouteSummary, TravelMode,
};

use crate::request::{extract_or_generate_request_id, PathRequest, ScheduleQuery, Validate};
use crate::{from_lib_error, AppState, ProblemDetails, ServiceResponse};

/// Status reported for rooms when no schedule is loaded.
pub const STATUS_UNKNOWN: &str = "unknown";

/// HTTP response, either a success payload or an RFC 9457 problem.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success(ServiceResponse<T>),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiResponse::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            ApiResponse::Error(problem) => problem.into_response(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NodesResponse {
    pub count: usize,
    pub nodes: Vec<NodeListing>,
}

#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub mode: TravelMode,
    pub path: Vec<String>,
    pub path_details: Vec<RouteStep>,
    pub total_time_seconds: f64,
    pub total_distance_meters: f64,
    pub directions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoomStatusResponse {
    pub room: String,
    pub day: String,
    pub time: String,
    #[serde(flatten)]
    pub report: RoomStatusReport,
}

/// `GET /api/nodes`
pub async fn nodes_handler(State(state): State<AppState>) -> ApiResponse<NodesResponse> {
    let nodes = node_listing(state.graph());
    ApiResponse::Success(ServiceResponse::new(NodesResponse {
        count: nodes.len(),
        nodes,
    }))
}

/// `POST /api/path`
pub async fn path_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<PathRequest>,
) -> ApiResponse<PathResponse> {
    let request_id = extract_or_generate_request_id(&headers);

    info!(
        request_id = %request_id,
        start = %request.start,
        end = %request.end,
        mode = ?request.mode,
        time = ?request.time,
        "handling path request"
    );

    if let Err(problem) = request.validate(&request_id) {
        return ApiResponse::Error(*problem);
    }

    let graph = state.graph();
    let route_request = RouteRequest::new(request.start.trim(), request.end.trim())
        .with_mode(request.travel_mode())
        .at(request.clock_or(Local::now().time()));

    let summary = plan_route(graph, &route_request)
        .and_then(|plan| RouteSummary::from_plan(graph, &plan).map(|summary| (plan, summary)));
    let (plan, summary) = match summary {
        Ok(planned) => planned,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "path request failed");
            return ApiResponse::Error(from_lib_error(&e, &request_id));
        }
    };

    info!(
        request_id = %request_id,
        hops = plan.hop_count(),
        seconds = plan.total_time_seconds,
        "path computed"
    );

    ApiResponse::Success(ServiceResponse::new(PathResponse {
        mode: plan.mode,
        path: plan.path,
        path_details: summary.steps,
        total_time_seconds: plan.total_time_seconds,
        total_distance_meters: plan.total_distance_meters,
        directions: plan.directions,
    }))
}

/// `GET /api/schedule/{room}`
pub async fn schedule_handler(
    State(state): State<AppState>,
    Path(room): Path<String>,
    Query(query): Query<ScheduleQuery>,
    headers: HeaderMap,
) -> ApiResponse<RoomStatusResponse> {
    let request_id = extract_or_generate_request_id(&headers);

    if let Err(problem) = query.validate(&request_id) {
        return ApiResponse::Error(*problem);
    }

    let now = Local::now();
    let weekday = query.weekday().unwrap_or_else(|| now.weekday());
    let time = query.clock().unwrap_or_else(|| now.time());

    let report = match state.schedule() {
        Some(schedule) => RoomStatusReport::from(&schedule.room_status(&room, weekday, time)),
        None => RoomStatusReport {
            status: STATUS_UNKNOWN.to_string(),
            details: None,
        },
    };

    info!(
        request_id = %request_id,
        room = %room,
        status = %report.status,
        "room status resolved"
    );

    ApiResponse::Success(ServiceResponse::new(RoomStatusResponse {
        room,
        day: weekday_name(weekday).to_string(),
        time: time.format("%H:%M").to_string(),
        report,
    }))
}
