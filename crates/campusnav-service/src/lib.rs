//! HTTP layer for the campus route planner.
//!
//! Handlers stay thin; all routing and timetable logic lives in
//! `campusnav-lib`:
//!
//! - [`AppState`]: campus map and optional class schedule, loaded once
//! - [`health_live`] and [`health_ready`]: liveness/readiness probes
//! - [`ProblemDetails`]: RFC 9457 error bodies
//! - [`ServiceResponse`]: success bodies with a `content_type` field
//! - [`logging`]: JSON or text `tracing` output
//!
//! # Endpoints
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | GET | `/health/live` | liveness probe |
//! | GET | `/health/ready` | readiness probe (503 on an empty map) |
//! | GET | `/api/nodes` | every node, sorted by name |
//! | POST | `/api/path` | plan a route with directions |
//! | GET | `/api/schedule/{room}` | current occupancy of a room |

mod handlers;
mod health;
pub mod logging;
mod problem;
mod request;
mod response;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handlers::{
    nodes_handler, path_handler, schedule_handler, ApiResponse, NodesResponse, PathResponse,
    RoomStatusResponse, STATUS_UNKNOWN,
};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use problem::{
    from_lib_error, ProblemDetails, ProblemKind, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_ROUTE_NOT_FOUND, PROBLEM_SERVICE_UNAVAILABLE, PROBLEM_UNKNOWN_NODE,
};
pub use request::{
    extract_or_generate_request_id, generate_request_id, PathRequest, ScheduleQuery, Validate,
    REQUEST_ID_HEADER,
};
pub use response::ServiceResponse;
pub use state::{AppState, AppStateError};

/// Build the full router over `state`, with permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/nodes", get(nodes_handler))
        .route("/api/path", post(path_handler))
        .route("/api/schedule/{room}", get(schedule_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
