//! RFC 9457 problem bodies (`application/problem+json`).

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use campusnav_lib::Error as LibError;

pub const PROBLEM_UNKNOWN_NODE: &str = "/problems/unknown-node";
pub const PROBLEM_ROUTE_NOT_FOUND: &str = "/problems/route-not-found";
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";
pub const PROBLEM_SERVICE_UNAVAILABLE: &str = "/problems/service-unavailable";

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Failure classes the service reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    InvalidRequest,
    UnknownNode,
    RouteNotFound,
    /// Map or schedule data missing on disk.
    ServiceUnavailable,
    Internal,
}

impl ProblemKind {
    pub const fn type_uri(self) -> &'static str {
        match self {
            ProblemKind::InvalidRequest => PROBLEM_INVALID_REQUEST,
            ProblemKind::UnknownNode => PROBLEM_UNKNOWN_NODE,
            ProblemKind::RouteNotFound => PROBLEM_ROUTE_NOT_FOUND,
            ProblemKind::ServiceUnavailable => PROBLEM_SERVICE_UNAVAILABLE,
            ProblemKind::Internal => PROBLEM_INTERNAL_ERROR,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            ProblemKind::InvalidRequest => "Invalid Request",
            ProblemKind::UnknownNode => "Unknown Node",
            ProblemKind::RouteNotFound => "Route Not Found",
            ProblemKind::ServiceUnavailable => "Service Unavailable",
            ProblemKind::Internal => "Internal Error",
        }
    }

    pub const fn status(self) -> StatusCode {
        match self {
            ProblemKind::InvalidRequest => StatusCode::BAD_REQUEST,
            ProblemKind::UnknownNode | ProblemKind::RouteNotFound => StatusCode::NOT_FOUND,
            ProblemKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ProblemKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn of(error: &LibError) -> Self {
        match error {
            LibError::InvalidNode { .. } => ProblemKind::UnknownNode,
            LibError::RouteNotFound { .. } => ProblemKind::RouteNotFound,
            LibError::UnknownMode { .. } => ProblemKind::InvalidRequest,
            LibError::MapNotFound { .. } | LibError::ScheduleNotFound { .. } => {
                ProblemKind::ServiceUnavailable
            }
            _ => ProblemKind::Internal,
        }
    }
}

/// Error body returned by every endpoint.
///
/// `instance` carries the request id so a failing call can be found in the logs.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: String,
    pub status: u16,
    pub detail: Option<String>,
    pub instance: Option<String>,
    pub content_type: String,
}

impl ProblemDetails {
    pub fn new(kind: ProblemKind, detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            type_uri: kind.type_uri().to_string(),
            title: kind.title().to_string(),
            status: kind.status().as_u16(),
            detail: Some(detail.into()),
            instance: Some(request_id.into()),
            content_type: PROBLEM_CONTENT_TYPE.to_string(),
        }
    }

    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(ProblemKind::InvalidRequest, detail, request_id)
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)], Json(self)).into_response()
    }
}

/// Problem body for a library failure; the detail is the error's own message.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    ProblemDetails::new(ProblemKind::of(error), error.to_string(), request_id)
}
