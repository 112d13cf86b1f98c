//! Request types, validation and request identifiers.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{NaiveTime, Weekday};
use http::HeaderMap;
use serde::{Deserialize, Serialize};

use campusnav_lib::{parse_clock, TravelMode};

use crate::ProblemDetails;

/// Validation trait for request types.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// `request_id` fills the `instance` field of any returned problem.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Body of `POST /api/path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRequest {
    #[serde(default)]
    pub start: String,

    #[serde(default)]
    pub end: String,

    /// Navigation mode label, parsed leniently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Departure time as `HH:MM`; the service clock is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl PathRequest {
    pub fn travel_mode(&self) -> TravelMode {
        self.mode
            .as_deref()
            .map(TravelMode::from_label_lenient)
            .unwrap_or_default()
    }

    /// Requested departure time, or `fallback` when none was sent.
    ///
    /// Call after [`Validate::validate`]; an unparseable time also yields `fallback`.
    pub fn clock_or(&self, fallback: NaiveTime) -> NaiveTime {
        self.time.as_deref().and_then(parse_clock).unwrap_or(fallback)
    }
}

impl Validate for PathRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.start.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'start' field is required and cannot be empty",
                request_id,
            )));
        }

        if self.end.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'end' field is required and cannot be empty",
                request_id,
            )));
        }

        if let Some(time) = &self.time {
            if parse_clock(time).is_none() {
                return Err(Box::new(ProblemDetails::bad_request(
                    format!("The 'time' field must be HH:MM, got '{}'", time),
                    request_id,
                )));
            }
        }

        Ok(())
    }
}

/// Query string of `GET /api/schedule/{room}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleQuery {
    /// English weekday name; today when absent.
    pub day: Option<String>,

    /// `HH:MM`; the service clock when absent.
    pub at: Option<String>,
}

impl ScheduleQuery {
    pub fn weekday(&self) -> Option<Weekday> {
        self.day.as_deref().and_then(|day| day.trim().parse().ok())
    }

    pub fn clock(&self) -> Option<NaiveTime> {
        self.at.as_deref().and_then(parse_clock)
    }
}

impl Validate for ScheduleQuery {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if let Some(day) = &self.day {
            if self.weekday().is_none() {
                return Err(Box::new(ProblemDetails::bad_request(
                    format!("Unknown weekday '{}'", day),
                    request_id,
                )));
            }
        }

        if let Some(at) = &self.at {
            if self.clock().is_none() {
                return Err(Box::new(ProblemDetails::bad_request(
                    format!("The 'at' parameter must be HH:MM, got '{}'", at),
                    request_id,
                )));
            }
        }

        Ok(())
    }
}

/// Header carrying a caller-supplied correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Use the caller's `X-Request-ID` when present, otherwise mint one.
pub fn extract_or_generate_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(generate_request_id)
}

/// Timestamp-based request id, `req-<hex nanos>`.
pub fn generate_request_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();

    format!("req-{:x}", timestamp)
}
