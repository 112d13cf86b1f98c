use chrono::NaiveTime;
use serde::Serialize;
use tracing::debug;

use crate::directions::describe;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::mode::TravelMode;
use crate::search::{find_path, SearchOutcome};

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub mode: TravelMode,
    /// Wall-clock time the trip starts; drives the elevator break window.
    pub clock: NaiveTime,
}

impl RouteRequest {
    /// Request a [`TravelMode::Normal`] route departing at midnight.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            mode: TravelMode::Normal,
            clock: NaiveTime::MIN,
        }
    }

    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn at(mut self, clock: NaiveTime) -> Self {
        self.clock = clock;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub mode: TravelMode,
    pub path: Vec<NodeId>,
    pub total_time_seconds: f64,
    pub total_distance_meters: f64,
    pub directions: Vec<String>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Search for a route and attach turn-by-turn directions.
///
/// Returns [`Error::RouteNotFound`] when the goal is unreachable or only
/// reachable through an edge forbidden in the requested mode.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let outcome = find_path(
        graph,
        &request.start,
        &request.goal,
        request.mode,
        request.clock,
    )?;

    let route = match outcome {
        SearchOutcome::Found(route) if route.total_time_seconds.is_finite() => route,
        SearchOutcome::Found(_) => {
            debug!(
                start = %request.start,
                goal = %request.goal,
                mode = %request.mode,
                "goal only reachable through forbidden edges"
            );
            return Err(route_not_found(request));
        }
        SearchOutcome::NoPathFound => return Err(route_not_found(request)),
    };

    let directions = describe(graph, &route.path);
    Ok(RoutePlan {
        mode: request.mode,
        path: route.path,
        total_time_seconds: route.total_time_seconds,
        total_distance_meters: route.total_distance_meters,
        directions,
    })
}

fn route_not_found(request: &RouteRequest) -> Error {
    Error::RouteNotFound {
        start: request.start.clone(),
        goal: request.goal.clone(),
    }
}
