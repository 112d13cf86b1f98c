//! Remaining-time estimates used to order the search frontier.

use tracing::trace;

use crate::constants::MAX_WALK_SPEED;
use crate::cost::FloorSpan;
use crate::graph::{to_meters, Graph};

/// Straight-line estimate for a node on the goal's floor.
pub fn same_floor_estimate(graph: &Graph, node: &str, goal: &str) -> f64 {
    to_meters(graph.distance(node, goal)) / MAX_WALK_SPEED
}

/// Estimate for a node on a different floor than the goal.
///
/// Combines horizontal meters with the assumed vertical separation of the
/// floor pair. Floor pairs without a configured separation estimate to `0.0`.
pub fn cross_floor_estimate(graph: &Graph, node: &str, goal: &str) -> f64 {
    let (Some(node_floor), Some(goal_floor)) = (graph.floor(node), graph.floor(goal)) else {
        return f64::INFINITY;
    };

    let Some(span) = FloorSpan::between(node_floor, goal_floor) else {
        trace!(node, goal, node_floor, goal_floor, "no vertical separation for floor pair");
        return 0.0;
    };

    let horizontal = to_meters(graph.distance(node, goal));
    horizontal.hypot(span.vertical_meters()) / MAX_WALK_SPEED
}

/// Estimate the remaining travel time in seconds from `node` to `goal`.
pub fn estimate(graph: &Graph, node: &str, goal: &str) -> f64 {
    match (graph.floor(node), graph.floor(goal)) {
        (Some(a), Some(b)) if a == b => same_floor_estimate(graph, node, goal),
        (Some(_), Some(_)) => cross_floor_estimate(graph, node, goal),
        _ => f64::INFINITY,
    }
}
