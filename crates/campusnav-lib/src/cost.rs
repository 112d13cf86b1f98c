//! Time cost of traversing a single edge.
//!
//! Walking edges cost their length at [`AVERAGE_WALK_SPEED`]. Stairs and
//! elevator links between the three modelled floors use fixed transit times
//! instead, adjusted for the travel mode and the time of day.

use chrono::{NaiveTime, Timelike};

use crate::constants::*;
use crate::graph::{to_meters, Floor, Graph, NodeCategory};
use crate::mode::TravelMode;

/// Unordered pair of floors joined by a vertical link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorSpan {
    GroundFirst,
    FirstSecond,
    GroundSecond,
}

impl FloorSpan {
    /// Classify the floors of two endpoints; `None` for unmodelled pairs.
    pub fn between(a: Floor, b: Floor) -> Option<Self> {
        match (a.min(b), a.max(b)) {
            (0, 1) => Some(FloorSpan::GroundFirst),
            (1, 2) => Some(FloorSpan::FirstSecond),
            (0, 2) => Some(FloorSpan::GroundSecond),
            _ => None,
        }
    }

    pub fn stairs_seconds(self) -> f64 {
        match self {
            FloorSpan::GroundFirst => GROUND_FIRST_STAIRS_SECS,
            FloorSpan::FirstSecond => FIRST_SECOND_STAIRS_SECS,
            FloorSpan::GroundSecond => GROUND_SECOND_STAIRS_SECS,
        }
    }

    pub fn elevator_seconds(self) -> f64 {
        match self {
            FloorSpan::GroundFirst => GROUND_FIRST_ELEVATOR_SECS,
            FloorSpan::FirstSecond => FIRST_SECOND_ELEVATOR_SECS,
            FloorSpan::GroundSecond => GROUND_SECOND_ELEVATOR_SECS,
        }
    }

    pub fn vertical_meters(self) -> f64 {
        match self {
            FloorSpan::GroundFirst => GROUND_FIRST_VERTICAL_M,
            FloorSpan::FirstSecond => FIRST_SECOND_VERTICAL_M,
            FloorSpan::GroundSecond => GROUND_SECOND_VERTICAL_M,
        }
    }
}

/// Whether `clock` falls inside the daily elevator break window.
pub fn is_break_time(clock: NaiveTime) -> bool {
    (BREAK_START_HOUR..BREAK_END_HOUR).contains(&clock.hour())
}

/// Seconds needed to walk `pixels` at the average pace.
pub fn walking_seconds(pixels: f64) -> f64 {
    to_meters(pixels) / AVERAGE_WALK_SPEED
}

/// Time in seconds to traverse the edge `a -> b`.
///
/// Forbidden edges (stairs in wheelchair mode) cost `f64::INFINITY`, as do
/// edges touching an unknown node.
pub fn edge_cost(graph: &Graph, a: &str, b: &str, mode: TravelMode, clock: NaiveTime) -> f64 {
    let (Some(from), Some(to)) = (graph.node(a), graph.node(b)) else {
        return f64::INFINITY;
    };

    match (from.category, to.category) {
        (NodeCategory::Stairs, NodeCategory::Stairs) => {
            if mode == TravelMode::Wheelchair {
                return f64::INFINITY;
            }
            if let Some(span) = FloorSpan::between(from.floor, to.floor) {
                return span.stairs_seconds();
            }
        }
        (NodeCategory::Elevator, NodeCategory::Elevator) => {
            if let Some(span) = FloorSpan::between(from.floor, to.floor) {
                let mut seconds = span.elevator_seconds();
                if is_break_time(clock) {
                    seconds += ELEVATOR_BREAK_DELAY;
                }
                if mode == TravelMode::StairsFavoring {
                    seconds += ELEVATOR_STAIRS_MODE_PENALTY;
                }
                return seconds;
            }
        }
        _ => {}
    }

    walking_seconds(from.position.distance_to(&to.position))
}
