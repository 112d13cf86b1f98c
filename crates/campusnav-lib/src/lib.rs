//! Campus navigation library entry points.
//!
//! This crate loads the building map into memory, prices edges for each
//! travel mode, runs the best-first route search and turns the resulting
//! path into walking directions. Higher-level consumers (CLI, HTTP service)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

pub mod constants;
pub mod cost;
pub mod directions;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod map;
pub mod mode;
pub mod output;
pub mod routing;
pub mod schedule;
pub mod search;

pub use cost::edge_cost;
pub use directions::describe;
pub use error::{Error, Result};
pub use graph::{build_graph, to_meters, Floor, Graph, Node, NodeCategory, NodeId, Position};
pub use heuristic::estimate;
pub use map::{load_map, parse_map, resolve_map_path};
pub use mode::TravelMode;
pub use output::{
    node_listing, NodeListing, OccupancyDetails, RoomStatusReport, RouteRenderMode, RouteStep,
    RouteSummary,
};
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use schedule::{
    parse_clock, resolve_schedule_path, weekday_name, Occupancy, RoomStatus, Schedule,
    ScheduleEntry,
};
pub use search::{find_path, Route, SearchOutcome};
