//! Shared fixture helpers for integration tests.

use std::collections::HashMap;
use std::path::PathBuf;

use campusnav_lib::{build_graph, load_map, Graph, Node, NodeId, Schedule};
use chrono::NaiveTime;

/// Path to the checked-in fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The three-floor fixture building.
#[allow(dead_code)]
pub fn campus_map() -> Graph {
    load_map(&fixtures_dir().join("campus_map.json")).expect("fixture map loads")
}

#[allow(dead_code)]
pub fn fixture_schedule() -> Schedule {
    Schedule::load(&fixtures_dir().join("schedule.json")).expect("fixture schedule loads")
}

#[allow(dead_code)]
pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid wall-clock time")
}

/// Build a graph from nodes and `(from, [to...])` adjacency lists.
#[allow(dead_code)]
pub fn graph_from(nodes: Vec<Node>, edges: &[(&str, &[&str])]) -> Graph {
    let adjacency: HashMap<NodeId, Vec<NodeId>> = edges
        .iter()
        .map(|(from, to)| {
            (
                from.to_string(),
                to.iter().map(|id| id.to_string()).collect(),
            )
        })
        .collect();
    build_graph(nodes, adjacency)
}
