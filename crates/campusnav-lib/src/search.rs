use std::collections::HashSet;

use chrono::NaiveTime;
use serde::Serialize;
use tracing::debug;

use crate::cost::edge_cost;
use crate::error::{Error, Result};
use crate::graph::{to_meters, Graph, NodeId};
use crate::heuristic::estimate;
use crate::mode::TravelMode;

/// Number of suggestions attached to an unknown start or goal.
const MAX_SUGGESTIONS: usize = 3;

/// A resolved path with its cumulative cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub path: Vec<NodeId>,
    pub total_time_seconds: f64,
    pub total_distance_meters: f64,
}

/// Result of a search between two known nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Route),
    /// The frontier was exhausted before reaching the goal.
    NoPathFound,
}

impl SearchOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::NoPathFound => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::NoPathFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Total travel time, or `f64::INFINITY` when no path exists.
    pub fn total_time_seconds(&self) -> f64 {
        self.route()
            .map(|route| route.total_time_seconds)
            .unwrap_or(f64::INFINITY)
    }

    /// Total walking distance, or `f64::INFINITY` when no path exists.
    pub fn total_distance_meters(&self) -> f64 {
        self.route()
            .map(|route| route.total_distance_meters)
            .unwrap_or(f64::INFINITY)
    }
}

/// Frontier entry: a node together with the partial path that reached it.
#[derive(Debug, Clone)]
struct OpenEntry {
    node: NodeId,
    path: Vec<NodeId>,
    time: f64,
    distance: f64,
}

/// Find the quickest route from `start` to `goal` with a best-first search.
///
/// The frontier is a plain list scanned in full on every iteration; the
/// entry with the lowest `time + estimate` is expanded, ties going to the
/// earliest entry. Expanded nodes are closed for the rest of the call, so
/// when fixed stairs/elevator costs make the estimate optimistic in the
/// wrong places the returned route may not be globally optimal.
///
/// Returns [`Error::InvalidNode`] when either endpoint is not in the graph.
pub fn find_path(
    graph: &Graph,
    start: &str,
    goal: &str,
    mode: TravelMode,
    clock: NaiveTime,
) -> Result<SearchOutcome> {
    for name in [start, goal] {
        if !graph.contains(name) {
            return Err(Error::InvalidNode {
                name: name.to_string(),
                suggestions: graph.fuzzy_matches(name, MAX_SUGGESTIONS),
            });
        }
    }

    let mut open = vec![OpenEntry {
        node: start.to_string(),
        path: vec![start.to_string()],
        time: 0.0,
        distance: 0.0,
    }];
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut expanded = 0usize;

    while !open.is_empty() {
        let best = select_best(graph, &open, goal);
        let current = open.remove(best);
        closed.insert(current.node.clone());
        expanded += 1;

        if current.node == goal {
            debug!(
                start,
                goal,
                %mode,
                expanded,
                seconds = current.time,
                meters = current.distance,
                "route found"
            );
            return Ok(SearchOutcome::Found(Route {
                path: current.path,
                total_time_seconds: current.time,
                total_distance_meters: current.distance,
            }));
        }

        for neighbour in graph.neighbours(&current.node) {
            if closed.contains(neighbour) || current.path.contains(neighbour) {
                continue;
            }

            let time = current.time + edge_cost(graph, &current.node, neighbour, mode, clock);
            let distance = current.distance + to_meters(graph.distance(&current.node, neighbour));

            match open.iter_mut().find(|entry| entry.node == *neighbour) {
                Some(existing) => {
                    if time < existing.time {
                        existing.path = extend_path(&current.path, neighbour);
                        existing.time = time;
                        existing.distance = distance;
                    }
                }
                None => open.push(OpenEntry {
                    node: neighbour.clone(),
                    path: extend_path(&current.path, neighbour),
                    time,
                    distance,
                }),
            }
        }
    }

    debug!(start, goal, %mode, expanded, "frontier exhausted without reaching goal");
    Ok(SearchOutcome::NoPathFound)
}

/// Index of the frontier entry with the lowest `f`; the first entry wins ties
/// and is also chosen when every `f` is infinite.
fn select_best(graph: &Graph, open: &[OpenEntry], goal: &str) -> usize {
    let mut best_index = 0;
    let mut min_f = f64::INFINITY;
    for (index, entry) in open.iter().enumerate() {
        let f = entry.time + estimate(graph, &entry.node, goal);
        if f < min_f {
            min_f = f;
            best_index = index;
        }
    }
    best_index
}

fn extend_path(path: &[NodeId], next: &NodeId) -> Vec<NodeId> {
    let mut extended = Vec::with_capacity(path.len() + 1);
    extended.extend_from_slice(path);
    extended.push(next.clone());
    extended
}
