use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::METERS_PER_PIXEL;

/// Minimum similarity for a node id to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// String identifier of a node, as authored in the map data.
pub type NodeId = String;

/// Building level; 0 is the ground floor.
pub type Floor = i32;

/// Kind of place a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    #[default]
    Corridor,
    Room,
    Department,
    Stairs,
    Elevator,
}

impl NodeCategory {
    /// Rooms and departments are referred to by their own name.
    pub fn is_named_place(self) -> bool {
        matches!(self, NodeCategory::Room | NodeCategory::Department)
    }

    /// Stairs and elevators connect floors.
    pub fn is_vertical_transit(self) -> bool {
        matches!(self, NodeCategory::Stairs | NodeCategory::Elevator)
    }

    /// Anything other than a corridor is worth mentioning in directions.
    pub fn is_landmark(self) -> bool {
        self != NodeCategory::Corridor
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            NodeCategory::Corridor => "corridor",
            NodeCategory::Room => "room",
            NodeCategory::Department => "department",
            NodeCategory::Stairs => "stairs",
            NodeCategory::Elevator => "elevator",
        };
        f.write_str(value)
    }
}

/// Pixel coordinates of a node on its floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Calculate the Euclidean distance to another position, in pixels.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A named point in the building graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Position,
    pub category: NodeCategory,
    pub floor: Floor,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, x: f64, y: f64, category: NodeCategory, floor: Floor) -> Self {
        Self {
            id: id.into(),
            position: Position { x, y },
            category,
            floor,
        }
    }
}

/// Immutable building graph shared by all searches.
///
/// Cloning is cheap; nodes and adjacency live behind `Arc`s so a single
/// graph can be handed to concurrent searches without locking.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Arc<HashMap<NodeId, Node>>,
    adjacency: Arc<HashMap<NodeId, Vec<NodeId>>>,
}

impl Graph {
    /// Lookup a node by identifier.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Return the outgoing neighbours of a node in authored order.
    pub fn neighbours(&self, id: &str) -> &[NodeId] {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn category(&self, id: &str) -> Option<NodeCategory> {
        self.node(id).map(|node| node.category)
    }

    pub fn floor(&self, id: &str) -> Option<Floor> {
        self.node(id).map(|node| node.floor)
    }

    /// Euclidean pixel distance between two nodes.
    ///
    /// Returns `f64::INFINITY` when either identifier is unknown.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        match (self.node(a), self.node(b)) {
            (Some(a), Some(b)) => a.position.distance_to(&b.position),
            _ => f64::INFINITY,
        }
    }

    /// Edges `a -> b` between known nodes for which `b -> a` is not listed.
    pub fn one_way_edges(&self) -> Vec<(NodeId, NodeId)> {
        self.sorted_edges()
            .filter(|(_, to)| self.contains(to))
            .filter(|(from, to)| !self.neighbours(to).iter().any(|back| back == *from))
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect()
    }

    /// Edges whose target is not a known node. Such targets are unreachable.
    pub fn dangling_edges(&self) -> Vec<(NodeId, NodeId)> {
        self.sorted_edges()
            .filter(|(_, to)| !self.contains(to))
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect()
    }

    /// Suggest node identifiers similar to `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .keys()
            .map(|id| (strsim::jaro_winkler(&needle, &id.to_lowercase()), id.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, id)| id.to_string())
            .collect()
    }

    fn sorted_edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        let mut sources: Vec<&NodeId> = self.adjacency.keys().collect();
        sources.sort();
        sources.into_iter().flat_map(move |from| {
            self.neighbours(from).iter().map(move |to| (from, to))
        })
    }
}

/// Convert a pixel distance into meters.
pub fn to_meters(pixels: f64) -> f64 {
    pixels * METERS_PER_PIXEL
}

/// Build the immutable routing graph from loaded nodes and adjacency lists.
///
/// Adjacency entries are kept exactly as authored: neither symmetry nor the
/// existence of referenced targets is enforced.
pub fn build_graph(
    nodes: impl IntoIterator<Item = Node>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
) -> Graph {
    let mut by_id = HashMap::new();
    for node in nodes {
        let id = node.id.clone();
        if by_id.insert(id.clone(), node).is_some() {
            warn!(node = %id, "duplicate node id; keeping the last definition");
        }
    }

    Graph {
        nodes: Arc::new(by_id),
        adjacency: Arc::new(adjacency),
    }
}
