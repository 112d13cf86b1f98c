//! Loading the building graph from map JSON.
//!
//! The file is an object keyed by node id. Each value carries the node's
//! pixel coordinate, optional `type` and `floor`, and a `neighbors` list
//! whose entries are either bare ids or `{"name": ...}` objects.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::{build_graph, Floor, Graph, Node, NodeCategory, NodeId};

/// Environment variable consulted when no explicit map path is given.
pub const MAP_PATH_ENV: &str = "CAMPUSNAV_MAP_PATH";

/// Map file name looked up in the working directory as a last resort.
pub const DEFAULT_MAP_FILENAME: &str = "college_map_data.json";

/// Number of offending edges quoted in loader warnings.
const WARN_SAMPLE: usize = 5;

#[derive(Debug, Deserialize)]
struct RawNode {
    x: f64,
    y: f64,
    #[serde(default, rename = "type")]
    category: NodeCategory,
    #[serde(default)]
    floor: Floor,
    #[serde(default)]
    neighbors: Vec<RawNeighbour>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNeighbour {
    Name(String),
    Object { name: String },
}

impl RawNeighbour {
    fn into_id(self) -> NodeId {
        match self {
            RawNeighbour::Name(name) | RawNeighbour::Object { name } => name,
        }
    }
}

/// Resolve the map file location.
///
/// Order of precedence: `explicit`, then `CAMPUSNAV_MAP_PATH`, then
/// `college_map_data.json` in the current directory.
pub fn resolve_map_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(env_path) = env::var_os(MAP_PATH_ENV) {
        debug!(path = ?env_path, "using map path from environment");
        return PathBuf::from(env_path);
    }
    PathBuf::from(DEFAULT_MAP_FILENAME)
}

/// Load and validate the building graph stored at `path`.
pub fn load_map(path: &Path) -> Result<Graph> {
    if !path.exists() {
        return Err(Error::MapNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let graph = parse_map_document(&contents).map_err(|source| Error::MapParse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), nodes = graph.len(), "loaded campus map");
    report_inconsistencies(&graph);
    Ok(graph)
}

/// Parse map JSON held in memory.
pub fn parse_map(json: &str) -> Result<Graph> {
    let graph = parse_map_document(json).map_err(|source| Error::MapParse {
        path: PathBuf::from("<memory>"),
        source,
    })?;
    report_inconsistencies(&graph);
    Ok(graph)
}

fn parse_map_document(json: &str) -> std::result::Result<Graph, serde_json::Error> {
    let raw: HashMap<NodeId, RawNode> = serde_json::from_str(json)?;

    let mut nodes = Vec::with_capacity(raw.len());
    let mut adjacency = HashMap::with_capacity(raw.len());
    for (id, entry) in raw {
        let neighbours: Vec<NodeId> = entry
            .neighbors
            .into_iter()
            .map(RawNeighbour::into_id)
            .collect();
        nodes.push(Node::new(
            id.clone(),
            entry.x,
            entry.y,
            entry.category,
            entry.floor,
        ));
        adjacency.insert(id, neighbours);
    }

    Ok(build_graph(nodes, adjacency))
}

fn report_inconsistencies(graph: &Graph) {
    let one_way = graph.one_way_edges();
    if !one_way.is_empty() {
        warn!(
            count = one_way.len(),
            sample = ?sample(&one_way),
            "map contains one-way edges"
        );
    }

    let dangling = graph.dangling_edges();
    if !dangling.is_empty() {
        warn!(
            count = dangling.len(),
            sample = ?sample(&dangling),
            "map contains edges to unknown nodes"
        );
    }
}

fn sample(edges: &[(NodeId, NodeId)]) -> Vec<String> {
    edges
        .iter()
        .take(WARN_SAMPLE)
        .map(|(from, to)| format!("{from}->{to}"))
        .collect()
}
