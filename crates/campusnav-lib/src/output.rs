use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Floor, Graph, Node, NodeCategory};
use crate::mode::TravelMode;
use crate::routing::RoutePlan;
use crate::schedule::RoomStatus;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Node visited along a planned route, with the data needed to draw it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub floor: Floor,
    #[serde(rename = "type")]
    pub category: NodeCategory,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub mode: TravelMode,
    pub hops: usize,
    pub start: String,
    pub goal: String,
    pub total_time_seconds: f64,
    pub total_distance_meters: f64,
    pub steps: Vec<RouteStep>,
    pub directions: Vec<String>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with per-step coordinates.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        let (Some(start), Some(goal)) = (plan.path.first(), plan.path.last()) else {
            return Err(Error::EmptyRoute);
        };

        let steps = plan
            .path
            .iter()
            .enumerate()
            .filter_map(|(index, id)| {
                graph.node(id).map(|node| RouteStep {
                    index,
                    name: node.id.clone(),
                    x: node.position.x,
                    y: node.position.y,
                    floor: node.floor,
                    category: node.category,
                })
            })
            .collect();

        Ok(Self {
            mode: plan.mode,
            hops: plan.hop_count(),
            start: start.clone(),
            goal: goal.clone(),
            total_time_seconds: plan.total_time_seconds,
            total_distance_meters: plan.total_distance_meters,
            steps,
            directions: plan.directions.clone(),
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, mode: {})",
            self.start, self.goal, self.hops, self.mode
        );
        let joined = self
            .steps
            .iter()
            .map(|step| format!("{} [floor {}]", step.name, step.floor))
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(buffer, "{joined}");
        let _ = writeln!(
            buffer,
            "Estimated time: {:.2} s, distance: {:.2} m",
            self.total_time_seconds, self.total_distance_meters
        );
        for (number, line) in self.directions.iter().enumerate() {
            let _ = writeln!(buffer, "{:>3}. {}", number + 1, line);
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} to {}_ ({} hops, mode: `{}`)",
            self.start, self.goal, self.hops, self.mode
        );
        let _ = writeln!(
            buffer,
            "_{:.2} s, {:.2} m_",
            self.total_time_seconds, self.total_distance_meters
        );
        let _ = writeln!(buffer);
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** ({}, floor {})",
                step.index, step.name, step.category, step.floor
            );
        }
        let _ = writeln!(buffer);
        for (number, line) in self.directions.iter().enumerate() {
            let _ = writeln!(buffer, "{}. {}", number + 1, line);
        }
        buffer
    }
}

/// Public view of a single map node.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeListing {
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub category: NodeCategory,
    pub floor: Floor,
}

impl From<&Node> for NodeListing {
    fn from(node: &Node) -> Self {
        Self {
            name: node.id.clone(),
            x: node.position.x,
            y: node.position.y,
            category: node.category,
            floor: node.floor,
        }
    }
}

/// Every node of the graph, sorted by name.
pub fn node_listing(graph: &Graph) -> Vec<NodeListing> {
    let mut listing: Vec<NodeListing> = graph.nodes().map(NodeListing::from).collect();
    listing.sort_by(|a, b| a.name.cmp(&b.name));
    listing
}

/// Session details attached to an occupied room.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OccupancyDetails {
    pub course: String,
    pub instructor: Option<String>,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Serialisable room availability, `details` being `null` when the room is free.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoomStatusReport {
    pub status: String,
    pub details: Option<OccupancyDetails>,
}

impl From<&RoomStatus> for RoomStatusReport {
    fn from(status: &RoomStatus) -> Self {
        Self {
            status: status.label().to_string(),
            details: status.occupancy().map(|occupancy| OccupancyDetails {
                course: occupancy.course.clone(),
                instructor: occupancy.instructor.clone(),
                time: occupancy.time_range(),
                kind: occupancy.kind.clone(),
            }),
        }
    }
}
