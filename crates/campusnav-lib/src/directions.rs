//! Turn-by-turn instructions for a resolved path.
//!
//! Bearings are measured in screen coordinates (y grows downwards), so a
//! positive change of heading is a turn to the right.

use crate::graph::{Graph, Node, NodeCategory};

/// Maximum number of landmarks named when describing a corridor node.
const MAX_NAMED_LANDMARKS: usize = 2;

/// Relative change of heading between two consecutive legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Straight,
    Right,
    Left,
    Around,
}

impl Turn {
    /// Classify a signed heading change in degrees, normalized to (-180, 180].
    pub fn classify(delta: f64) -> Self {
        if delta.abs() <= 45.0 {
            Turn::Straight
        } else if delta > 45.0 && delta <= 135.0 {
            Turn::Right
        } else if (-135.0..-45.0).contains(&delta) {
            Turn::Left
        } else {
            Turn::Around
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Turn::Straight => "Continue straight",
            Turn::Right => "Turn RIGHT",
            Turn::Left => "Turn LEFT",
            Turn::Around => "Turn AROUND",
        }
    }
}

/// Heading from `from` to `to` in degrees, normalized to [0, 360).
pub fn bearing(from: &Node, to: &Node) -> f64 {
    let dx = to.position.x - from.position.x;
    let dy = to.position.y - from.position.y;
    let degrees = dy.atan2(dx).to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Signed change from `previous` to `current` heading, normalized to (-180, 180].
pub fn turn_delta(previous: f64, current: f64) -> f64 {
    let mut delta = current - previous;
    while delta > 180.0 {
        delta -= 360.0;
    }
    while delta <= -180.0 {
        delta += 360.0;
    }
    delta
}

/// Render a path as ordered, human-readable instructions.
///
/// Paths with fewer than two nodes produce no instructions.
pub fn describe<S: AsRef<str>>(graph: &Graph, path: &[S]) -> Vec<String> {
    if path.len() < 2 {
        return Vec::new();
    }

    let ids: Vec<&str> = path.iter().map(AsRef::as_ref).collect();
    let mut directions = vec![format!("Start at {}", place_description(graph, ids[0]))];
    let mut previous_bearing: Option<f64> = None;

    for (index, pair) in ids.windows(2).enumerate() {
        let (Some(current), Some(next)) = (graph.node(pair[0]), graph.node(pair[1])) else {
            continue;
        };
        let visited = &ids[..=index + 1];

        if current.floor != next.floor {
            if current.category == NodeCategory::Stairs || next.category == NodeCategory::Stairs {
                let direction = if next.floor > current.floor { "UP" } else { "DOWN" };
                directions.push(format!(
                    "Take the stairs {direction} to floor {}",
                    next.floor
                ));
            } else if current.category == NodeCategory::Elevator
                || next.category == NodeCategory::Elevator
            {
                directions.push(format!("Take the elevator to floor {}", next.floor));
            }

            if !next.category.is_vertical_transit() {
                directions.push(format!(
                    "Exit and head towards {}",
                    place_description(graph, &next.id)
                ));
            }

            previous_bearing = None;
            continue;
        }

        let heading = bearing(current, next);
        let instruction = match previous_bearing {
            None => match unvisited_landmarks(graph, &next.id, visited).first() {
                Some(place) => format!("Walk forward (you'll pass near {place})"),
                None => "Walk forward along the corridor".to_string(),
            },
            Some(previous) => {
                let turn = Turn::classify(turn_delta(previous, heading));
                let landmark = unvisited_landmarks(graph, &next.id, visited)
                    .into_iter()
                    .chain(unvisited_landmarks(graph, &current.id, visited))
                    .next();
                match landmark {
                    Some(place) => format!("{} towards {place}", turn.phrase()),
                    None => format!("{} along the corridor", turn.phrase()),
                }
            }
        };
        directions.push(instruction);
        previous_bearing = Some(heading);
    }

    directions.push(arrival_phrase(graph, ids[ids.len() - 1]));
    directions
}

/// Name of a room or department, otherwise a phrase anchored on nearby landmarks.
fn place_description(graph: &Graph, id: &str) -> String {
    if graph.category(id).is_some_and(NodeCategory::is_named_place) {
        return id.to_string();
    }

    let landmarks = landmarks_near(graph, id);
    match landmarks.as_slice() {
        [] => "the corridor".to_string(),
        [only] => format!("the corridor near {only}"),
        [first, second, ..] => format!("the corridor near {first} and {second}"),
    }
}

fn landmarks_near<'g>(graph: &'g Graph, id: &str) -> Vec<&'g str> {
    graph
        .neighbours(id)
        .iter()
        .filter(|neighbour| graph.category(neighbour).is_some_and(NodeCategory::is_landmark))
        .map(String::as_str)
        .take(MAX_NAMED_LANDMARKS)
        .collect()
}

fn unvisited_landmarks<'g>(graph: &'g Graph, id: &str, visited: &[&str]) -> Vec<&'g str> {
    graph
        .neighbours(id)
        .iter()
        .map(String::as_str)
        .filter(|neighbour| !visited.contains(neighbour))
        .filter(|neighbour| graph.category(neighbour).is_some_and(NodeCategory::is_landmark))
        .collect()
}

fn arrival_phrase(graph: &Graph, id: &str) -> String {
    match graph.category(id) {
        Some(NodeCategory::Room) => format!("You have arrived at room {id}"),
        Some(NodeCategory::Department) => format!("You have arrived at {id}"),
        _ => "You have arrived at your destination".to_string(),
    }
}
