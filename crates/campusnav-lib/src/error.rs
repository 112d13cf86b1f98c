use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campusnav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a start or goal node is not part of the graph.
    #[error("unknown node: {name}{}", format_suggestions(.suggestions))]
    InvalidNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a route summary is requested for an empty path.
    #[error("route was empty")]
    EmptyRoute,

    /// Raised when a navigation mode label is not recognised.
    #[error("unknown navigation mode: {label}")]
    UnknownMode { label: String },

    /// Map data file could not be located at the resolved path.
    #[error("map data not found at {path}")]
    MapNotFound { path: PathBuf },

    /// Map data file exists but is not valid map JSON.
    #[error("failed to parse map data from {path}: {source}")]
    MapParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Schedule file could not be located at the resolved path.
    #[error("schedule not found at {path}")]
    ScheduleNotFound { path: PathBuf },

    /// Schedule file exists but is not valid schedule JSON.
    #[error("failed to parse schedule from {path}: {source}")]
    ScheduleParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
