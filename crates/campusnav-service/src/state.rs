//! Shared state handed to every axum handler.

use std::path::Path;
use std::sync::Arc;

use campusnav_lib::{load_map, Error as LibError, Graph, Schedule};
use thiserror::Error;

/// Error during application state initialization.
#[derive(Debug, Error)]
pub enum AppStateError {
    #[error("failed to load campus map: {0}")]
    MapLoad(#[source] LibError),

    #[error("failed to load class schedule: {0}")]
    ScheduleLoad(#[source] LibError),
}

/// Campus map plus optional timetable, cheap to clone.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use campusnav_service::AppState;
///
/// async fn handler(State(state): State<AppState>) -> String {
///     format!("{} nodes", state.graph().len())
/// }
///
/// let state = AppState::load("college_map_data.json", None).unwrap();
/// let app = Router::new().route("/count", get(handler)).with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    graph: Graph,
    schedule: Option<Schedule>,
}

impl AppState {
    /// Load the map at `map_path` and, when given, the schedule at `schedule_path`.
    pub fn load(
        map_path: impl AsRef<Path>,
        schedule_path: Option<&Path>,
    ) -> Result<Self, AppStateError> {
        let map_path = map_path.as_ref();

        tracing::info!(path = %map_path.display(), "loading campus map");
        let graph = load_map(map_path).map_err(AppStateError::MapLoad)?;

        let schedule = match schedule_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading class schedule");
                Some(Schedule::load(path).map_err(AppStateError::ScheduleLoad)?)
            }
            None => {
                tracing::info!("no class schedule configured, room status will be unknown");
                None
            }
        };

        Ok(Self::from_parts(graph, schedule))
    }

    /// Create application state from pre-loaded components.
    pub fn from_parts(graph: Graph, schedule: Option<Schedule>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { graph, schedule }),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.inner.graph
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.inner.schedule.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("node_count", &self.inner.graph.len())
            .field(
                "schedule_entries",
                &self.inner.schedule.as_ref().map(Schedule::len),
            )
            .finish()
    }
}
