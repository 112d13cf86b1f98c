// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches here.

pub mod nodes;
pub mod route;
pub mod schedule;

use std::path::Path;

use anyhow::{Context, Result};
use campusnav_lib::{load_map, resolve_map_path, Graph};

/// Resolve and load the campus map shared by all map-based commands.
pub fn load_campus_map(explicit: Option<&Path>) -> Result<Graph> {
    let path = resolve_map_path(explicit);
    load_map(&path).with_context(|| format!("failed to load campus map from {}", path.display()))
}
