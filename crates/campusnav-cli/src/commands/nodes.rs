//! Node listing command.

use std::path::Path;

use anyhow::Result;

use campusnav_lib::{node_listing, Floor, NodeCategory};
use campusnav_cli::output::{format_nodes, render_json, OutputFormat};
use campusnav_cli::terminal::ColorPalette;

use crate::commands::load_campus_map;

/// Handle the nodes subcommand, optionally filtered by floor and category.
pub fn handle_nodes_command(
    map_path: Option<&Path>,
    format: OutputFormat,
    floor: Option<Floor>,
    category: Option<NodeCategory>,
) -> Result<()> {
    let graph = load_campus_map(map_path)?;
    let nodes: Vec<_> = node_listing(&graph)
        .into_iter()
        .filter(|node| floor.map_or(true, |floor| node.floor == floor))
        .filter(|node| category.map_or(true, |category| node.category == category))
        .collect();

    match format {
        OutputFormat::Json => render_json(&nodes)?,
        _ => print!("{}", format_nodes(&nodes, &ColorPalette::detect())),
    }
    Ok(())
}
