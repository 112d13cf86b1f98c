//! Route command handler for planning a walk between two nodes.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveTime;

use campusnav_lib::{plan_route, RouteRequest, RouteSummary, TravelMode};
use campusnav_cli::output::{format_route, render_json, OutputFormat};

use crate::commands::load_campus_map;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting node name.
    pub from: String,
    /// Destination node name.
    pub to: String,
    pub mode: TravelMode,
    /// Departure time; `None` uses the local wall clock.
    pub at: Option<NaiveTime>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        let clock = self.at.unwrap_or_else(|| chrono::Local::now().time());
        RouteRequest::new(self.from.clone(), self.to.clone())
            .with_mode(self.mode)
            .at(clock)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    map_path: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let graph = load_campus_map(map_path)?;
    let request = args.to_request();
    tracing::debug!(
        from = %request.start,
        to = %request.goal,
        mode = %request.mode,
        clock = %request.clock,
        "planning route"
    );

    let plan = plan_route(&graph, &request)
        .with_context(|| format!("could not plan a route from {} to {}", args.from, args.to))?;
    let summary = RouteSummary::from_plan(&graph, &plan)?;

    match format {
        OutputFormat::Json => render_json(&summary)?,
        other => print!("{}", format_route(&summary, other)),
    }
    Ok(())
}
