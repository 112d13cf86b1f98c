//! Output formatting for routes, node listings and room schedules.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::{
    NodeCategory, NodeListing, RoomStatus, RouteRenderMode, RouteStep, RouteSummary,
    ScheduleEntry,
};

use crate::terminal::{ColorPalette, Style};

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text suitable for logs and pipes.
    #[default]
    Text,
    /// Markdown.
    Rich,
    /// Colored step list with transit tags.
    Enhanced,
    /// Pretty-printed JSON.
    Json,
}

/// Print any serialisable value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Render a route summary for non-JSON formats.
pub fn format_route(summary: &RouteSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Rich => summary.render(RouteRenderMode::RichText),
        OutputFormat::Enhanced => EnhancedRenderer::new(ColorPalette::detect()).render(summary),
        OutputFormat::Text | OutputFormat::Json => summary.render(RouteRenderMode::PlainText),
    }
}

/// Step list with START/STAIRS/LIFT/GOAL tags and a totals footer.
pub struct EnhancedRenderer {
    palette: ColorPalette,
}

impl EnhancedRenderer {
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    pub fn render(&self, summary: &RouteSummary) -> String {
        let p = &self.palette;
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} hops, mode: {})",
            p.paint(Style::Place, &summary.start),
            p.paint(Style::Place, &summary.goal),
            summary.hops,
            summary.mode
        );

        let last = summary.steps.len().saturating_sub(1);
        for (position, step) in summary.steps.iter().enumerate() {
            let (style, tag) = step_tag(step, position == 0, position == last);
            let _ = writeln!(
                buffer,
                "{} {} {}",
                p.paint(style, tag),
                p.paint(Style::Place, &step.name),
                p.paint(Style::Floor, format_args!("floor {}", step.floor))
            );
        }

        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "{}", p.paint(Style::Muted, "───────────────────────────────────────"));
        let _ = writeln!(
            buffer,
            "  {}  {:.0} s",
            p.paint(Style::Floor, "Travel time:"),
            summary.total_time_seconds
        );
        let _ = writeln!(
            buffer,
            "  {}     {:.1} m",
            p.paint(Style::Free, "Distance:"),
            summary.total_distance_meters
        );
        let _ = writeln!(buffer);
        for line in &summary.directions {
            let _ = writeln!(buffer, "  {} {}", p.paint(Style::Muted, "•"), line);
        }
        buffer
    }
}

fn step_tag(step: &RouteStep, is_first: bool, is_last: bool) -> (Style, &'static str) {
    if is_first {
        (Style::StartTag, " STRT ")
    } else if is_last {
        (Style::GoalTag, " GOAL ")
    } else {
        match step.category {
            NodeCategory::Stairs => (Style::StairsTag, " STRS "),
            NodeCategory::Elevator => (Style::ElevatorTag, " LIFT "),
            _ => (Style::Waypoint, "  ..  "),
        }
    }
}

/// One line per node: name, floor and category.
pub fn format_nodes(nodes: &[NodeListing], palette: &ColorPalette) -> String {
    let width = nodes.iter().map(|node| node.name.len()).max().unwrap_or(0);
    let mut buffer = String::new();
    for node in nodes {
        let _ = writeln!(
            buffer,
            "{}  {}  {}",
            palette.paint(Style::Place, format_args!("{:<width$}", node.name)),
            palette.paint(Style::Floor, format_args!("floor {}", node.floor)),
            node.category
        );
    }
    buffer
}

/// Availability of a room, with session details when occupied.
pub fn format_room_status(room: &str, status: &RoomStatus, palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    match status {
        RoomStatus::Available => {
            let _ = writeln!(buffer, "{room}: {}", palette.paint(Style::Free, "Available"));
        }
        RoomStatus::Occupied(occupancy) => {
            let _ = writeln!(buffer, "{room}: {}", palette.paint(Style::Busy, "Occupied"));
            let _ = writeln!(buffer, "  course:     {}", occupancy.course);
            if let Some(instructor) = &occupancy.instructor {
                let _ = writeln!(buffer, "  instructor: {instructor}");
            }
            if let Some(group) = &occupancy.group {
                let _ = writeln!(buffer, "  group:      {group}");
            }
            let _ = writeln!(buffer, "  time:       {}", occupancy.time_range());
            let _ = writeln!(buffer, "  type:       {}", occupancy.kind);
        }
    }
    buffer
}

/// Tabular listing of schedule entries.
pub fn format_schedule_entries(entries: &[&ScheduleEntry]) -> String {
    let mut buffer = String::new();
    for entry in entries {
        let _ = writeln!(
            buffer,
            "{:<9} {}-{}  {:<12} {} ({}){}",
            entry.day,
            entry.start,
            entry.end,
            entry.room,
            entry.course,
            entry.kind,
            entry
                .instructor
                .as_deref()
                .map(|name| format!(", {name}"))
                .unwrap_or_default()
        );
    }
    buffer
}
