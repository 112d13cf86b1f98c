//! Room schedule commands.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveTime, Weekday};
use serde::Serialize;

use campusnav_lib::{resolve_schedule_path, weekday_name, RoomStatusReport, Schedule};
use campusnav_cli::output::{
    format_room_status, format_schedule_entries, render_json, OutputFormat,
};
use campusnav_cli::terminal::ColorPalette;


#[derive(Serialize)]
struct RoomStatusOutput<'a> {
    room: &'a str,
    day: &'static str,
    time: String,
    #[serde(flatten)]
    report: RoomStatusReport,
}

fn load_schedule(explicit: Option<&Path>) -> Result<Schedule> {
    let path = resolve_schedule_path(explicit);
    Schedule::load(&path).with_context(|| format!("failed to load schedule from {}", path.display()))
}

/// Report whether `room` is occupied on `day` at `at`, defaulting to now.
pub fn handle_status_command(
    schedule_path: Option<&Path>,
    format: OutputFormat,
    room: &str,
    day: Option<Weekday>,
    at: Option<NaiveTime>,
) -> Result<()> {
    let schedule = load_schedule(schedule_path)?;
    let now = Local::now();
    let day = day.unwrap_or_else(|| now.weekday());
    let time = at.unwrap_or_else(|| now.time());

    let status = schedule.room_status(room, day, time);
    match format {
        OutputFormat::Json => render_json(&RoomStatusOutput {
            room,
            day: weekday_name(day),
            time: time.format("%H:%M").to_string(),
            report: RoomStatusReport::from(&status),
        })?,
        _ => print!("{}", format_room_status(room, &status, &ColorPalette::detect())),
    }
    Ok(())
}

/// List entries whose course, instructor or room matches `query`.
pub fn handle_search_command(
    schedule_path: Option<&Path>,
    format: OutputFormat,
    query: &str,
) -> Result<()> {
    let schedule = load_schedule(schedule_path)?;
    let matches = schedule.search(query);
    match format {
        OutputFormat::Json => render_json(&matches)?,
        _ if matches.is_empty() => println!("No sessions match '{query}'"),
        _ => print!("{}", format_schedule_entries(&matches)),
    }
    Ok(())
}
