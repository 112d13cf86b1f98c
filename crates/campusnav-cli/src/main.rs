mod commands;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveTime, Weekday};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::output::OutputFormat;
use campusnav_lib::{parse_clock, Floor, NodeCategory, TravelMode};

use crate::commands::route::RouteCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus route planner and room schedule lookup")]
struct Cli {
    /// Path to the campus map JSON (defaults to CAMPUSNAV_MAP_PATH, then ./college_map_data.json).
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    /// Path to the schedule JSON (defaults to CAMPUSNAV_SCHEDULE_PATH, then ./schedule.json).
    #[arg(long, global = true)]
    schedule: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route between two nodes with turn-by-turn directions.
    Route {
        /// Starting node name.
        #[arg(long = "from")]
        from: String,
        /// Destination node name.
        #[arg(long = "to")]
        to: String,
        /// Travel mode.
        #[arg(long, value_enum, default_value_t = ModeArg::Normal)]
        mode: ModeArg,
        /// Departure time as HH:MM (defaults to now).
        #[arg(long, value_parser = parse_time)]
        at: Option<NaiveTime>,
    },
    /// List map nodes sorted by name.
    Nodes {
        /// Only show nodes on this floor.
        #[arg(long, allow_negative_numbers = true)]
        floor: Option<Floor>,
        /// Only show nodes of this category.
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },
    /// Query the class schedule.
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ScheduleCommand {
    /// Report whether a room is currently occupied.
    Status {
        /// Room name or fragment, e.g. `318A`.
        room: String,
        /// Weekday to check (defaults to today).
        #[arg(long, value_parser = parse_weekday)]
        day: Option<Weekday>,
        /// Time to check as HH:MM (defaults to now).
        #[arg(long, value_parser = parse_time)]
        at: Option<NaiveTime>,
    },
    /// Find sessions by course, instructor or room.
    Search {
        query: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Fastest route.
    Normal,
    /// Prefer stairs over elevators.
    #[value(alias = "energy-saver", alias = "energySaver")]
    Stairs,
    /// Elevators only.
    Wheelchair,
}

impl From<ModeArg> for TravelMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Normal => TravelMode::Normal,
            ModeArg::Stairs => TravelMode::StairsFavoring,
            ModeArg::Wheelchair => TravelMode::Wheelchair,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Corridor,
    Room,
    Department,
    Stairs,
    Elevator,
}

impl From<CategoryArg> for NodeCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Corridor => NodeCategory::Corridor,
            CategoryArg::Room => NodeCategory::Room,
            CategoryArg::Department => NodeCategory::Department,
            CategoryArg::Stairs => NodeCategory::Stairs,
            CategoryArg::Elevator => NodeCategory::Elevator,
        }
    }
}

fn parse_time(value: &str) -> std::result::Result<NaiveTime, String> {
    parse_clock(value).ok_or_else(|| format!("expected HH:MM, got '{value}'"))
}

fn parse_weekday(value: &str) -> std::result::Result<Weekday, String> {
    value
        .parse::<Weekday>()
        .map_err(|_| format!("expected a weekday such as Monday, got '{value}'"))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route { from, to, mode, at } => {
            let args = RouteCommandArgs {
                from,
                to,
                mode: mode.into(),
                at,
            };
            commands::route::handle_route_command(cli.map.as_deref(), cli.format, &args)
        }
        Command::Nodes { floor, category } => commands::nodes::handle_nodes_command(
            cli.map.as_deref(),
            cli.format,
            floor,
            category.map(Into::into),
        ),
        Command::Schedule { command } => match command {
            ScheduleCommand::Status { room, day, at } => commands::schedule::handle_status_command(
                cli.schedule.as_deref(),
                cli.format,
                &room,
                day,
                at,
            ),
            ScheduleCommand::Search { query } => commands::schedule::handle_search_command(
                cli.schedule.as_deref(),
                cli.format,
                &query,
            ),
        },
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
