//! Class timetable lookups for rooms.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Environment variable consulted when no explicit schedule path is given.
pub const SCHEDULE_PATH_ENV: &str = "CAMPUSNAV_SCHEDULE_PATH";

/// Schedule file name looked up in the working directory as a last resort.
pub const DEFAULT_SCHEDULE_FILENAME: &str = "schedule.json";

/// A single timetabled session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub room: String,
    #[serde(default)]
    pub day: String,
    #[serde(default = "midnight_label")]
    pub start: String,
    #[serde(default = "midnight_label")]
    pub end: String,
    #[serde(rename = "type", default = "lecture_label")]
    pub kind: String,
}

impl ScheduleEntry {
    /// Whether the session covers `time`, inclusive of both ends, at minute
    /// resolution: 10:30:45 still falls inside a session ending at 10:30.
    ///
    /// Entries with malformed times never match.
    fn covers(&self, time: NaiveTime) -> bool {
        let minute = truncate_to_minute(time);
        match (parse_clock(&self.start), parse_clock(&self.end)) {
            (Some(start), Some(end)) => start <= minute && minute <= end,
            _ => {
                debug!(course = %self.course, start = %self.start, end = %self.end, "skipping entry with malformed time");
                false
            }
        }
    }
}

/// Details of the session currently holding a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    pub course: String,
    pub instructor: Option<String>,
    pub group: Option<String>,
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Occupancy {
    /// Session window rendered as `start - end`.
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

impl From<&ScheduleEntry> for Occupancy {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            course: entry.course.clone(),
            instructor: entry.instructor.clone(),
            group: entry.group.clone(),
            start: entry.start.clone(),
            end: entry.end.clone(),
            kind: entry.kind.clone(),
        }
    }
}

/// Whether a room is free at a given moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied(Occupancy),
}

impl RoomStatus {
    /// `"Available"` or `"Occupied"`.
    pub fn label(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied(_) => "Occupied",
        }
    }

    pub fn occupancy(&self) -> Option<&Occupancy> {
        match self {
            RoomStatus::Available => None,
            RoomStatus::Occupied(occupancy) => Some(occupancy),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScheduleDocument {
    Wrapped { schedule: Vec<ScheduleEntry> },
    Bare(Vec<ScheduleEntry>),
}

/// Ordered collection of timetable entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    /// Load a schedule from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ScheduleNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)?;
        let schedule = Self::parse_document(&contents).map_err(|source| Error::ScheduleParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), entries = schedule.len(), "loaded class schedule");
        Ok(schedule)
    }

    /// Parse a schedule held in memory.
    ///
    /// Accepts either `{"schedule": [...]}` or a bare array of entries.
    pub fn parse(json: &str) -> Result<Self> {
        Self::parse_document(json).map_err(|source| Error::ScheduleParse {
            path: PathBuf::from("<memory>"),
            source,
        })
    }

    fn parse_document(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let entries = match serde_json::from_str(json)? {
            ScheduleDocument::Wrapped { schedule } => schedule,
            ScheduleDocument::Bare(entries) => entries,
        };
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occupancy of `room` on `weekday` at `time`.
    ///
    /// An entry matches when its room label contains `room`, its day is the
    /// weekday's English name and its window covers `time`. The first match
    /// in file order wins.
    pub fn room_status(&self, room: &str, weekday: Weekday, time: NaiveTime) -> RoomStatus {
        let day = weekday_name(weekday);
        self.entries
            .iter()
            .filter(|entry| entry.room.contains(room) && entry.day == day)
            .find(|entry| entry.covers(time))
            .map(|entry| RoomStatus::Occupied(entry.into()))
            .unwrap_or(RoomStatus::Available)
    }

    /// Entries whose course, instructor or room contain `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&ScheduleEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                entry.course.to_lowercase().contains(&needle)
                    || entry
                        .instructor
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
                    || entry.room.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

/// Resolve the schedule file location.
///
/// Order of precedence: `explicit`, then `CAMPUSNAV_SCHEDULE_PATH`, then
/// `schedule.json` in the current directory.
pub fn resolve_schedule_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(env_path) = env::var_os(SCHEDULE_PATH_ENV) {
        debug!(path = ?env_path, "using schedule path from environment");
        return PathBuf::from(env_path);
    }
    PathBuf::from(DEFAULT_SCHEDULE_FILENAME)
}

/// Parse an `HH:MM` wall-clock label. Single-digit hours are accepted.
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    let (hours, minutes) = value.trim().split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// English name of a weekday, as written in schedule files.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

fn midnight_label() -> String {
    "00:00".to_string()
}

fn lecture_label() -> String {
    "Lecture".to_string()
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Text(text) => text,
        Label::Number(number) => number.to_string(),
    })
}
