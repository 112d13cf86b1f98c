//! Calibration constants shared by the cost and heuristic models.

/// Pixel-to-meter ratio of the floor plans (857 px measured as 67 m).
pub const METERS_PER_PIXEL: f64 = 67.0 / 857.0;

/// Average indoor walking speed in meters per second.
pub const AVERAGE_WALK_SPEED: f64 = 0.5486;

/// Optimistic walking speed used by the heuristic, in meters per second.
///
/// Kept above [`AVERAGE_WALK_SPEED`] so straight-line estimates stay below
/// the walking cost of any same-floor corridor.
pub const MAX_WALK_SPEED: f64 = 1.2;

/// First hour (inclusive) of the daily break window.
pub const BREAK_START_HOUR: u32 = 13;
/// Hour (exclusive) at which the daily break window ends.
pub const BREAK_END_HOUR: u32 = 14;

/// Extra elevator wait in seconds while the break window is active.
pub const ELEVATOR_BREAK_DELAY: f64 = 60.0;

/// Elevator penalty in seconds applied when the traveller favours stairs.
pub const ELEVATOR_STAIRS_MODE_PENALTY: f64 = 120.0;

pub const GROUND_FIRST_ELEVATOR_SECS: f64 = 18.0;
pub const FIRST_SECOND_ELEVATOR_SECS: f64 = 15.0;
pub const GROUND_SECOND_ELEVATOR_SECS: f64 = 25.0;

pub const GROUND_FIRST_STAIRS_SECS: f64 = 30.0;
pub const FIRST_SECOND_STAIRS_SECS: f64 = 25.0;
pub const GROUND_SECOND_STAIRS_SECS: f64 = 55.0;

/// Assumed vertical separations in meters, used only by the heuristic.
pub const GROUND_FIRST_VERTICAL_M: f64 = 6.2;
pub const FIRST_SECOND_VERTICAL_M: f64 = 5.0;
pub const GROUND_SECOND_VERTICAL_M: f64 = 11.2;
