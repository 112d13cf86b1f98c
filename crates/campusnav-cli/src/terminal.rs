//! ANSI styling for terminal output.

use std::fmt::Display;

/// Visual role of a fragment of CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Tag on the first step of a route.
    StartTag,
    StairsTag,
    ElevatorTag,
    /// Tag on the last step of a route.
    GoalTag,
    /// Intermediate corridor, room or department step.
    Waypoint,
    /// Node names.
    Place,
    Floor,
    Muted,
    Free,
    Busy,
}

impl Style {
    /// SGR escape sequence for this role.
    pub const fn ansi(self) -> &'static str {
        match self {
            Style::StartTag => "\x1b[1;7;32m",
            Style::StairsTag => "\x1b[1;7;36m",
            Style::ElevatorTag => "\x1b[1;7;33m",
            Style::GoalTag => "\x1b[1;7;35m",
            Style::Waypoint | Style::Muted => "\x1b[90m",
            Style::Place => "\x1b[1;97m",
            Style::Floor => "\x1b[36m",
            Style::Free => "\x1b[32m",
            Style::Busy => "\x1b[31m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Whether escape sequences are emitted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    enabled: bool,
}

impl ColorPalette {
    pub const fn colored() -> Self {
        Self { enabled: true }
    }

    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Colored unless `NO_COLOR` is set or `TERM` is `dumb`.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let term = std::env::var("TERM").ok();
        Self {
            enabled: color_allowed(no_color, term.as_deref()),
        }
    }

    /// Wrap `text` in the escape sequence for `style`.
    pub fn paint(&self, style: Style, text: impl Display) -> String {
        if self.enabled {
            format!("{}{}{}", style.ansi(), text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// See <https://no-color.org/>.
fn color_allowed(no_color: bool, term: Option<&str>) -> bool {
    !no_color && !term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}
