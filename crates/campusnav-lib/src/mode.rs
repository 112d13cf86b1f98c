use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Path-preference profile that alters edge costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    /// Fastest route.
    #[default]
    Normal,
    /// Favour stairs by penalising elevators.
    #[serde(rename = "stairs", alias = "stairs_favoring")]
    StairsFavoring,
    /// Elevator-only; stairs are forbidden.
    Wheelchair,
}

impl TravelMode {
    /// Parse a mode label, rejecting anything unrecognised.
    ///
    /// Accepts `normal`, `stairs`, `energySaver` (and its snake/kebab forms),
    /// and `wheelchair`, case-insensitively.
    pub fn from_label(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "normal" | "fastest" => Ok(TravelMode::Normal),
            "stairs" | "energysaver" | "energy_saver" | "energy-saver" | "stairs_favoring" => {
                Ok(TravelMode::StairsFavoring)
            }
            "wheelchair" => Ok(TravelMode::Wheelchair),
            _ => Err(Error::UnknownMode {
                label: label.to_string(),
            }),
        }
    }

    /// Parse a mode label, treating anything unrecognised as [`TravelMode::Normal`].
    pub fn from_label_lenient(label: &str) -> Self {
        Self::from_label(label).unwrap_or_else(|_| {
            tracing::debug!(label, "unrecognised navigation mode; using normal");
            TravelMode::Normal
        })
    }
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TravelMode::Normal => "normal",
            TravelMode::StairsFavoring => "stairs",
            TravelMode::Wheelchair => "wheelchair",
        };
        f.write_str(value)
    }
}
