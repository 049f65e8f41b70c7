//! Heatmap display modes.

use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the court heatmap encodes. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Share of the player's estimated points scored from each zone
    #[default]
    #[serde(rename = "DIST")]
    Distribution,
    /// Raw field-goal percentage per zone
    #[serde(rename = "EFF")]
    Efficiency,
    /// Next opponent's defensive rank per zone
    #[serde(rename = "DEF")]
    Defense,
    /// Volume blended with opponent rank
    #[serde(rename = "CMB")]
    Combined,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::Distribution,
        DisplayMode::Efficiency,
        DisplayMode::Combined,
        DisplayMode::Defense,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DisplayMode::Distribution => "DIST",
            DisplayMode::Efficiency => "EFF",
            DisplayMode::Defense => "DEF",
            DisplayMode::Combined => "CMB",
        }
    }

    /// Toggle label shown above the heatmap.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Distribution => "% PTS",
            DisplayMode::Efficiency => "FG Data",
            DisplayMode::Defense => "Opp Def",
            DisplayMode::Combined => "Matchup",
        }
    }

    /// Whether the mode needs the per-zone points share.
    pub fn uses_points_share(&self) -> bool {
        matches!(self, DisplayMode::Distribution | DisplayMode::Combined)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for DisplayMode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dist" | "distribution" => Ok(DisplayMode::Distribution),
            "eff" | "efficiency" => Ok(DisplayMode::Efficiency),
            "def" | "defense" => Ok(DisplayMode::Defense),
            "cmb" | "combined" | "matchup" => Ok(DisplayMode::Combined),
            _ => Err(TrackerError::InvalidDisplayMode {
                mode: s.to_string(),
            }),
        }
    }
}
