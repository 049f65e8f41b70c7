//! Court zones used for shot-chart aggregation.

use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six fixed court regions.
///
/// Ordering follows the court drawing order (back to front), which is also
/// the order zones are listed in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoneKey {
    #[serde(rename = "lc3")]
    LeftCorner3,
    #[serde(rename = "rc3")]
    RightCorner3,
    #[serde(rename = "paint")]
    Paint,
    #[serde(rename = "ra")]
    RestrictedArea,
    #[serde(rename = "mid")]
    MidRange,
    #[serde(rename = "ab3")]
    AboveBreak3,
}

impl ZoneKey {
    pub const ALL: [ZoneKey; 6] = [
        ZoneKey::LeftCorner3,
        ZoneKey::RightCorner3,
        ZoneKey::Paint,
        ZoneKey::RestrictedArea,
        ZoneKey::MidRange,
        ZoneKey::AboveBreak3,
    ];

    /// Wire key used by the stats API.
    pub fn key(&self) -> &'static str {
        match self {
            ZoneKey::LeftCorner3 => "lc3",
            ZoneKey::RightCorner3 => "rc3",
            ZoneKey::Paint => "paint",
            ZoneKey::RestrictedArea => "ra",
            ZoneKey::MidRange => "mid",
            ZoneKey::AboveBreak3 => "ab3",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZoneKey::LeftCorner3 => "Left Corner 3",
            ZoneKey::RightCorner3 => "Right Corner 3",
            ZoneKey::Paint => "In The Paint (Non-RA)",
            ZoneKey::RestrictedArea => "Restricted Area",
            ZoneKey::MidRange => "Mid-Range",
            ZoneKey::AboveBreak3 => "Above the Break 3",
        }
    }

    pub fn is_three(&self) -> bool {
        matches!(
            self,
            ZoneKey::LeftCorner3 | ZoneKey::RightCorner3 | ZoneKey::AboveBreak3
        )
    }

    pub fn points_per_shot(&self) -> f64 {
        if self.is_three() {
            3.0
        } else {
            2.0
        }
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for ZoneKey {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        ZoneKey::ALL
            .into_iter()
            .find(|zone| zone.key() == s)
            .ok_or_else(|| TrackerError::UnknownZone { key: s.to_string() })
    }
}
