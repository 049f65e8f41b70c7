//! Stat categories tracked against the comparison line.

use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven per-game stat lines a user can chart.
///
/// Three are box-score counts; the rest are additive combinations of them.
///
/// # Examples
///
/// ```rust
/// use nba_tracker::StatCategory;
///
/// let cat: StatCategory = "pts+reb".parse().unwrap();
/// assert_eq!(cat, StatCategory::PtsReb);
/// assert_eq!(cat.to_string(), "PTS+REB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatCategory {
    #[default]
    #[serde(rename = "PTS")]
    Points,
    #[serde(rename = "REB")]
    Rebounds,
    #[serde(rename = "AST")]
    Assists,
    #[serde(rename = "PTS+REB")]
    PtsReb,
    #[serde(rename = "PTS+AST")]
    PtsAst,
    #[serde(rename = "REB+AST")]
    RebAst,
    #[serde(rename = "PRA")]
    Pra,
}

impl StatCategory {
    /// Tab order used by the dashboard.
    pub const ALL: [StatCategory; 7] = [
        StatCategory::Points,
        StatCategory::Rebounds,
        StatCategory::Assists,
        StatCategory::Pra,
        StatCategory::RebAst,
        StatCategory::PtsReb,
        StatCategory::PtsAst,
    ];

    /// Short code, matching the stats API column names.
    pub fn code(&self) -> &'static str {
        match self {
            StatCategory::Points => "PTS",
            StatCategory::Rebounds => "REB",
            StatCategory::Assists => "AST",
            StatCategory::PtsReb => "PTS+REB",
            StatCategory::PtsAst => "PTS+AST",
            StatCategory::RebAst => "REB+AST",
            StatCategory::Pra => "PRA",
        }
    }

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::Points => "Points",
            StatCategory::Rebounds => "Rebounds",
            StatCategory::Assists => "Assists",
            StatCategory::PtsReb => "Pts+Reb",
            StatCategory::PtsAst => "Pts+Ast",
            StatCategory::RebAst => "Reb+Ast",
            StatCategory::Pra => "Pts+Reb+Ast",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for StatCategory {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase().replace(['_', '-'], "+");
        match normalized.as_str() {
            "PTS" | "POINTS" => Ok(StatCategory::Points),
            "REB" | "REBOUNDS" => Ok(StatCategory::Rebounds),
            "AST" | "ASSISTS" => Ok(StatCategory::Assists),
            "PTS+REB" => Ok(StatCategory::PtsReb),
            "PTS+AST" => Ok(StatCategory::PtsAst),
            "REB+AST" => Ok(StatCategory::RebAst),
            "PRA" | "PTS+REB+AST" => Ok(StatCategory::Pra),
            _ => Err(TrackerError::InvalidStatCategory {
                category: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_codes_and_separators() {
        assert_eq!("PTS".parse::<StatCategory>().unwrap(), StatCategory::Points);
        assert_eq!("reb".parse::<StatCategory>().unwrap(), StatCategory::Rebounds);
        assert_eq!("pts_ast".parse::<StatCategory>().unwrap(), StatCategory::PtsAst);
        assert_eq!("REB-AST".parse::<StatCategory>().unwrap(), StatCategory::RebAst);
        assert_eq!("pts+reb+ast".parse::<StatCategory>().unwrap(), StatCategory::Pra);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        match "STL".parse::<StatCategory>() {
            Err(TrackerError::InvalidStatCategory { category }) => assert_eq!(category, "STL"),
            other => panic!("Expected InvalidStatCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for cat in StatCategory::ALL {
            assert_eq!(cat.to_string().parse::<StatCategory>().unwrap(), cat);
        }
    }

    #[test]
    fn test_serde_uses_api_codes() {
        assert_eq!(serde_json::to_string(&StatCategory::PtsReb).unwrap(), "\"PTS+REB\"");
        let cat: StatCategory = serde_json::from_str("\"PRA\"").unwrap();
        assert_eq!(cat, StatCategory::Pra);
    }
}
