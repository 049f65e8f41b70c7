//! Payload types for the local NBA stats API.

use crate::cli::types::{PlayerId, StatCategory, TeamCode};
use crate::heatmap::zone::ZoneKey;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// Decode a zone-keyed object, dropping keys that are not one of the six
/// court zones.
fn de_zone_key_map<'de, D, V>(deserializer: D) -> Result<BTreeMap<ZoneKey, V>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    let raw: BTreeMap<String, V> = Deserialize::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(k, v)| k.parse::<ZoneKey>().ok().map(|zone| (zone, v)))
        .collect())
}

/// Shooting numbers for one zone, per game.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct ZoneStat {
    /// Field-goal attempts per game
    #[serde(default)]
    pub fga: f64,
    /// Field-goal percentage on a 0-100 scale; `None` when there is no data
    #[serde(default)]
    pub pct: Option<f64>,
}

impl ZoneStat {
    pub fn new(fga: f64, pct: f64) -> Self {
        Self {
            fga,
            pct: Some(pct),
        }
    }

    /// Made field goals per game, 0 when `pct` is missing.
    pub fn fgm(&self) -> f64 {
        self.pct.map_or(0.0, |pct| self.fga * pct / 100.0)
    }

    /// Estimated points per game from this zone.
    pub fn zone_points(&self, zone: ZoneKey) -> f64 {
        self.fgm() * zone.points_per_shot()
    }
}

/// Per-zone shooting for one player. Absent zones mean no recorded attempts.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ZoneMap(#[serde(deserialize_with = "de_zone_key_map")] pub BTreeMap<ZoneKey, ZoneStat>);

impl ZoneMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, zone: ZoneKey) -> Option<&ZoneStat> {
        self.0.get(&zone)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ZoneKey, ZoneStat)> for ZoneMap {
    fn from_iter<I: IntoIterator<Item = (ZoneKey, ZoneStat)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// League-wide opponent defensive rank per zone (1 = stingiest defense).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct DefenseRankMap(#[serde(deserialize_with = "de_zone_key_map")] pub BTreeMap<ZoneKey, u8>);

impl DefenseRankMap {
    /// Rank for a zone. A stored rank of 0 counts as missing.
    pub fn rank(&self, zone: ZoneKey) -> Option<u8> {
        self.0.get(&zone).copied().filter(|rank| *rank > 0)
    }
}

impl FromIterator<(ZoneKey, u8)> for DefenseRankMap {
    fn from_iter<I: IntoIterator<Item = (ZoneKey, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Defensive ranks for every team, keyed by team code.
pub type DefenseRanks = BTreeMap<TeamCode, DefenseRankMap>;

/// A tracked team's next game within the upcoming week.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScheduleEntry {
    /// Display day, e.g. `Nov 28`
    pub day: String,
    /// Tip-off or status text with the timezone suffix removed
    pub time: String,
    pub opponent: TeamCode,
    #[serde(rename = "opponentId")]
    pub opponent_id: u32,
    /// Days from today; smaller sorts first
    #[serde(rename = "sortOrder")]
    pub sort_order: u32,
    #[serde(rename = "isHome", default)]
    pub is_home: bool,
}

pub type Schedule = BTreeMap<TeamCode, ScheduleEntry>;

/// One rostered player.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
    pub team: TeamCode,
    #[serde(rename = "img", alias = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Season averages for the active player.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SeasonStats {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ppg: Option<f64>,
    #[serde(default)]
    pub rpg: Option<f64>,
    #[serde(default)]
    pub apg: Option<f64>,
    #[serde(default)]
    pub avg_pts_reb: Option<f64>,
    #[serde(default)]
    pub avg_pts_ast: Option<f64>,
    #[serde(default)]
    pub avg_reb_ast: Option<f64>,
    #[serde(default)]
    pub avg_pra: Option<f64>,
}

impl SeasonStats {
    pub fn average_for(&self, category: StatCategory) -> Option<f64> {
        match category {
            StatCategory::Points => self.ppg,
            StatCategory::Rebounds => self.rpg,
            StatCategory::Assists => self.apg,
            StatCategory::PtsReb => self.avg_pts_reb,
            StatCategory::PtsAst => self.avg_pts_ast,
            StatCategory::RebAst => self.avg_reb_ast,
            StatCategory::Pra => self.avg_pra,
        }
    }
}

/// One game from the player's log, newest first in the payload.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct RecentGame {
    /// e.g. `NOV 26, 2025`
    #[serde(rename = "GAME_DATE", default)]
    pub game_date: String,
    /// e.g. `LAL vs. BOS`
    #[serde(rename = "MATCHUP", default)]
    pub matchup: String,
    #[serde(rename = "OPP", default)]
    pub opponent: Option<String>,
    /// `W` or `L`
    #[serde(rename = "WL", default)]
    pub result: Option<String>,
    #[serde(rename = "PTS", default)]
    pub pts: f64,
    #[serde(rename = "REB", default)]
    pub reb: f64,
    #[serde(rename = "AST", default)]
    pub ast: f64,
}

impl RecentGame {
    /// Stat line for a category; combinations are summed here rather than
    /// trusted from the payload.
    pub fn value(&self, category: StatCategory) -> f64 {
        match category {
            StatCategory::Points => self.pts,
            StatCategory::Rebounds => self.reb,
            StatCategory::Assists => self.ast,
            StatCategory::PtsReb => self.pts + self.reb,
            StatCategory::PtsAst => self.pts + self.ast,
            StatCategory::RebAst => self.reb + self.ast,
            StatCategory::Pra => self.pts + self.reb + self.ast,
        }
    }

    /// Opponent code, falling back to the last token of the matchup string.
    pub fn opponent_code(&self) -> &str {
        match self.opponent.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => self.matchup.split(' ').next_back().filter(|s| !s.is_empty()).unwrap_or("-"),
        }
    }
}

/// Everything the dashboard shows for one player.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PlayerPayload {
    #[serde(default)]
    pub stats: SeasonStats,
    #[serde(rename = "recentGames", default)]
    pub recent_games: Vec<RecentGame>,
    #[serde(default)]
    pub zones: ZoneMap,
}

/// Body the stats API sends alongside a non-success status.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
