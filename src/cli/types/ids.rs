//! ID types for players and teams.

use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA player IDs.
///
/// The stats API sends player IDs as strings (`"2544"`), so the wire form is
/// a string while the in-memory form is numeric.
///
/// # Examples
///
/// ```rust
/// use nba_tracker::PlayerId;
///
/// let id: PlayerId = "2544".parse().unwrap();
/// assert_eq!(id.as_u64(), 2544);
/// assert_eq!(id.to_string(), "2544");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Headshot image used when the roster has no entry for this player.
    pub fn headshot_url(&self) -> String {
        format!(
            "https://cdn.nba.com/headshots/nba/latest/1040x760/{}.png",
            self.0
        )
    }
}

impl Default for PlayerId {
    /// LeBron James, the player selected when a session starts.
    fn default() -> Self {
        Self(2544)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PlayerId {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

impl TryFrom<String> for PlayerId {
    type Error = TrackerError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.to_string()
    }
}

/// Three-letter team abbreviation, e.g. `LAL`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCode(pub String);

/// NBA team IDs keyed by abbreviation, used for logo lookups.
const TEAM_IDS: [(&str, u32); 30] = [
    ("ATL", 1610612737),
    ("BOS", 1610612738),
    ("CLE", 1610612739),
    ("NOP", 1610612740),
    ("CHI", 1610612741),
    ("DAL", 1610612742),
    ("DEN", 1610612743),
    ("GSW", 1610612744),
    ("HOU", 1610612745),
    ("LAC", 1610612746),
    ("LAL", 1610612747),
    ("MIA", 1610612748),
    ("MIL", 1610612749),
    ("MIN", 1610612750),
    ("BKN", 1610612751),
    ("NYK", 1610612752),
    ("ORL", 1610612753),
    ("IND", 1610612754),
    ("PHI", 1610612755),
    ("PHX", 1610612756),
    ("POR", 1610612757),
    ("SAC", 1610612758),
    ("SAS", 1610612759),
    ("OKC", 1610612760),
    ("TOR", 1610612761),
    ("UTA", 1610612762),
    ("MEM", 1610612763),
    ("WAS", 1610612764),
    ("DET", 1610612765),
    ("CHA", 1610612766),
];

impl TeamCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// League-wide team ID, if this is one of the 30 franchises.
    pub fn team_id(&self) -> Option<u32> {
        TEAM_IDS
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, id)| *id)
    }

    pub fn logo_url(&self) -> Option<String> {
        self.team_id().map(team_logo_url)
    }
}

/// Logo URL for a numeric team ID.
pub fn team_logo_url(team_id: u32) -> String {
    format!("https://cdn.nba.com/logos/nba/{}/primary/L/logo.svg", team_id)
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for TeamCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl FromStr for TeamCode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::new(s.trim()))
    }
}
