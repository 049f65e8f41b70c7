//! Game-count window for the recent games view.

use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many of the most recent games feed the chart and matchup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum GameWindow {
    Last5,
    Last10,
    #[default]
    Last15,
}

impl GameWindow {
    pub const ALL: [GameWindow; 3] = [GameWindow::Last5, GameWindow::Last10, GameWindow::Last15];

    pub fn count(&self) -> usize {
        match self {
            GameWindow::Last5 => 5,
            GameWindow::Last10 => 10,
            GameWindow::Last15 => 15,
        }
    }
}

impl fmt::Display for GameWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.count())
    }
}

impl TryFrom<usize> for GameWindow {
    type Error = TrackerError;

    fn try_from(n: usize) -> Result<Self> {
        match n {
            5 => Ok(GameWindow::Last5),
            10 => Ok(GameWindow::Last10),
            15 => Ok(GameWindow::Last15),
            _ => Err(TrackerError::InvalidGameWindow {
                count: n.to_string(),
            }),
        }
    }
}

impl From<GameWindow> for usize {
    fn from(window: GameWindow) -> Self {
        window.count()
    }
}

impl FromStr for GameWindow {
    type Err = TrackerError;

    /// Accepts `5`, `10`, `15` or the toggle labels `L5`, `L10`, `L15`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('L')
            .or_else(|| trimmed.strip_prefix('l'))
            .unwrap_or(trimmed);
        let n: usize = digits.parse().map_err(|_| TrackerError::InvalidGameWindow {
            count: s.to_string(),
        })?;
        GameWindow::try_from(n)
    }
}
