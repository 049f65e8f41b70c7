//! Recent-games chart, matchup table and comparison-line slider.

use serde::Serialize;

use crate::cli::types::{GameWindow, StatCategory};
use crate::nba::types::RecentGame;

/// Y-axis ceiling used when there are no games to chart.
const EMPTY_CHART_MAX: f64 = 50.0;
/// Head room above the tallest bar.
const CHART_HEADROOM: f64 = 5.0;

/// The `window` most recent games. The log is already newest first, so this
/// is a plain truncation.
pub fn window_games(games: &[RecentGame], window: GameWindow) -> &[RecentGame] {
    &games[..games.len().min(window.count())]
}

/// Round to the nearest half point, as prop lines are quoted.
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Line value for a drag `offset` measured up from the bottom of a vertical
/// track of `track_height`. The offset is clamped into the track.
pub fn line_from_drag(offset: f64, track_height: f64, min: f64, max: f64) -> f64 {
    if track_height <= 0.0 {
        return round_to_half(min);
    }
    let y = offset.clamp(0.0, track_height);
    round_to_half(min + y / track_height * (max - min))
}

/// Handle position of `value` on a `[min, max]` slider, 0-100.
pub fn slider_percentage(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    let range = if range == 0.0 { 1.0 } else { range };
    ((value - min) / range * 100.0).clamp(0.0, 100.0)
}

/// One bar of the over/under chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    /// First six characters of the game date, e.g. `NOV 26`
    pub date_label: String,
    pub opponent: String,
    pub value: f64,
    pub result: Option<String>,
    pub is_over: bool,
}

/// Over/under chart for one stat category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub category: StatCategory,
    pub line: f64,
    pub y_max: f64,
    /// Oldest game first
    pub bars: Vec<ChartBar>,
}

impl Chart {
    pub fn overs(&self) -> usize {
        self.bars.iter().filter(|b| b.is_over).count()
    }
}

/// Y-axis ceiling: five above the best game in view, rounded up.
pub fn y_max(games: &[RecentGame], category: StatCategory) -> f64 {
    let max = games
        .iter()
        .map(|g| g.value(category))
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
        .unwrap_or(EMPTY_CHART_MAX);
    (max + CHART_HEADROOM).ceil()
}

/// Build the chart from windowed games (newest first).
pub fn build_chart(games: &[RecentGame], category: StatCategory, line: f64) -> Chart {
    let bars = games
        .iter()
        .rev()
        .map(|g| {
            let value = g.value(category);
            ChartBar {
                date_label: g.game_date.chars().take(6).collect(),
                opponent: g.opponent_code().to_string(),
                value,
                result: g.result.clone(),
                is_over: value >= line,
            }
        })
        .collect();

    Chart {
        category,
        line,
        y_max: y_max(games, category),
        bars,
    }
}

/// One row of the recent matchups table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupRow {
    pub date: String,
    pub matchup: String,
    pub value: f64,
    pub is_over: bool,
}

/// Matchup table rows, newest first.
pub fn matchup_rows(games: &[RecentGame], category: StatCategory, line: f64) -> Vec<MatchupRow> {
    games
        .iter()
        .map(|g| {
            let value = g.value(category);
            MatchupRow {
                date: g.game_date.clone(),
                matchup: g.matchup.clone(),
                value,
                is_over: value >= line,
            }
        })
        .collect()
}
