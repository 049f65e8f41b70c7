//! Plain-text views of the dashboard state.

use serde::Serialize;

use crate::{
    cli::types::TeamCode,
    error::TrackerError,
    heatmap::{ColorTier, Heatmap},
    nba::types::RosterEntry,
    state::{Chart, MatchupRow, SelectionState},
    Result,
};

/// Width of a full-height chart bar, in characters.
const BAR_WIDTH: f64 = 30.0;

/// One sidebar team with its next game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub team: TeamCode,
    pub logo_url: Option<String>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub opponent: Option<TeamCode>,
    pub is_home: Option<bool>,
}

pub fn schedule_rows(state: &SelectionState) -> Vec<ScheduleRow> {
    state
        .sidebar_teams()
        .into_iter()
        .map(|team| {
            let game = state.schedule().get(&team);
            ScheduleRow {
                logo_url: team.logo_url(),
                day: game.map(|g| g.day.clone()),
                time: game.map(|g| g.time.clone()),
                opponent: game.map(|g| g.opponent.clone()),
                is_home: game.map(|g| g.is_home),
                team,
            }
        })
        .collect()
}

pub fn schedule_lines(rows: &[ScheduleRow]) -> Vec<String> {
    rows.iter()
        .map(|row| match (&row.day, &row.time, &row.opponent) {
            (Some(day), Some(time), Some(opp)) => {
                let at = if row.is_home == Some(false) { "@" } else { "vs" };
                format!("{:<4} {:<7} {:<9} {} {}", row.team, day, time, at, opp)
            }
            _ => format!("{:<4} no game scheduled", row.team),
        })
        .collect()
}

fn player_line(player: &RosterEntry, active: bool) -> String {
    let marker = if active { '*' } else { ' ' };
    format!("  {} {:<10} {}", marker, player.id, player.name)
}

/// Players grouped by sidebar team. Expanded teams with a game also list
/// their opponent's players.
pub fn roster_lines(state: &SelectionState, only: Option<&TeamCode>) -> Vec<String> {
    let active = state.active_player();
    let mut lines = Vec::new();

    for team in state.sidebar_teams() {
        if only.is_some_and(|t| t != &team) {
            continue;
        }
        let sign = if state.is_expanded(&team) { '-' } else { '+' };
        lines.push(format!("{} {}", sign, team));

        for player in state.team_players(&team) {
            lines.push(player_line(player, active == Some(player.id)));
        }

        let opponents = state.opponent_players(&team);
        if let (Some(game), false) = (state.schedule().get(&team), opponents.is_empty()) {
            lines.push(format!("  vs {}", game.opponent));
            for player in opponents {
                lines.push(player_line(player, active == Some(player.id)));
            }
        }
    }
    lines
}

pub fn chart_lines(chart: &Chart) -> Vec<String> {
    let mut lines = vec![format!(
        "{} line {:.1} | {}/{} over",
        chart.category,
        chart.line,
        chart.overs(),
        chart.bars.len()
    )];

    for bar in &chart.bars {
        let width = if chart.y_max > 0.0 {
            (bar.value / chart.y_max * BAR_WIDTH).round() as usize
        } else {
            0
        };
        lines.push(format!(
            "{:<6} {:<4} {:>5.1} {:<1} {:<5} {}",
            bar.date_label,
            bar.opponent,
            bar.value,
            bar.result.as_deref().unwrap_or("-"),
            if bar.is_over { "OVER" } else { "UNDER" },
            "#".repeat(width)
        ));
    }
    lines
}

pub fn heatmap_lines(heatmap: &Heatmap) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({}) | {:.1} est. pts",
        heatmap.mode.label(),
        heatmap.mode,
        heatmap.total_points
    )];

    for cell in &heatmap.cells {
        let label = cell
            .label
            .as_ref()
            .map(|l| l.lines.join(" "))
            .unwrap_or_else(|| "-".to_string());
        let mut line = format!("{:<22} {:<8} {:<16}", cell.zone.name(), cell.tier, label);
        if heatmap.mode.uses_points_share() {
            line.push_str(&format!(" {:>5.1}%", cell.totals.points_share_pct));
        }
        lines.push(line.trim_end().to_string());
    }
    lines.push(legend_line());
    lines
}

/// Good/Avg/Bad legend with the tiers in each bucket, best first.
fn legend_line() -> String {
    let mut buckets: Vec<(&str, Vec<String>)> = Vec::new();
    for tier in ColorTier::ALL.iter().rev().filter(|t| t.is_rated()) {
        let legend = tier.legend();
        if let Some((_, tiers)) = buckets.last_mut().filter(|(last, _)| *last == legend) {
            tiers.push(tier.to_string());
        } else {
            buckets.push((legend, vec![tier.to_string()]));
        }
    }
    let parts: Vec<String> = buckets
        .into_iter()
        .map(|(legend, tiers)| format!("{} ({})", legend, tiers.join(", ")))
        .collect();
    format!("legend: {}", parts.join(" | "))
}

pub fn matchup_lines(rows: &[MatchupRow]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            format!(
                "{:<13} {:<12} {:>5.1} {}",
                row.date,
                row.matchup,
                row.value,
                if row.is_over { "O" } else { "U" }
            )
        })
        .collect()
}

/// Full player view: header, chart, heatmap and matchup table.
pub fn dashboard_lines(state: &SelectionState) -> Result<Vec<String>> {
    let player = state.player().ok_or(TrackerError::NoData)?;
    let heatmap = state.heatmap().ok_or(TrackerError::NoData)?;

    let mut header = player.stats.name.clone();
    if let Some(entry) = state.active_roster_entry() {
        header.push_str(&format!(" ({})", entry.team));
    }
    if let Some(game) = state.next_game() {
        header.push_str(&format!(
            " | next: {} {} {} {}",
            if game.is_home { "vs" } else { "@" },
            game.opponent,
            game.day,
            game.time
        ));
    }

    let mut lines = vec![header, String::new()];
    lines.extend(chart_lines(&state.chart()));
    lines.push(String::new());
    lines.extend(heatmap_lines(&heatmap));
    lines.push(String::new());
    lines.extend(matchup_lines(&state.matchup_rows()));
    Ok(lines)
}
