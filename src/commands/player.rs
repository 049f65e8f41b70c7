//! Player dashboard command implementation

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::{
    cli::{
        types::{DisplayMode, GameWindow, PlayerId, StatCategory, TeamCode},
        SourceOptions,
    },
    error::TrackerError,
    heatmap::{court::render_svg, Heatmap},
    nba::{
        types::{ScheduleEntry, SeasonStats},
        DataSource,
    },
    state::{Chart, Dashboard, MatchupRow, SelectionState},
    Result,
};

use super::{build_source, render};

/// Parameters for the player command
#[derive(Debug, Clone)]
pub struct PlayerParams {
    pub id: PlayerId,
    pub stat: StatCategory,
    pub games: GameWindow,
    pub line: Option<f64>,
    pub mode: DisplayMode,
    pub as_json: bool,
    pub svg: Option<PathBuf>,
    pub refresh: bool,
}

impl PlayerParams {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            stat: StatCategory::default(),
            games: GameWindow::default(),
            line: None,
            mode: DisplayMode::default(),
            as_json: false,
            svg: None,
            refresh: false,
        }
    }
}

/// Everything the player view shows, for `--json`.
#[derive(Debug, Serialize)]
pub struct PlayerReport {
    pub id: PlayerId,
    pub stats: SeasonStats,
    pub team: Option<TeamCode>,
    pub headshot_url: String,
    pub next_game: Option<ScheduleEntry>,
    pub window: GameWindow,
    pub chart: Chart,
    pub heatmap: Heatmap,
    pub matchups: Vec<MatchupRow>,
}

impl PlayerReport {
    pub fn from_state(state: &SelectionState) -> Result<Self> {
        let id = state.active_player().ok_or(TrackerError::NoData)?;
        let player = state.player().ok_or(TrackerError::NoData)?;
        let heatmap = state.heatmap().ok_or(TrackerError::NoData)?;

        Ok(Self {
            id,
            stats: player.stats.clone(),
            team: state.active_roster_entry().map(|p| p.team.clone()),
            headshot_url: id.headshot_url(),
            next_game: state.next_game().cloned(),
            window: state.game_window(),
            chart: state.chart(),
            heatmap,
            matchups: state.matchup_rows(),
        })
    }
}

/// Bootstrap, load the player and apply the requested view settings.
pub async fn load_player<D>(source: D, params: &PlayerParams) -> Result<Dashboard<D>>
where
    D: DataSource + Send + Sync + 'static,
{
    let mut dashboard = Dashboard::new(source);
    dashboard.bootstrap().await;
    dashboard.select_player(params.id).await?;

    let state = dashboard.state_mut();
    state.set_stat_category(params.stat);
    state.set_game_window(params.games);
    state.set_display_mode(params.mode);
    if let Some(line) = params.line {
        state.set_comparison_line(line);
    }

    Ok(dashboard)
}

/// Write the heatmap of the loaded player as SVG.
pub fn write_svg(state: &SelectionState, path: &Path) -> Result<()> {
    let heatmap = state.heatmap().ok_or(TrackerError::NoData)?;
    std::fs::write(path, render_svg(&heatmap))?;
    info!(path = %path.display(), "heatmap written");
    Ok(())
}

/// Handle the player command
pub async fn handle_player(options: &SourceOptions, params: PlayerParams) -> Result<()> {
    let source = build_source(options, params.refresh)?;
    let dashboard = load_player(source, &params).await?;
    let state = dashboard.state();

    if params.as_json {
        let report = PlayerReport::from_state(state)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in render::dashboard_lines(state)? {
            println!("{}", line);
        }
    }

    if let Some(path) = &params.svg {
        write_svg(state, path)?;
    }

    Ok(())
}
