//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{DisplayMode, GameWindow, PlayerId, StatCategory, TeamCode};

use crate::nba::cache::DEFAULT_CACHE_CAPACITY;

/// Connection options shared by every command
#[derive(Debug, Clone, Args)]
pub struct SourceOptions {
    /// Stats API base URL (or set `NBA_TRACKER_API_URL` env var).
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Number of API responses kept in memory (0 disables the cache).
    #[clap(long, global = true, default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_size: usize,
}

/// Parse a comparison line. Only finite values are accepted.
pub fn parse_line(s: &str) -> std::result::Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("line must be a finite number: {}", s)),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List tracked teams in schedule order with their next game
    Schedule {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List rostered players by team.
    ///
    /// Expanded teams also list their next opponent's players.
    Roster {
        /// Only show this team (expanded).
        #[clap(long, short)]
        team: Option<TeamCode>,

        /// Expand or collapse a team (repeatable): `-x LAL -x BOS`.
        #[clap(long = "toggle", short = 'x')]
        toggle: Vec<TeamCode>,
    },

    /// Show the dashboard for one player: over/under chart, shot-zone
    /// heatmap and recent matchups.
    Player {
        /// Player ID, e.g. 2544.
        id: PlayerId,

        /// Stat category: PTS, REB, AST, PTS+REB, PTS+AST, REB+AST or PRA.
        #[clap(long, short, default_value_t = StatCategory::default())]
        stat: StatCategory,

        /// Number of recent games: 5, 10 or 15.
        #[clap(long, short, default_value_t = GameWindow::default())]
        games: GameWindow,

        /// Comparison line (defaults to the season average).
        #[clap(long, short, value_parser = parse_line)]
        line: Option<f64>,

        /// Heatmap mode: dist, eff, def or cmb.
        #[clap(long, short, default_value_t = DisplayMode::default())]
        mode: DisplayMode,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Also write the heatmap as an SVG file.
        #[clap(long)]
        svg: Option<PathBuf>,

        /// Refetch the player even if a cached response exists.
        #[clap(long)]
        refresh: bool,
    },

    /// Interactive session reading commands from stdin.
    ///
    /// Commands: `select ID`, `clear`, `stat CAT`, `line X`, `mode MODE`,
    /// `games N`, `toggle TEAM`, `teams`, `show`, `help`, `quit`.
    Session,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-tracker", about = "NBA player prop and shot-zone dashboard")]
pub struct Tracker {
    #[clap(flatten)]
    pub source: SourceOptions,

    /// Log requests and state transitions.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
