//! NBA Player Prop Tracker Library
//!
//! Core of a player-prop dashboard backed by a local NBA stats API: recent
//! games against a comparison line, and a shot-zone heatmap colored against
//! the next opponent's defense.
//!
//! ## Features
//!
//! - **Zone Aggregation**: estimated points and points share for six court zones
//! - **Color Classification**: threshold ladders for efficiency, share, defense and matchup
//! - **Selection State**: active player, stat category, line, window and expanded teams
//! - **Data Fetching**: `reqwest` client for the stats API with an LRU response cache
//! - **SVG Export**: the heatmap drawn on a half court
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_tracker::{nba::http::NbaClient, state::Dashboard, StatCategory};
//!
//! # async fn example() -> nba_tracker::Result<()> {
//! let mut dashboard = Dashboard::new(NbaClient::new("http://127.0.0.1:5000")?);
//! dashboard.start().await?;
//!
//! dashboard.state_mut().set_stat_category(StatCategory::Rebounds);
//! let chart = dashboard.state().chart();
//! println!("{} of {} over {}", chart.overs(), chart.bars.len(), chart.line);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a stats API other than the local default:
//! ```bash
//! export NBA_TRACKER_API_URL=http://127.0.0.1:5000
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod heatmap;
pub mod nba;
pub mod state;

// Re-export commonly used types
pub use cli::types::{DisplayMode, GameWindow, PlayerId, StatCategory, TeamCode};
pub use error::{Result, TrackerError};
pub use heatmap::{ColorTier, Heatmap, ZoneKey};
pub use nba::types::{PlayerPayload, ZoneMap, ZoneStat};

pub const API_URL_ENV_VAR: &str = "NBA_TRACKER_API_URL";
