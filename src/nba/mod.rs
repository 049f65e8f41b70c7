//! Data fetch layer for the local NBA stats API.
//!
//! - `types`: payload types for the four endpoints
//! - `http`: `reqwest` implementation of [`DataSource`]
//! - `cache`: LRU response cache wrapping any [`DataSource`]

pub mod cache;
pub mod http;
pub mod types;

use std::future::Future;

use crate::cli::types::PlayerId;
use crate::Result;
use types::{DefenseRanks, PlayerPayload, RosterEntry, Schedule};

/// The four logical endpoints the dashboard reads.
///
/// Futures are `Send` so startup fetches can run as independent tasks.
pub trait DataSource {
    fn get_schedule(&self) -> impl Future<Output = Result<Schedule>> + Send;

    fn get_roster(&self) -> impl Future<Output = Result<Vec<RosterEntry>>> + Send;

    fn get_defense_ranks(&self) -> impl Future<Output = Result<DefenseRanks>> + Send;

    fn get_player(&self, id: PlayerId) -> impl Future<Output = Result<PlayerPayload>> + Send;
}
