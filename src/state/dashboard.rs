//! Drives a [`SelectionState`] from a [`DataSource`].

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::{
    cli::types::PlayerId,
    nba::{
        types::{DefenseRanks, RosterEntry, Schedule},
        DataSource,
    },
    state::selection::SelectionState,
    Result,
};

#[cfg(test)]
mod tests;

/// One settled startup fetch.
enum Startup {
    Schedule(Result<Schedule>),
    Roster(Result<Vec<RosterEntry>>),
    DefenseRanks(Result<DefenseRanks>),
}

/// Owns the session state and the source it is filled from.
///
/// Fetch failures never poison the state: the affected section keeps its
/// previous value and the failure is logged.
pub struct Dashboard<D> {
    source: Arc<D>,
    state: SelectionState,
}

impl<D: DataSource + Send + Sync + 'static> Dashboard<D> {
    pub fn new(source: D) -> Self {
        Self::with_state(source, SelectionState::new())
    }

    pub fn with_state(source: D, state: SelectionState) -> Self {
        Self {
            source: Arc::new(source),
            state,
        }
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SelectionState {
        &mut self.state
    }

    /// Fetch schedule, roster and defense ranks concurrently, applying each as
    /// it settles. Returns how many of the three loaded.
    pub async fn bootstrap(&mut self) -> usize {
        let mut tasks = JoinSet::new();

        let source = Arc::clone(&self.source);
        tasks.spawn(async move { Startup::Schedule(source.get_schedule().await) });
        let source = Arc::clone(&self.source);
        tasks.spawn(async move { Startup::Roster(source.get_roster().await) });
        let source = Arc::clone(&self.source);
        tasks.spawn(async move { Startup::DefenseRanks(source.get_defense_ranks().await) });

        let mut loaded = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Startup::Schedule(Ok(schedule))) => {
                    debug!(teams = schedule.len(), "schedule loaded");
                    self.state.apply_schedule(schedule);
                    loaded += 1;
                }
                Ok(Startup::Roster(Ok(roster))) => {
                    debug!(players = roster.len(), "roster loaded");
                    self.state.apply_roster(roster);
                    loaded += 1;
                }
                Ok(Startup::DefenseRanks(Ok(ranks))) => {
                    debug!(teams = ranks.len(), "defense ranks loaded");
                    self.state.apply_defense_ranks(ranks);
                    loaded += 1;
                }
                Ok(Startup::Schedule(Err(e))) => warn!(error = %e, "schedule fetch failed"),
                Ok(Startup::Roster(Err(e))) => warn!(error = %e, "roster fetch failed"),
                Ok(Startup::DefenseRanks(Err(e))) => {
                    warn!(error = %e, "defense ranks fetch failed")
                }
                Err(e) => warn!(error = %e, "startup task did not complete"),
            }
        }

        info!(loaded, "startup data applied");
        loaded
    }

    /// Select `id` and load its payload.
    ///
    /// On failure the previous payload stays in place, the loading flag is
    /// cleared and the error is returned for the caller to report. Selections
    /// are not fenced: if two fetches overlap, whichever is applied last wins.
    pub async fn select_player(&mut self, id: PlayerId) -> Result<()> {
        self.state.select_player(id);
        match self.source.get_player(id).await {
            Ok(payload) => {
                self.state.apply_player_payload(payload);
                Ok(())
            }
            Err(e) => {
                warn!(%id, error = %e, "player fetch failed");
                self.state.player_fetch_failed();
                Err(e)
            }
        }
    }

    /// Bootstrap, then load whichever player is active.
    pub async fn start(&mut self) -> Result<()> {
        self.bootstrap().await;
        match self.state.active_player() {
            Some(id) => self.select_player(id).await,
            None => Ok(()),
        }
    }
}
