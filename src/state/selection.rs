//! Session state container for the dashboard.
//!
//! All transitions are synchronous and total. Fetched data is applied through
//! the `apply_*` methods; everything the views show is derived on demand.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::{
    cli::types::{DisplayMode, GameWindow, PlayerId, StatCategory, TeamCode},
    heatmap::Heatmap,
    nba::types::{
        DefenseRankMap, DefenseRanks, PlayerPayload, RecentGame, RosterEntry, Schedule,
        ScheduleEntry,
    },
    state::games::{self, Chart, MatchupRow},
};


/// Sort position for teams with nothing on the schedule.
const UNSCHEDULED_SORT_ORDER: u32 = 99;

/// Team expanded in the sidebar when a session starts.
pub const DEFAULT_EXPANDED_TEAM: &str = "LAL";

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    active_player: Option<PlayerId>,
    stat_category: StatCategory,
    comparison_line: f64,
    game_window: GameWindow,
    display_mode: DisplayMode,
    expanded_teams: BTreeSet<TeamCode>,
    loading: bool,
    schedule: Schedule,
    roster: Vec<RosterEntry>,
    defense_ranks: DefenseRanks,
    player: Option<PlayerPayload>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            active_player: Some(PlayerId::default()),
            stat_category: StatCategory::default(),
            comparison_line: 0.0,
            game_window: GameWindow::default(),
            display_mode: DisplayMode::default(),
            expanded_teams: BTreeSet::from([TeamCode::from(DEFAULT_EXPANDED_TEAM)]),
            loading: false,
            schedule: Schedule::new(),
            roster: Vec::new(),
            defense_ranks: DefenseRanks::new(),
            player: None,
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- transitions ----

    /// Make `id` the active player. Resets the game window to 15 and marks a
    /// fetch as in flight; the previous payload stays visible until the new
    /// one arrives.
    pub fn select_player(&mut self, id: PlayerId) {
        debug!(%id, "select player");
        self.active_player = Some(id);
        self.game_window = GameWindow::Last15;
        self.loading = true;
    }

    /// Clear the active player.
    pub fn clear_player(&mut self) {
        debug!("clear player");
        self.active_player = None;
        self.player = None;
        self.loading = false;
    }

    /// Switch category. With data loaded the line snaps to the season average
    /// for the new category (0 when the payload has none).
    pub fn set_stat_category(&mut self, category: StatCategory) {
        debug!(%category, "set stat category");
        self.stat_category = category;
        self.sync_line_to_average();
    }

    /// Direct override of the comparison line, rounded to the nearest half.
    /// Override the line, rounded to the nearest half point. Non-finite values
    /// are ignored.
    pub fn set_comparison_line(&mut self, value: f64) {
        if !value.is_finite() {
            warn!(value, "ignoring non-finite comparison line");
            return;
        }
        self.comparison_line = games::round_to_half(value);
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        debug!(%mode, "set display mode");
        self.display_mode = mode;
    }

    pub fn set_game_window(&mut self, window: GameWindow) {
        debug!(%window, "set game window");
        self.game_window = window;
    }

    /// Add or remove `team` from the expanded set. Returns whether the team is
    /// expanded afterwards.
    pub fn toggle_team_expanded(&mut self, team: TeamCode) -> bool {
        if self.expanded_teams.remove(&team) {
            false
        } else {
            self.expanded_teams.insert(team);
            true
        }
    }

    /// A player response arrived. Whatever arrives last wins, even if it is
    /// for a player that is no longer active.
    pub fn apply_player_payload(&mut self, payload: PlayerPayload) {
        debug!(name = %payload.stats.name, games = payload.recent_games.len(), "player loaded");
        self.player = Some(payload);
        self.loading = false;
        self.sync_line_to_average();
    }

    /// The player fetch failed; previous data is kept.
    pub fn player_fetch_failed(&mut self) {
        self.loading = false;
    }

    pub fn apply_schedule(&mut self, schedule: Schedule) {
        self.schedule = schedule;
    }

    pub fn apply_roster(&mut self, roster: Vec<RosterEntry>) {
        self.roster = roster;
    }

    pub fn apply_defense_ranks(&mut self, ranks: DefenseRanks) {
        self.defense_ranks = ranks;
    }

    fn sync_line_to_average(&mut self) {
        if let Some(player) = &self.player {
            self.comparison_line = player.stats.average_for(self.stat_category).unwrap_or(0.0);
        }
    }

    // ---- accessors ----

    pub fn active_player(&self) -> Option<PlayerId> {
        self.active_player
    }

    pub fn stat_category(&self) -> StatCategory {
        self.stat_category
    }

    pub fn comparison_line(&self) -> f64 {
        self.comparison_line
    }

    pub fn game_window(&self) -> GameWindow {
        self.game_window
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn expanded_teams(&self) -> &BTreeSet<TeamCode> {
        &self.expanded_teams
    }

    pub fn is_expanded(&self, team: &TeamCode) -> bool {
        self.expanded_teams.contains(team)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }

    pub fn defense_ranks(&self) -> &DefenseRanks {
        &self.defense_ranks
    }

    pub fn player(&self) -> Option<&PlayerPayload> {
        self.player.as_ref()
    }

    // ---- derived views ----

    /// The windowed game log, newest first. Empty until a player is loaded.
    pub fn recent_games(&self) -> &[RecentGame] {
        match &self.player {
            Some(player) => games::window_games(&player.recent_games, self.game_window),
            None => &[],
        }
    }

    /// Roster teams, each listed once, soonest game first. Teams without a
    /// game sort last; same-day teams are ordered by tip-off text.
    pub fn sidebar_teams(&self) -> Vec<TeamCode> {
        let mut teams: Vec<TeamCode> = Vec::new();
        for entry in &self.roster {
            if !teams.contains(&entry.team) {
                teams.push(entry.team.clone());
            }
        }
        teams.sort_by_cached_key(|team| match self.schedule.get(team) {
            Some(game) => (game.sort_order, Some(game.time.clone())),
            None => (UNSCHEDULED_SORT_ORDER, None),
        });
        teams
    }

    pub fn team_players(&self, team: &TeamCode) -> Vec<&RosterEntry> {
        self.roster.iter().filter(|p| &p.team == team).collect()
    }

    /// Players on `team`'s next opponent, shown only while `team` is expanded
    /// and has a game.
    pub fn opponent_players(&self, team: &TeamCode) -> Vec<&RosterEntry> {
        if !self.is_expanded(team) {
            return Vec::new();
        }
        match self.schedule.get(team) {
            Some(game) => self.team_players(&game.opponent),
            None => Vec::new(),
        }
    }

    pub fn active_roster_entry(&self) -> Option<&RosterEntry> {
        let id = self.active_player?;
        self.roster.iter().find(|p| p.id == id)
    }

    /// The active player's team's next game.
    pub fn next_game(&self) -> Option<&ScheduleEntry> {
        let entry = self.active_roster_entry()?;
        self.schedule.get(&entry.team)
    }

    /// Defensive ranks of the active player's next opponent.
    pub fn opponent_ranks(&self) -> Option<&DefenseRankMap> {
        let game = self.next_game()?;
        self.defense_ranks.get(&game.opponent)
    }

    pub fn heatmap(&self) -> Option<Heatmap> {
        let player = self.player.as_ref()?;
        Some(Heatmap::build(
            &player.zones,
            self.opponent_ranks(),
            self.display_mode,
        ))
    }

    pub fn chart(&self) -> Chart {
        games::build_chart(self.recent_games(), self.stat_category, self.comparison_line)
    }

    pub fn matchup_rows(&self) -> Vec<MatchupRow> {
        games::matchup_rows(self.recent_games(), self.stat_category, self.comparison_line)
    }
}
