//! Unit tests for the dashboard driver

use super::*;
use crate::cli::types::{GameWindow, StatCategory, TeamCode};
use crate::error::TrackerError;
use crate::nba::types::{PlayerPayload, ScheduleEntry, SeasonStats};
use std::collections::BTreeMap;

/// In-memory source. Any endpoint listed in `failing` returns a 500.
#[derive(Default)]
struct StaticSource {
    failing: Vec<&'static str>,
    players: BTreeMap<u64, PlayerPayload>,
}

impl StaticSource {
    fn fail(&self, endpoint: &str) -> Result<()> {
        if self.failing.iter().any(|f| *f == endpoint) {
            return Err(TrackerError::Api {
                status: 500,
                message: format!("{} unavailable", endpoint),
            });
        }
        Ok(())
    }
}

impl DataSource for StaticSource {
    async fn get_schedule(&self) -> Result<Schedule> {
        self.fail("schedule")?;
        Ok(Schedule::from([(
            TeamCode::from("LAL"),
            ScheduleEntry {
                day: "Nov 28".to_string(),
                time: "7:30 pm".to_string(),
                opponent: TeamCode::from("BOS"),
                opponent_id: 1610612738,
                sort_order: 0,
                is_home: true,
            },
        )]))
    }

    async fn get_roster(&self) -> Result<Vec<RosterEntry>> {
        self.fail("roster")?;
        Ok(vec![RosterEntry {
            id: PlayerId::new(2544),
            name: "LeBron James".to_string(),
            team: TeamCode::from("LAL"),
            image_url: None,
        }])
    }

    async fn get_defense_ranks(&self) -> Result<DefenseRanks> {
        self.fail("defense_ranks")?;
        Ok(DefenseRanks::from([(TeamCode::from("BOS"), Default::default())]))
    }

    async fn get_player(&self, id: PlayerId) -> Result<PlayerPayload> {
        self.players
            .get(&id.as_u64())
            .cloned()
            .ok_or_else(|| TrackerError::Api {
                status: 404,
                message: "No games found".to_string(),
            })
    }
}

fn payload(name: &str, rpg: f64) -> PlayerPayload {
    PlayerPayload {
        stats: SeasonStats {
            name: name.to_string(),
            ppg: Some(20.0),
            rpg: Some(rpg),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn source_with_players() -> StaticSource {
    StaticSource {
        players: BTreeMap::from([
            (2544, payload("LeBron James", 8.2)),
            (201939, payload("Stephen Curry", 4.4)),
        ]),
        ..Default::default()
    }
}

#[cfg(test)]
mod bootstrap_tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_applies_all_sections() {
        let mut dashboard = Dashboard::new(StaticSource::default());

        assert_eq!(dashboard.bootstrap().await, 3);

        let state = dashboard.state();
        assert_eq!(state.schedule().len(), 1);
        assert_eq!(state.roster().len(), 1);
        assert_eq!(state.defense_ranks().len(), 1);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_block_the_others() {
        let mut dashboard = Dashboard::new(StaticSource {
            failing: vec!["roster"],
            ..Default::default()
        });

        assert_eq!(dashboard.bootstrap().await, 2);

        let state = dashboard.state();
        assert!(state.roster().is_empty());
        assert_eq!(state.schedule().len(), 1);
        assert_eq!(state.defense_ranks().len(), 1);
    }

    #[tokio::test]
    async fn test_all_failures_leave_defaults() {
        let mut dashboard = Dashboard::new(StaticSource {
            failing: vec!["schedule", "roster", "defense_ranks"],
            ..Default::default()
        });

        assert_eq!(dashboard.bootstrap().await, 0);
        assert_eq!(dashboard.state(), &SelectionState::new());
    }
}

#[cfg(test)]
mod player_tests {
    use super::*;

    #[tokio::test]
    async fn test_start_loads_default_player() {
        let mut dashboard = Dashboard::new(source_with_players());

        dashboard.start().await.unwrap();

        let state = dashboard.state();
        assert_eq!(state.player().unwrap().stats.name, "LeBron James");
        assert_eq!(state.comparison_line(), 20.0);
        assert!(!state.is_loading());
        assert!(state.opponent_ranks().is_some());
    }

    #[tokio::test]
    async fn test_select_player_replaces_payload() {
        let mut dashboard = Dashboard::new(source_with_players());
        dashboard.start().await.unwrap();
        dashboard.state_mut().set_stat_category(StatCategory::Rebounds);
        dashboard.state_mut().set_game_window(GameWindow::Last5);

        dashboard.select_player(PlayerId::new(201939)).await.unwrap();

        let state = dashboard.state();
        assert_eq!(state.player().unwrap().stats.name, "Stephen Curry");
        assert_eq!(state.comparison_line(), 4.4);
        assert_eq!(state.game_window(), GameWindow::Last15);
    }

    #[tokio::test]
    async fn test_failed_player_fetch_keeps_previous_data() {
        let mut dashboard = Dashboard::new(source_with_players());
        dashboard.start().await.unwrap();

        let result = dashboard.select_player(PlayerId::new(1)).await;

        assert!(matches!(result, Err(TrackerError::Api { status: 404, .. })));
        let state = dashboard.state();
        assert!(!state.is_loading());
        assert_eq!(state.active_player(), Some(PlayerId::new(1)));
        assert_eq!(state.player().unwrap().stats.name, "LeBron James");
    }

    #[tokio::test]
    async fn test_start_without_active_player() {
        let mut state = SelectionState::new();
        state.clear_player();
        let mut dashboard = Dashboard::with_state(source_with_players(), state);

        dashboard.start().await.unwrap();
        assert!(dashboard.state().player().is_none());
    }
}
