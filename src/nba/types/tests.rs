//! Unit tests for stats API payload types

use super::*;
use serde_json::json;

#[cfg(test)]
mod zone_tests {
    use super::*;

    #[test]
    fn test_zone_stat_derived_values() {
        let stat = ZoneStat::new(4.0, 50.0);
        assert_eq!(stat.fgm(), 2.0);
        assert_eq!(stat.zone_points(ZoneKey::Paint), 4.0);
        assert_eq!(stat.zone_points(ZoneKey::AboveBreak3), 6.0);
    }

    #[test]
    fn test_zone_stat_without_pct_scores_nothing() {
        let stat = ZoneStat {
            fga: 3.0,
            pct: None,
        };
        assert_eq!(stat.fgm(), 0.0);
        assert_eq!(stat.zone_points(ZoneKey::LeftCorner3), 0.0);
    }

    #[test]
    fn test_zone_map_ignores_unknown_keys() {
        let zones: ZoneMap = serde_json::from_value(json!({
            "ra": {"pct": 68.2, "fga": 5.1},
            "lc3": {"pct": 40.0, "fga": 0.8},
            "backcourt": {"pct": 0.0, "fga": 0.1}
        }))
        .unwrap();

        assert_eq!(zones.0.len(), 2);
        assert_eq!(zones.get(ZoneKey::RestrictedArea).unwrap().fga, 5.1);
        assert!(zones.get(ZoneKey::MidRange).is_none());
    }

    #[test]
    fn test_zone_stat_null_pct() {
        let stat: ZoneStat = serde_json::from_value(json!({"fga": 1.0, "pct": null})).unwrap();
        assert_eq!(stat.pct, None);

        let stat: ZoneStat = serde_json::from_value(json!({})).unwrap();
        assert_eq!(stat, ZoneStat::default());
    }

    #[test]
    fn test_defense_rank_map_zero_is_missing() {
        let ranks: DefenseRankMap = serde_json::from_value(json!({
            "ra": 3, "paint": 0, "mid": 30, "unknown": 12
        }))
        .unwrap();

        assert_eq!(ranks.rank(ZoneKey::RestrictedArea), Some(3));
        assert_eq!(ranks.rank(ZoneKey::Paint), None);
        assert_eq!(ranks.rank(ZoneKey::MidRange), Some(30));
        assert_eq!(ranks.rank(ZoneKey::AboveBreak3), None);
    }
}

#[cfg(test)]
mod payload_tests {
    use super::*;

    fn sample_player() -> serde_json::Value {
        json!({
            "stats": {
                "name": "LeBron James",
                "ppg": 24.4, "rpg": 8.2, "apg": 8.9,
                "avg_pra": 41.5, "avg_pts_reb": 32.6,
                "avg_pts_ast": 33.3, "avg_reb_ast": 17.1
            },
            "recentGames": [
                {"GAME_DATE": "NOV 26, 2025", "MATCHUP": "LAL vs. BOS", "PTS": 30, "REB": 9,
                 "AST": 11, "WL": "W", "PRA": 50, "OPP": "BOS"},
                {"GAME_DATE": "NOV 24, 2025", "MATCHUP": "LAL @ PHX", "PTS": 18, "REB": 7,
                 "AST": 6, "WL": "L"}
            ],
            "zones": {
                "ra": {"pct": 70.0, "fga": 6.0},
                "ab3": {"pct": 36.0, "fga": 5.0}
            }
        })
    }

    #[test]
    fn test_player_payload_deserialization() {
        let payload: PlayerPayload = serde_json::from_value(sample_player()).unwrap();

        assert_eq!(payload.stats.name, "LeBron James");
        assert_eq!(payload.stats.rpg, Some(8.2));
        assert_eq!(payload.recent_games.len(), 2);
        assert_eq!(payload.recent_games[0].result.as_deref(), Some("W"));
        assert_eq!(payload.zones.0.len(), 2);
    }

    #[test]
    fn test_season_average_per_category() {
        let payload: PlayerPayload = serde_json::from_value(sample_player()).unwrap();
        let stats = &payload.stats;

        assert_eq!(stats.average_for(StatCategory::Points), Some(24.4));
        assert_eq!(stats.average_for(StatCategory::Rebounds), Some(8.2));
        assert_eq!(stats.average_for(StatCategory::Pra), Some(41.5));
        assert_eq!(stats.average_for(StatCategory::RebAst), Some(17.1));
        assert_eq!(SeasonStats::default().average_for(StatCategory::Assists), None);
    }

    #[test]
    fn test_recent_game_combined_values() {
        let game = RecentGame {
            pts: 30.0,
            reb: 9.0,
            ast: 11.0,
            ..Default::default()
        };

        assert_eq!(game.value(StatCategory::Points), 30.0);
        assert_eq!(game.value(StatCategory::PtsReb), 39.0);
        assert_eq!(game.value(StatCategory::PtsAst), 41.0);
        assert_eq!(game.value(StatCategory::RebAst), 20.0);
        assert_eq!(game.value(StatCategory::Pra), 50.0);
    }

    #[test]
    fn test_recent_game_missing_components_count_as_zero() {
        let game: RecentGame = serde_json::from_value(json!({"GAME_DATE": "OCT 22, 2025", "PTS": 21})).unwrap();
        assert_eq!(game.value(StatCategory::Pra), 21.0);
    }

    #[test]
    fn test_opponent_code_fallback() {
        let payload: PlayerPayload = serde_json::from_value(sample_player()).unwrap();
        assert_eq!(payload.recent_games[0].opponent_code(), "BOS");
        assert_eq!(payload.recent_games[1].opponent_code(), "PHX");
        assert_eq!(RecentGame::default().opponent_code(), "-");
    }

    #[test]
    fn test_empty_player_payload_defaults() {
        let payload: PlayerPayload = serde_json::from_value(json!({})).unwrap();
        assert!(payload.recent_games.is_empty());
        assert!(payload.zones.is_empty());
    }
}

#[cfg(test)]
mod schedule_roster_tests {
    use super::*;

    #[test]
    fn test_schedule_deserialization() {
        let schedule: Schedule = serde_json::from_value(json!({
            "LAL": {"opponent": "BOS", "isHome": true, "time": "7:30 pm", "day": "Nov 28",
                    "sortOrder": 0, "opponentId": 1610612738}
        }))
        .unwrap();

        let entry = &schedule[&TeamCode::from("LAL")];
        assert_eq!(entry.opponent, TeamCode::from("BOS"));
        assert!(entry.is_home);
        assert_eq!(entry.sort_order, 0);
        assert_eq!(entry.opponent_id, 1610612738);
    }

    #[test]
    fn test_roster_deserialization() {
        let roster: Vec<RosterEntry> = serde_json::from_value(json!([
            {"id": "2544", "name": "LeBron James", "team": "LAL",
             "img": "https://cdn.nba.com/headshots/nba/latest/1040x760/2544.png"},
            {"id": "1628369", "name": "Jayson Tatum", "team": "BOS"}
        ]))
        .unwrap();

        assert_eq!(roster[0].id, PlayerId::new(2544));
        assert!(roster[0].image_url.is_some());
        assert_eq!(roster[1].team.as_str(), "BOS");
        assert!(roster[1].image_url.is_none());
    }

    #[test]
    fn test_api_error_body() {
        let body: ApiErrorBody = serde_json::from_value(json!({"error": "No games found"})).unwrap();
        assert_eq!(body.error, "No games found");
    }
}
