//! Heatmap classification from decoded API payloads

use nba_tracker::{
    heatmap::{aggregate, court::render_svg, Heatmap},
    nba::types::{DefenseRankMap, PlayerPayload},
    ColorTier, DisplayMode, ZoneKey,
};
use serde_json::json;

fn payload() -> PlayerPayload {
    serde_json::from_value(json!({
        "stats": {"name": "LeBron James", "ppg": 24.4, "rpg": 8.2, "apg": 8.9},
        "recentGames": [],
        "zones": {
            "lc3": {"fga": 2.0, "pct": 50.0},
            "paint": {"fga": 4.0, "pct": 50.0},
            "deep": {"fga": 1.0, "pct": 10.0}
        }
    }))
    .unwrap()
}

fn ranks() -> DefenseRankMap {
    serde_json::from_value(json!({"lc3": 3, "paint": 28, "ra": 0, "mid": 15})).unwrap()
}

#[cfg(test)]
mod heatmap_tests {
    use super::*;

    #[test]
    fn test_unknown_zones_are_dropped() {
        let payload = payload();
        assert_eq!(payload.zones.0.len(), 2);
        assert!(ranks().rank(ZoneKey::RestrictedArea).is_none());
    }

    #[test]
    fn test_aggregate_worked_example() {
        let agg = aggregate(&payload().zones);

        assert_eq!(agg.total_points, 7.0);
        assert_eq!(agg.zone(ZoneKey::LeftCorner3).fgm, 1.0);
        assert_eq!(agg.zone(ZoneKey::LeftCorner3).zone_points, 3.0);
        assert_eq!(agg.zone(ZoneKey::Paint).zone_points, 4.0);
        assert!((agg.points_share(ZoneKey::LeftCorner3) - 42.857).abs() < 0.01);
        assert!((agg.points_share(ZoneKey::Paint) - 57.143).abs() < 0.01);
        assert_eq!(agg.points_share(ZoneKey::MidRange), 0.0);
    }

    #[test]
    fn test_distribution_mode() {
        let map = Heatmap::build(&payload().zones, Some(&ranks()), DisplayMode::Distribution);

        assert_eq!(map.cell(ZoneKey::LeftCorner3).unwrap().tier, ColorTier::Strong);
        assert_eq!(map.cell(ZoneKey::Paint).unwrap().tier, ColorTier::Strong);
        assert_eq!(map.cell(ZoneKey::MidRange).unwrap().tier, ColorTier::Poor);
        assert!(map.cell(ZoneKey::MidRange).unwrap().label.is_none());
    }

    #[test]
    fn test_efficiency_mode() {
        let map = Heatmap::build(&payload().zones, Some(&ranks()), DisplayMode::Efficiency);

        assert_eq!(map.cell(ZoneKey::Paint).unwrap().tier, ColorTier::Good);
        assert_eq!(map.cell(ZoneKey::AboveBreak3).unwrap().tier, ColorTier::Neutral);
        assert_eq!(
            map.cell(ZoneKey::Paint).unwrap().label.as_ref().unwrap().lines,
            vec!["50%", "2.0m", "4.0a"]
        );
    }

    #[test]
    fn test_defense_mode() {
        let map = Heatmap::build(&payload().zones, Some(&ranks()), DisplayMode::Defense);

        assert_eq!(map.cell(ZoneKey::LeftCorner3).unwrap().tier, ColorTier::Poor);
        assert_eq!(map.cell(ZoneKey::Paint).unwrap().tier, ColorTier::Strong);
        assert_eq!(map.cell(ZoneKey::MidRange).unwrap().tier, ColorTier::Fair);
        assert_eq!(map.cell(ZoneKey::RestrictedArea).unwrap().tier, ColorTier::Neutral);
        assert_eq!(
            map.cell(ZoneKey::RestrictedArea).unwrap().label.as_ref().unwrap().lines,
            vec!["#-"]
        );
    }

    #[test]
    fn test_matchup_mode() {
        let map = Heatmap::build(&payload().zones, Some(&ranks()), DisplayMode::Combined);

        // volume 2, defense 0
        assert_eq!(map.cell(ZoneKey::LeftCorner3).unwrap().tier, ColorTier::Weak);
        // volume 3, defense 4
        assert_eq!(map.cell(ZoneKey::Paint).unwrap().tier, ColorTier::Strong);
        // ranked but never shot from
        assert_eq!(map.cell(ZoneKey::MidRange).unwrap().tier, ColorTier::Neutral);
        assert_eq!(
            map.cell(ZoneKey::Paint).unwrap().label.as_ref().unwrap().lines,
            vec!["57%", "#28"]
        );
    }

    #[test]
    fn test_matchup_mode_without_opponent() {
        let map = Heatmap::build(&payload().zones, None, DisplayMode::Combined);
        assert!(map.cells.iter().all(|c| c.tier == ColorTier::Neutral));
    }

    #[test]
    fn test_svg_colors_follow_tiers() {
        let map = Heatmap::build(&payload().zones, Some(&ranks()), DisplayMode::Defense);
        let svg = render_svg(&map);

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(ColorTier::Poor.hex()));
        assert!(svg.contains(ColorTier::Strong.hex()));
        assert!(svg.contains(">#28</text>"));
    }
}
