//! Per-zone scoring totals derived from a player's zone shooting.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::heatmap::zone::ZoneKey;
use crate::nba::types::ZoneMap;


/// Derived scoring for a single zone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ZoneTotals {
    /// Made field goals per game
    pub fgm: f64,
    /// Estimated points per game
    pub zone_points: f64,
    /// Share of the player's estimated points, 0-100
    pub points_share_pct: f64,
}

/// Scoring totals across all six zones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneAggregate {
    pub total_points: f64,
    /// Always holds an entry for every [`ZoneKey`].
    pub per_zone: BTreeMap<ZoneKey, ZoneTotals>,
}

impl ZoneAggregate {
    pub fn zone(&self, zone: ZoneKey) -> ZoneTotals {
        self.per_zone.get(&zone).copied().unwrap_or_default()
    }

    pub fn points_share(&self, zone: ZoneKey) -> f64 {
        self.zone(zone).points_share_pct
    }
}

/// Compute made shots, points and points share per zone.
///
/// Zones missing from `zones`, or present without a `pct`, contribute zero.
/// When the player has no estimated points every share is 0.
pub fn aggregate(zones: &ZoneMap) -> ZoneAggregate {
    let partial: Vec<(ZoneKey, f64, f64)> = ZoneKey::ALL
        .into_iter()
        .map(|zone| {
            let stat = zones.get(zone).copied().unwrap_or_default();
            (zone, stat.fgm(), stat.zone_points(zone))
        })
        .collect();

    let total_points: f64 = partial.iter().map(|(_, _, points)| points).sum();

    let per_zone = partial
        .into_iter()
        .map(|(zone, fgm, zone_points)| {
            let points_share_pct = if total_points > 0.0 {
                zone_points / total_points * 100.0
            } else {
                0.0
            };
            (
                zone,
                ZoneTotals {
                    fgm,
                    zone_points,
                    points_share_pct,
                },
            )
        })
        .collect();

    ZoneAggregate {
        total_points,
        per_zone,
    }
}
