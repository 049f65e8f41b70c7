//! Shot-chart heatmap: zone aggregation, tier classification and labels.
//!
//! - `zone`: the six court zones
//! - `aggregate`: per-zone made shots, points and points share
//! - `tier`: threshold ladders mapping metrics to color tiers
//! - `label`: on-court text per display mode
//! - `court`: zone geometry and SVG export

pub mod aggregate;
pub mod court;
pub mod label;
pub mod tier;
pub mod zone;

use serde::Serialize;

use crate::cli::types::DisplayMode;
use crate::nba::types::{DefenseRankMap, ZoneMap};

pub use aggregate::{aggregate, ZoneAggregate, ZoneTotals};
pub use label::ZoneLabel;
pub use tier::{
    color_for_defense_rank, color_for_efficiency, color_for_matchup, color_for_points_share,
    zone_tier, ColorTier,
};
pub use zone::ZoneKey;

/// Everything needed to draw one zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCell {
    pub zone: ZoneKey,
    pub tier: ColorTier,
    pub label: Option<ZoneLabel>,
    pub totals: ZoneTotals,
    pub rank: Option<u8>,
}

/// A fully classified court for one display mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub mode: DisplayMode,
    pub total_points: f64,
    pub cells: Vec<ZoneCell>,
}

impl Heatmap {
    /// Classify every zone for `mode`.
    ///
    /// `ranks` is the next opponent's defensive rank map, if the player has a
    /// scheduled game and the ranks were loaded.
    pub fn build(zones: &ZoneMap, ranks: Option<&DefenseRankMap>, mode: DisplayMode) -> Self {
        let agg = aggregate(zones);

        let cells = ZoneKey::ALL
            .into_iter()
            .map(|zone| {
                let stat = zones.get(zone);
                let rank = ranks.and_then(|r| r.rank(zone));
                let totals = agg.zone(zone);
                ZoneCell {
                    zone,
                    tier: zone_tier(mode, stat, rank, totals.points_share_pct),
                    label: label::zone_label(mode, stat, rank, totals.points_share_pct),
                    totals,
                    rank,
                }
            })
            .collect();

        Self {
            mode,
            total_points: agg.total_points,
            cells,
        }
    }

    pub fn cell(&self, zone: ZoneKey) -> Option<&ZoneCell> {
        self.cells.iter().find(|c| c.zone == zone)
    }
}
