//! On-court text for each zone.

use serde::Serialize;

use crate::cli::types::DisplayMode;
use crate::nba::types::ZoneStat;

/// Text drawn on a zone, top line first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneLabel {
    pub lines: Vec<String>,
}

fn rank_text(rank: Option<u8>) -> String {
    match rank {
        Some(r) if r > 0 => format!("#{}", r),
        _ => "#-".to_string(),
    }
}

fn rounded_pct(pct: f64) -> String {
    format!("{}%", pct.round() as i64)
}

/// Label for one zone under `mode`.
///
/// Defense mode always labels (with `#-` for a missing rank). The other modes
/// only label zones that have shooting data.
pub fn zone_label(
    mode: DisplayMode,
    zone: Option<&ZoneStat>,
    rank: Option<u8>,
    points_share_pct: f64,
) -> Option<ZoneLabel> {
    if mode == DisplayMode::Defense {
        return Some(ZoneLabel {
            lines: vec![rank_text(rank)],
        });
    }

    let zone = zone?;
    let pct = zone.pct?;

    let lines = match mode {
        DisplayMode::Combined => vec![rounded_pct(points_share_pct), rank_text(rank)],
        DisplayMode::Distribution => vec![rounded_pct(points_share_pct)],
        _ => vec![
            rounded_pct(pct),
            format!("{:.1}m", zone.fgm()),
            format!("{:.1}a", zone.fga),
        ],
    };
    Some(ZoneLabel { lines })
}
