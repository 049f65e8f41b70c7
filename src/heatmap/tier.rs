//! Color tiers and the threshold ladders that assign them.
//!
//! Every classifier here is a pure lookup. Each one walks a ladder of
//! `(threshold, tier)` steps from the top and returns the first step the value
//! clears, so boundary values always land in the higher tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cli::types::DisplayMode;
use crate::nba::types::ZoneStat;


/// Visual rating of a derived metric, ordered from worst to best.
///
/// `Neutral` marks missing data and sorts below every rated tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColorTier {
    Neutral,
    Poor,
    Weak,
    Fair,
    Good,
    Strong,
}

impl ColorTier {
    /// Every tier in ascending order.
    pub const ALL: [ColorTier; 6] = [
        ColorTier::Neutral,
        ColorTier::Poor,
        ColorTier::Weak,
        ColorTier::Fair,
        ColorTier::Good,
        ColorTier::Strong,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            ColorTier::Neutral => "#27272a",
            ColorTier::Poor => "#ef4444",
            ColorTier::Weak => "#f97316",
            ColorTier::Fair => "#eab308",
            ColorTier::Good => "#84cc16",
            ColorTier::Strong => "#16a34a",
        }
    }

    pub fn is_rated(&self) -> bool {
        *self != ColorTier::Neutral
    }

    /// Coarse legend bucket: Good, Avg or Bad.
    pub fn legend(&self) -> &'static str {
        match self {
            ColorTier::Neutral => "-",
            ColorTier::Strong | ColorTier::Good => "Good",
            ColorTier::Fair => "Avg",
            ColorTier::Weak | ColorTier::Poor => "Bad",
        }
    }
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorTier::Neutral => "Neutral",
            ColorTier::Poor => "Poor",
            ColorTier::Weak => "Weak",
            ColorTier::Fair => "Fair",
            ColorTier::Good => "Good",
            ColorTier::Strong => "Strong",
        };
        f.pad(s)
    }
}

/// Which side of each threshold counts as clearing it.
#[derive(Debug, Clone, Copy)]
enum Direction {
    /// `value >= threshold`
    AtLeast,
    /// `value <= threshold`
    AtMost,
}

/// Ordered threshold steps with a fallback for values that clear none.
#[derive(Debug, Clone, Copy)]
pub struct Ladder {
    direction: Direction,
    steps: &'static [(f64, ColorTier)],
    floor: ColorTier,
}

impl Ladder {
    /// Steps sorted by descending threshold, cleared with `>=`.
    pub const fn at_least(steps: &'static [(f64, ColorTier)], floor: ColorTier) -> Self {
        Self {
            direction: Direction::AtLeast,
            steps,
            floor,
        }
    }

    /// Steps sorted by ascending threshold, cleared with `<=`.
    pub const fn at_most(steps: &'static [(f64, ColorTier)], floor: ColorTier) -> Self {
        Self {
            direction: Direction::AtMost,
            steps,
            floor,
        }
    }

    pub fn classify(&self, value: f64) -> ColorTier {
        self.steps
            .iter()
            .find(|(threshold, _)| match self.direction {
                Direction::AtLeast => value >= *threshold,
                Direction::AtMost => value <= *threshold,
            })
            .map_or(self.floor, |(_, tier)| *tier)
    }
}

pub const EFFICIENCY_LADDER: Ladder = Ladder::at_least(
    &[
        (60.0, ColorTier::Strong),
        (50.0, ColorTier::Good),
        (40.0, ColorTier::Fair),
        (30.0, ColorTier::Weak),
    ],
    ColorTier::Poor,
);

pub const POINTS_SHARE_LADDER: Ladder = Ladder::at_least(
    &[
        (40.0, ColorTier::Strong),
        (25.0, ColorTier::Good),
        (15.0, ColorTier::Fair),
        (6.0, ColorTier::Weak),
    ],
    ColorTier::Poor,
);

/// A small rank is a strong defense, which is bad news for the shooter.
pub const DEFENSE_RANK_LADDER: Ladder = Ladder::at_most(
    &[
        (5.0, ColorTier::Poor),
        (12.0, ColorTier::Weak),
        (18.0, ColorTier::Fair),
        (25.0, ColorTier::Good),
    ],
    ColorTier::Strong,
);

/// Average of the volume and defense scores, both on a 0-4 scale.
pub const MATCHUP_LADDER: Ladder = Ladder::at_least(
    &[
        (3.5, ColorTier::Strong),
        (2.5, ColorTier::Good),
        (1.5, ColorTier::Fair),
        (0.5, ColorTier::Weak),
    ],
    ColorTier::Poor,
);

/// Zones under this share of the player's points are always rated Poor in
/// the matchup view.
pub const MATCHUP_MIN_POINTS_SHARE: f64 = 10.0;

pub fn color_for_efficiency(pct: Option<f64>) -> ColorTier {
    pct.map_or(ColorTier::Neutral, |p| EFFICIENCY_LADDER.classify(p))
}

pub fn color_for_points_share(pct: Option<f64>) -> ColorTier {
    pct.map_or(ColorTier::Neutral, |p| POINTS_SHARE_LADDER.classify(p))
}

pub fn color_for_defense_rank(rank: Option<u8>) -> ColorTier {
    match rank {
        Some(r) if r > 0 => DEFENSE_RANK_LADDER.classify(f64::from(r)),
        _ => ColorTier::Neutral,
    }
}

/// Shot volume on a 0-4 scale.
pub fn volume_score(fga: f64) -> u8 {
    if fga >= 5.0 {
        4
    } else if fga >= 3.0 {
        3
    } else if fga >= 1.5 {
        2
    } else if fga >= 0.5 {
        1
    } else {
        0
    }
}

/// Opponent weakness on a 0-4 scale; a worse defense scores higher.
pub fn defense_score(rank: u8) -> u8 {
    if rank > 25 {
        4
    } else if rank > 20 {
        3
    } else if rank > 10 {
        2
    } else if rank > 5 {
        1
    } else {
        0
    }
}

/// Blend of shot volume and opponent weakness for one zone.
///
/// Returns `Neutral` without a zone, a `pct` or a rank. Zones below
/// [`MATCHUP_MIN_POINTS_SHARE`] are Poor whatever the other inputs say.
pub fn color_for_matchup(
    zone: Option<&ZoneStat>,
    rank: Option<u8>,
    points_share_pct: f64,
) -> ColorTier {
    let (Some(zone), Some(rank)) = (zone, rank.filter(|r| *r > 0)) else {
        return ColorTier::Neutral;
    };
    if zone.pct.is_none() {
        return ColorTier::Neutral;
    }
    if points_share_pct < MATCHUP_MIN_POINTS_SHARE {
        return ColorTier::Poor;
    }

    let average = f64::from(volume_score(zone.fga) + defense_score(rank)) / 2.0;
    MATCHUP_LADDER.classify(average)
}

/// Tier of one zone for the given display mode.
///
/// `points_share_pct` is the zone's share from [`crate::heatmap::aggregate`];
/// in distribution mode an absent zone has a share of 0 and rates Poor.
pub fn zone_tier(
    mode: DisplayMode,
    zone: Option<&ZoneStat>,
    rank: Option<u8>,
    points_share_pct: f64,
) -> ColorTier {
    match mode {
        DisplayMode::Distribution => color_for_points_share(Some(points_share_pct)),
        DisplayMode::Efficiency => color_for_efficiency(zone.and_then(|z| z.pct)),
        DisplayMode::Defense => color_for_defense_rank(rank),
        DisplayMode::Combined => color_for_matchup(zone, rank, points_share_pct),
    }
}
