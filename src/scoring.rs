//! Cooperative scoring rule
//!
//! Points depend only on the absolute distance between guess and target.
//! Each threshold is inclusive on the closer side.

use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of each scoring band, best band first
pub const BAND_THRESHOLDS: [(f64, u8); 4] = [(0.05, 4), (0.10, 3), (0.18, 2), (0.25, 1)];

/// Highest score a single round can award
pub const MAX_ROUND_POINTS: u8 = 4;

/// Points for a guess/target distance in [0, 1]
pub fn compute_points(diff: f64) -> u8 {
    BAND_THRESHOLDS
        .iter()
        .find(|(limit, _)| diff <= *limit)
        .map(|&(_, points)| points)
        .unwrap_or(0)
}

/// Qualitative label shown alongside a round's points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Bullseye,
    Excellent,
    Great,
    Close,
    WayOff,
}

impl Verdict {
    pub fn from_points(points: u8) -> Self {
        match points {
            4.. => Verdict::Bullseye,
            3 => Verdict::Excellent,
            2 => Verdict::Great,
            1 => Verdict::Close,
            0 => Verdict::WayOff,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Bullseye => "Bullseye!",
            Verdict::Excellent => "Excellent",
            Verdict::Great => "Great",
            Verdict::Close => "Close",
            Verdict::WayOff => "Way off",
        }
    }
}

/// "+3 points — Excellent"
pub fn points_caption(points: u8) -> String {
    let noun = if points == 1 { "point" } else { "points" };
    format!("+{points} {noun} — {}", Verdict::from_points(points).as_str())
}

/// Spectrum value as a whole percentage (0.374 → 37)
pub fn percent(value: f64) -> u32 {
    (value * 100.0).round().clamp(0.0, 100.0) as u32
}
