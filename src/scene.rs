//! Dial scene description
//!
//! Everything the SVG dial needs for one frame, computed from the game state
//! and the viewport width. No DOM access here, so it is testable natively.

use glam::DVec2;

use crate::consts::*;
use crate::game::GameState;
use crate::geometry::{base_arc_path, polar_to_cartesian, triangle_chord_path, value_to_angle};

/// Band fill colors, widest band first
pub const BAND_COLORS: [&str; BAND_COUNT] = ["#f87171", "#7ab6ff", "#facc15", "#34d399"];

/// Dial size and placement inside its SVG viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialLayout {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub center: DVec2,
}

impl DialLayout {
    pub fn from_viewport_width(viewport_width: f64) -> Self {
        let width = (viewport_width - DIAL_PAGE_MARGIN)
            .floor()
            .clamp(DIAL_MIN_WIDTH, DIAL_MAX_WIDTH);
        let radius = (width * DIAL_RADIUS_RATIO).floor();
        Self {
            width,
            height: radius + 16.0,
            radius,
            center: DVec2::new((width / 2.0).floor(), radius + 8.0),
        }
    }
}

/// One filled confidence band
#[derive(Debug, Clone, PartialEq)]
pub struct BandShape {
    pub path: String,
    pub fill: &'static str,
}

/// Frame description for the dial
#[derive(Debug, Clone, PartialEq)]
pub struct DialScene {
    pub layout: DialLayout,
    /// Open rim arc
    pub base_arc: String,
    /// Widest first; empty while the target is hidden
    pub bands: Vec<BandShape>,
    pub pointer_tip: DVec2,
}

impl DialScene {
    pub fn build(layout: DialLayout, state: &GameState) -> Self {
        let DialLayout { radius, center, .. } = layout;

        let bands = state
            .visible_wedges()
            .map(|wedges| {
                wedges
                    .iter()
                    .zip(BAND_COLORS)
                    .enumerate()
                    .map(|(i, (wedge, fill))| {
                        let r = radius - BAND_RIM_INSET - BAND_STEP_INSET * i as f64;
                        BandShape {
                            path: triangle_chord_path(center, r, wedge.start, wedge.end).to_string(),
                            fill,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            layout,
            base_arc: base_arc_path(center, radius).to_string(),
            bands,
            pointer_tip: polar_to_cartesian(
                center,
                radius - POINTER_RIM_INSET,
                value_to_angle(state.guess()),
            ),
        }
    }
}
