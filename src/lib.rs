//! Wavelength Coop - a two-player cooperative spectrum guessing game
//!
//! Core modules:
//! - `geometry`: Semicircular dial math (value ↔ angle, wedge paths)
//! - `scoring`: Distance → points rule
//! - `deck`: Category pairs, shuffling, and the pre-game editor
//! - `game`: Round/phase state machine and action dispatch
//! - `scene`: Pure dial layout for the presentation layer
//! - `settings`: Embedded configuration
//! - `ui`: Browser DOM/SVG presentation (wasm only)

pub mod deck;
pub mod error;
pub mod game;
pub mod geometry;
pub mod scene;
pub mod scoring;
pub mod settings;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use deck::{Category, CategoryEditor};
pub use error::ConfigError;
pub use game::{Action, GameState, Phase, RoundRecord};
pub use settings::{Settings, Theme};

/// Game configuration constants
pub mod consts {
    /// Maximum rounds per game (actual = min(this, playable categories))
    pub const MAX_ROUNDS: u32 = 5;
    /// Dial position at the start of every round
    pub const INITIAL_GUESS: f64 = 0.5;
    /// Linear slider range (integer steps, divided back into [0,1])
    pub const SLIDER_RESOLUTION: u32 = 1000;

    /// Width of one scoring band as a fraction of the semicircle
    pub const BAND_WIDTH_FRACTION: f64 = 0.08;
    /// Number of nested confidence bands around the target
    pub const BAND_COUNT: usize = 4;

    /// Dial layout (pixels)
    pub const DIAL_MIN_WIDTH: f64 = 340.0;
    pub const DIAL_MAX_WIDTH: f64 = 720.0;
    pub const DIAL_PAGE_MARGIN: f64 = 64.0;
    pub const DIAL_RADIUS_RATIO: f64 = 0.48;
    /// Outermost band sits this far inside the rim, each inner band 4px further
    pub const BAND_RIM_INSET: f64 = 10.0;
    pub const BAND_STEP_INSET: f64 = 4.0;
    /// Pointer tip distance inside the rim
    pub const POINTER_RIM_INSET: f64 = 6.0;
}

/// Clamp a scalar into the unit interval [0, 1]
///
/// NaN maps to 0 so a bad pointer sample can never leak out of range.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp01_literals() {
        assert_eq!(clamp01(-1.0), 0.0);
        assert_eq!(clamp01(2.0), 1.0);
        assert_eq!(clamp01(0.5), 0.5);
        assert_eq!(clamp01(f64::NAN), 0.0);
    }

    proptest! {
        #[test]
        fn clamp01_stays_in_unit_interval(x in proptest::num::f64::ANY) {
            let c = clamp01(x);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn clamp01_is_identity_inside(x in 0.0f64..=1.0) {
            prop_assert_eq!(clamp01(x), x);
        }
    }
}
