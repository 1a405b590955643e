//! Semicircular dial geometry
//!
//! The dial is the upper half of a circle. A spectrum value in [0, 1] maps
//! linearly onto the angle range [π, 0]:
//! - value 0 → angle π (leftmost)
//! - value 1 → angle 0 (rightmost)
//!
//! Angles are measured counter-clockwise from +x, but screen y grows
//! downward, so the y component is subtracted from the center.

use std::f64::consts::PI;
use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::clamp01;
use crate::consts::{BAND_COUNT, BAND_WIDTH_FRACTION};

/// Map a spectrum value to its dial angle (radians)
#[inline]
pub fn value_to_angle(value: f64) -> f64 {
    PI * (1.0 - value)
}

/// Inverse of [`value_to_angle`], clamping the angle to the dial's span first
#[inline]
pub fn angle_to_value(angle: f64) -> f64 {
    let angle = if angle.is_nan() { PI } else { angle.clamp(0.0, PI) };
    clamp01(1.0 - angle / PI)
}

/// Convert polar (r, θ) around `center` to screen coordinates (y inverted)
#[inline]
pub fn polar_to_cartesian(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    DVec2::new(
        center.x + radius * angle.cos(),
        center.y - radius * angle.sin(),
    )
}

/// Convert a pointer position (dial-local screen coordinates) to a spectrum value
///
/// Positions outside the dial's angular span clamp to the nearest end. A
/// pointer below the baseline yields a negative angle and therefore clamps to
/// the right end.
pub fn pointer_to_value(pointer: DVec2, center: DVec2) -> f64 {
    let dx = pointer.x - center.x;
    let dy = center.y - pointer.y;
    angle_to_value(dy.atan2(dx))
}

/// One drawing command of a closed or open 2D outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    /// Circular arc of `radius` ending at `to`
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    Close,
}

/// Outline made of drawing commands; `Display` renders SVG path data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    f,
                    "A {radius} {radius} 0 {} {} {} {}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    to.x,
                    to.y
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Pie slice between two angles with a true circular outer edge
pub fn wedge_path(center: DVec2, radius: f64, a1: f64, a2: f64) -> Path {
    let p1 = polar_to_cartesian(center, radius, a1);
    let p2 = polar_to_cartesian(center, radius, a2);
    Path::new(vec![
        PathCommand::MoveTo(center),
        PathCommand::LineTo(p1),
        PathCommand::ArcTo {
            radius,
            large_arc: (a1 - a2).abs() > PI,
            sweep: false,
            to: p2,
        },
        PathCommand::Close,
    ])
}

/// Triangular sector between two angles with a flat chord for the outer edge
pub fn triangle_chord_path(center: DVec2, radius: f64, a1: f64, a2: f64) -> Path {
    let p1 = polar_to_cartesian(center, radius, a1);
    let p2 = polar_to_cartesian(center, radius, a2);
    Path::new(vec![
        PathCommand::MoveTo(center),
        PathCommand::LineTo(p1),
        PathCommand::LineTo(p2),
        PathCommand::Close,
    ])
}

/// Open semicircle from the left end (π) to the right end (0) of the dial
pub fn base_arc_path(center: DVec2, radius: f64) -> Path {
    Path::new(vec![
        PathCommand::MoveTo(polar_to_cartesian(center, radius, PI)),
        PathCommand::ArcTo {
            radius,
            large_arc: false,
            sweep: true,
            to: polar_to_cartesian(center, radius, 0.0),
        },
    ])
}

/// Angular extent of one confidence band around the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandWedge {
    /// Width multiplier in band steps (4 = widest, 1 = narrowest)
    pub steps: u32,
    /// Left edge angle (larger), clamped to [0, π]
    pub start: f64,
    /// Right edge angle (smaller), clamped to [0, π]
    pub end: f64,
}

impl BandWedge {
    pub fn span(&self) -> f64 {
        self.start - self.end
    }
}

/// Nested band wedges for a target, ordered widest first (draw order)
pub fn derive_wedges(target: f64) -> [BandWedge; BAND_COUNT] {
    let center = value_to_angle(clamp01(target));
    std::array::from_fn(|i| {
        let steps = (BAND_COUNT - i) as u32;
        let half = f64::from(steps) * BAND_WIDTH_FRACTION * PI / 2.0;
        BandWedge {
            steps,
            start: (center + half).clamp(0.0, PI),
            end: (center - half).clamp(0.0, PI),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_value_to_angle_boundaries_exact() {
        assert_eq!(value_to_angle(0.0), PI);
        assert_eq!(value_to_angle(1.0), 0.0);
        assert!((value_to_angle(0.5) - PI / 2.0).abs() < EPS);
    }

    #[test]
    fn test_polar_to_cartesian_inverts_y() {
        let p = polar_to_cartesian(DVec2::new(100.0, 100.0), 10.0, PI / 2.0);
        assert!((p.x - 100.0).abs() < EPS);
        assert!((p.y - 90.0).abs() < EPS);

        let p = polar_to_cartesian(DVec2::ZERO, 10.0, 0.0);
        assert!((p.x - 10.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn test_pointer_to_value() {
        let center = DVec2::new(200.0, 200.0);
        // Straight up → middle of the spectrum
        assert!((pointer_to_value(DVec2::new(200.0, 50.0), center) - 0.5).abs() < EPS);
        // Far left on the baseline → 0
        assert!(pointer_to_value(DVec2::new(0.0, 200.0), center).abs() < EPS);
        // Far right on the baseline → 1
        assert!((pointer_to_value(DVec2::new(400.0, 200.0), center) - 1.0).abs() < EPS);
        // Below the baseline clamps (negative angle → right end)
        assert_eq!(pointer_to_value(DVec2::new(150.0, 260.0), center), 1.0);
    }

    #[test]
    fn test_triangle_chord_path_format() {
        let path = triangle_chord_path(DVec2::ZERO, 10.0, PI, PI / 2.0);
        let d = path.to_string();
        assert!(d.starts_with("M 0 0 L "));
        assert!(d.ends_with(" Z"));
        assert!(!d.contains('A'));
        assert!(path.is_closed());
    }

    #[test]
    fn test_wedge_path_large_arc_flag() {
        let small = wedge_path(DVec2::ZERO, 10.0, PI, PI / 2.0);
        assert!(matches!(
            small.commands[2],
            PathCommand::ArcTo { large_arc: false, sweep: false, .. }
        ));

        let large = wedge_path(DVec2::ZERO, 10.0, 1.5 * PI, 0.0);
        assert!(matches!(
            large.commands[2],
            PathCommand::ArcTo { large_arc: true, .. }
        ));
        assert!(large.to_string().contains("A 10 10 0 1 0 "));
    }

    #[test]
    fn test_base_arc_path_spans_dial() {
        let path = base_arc_path(DVec2::new(50.0, 60.0), 40.0);
        assert!(!path.is_closed());
        match path.commands.as_slice() {
            [PathCommand::MoveTo(a), PathCommand::ArcTo { to: b, sweep: true, .. }] => {
                assert!((a.x - 10.0).abs() < EPS && (a.y - 60.0).abs() < EPS);
                assert!((b.x - 90.0).abs() < EPS && (b.y - 60.0).abs() < EPS);
            }
            _ => panic!("unexpected base arc: {path}"),
        }
    }

    #[test]
    fn test_derive_wedges_nested_and_clamped() {
        let wedges = derive_wedges(0.5);
        assert_eq!(wedges.map(|w| w.steps), [4, 3, 2, 1]);
        for pair in wedges.windows(2) {
            assert!(pair[0].span() > pair[1].span());
        }
        // Widest band: 4 × 0.08 of π
        assert!((wedges[0].span() - 4.0 * BAND_WIDTH_FRACTION * PI).abs() < EPS);

        // Target at the far left: edges never exceed π
        let edge = derive_wedges(0.0);
        assert!(edge.iter().all(|w| w.start == PI));
        assert!(edge.iter().all(|w| w.end >= 0.0 && w.end < PI));
    }

    proptest! {
        #[test]
        fn value_to_angle_in_range(v in 0.0f64..=1.0) {
            let a = value_to_angle(v);
            prop_assert!((0.0..=PI).contains(&a));
        }

        #[test]
        fn value_to_angle_non_increasing(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(value_to_angle(lo) >= value_to_angle(hi));
        }

        #[test]
        fn angle_round_trips_through_value(v in 0.0f64..=1.0) {
            prop_assert!((angle_to_value(value_to_angle(v)) - v).abs() < EPS);
        }

        #[test]
        fn pointer_value_always_in_range(x in -1e4f64..1e4, y in -1e4f64..1e4) {
            let v = pointer_to_value(DVec2::new(x, y), DVec2::new(100.0, 100.0));
            prop_assert!((0.0..=1.0).contains(&v));
        }

        #[test]
        fn paths_are_referentially_transparent(
            cx in -500.0f64..500.0,
            cy in -500.0f64..500.0,
            r in 0.0f64..500.0,
            a1 in 0.0f64..=PI,
            a2 in 0.0f64..=PI,
        ) {
            let c = DVec2::new(cx, cy);
            prop_assert_eq!(wedge_path(c, r, a1, a2), wedge_path(c, r, a1, a2));
            prop_assert_eq!(
                triangle_chord_path(c, r, a1, a2).to_string(),
                triangle_chord_path(c, r, a1, a2).to_string()
            );
        }

        #[test]
        fn wedges_stay_on_dial(t in 0.0f64..=1.0) {
            for w in derive_wedges(t) {
                prop_assert!((0.0..=PI).contains(&w.start));
                prop_assert!((0.0..=PI).contains(&w.end));
                prop_assert!(w.start >= w.end);
            }
        }
    }
}
