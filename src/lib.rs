//! Vectoroids - an Asteroids-style arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, gameplay, menu)
//! - `flow`: Top-level state machine with the crossfade transition
//! - `render`: Drawing-surface capability the simulations render through
//! - `input`: Per-frame input flag-set
//!
//! Rendering backends, input capture and the windowing shell are host
//! concerns; the crate ends at the [`render::Surface`] trait and the
//! [`input::Input`] value.

pub mod flow;
pub mod input;
pub mod render;
pub mod sim;

pub use flow::Game;
pub use input::Input;
pub use render::{Color, Rect, Surface};
pub use sim::{GameEvent, GameOptions};

use glam::Vec2;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Design-space viewport width. Hosts scale this to the real window.
    pub const DESIGN_WIDTH: f32 = 300.0;
    /// Design-space viewport height.
    pub const DESIGN_HEIGHT: f32 = 300.0;
    /// Recommended fixed sub-update cap for hosts driving `Game::update`.
    /// Large `dt` is not special-cased by the simulation itself.
    pub const MAX_STEP_SECONDS: f32 = 1.0 / 60.0;
}

/// Unit vector pointing along `angle` (radians)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Closed-boundary circle intersection test: exact `r1 + r2` separation
/// counts as a hit. Works on squared distances, no epsilon.
#[inline]
pub fn circles_intersect(p1: Vec2, r1: f32, p2: Vec2, r2: f32) -> bool {
    let radius_sum = r1 + r2;
    radius_sum * radius_sum >= p1.distance_squared(p2)
}

/// Cap a vector's length while preserving its direction.
///
/// Vectors already at or under `max_length` come back unchanged.
#[inline]
pub fn clamp_length(v: Vec2, max_length: f32) -> Vec2 {
    let length = v.length();
    if length > max_length {
        v.normalize() * max_length
    } else {
        v
    }
}

/// Random point in the annulus `[min_radius, max_radius]` around the origin.
///
/// The radius is drawn linearly, not area-uniform, so density leans toward
/// the inner edge. Spawn patterns are tuned around that bias; keep it.
pub fn random_point_in_annulus<R: Rng + ?Sized>(
    min_radius: f32,
    max_radius: f32,
    rng: &mut R,
) -> Vec2 {
    let radius = min_radius + (max_radius - min_radius) * rng.random::<f32>();
    let angle = std::f32::consts::TAU * rng.random::<f32>();
    heading(angle) * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn circles_touching_at_exact_distance_intersect() {
        // Closed boundary: centers exactly r1 + r2 apart still count.
        let p1 = Vec2::new(0.0, 0.0);
        let p2 = Vec2::new(7.0, 0.0);
        assert!(circles_intersect(p1, 3.0, p2, 4.0));
        assert!(!circles_intersect(p1, 3.0, p2, 3.9));
    }

    #[test]
    fn heading_is_unit_length() {
        for i in 0..16 {
            let angle = i as f32 * std::f32::consts::TAU / 16.0;
            assert_relative_eq!(heading(angle).length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn clamp_length_leaves_short_vectors_alone() {
        let v = Vec2::new(3.0, 4.0); // length 5
        assert_eq!(clamp_length(v, 5.0), v);
        assert_eq!(clamp_length(v, 100.0), v);
    }

    #[test]
    fn annulus_points_stay_in_band() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = random_point_in_annulus(100.0, 300.0, &mut rng);
            let r = p.length();
            assert!((100.0 - 1e-3..=300.0 + 1e-3).contains(&r), "r = {r}");
        }
    }

    proptest! {
        #[test]
        fn circle_test_is_symmetric(
            x1 in -500.0f32..500.0, y1 in -500.0f32..500.0,
            x2 in -500.0f32..500.0, y2 in -500.0f32..500.0,
            r1 in 0.0f32..100.0, r2 in 0.0f32..100.0,
        ) {
            let p1 = Vec2::new(x1, y1);
            let p2 = Vec2::new(x2, y2);
            prop_assert_eq!(
                circles_intersect(p1, r1, p2, r2),
                circles_intersect(p2, r2, p1, r1)
            );
        }

        #[test]
        fn clamp_length_caps_long_vectors(
            x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
            max in 1.0f32..100.0,
        ) {
            let v = Vec2::new(x, y);
            prop_assume!(v.length() > max);
            let clamped = clamp_length(v, max);
            prop_assert!((clamped.length() - max).abs() < 1e-3);
            // Direction preserved
            let dot = clamped.normalize().dot(v.normalize());
            prop_assert!(dot > 0.999);
        }
    }
}
