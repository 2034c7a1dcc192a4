//! Entity model
//!
//! Player, bullets and asteroids all share the same physical shape: a
//! position/velocity pair, a rendered outline and a circular collider.
//! That common part lives in [`Body`]; the wrappers add only what their
//! kind needs (bullet lifetime, asteroid size class).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Shared physical and visual state of every entity.
///
/// Collision uses only `position` and `collision_radius`. `scale` and
/// `vertices` affect rendering alone, so collider size is tuned
/// independently of how big the outline looks.
#[derive(Debug, Clone)]
pub struct Body {
    /// Center position in design space
    pub position: Vec2,
    /// Added to position every update, units per second
    pub velocity: Vec2,
    /// Uniform render scale applied to the outline
    pub scale: f32,
    /// Heading in radians
    pub rotation: f32,
    /// Radius of the circular collider
    pub collision_radius: f32,
    /// Closed outline in local space, drawn vertex to vertex
    pub vertices: Vec<Vec2>,
    pub color: Color,
}

impl Body {
    pub fn new(scale: f32, collision_radius: f32, color: Color, vertices: Vec<Vec2>) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            scale,
            rotation: 0.0,
            collision_radius,
            vertices,
            color,
        }
    }
}

/// The ship. One per session, repositioned on reset rather than rebuilt.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
}

impl Player {
    /// Five-point hull pointing along +x at rotation 0.
    pub fn ship_outline() -> Vec<Vec2> {
        vec![
            Vec2::new(2.0, 0.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(-0.5, -0.8),
            Vec2::new(-0.5, 0.8),
            Vec2::new(-1.0, 1.0),
        ]
    }
}

/// A fired shot. Removed when `life_time` drops below zero or on impact.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
    /// Remaining time to live, seconds. Expiry is checked lazily during
    /// the next collision scan, not the instant it crosses zero.
    pub life_time: f32,
}

impl Bullet {
    pub fn square_outline() -> Vec<Vec2> {
        vec![
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(-0.5, 0.5),
        ]
    }
}

/// Size class deciding what happens on bullet impact: Large and Medium
/// split into two of the next size down, Small just dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Body,
    pub size: AsteroidSize,
}

impl Asteroid {
    /// Lumpy 20-vertex ring; each vertex sits at a random radius in
    /// `[0.7, 1.5)` so no two rocks look alike.
    pub fn rock_outline<R: Rng + ?Sized>(rng: &mut R) -> Vec<Vec2> {
        const POINTS: usize = 20;
        (0..POINTS)
            .map(|i| {
                let radius = rng.random::<f32>() * 0.8 + 0.7;
                let angle = (i as f32 / POINTS as f32) * std::f32::consts::TAU;
                Vec2::new(angle.sin(), angle.cos()) * radius
            })
            .collect()
    }
}

/// Toroidal wrap: an entity that fully leaves one edge reappears at the
/// opposite one. Axes are independent and at most one branch per axis can
/// trigger in a frame.
pub fn wrap_position(body: &mut Body, width: f32, height: f32) {
    let radius = body.collision_radius;
    let position = body.position;

    if position.x + radius < 0.0 {
        body.position.x = width + radius;
    } else if position.x - radius > width {
        body.position.x = -radius;
    }

    if position.y + radius < 0.0 {
        body.position.y = height + radius;
    } else if position.y - radius > height {
        body.position.y = -radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn body_at(x: f32, y: f32, radius: f32) -> Body {
        let mut body = Body::new(1.0, radius, Color::WHITE, Vec::new());
        body.position = Vec2::new(x, y);
        body
    }

    #[test]
    fn wraps_past_left_edge_to_right() {
        let mut body = body_at(-11.0, 50.0, 10.0);
        wrap_position(&mut body, 300.0, 300.0);
        assert_eq!(body.position.x, 310.0);
        assert_eq!(body.position.y, 50.0);
    }

    #[test]
    fn wraps_past_right_edge_to_left() {
        let mut body = body_at(311.0, 50.0, 10.0);
        wrap_position(&mut body, 300.0, 300.0);
        assert_eq!(body.position.x, -10.0);
    }

    #[test]
    fn wraps_each_axis_independently() {
        let mut body = body_at(-11.0, 311.0, 10.0);
        wrap_position(&mut body, 300.0, 300.0);
        assert_eq!(body.position, Vec2::new(310.0, -10.0));
    }

    #[test]
    fn inside_bounds_never_repositioned() {
        // Touching the edge is not "fully outside".
        let mut body = body_at(0.0, 300.0, 10.0);
        wrap_position(&mut body, 300.0, 300.0);
        assert_eq!(body.position, Vec2::new(0.0, 300.0));

        let mut body = body_at(150.0, 150.0, 10.0);
        wrap_position(&mut body, 300.0, 300.0);
        assert_eq!(body.position, Vec2::new(150.0, 150.0));
    }

    #[test]
    fn rock_outline_has_twenty_bounded_vertices() {
        let mut rng = Pcg32::seed_from_u64(3);
        let outline = Asteroid::rock_outline(&mut rng);
        assert_eq!(outline.len(), 20);
        for v in outline {
            let r = v.length();
            assert!((0.7..1.5).contains(&r), "vertex radius {r}");
        }
    }
}
