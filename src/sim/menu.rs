//! Menu simulation
//!
//! A scrolling star field and a "press to start" trigger. Shooting emits
//! a [`GameEvent::Start`] with a fresh default option tree; the flow
//! controller swaps states right after, so no debounce is needed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::Input;
use crate::render::{Color, Surface, draw_text};
use crate::sim::GameEvent;
use crate::sim::options::GameOptions;

const STAR_COUNT: usize = 25;
/// Stars scroll downward this many design units per second.
const STAR_SCROLL_SPEED: f32 = 10.0;
/// Vertical wrap height for the star scroll. Matches the 300-unit design
/// height rather than the actual field size.
const STAR_WRAP_HEIGHT: f32 = 300.0;

/// Unit-square outline each star is drawn with.
const STAR_OUTLINE: [Vec2; 4] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(-0.5, 0.5),
];

pub struct Menu {
    stars: Vec<Vec2>,
}

impl Menu {
    /// Seed the star field across a `width` x `height` window.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| {
                Vec2::new(
                    rng.random::<f32>() * width,
                    rng.random::<f32>() * height,
                )
            })
            .collect();

        Self { stars }
    }

    pub fn update(&mut self, dt: f32, input: Input) -> Option<GameEvent> {
        for star in &mut self.stars {
            star.y = (star.y + STAR_SCROLL_SPEED * dt) % STAR_WRAP_HEIGHT;
        }

        if input.contains(Input::SHOOT) {
            return Some(GameEvent::Start(GameOptions::default()));
        }

        None
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        for &star in &self.stars {
            surface.draw_polyline(&STAR_OUTLINE, 1.0, 0.0, star, Color::WHITE);
        }

        draw_text(surface, "PRESS", Vec2::new(150.0, 150.0), 10.0);
        draw_text(surface, "-SPACE-", Vec2::new(150.0, 175.0), 6.0);
    }
}
