//! The gameplay simulation
//!
//! Owns the live entity collections and runs the per-frame update:
//! collision scan with asteroid splitting, input response, thrust and
//! damping, Euler integration, toroidal wrap and bullet lifetimes. The
//! update order is a fixed contract; see `update`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::input::Input;
use crate::render::{Surface, draw_entity};
use crate::sim::GameEvent;
use crate::sim::entity::{Asteroid, AsteroidSize, Body, Bullet, Player, wrap_position};
use crate::sim::options::{AsteroidOptions, GameOptions};
use crate::{circles_intersect, clamp_length, heading, random_point_in_annulus};

/// Simulation misuse, reported in every build profile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// `update`/`draw` before `reset` started a session.
    #[error("gameplay session not started; call reset() first")]
    NotStarted,
}

/// Per-frame damping factor applied while thrust is not held.
///
/// Deliberately a raw per-update multiplier, not a time-normalized
/// exponential; the coasting feel is tuned around the frame-coupled decay.
const IDLE_DAMPING: f32 = 0.99;

/// Half-width of the arc blocked out of split-asteroid headings, radians.
const ESCAPE_ARC_MARGIN: f32 = std::f32::consts::TAU / 360.0 * 90.0;

/// Live state of one gameplay session.
pub struct Gameplay {
    started: bool,
    width: f32,
    height: f32,
    options: GameOptions,
    rng: Pcg32,

    shoot_timer: f32,
    player: Player,
    bullets: Vec<Bullet>,
    asteroids: Vec<Asteroid>,
}

impl Gameplay {
    /// Build the simulation and its player. The session still needs
    /// [`reset`](Self::reset) before the first update.
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let player = Player {
            body: Body::new(
                options.player.scale,
                options.player.collision_radius,
                options.player.color,
                Player::ship_outline(),
            ),
        };

        Self {
            started: false,
            width: 0.0,
            height: 0.0,
            options,
            rng: Pcg32::seed_from_u64(seed),
            shoot_timer: 0.0,
            player,
            bullets: Vec::new(),
            asteroids: Vec::new(),
        }
    }

    /// Install a fresh option tree for the next session. Takes effect at
    /// the following [`reset`](Self::reset); changing options mid-session
    /// is unsupported.
    pub fn set_options(&mut self, options: GameOptions) {
        self.player.body.scale = options.player.scale;
        self.player.body.collision_radius = options.player.collision_radius;
        self.player.body.color = options.player.color;
        self.options = options;
    }

    /// Start (or restart) a session on a `width` x `height` field.
    ///
    /// Clears both collections, spawns the opening wave of large
    /// asteroids in an annulus around the center, parks the player at the
    /// center and zeroes the shoot timer.
    pub fn reset(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        let center = Vec2::new(width / 2.0, height / 2.0);

        self.asteroids.clear();
        self.bullets.clear();

        let min_radius = 100.0;
        let max_radius = width.max(height);
        let large = self.options.large_asteroid.clone();
        for _ in 0..self.options.asteroid_count {
            let position = random_point_in_annulus(min_radius, max_radius, &mut self.rng) + center;
            let angle = self.rng.random::<f32>() * std::f32::consts::TAU;
            let velocity = heading(angle) * large.speed;
            let asteroid = self.spawn_asteroid(&large, position, velocity);
            self.asteroids.push(asteroid);
        }

        self.player.body.position = center;
        self.player.body.rotation = 0.0;
        self.player.body.velocity = Vec2::ZERO;

        self.shoot_timer = 0.0;
        self.started = true;
    }

    /// Advance the session by `dt` seconds.
    ///
    /// The order is fixed: cooldown accrual, collision scan (with lazy
    /// bullet expiry and asteroid splitting), end-of-session detection,
    /// rotation, shooting, thrust/damping, velocity clamp, integration,
    /// wrap, bullet lifetime decay. A returned event is a one-way
    /// notification; the simulation keeps running until the controller
    /// switches away.
    pub fn update(&mut self, dt: f32, input: Input) -> Result<Option<GameEvent>, SimError> {
        if !self.started {
            return Err(SimError::NotStarted);
        }

        self.shoot_timer += dt;
        let mut is_dead = false;

        // Reverse index walks tolerate swap-removal in both collections.
        let mut asteroid_index = self.asteroids.len();
        while asteroid_index > 0 {
            asteroid_index -= 1;

            let a_position = self.asteroids[asteroid_index].body.position;
            let a_radius = self.asteroids[asteroid_index].body.collision_radius;
            let a_size = self.asteroids[asteroid_index].size;

            if circles_intersect(
                self.player.body.position,
                self.player.body.collision_radius,
                a_position,
                a_radius,
            ) {
                is_dead = true;
            }

            let mut bullet_index = self.bullets.len();
            while bullet_index > 0 {
                bullet_index -= 1;

                // Expired bullets are reaped lazily, folded into the scan.
                if self.bullets[bullet_index].life_time < 0.0 {
                    self.bullets.swap_remove(bullet_index);
                    continue;
                }

                let bullet = &self.bullets[bullet_index];
                if circles_intersect(
                    a_position,
                    a_radius,
                    bullet.body.position,
                    bullet.body.collision_radius,
                ) {
                    if let Some(child_size) = a_size.split_into() {
                        self.split_asteroid(a_position, child_size);
                    }

                    self.asteroids.swap_remove(asteroid_index);
                    self.bullets.swap_remove(bullet_index);

                    // At most one bullet destroys a given asteroid per frame.
                    break;
                }
            }
        }

        // Clearing the field outranks dying on the same frame.
        let event = if self.asteroids.is_empty() {
            Some(GameEvent::Ended { points: 0, won: true })
        } else if is_dead {
            Some(GameEvent::Ended { points: 0, won: false })
        } else {
            None
        };

        if input.contains(Input::ROTATE_LEFT) {
            self.player.body.rotation -= std::f32::consts::TAU * dt;
        }
        if input.contains(Input::ROTATE_RIGHT) {
            self.player.body.rotation += std::f32::consts::TAU * dt;
        }
        if input.contains(Input::SHOOT) && self.shoot_timer >= self.options.shoot_cooldown {
            let mut bullet = Bullet {
                body: Body::new(
                    self.options.bullet.scale,
                    self.options.bullet.collision_radius,
                    self.options.bullet.color,
                    Bullet::square_outline(),
                ),
                life_time: self.options.bullet.life_time,
            };
            bullet.body.position = self.player.body.position;
            bullet.body.velocity = heading(self.player.body.rotation) * self.options.bullet.speed;
            self.bullets.push(bullet);

            self.shoot_timer = 0.0;
        }
        if input.contains(Input::ACCELERATE) {
            let direction = heading(self.player.body.rotation);
            self.player.body.velocity += direction * self.options.player.speed * dt;
        } else {
            self.player.body.velocity *= IDLE_DAMPING;
        }

        self.player.body.velocity =
            clamp_length(self.player.body.velocity, self.options.player.max_speed);
        self.player.body.position += self.player.body.velocity * dt;

        for asteroid in &mut self.asteroids {
            asteroid.body.position += asteroid.body.velocity * dt;
        }
        for bullet in &mut self.bullets {
            bullet.body.position += bullet.body.velocity * dt;
        }

        let (width, height) = (self.width, self.height);
        wrap_position(&mut self.player.body, width, height);
        for asteroid in &mut self.asteroids {
            wrap_position(&mut asteroid.body, width, height);
        }
        for bullet in &mut self.bullets {
            wrap_position(&mut bullet.body, width, height);
            bullet.life_time -= dt;
        }

        Ok(event)
    }

    /// Render the field: asteroids, then bullets, then the ship on top.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), SimError> {
        if !self.started {
            return Err(SimError::NotStarted);
        }

        for asteroid in &self.asteroids {
            draw_entity(surface, &asteroid.body);
        }
        for bullet in &self.bullets {
            draw_entity(surface, &bullet.body);
        }
        draw_entity(surface, &self.player.body);

        Ok(())
    }

    /// Replace a shot asteroid with two children of the next size down.
    ///
    /// Children spawn within 5 units of the parent, heading somewhere in
    /// the half-plane facing away from the player so a split never throws
    /// debris straight at the ship.
    fn split_asteroid(&mut self, position: Vec2, child_size: AsteroidSize) {
        let away = self.player.body.rotation + std::f32::consts::PI;
        let angle_start = away + ESCAPE_ARC_MARGIN;
        let angle_end = away + std::f32::consts::TAU - ESCAPE_ARC_MARGIN;

        let child_options = self.options.asteroid(child_size).clone();
        for _ in 0..2 {
            let child_position = random_point_in_annulus(0.0, 5.0, &mut self.rng) + position;
            let angle = angle_start + (angle_end - angle_start) * self.rng.random::<f32>();
            let velocity = heading(angle) * child_options.speed;
            let child = self.spawn_asteroid(&child_options, child_position, velocity);
            self.asteroids.push(child);
        }
    }

    fn spawn_asteroid(
        &mut self,
        options: &AsteroidOptions,
        position: Vec2,
        velocity: Vec2,
    ) -> Asteroid {
        let mut body = Body::new(
            options.scale,
            options.collision_radius,
            options.color,
            Asteroid::rock_outline(&mut self.rng),
        );
        body.position = position;
        body.velocity = velocity;

        Asteroid {
            body,
            size: options.size,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }
}

impl AsteroidSize {
    /// Size class of split children, or `None` for Small asteroids, which
    /// are simply destroyed.
    pub fn split_into(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}
