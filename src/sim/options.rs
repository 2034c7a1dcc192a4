//! Session tuning
//!
//! One immutable option tree per gameplay session, read at reset. The
//! menu builds a fresh `GameOptions::default()` for every game-start
//! event; mutating the tree mid-session is unsupported. Everything is
//! serde-derived so hosts can keep tuning in a config file.

use serde::{Deserialize, Serialize};

use crate::render::Color;
use crate::sim::entity::AsteroidSize;

/// Ship tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerOptions {
    pub scale: f32,
    pub collision_radius: f32,
    pub color: Color,
    /// Thrust acceleration, units per second squared
    pub speed: f32,
    /// Velocity magnitude cap
    pub max_speed: f32,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            scale: 5.0,
            collision_radius: 10.0,
            color: Color::GREEN,
            speed: 200.0,
            max_speed: 500.0,
        }
    }
}

/// Bullet tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletOptions {
    pub scale: f32,
    pub collision_radius: f32,
    pub color: Color,
    /// Muzzle velocity, units per second
    pub speed: f32,
    /// Seconds a bullet lives before expiring
    pub life_time: f32,
}

impl Default for BulletOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            collision_radius: 10.0,
            color: Color::WHITE,
            speed: 140.0,
            life_time: 1.0,
        }
    }
}

/// Per-size asteroid tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidOptions {
    pub scale: f32,
    pub collision_radius: f32,
    pub color: Color,
    pub size: AsteroidSize,
    /// Drift speed, units per second
    pub speed: f32,
}

impl AsteroidOptions {
    fn small() -> Self {
        Self {
            scale: 3.0,
            collision_radius: 1.0,
            color: Color::WHITE,
            size: AsteroidSize::Small,
            speed: 32.0,
        }
    }

    fn medium() -> Self {
        Self {
            scale: 5.0,
            collision_radius: 5.0,
            color: Color::WHITE,
            size: AsteroidSize::Medium,
            speed: 22.0,
        }
    }

    fn large() -> Self {
        Self {
            scale: 10.0,
            collision_radius: 10.0,
            color: Color::WHITE,
            size: AsteroidSize::Large,
            speed: 15.0,
        }
    }
}

/// The full option tree for one gameplay session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOptions {
    pub player: PlayerOptions,
    pub bullet: BulletOptions,
    pub small_asteroid: AsteroidOptions,
    pub medium_asteroid: AsteroidOptions,
    pub large_asteroid: AsteroidOptions,
    /// Large asteroids spawned at reset
    pub asteroid_count: u32,
    /// Seconds between shots
    pub shoot_cooldown: f32,
}

impl GameOptions {
    /// Option set for the given size class.
    pub fn asteroid(&self, size: AsteroidSize) -> &AsteroidOptions {
        match size {
            AsteroidSize::Small => &self.small_asteroid,
            AsteroidSize::Medium => &self.medium_asteroid,
            AsteroidSize::Large => &self.large_asteroid,
        }
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player: PlayerOptions::default(),
            bullet: BulletOptions::default(),
            small_asteroid: AsteroidOptions::small(),
            medium_asteroid: AsteroidOptions::medium(),
            large_asteroid: AsteroidOptions::large(),
            asteroid_count: 10,
            shoot_cooldown: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_tuning() {
        let options = GameOptions::default();
        assert_eq!(options.asteroid_count, 10);
        assert_eq!(options.shoot_cooldown, 0.3);
        assert_eq!(options.player.max_speed, 500.0);
        assert_eq!(options.bullet.life_time, 1.0);
        assert_eq!(options.large_asteroid.size, AsteroidSize::Large);
        assert_eq!(options.large_asteroid.speed, 15.0);
        assert_eq!(options.small_asteroid.collision_radius, 1.0);
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = GameOptions::default();
        let json = serde_json::to_string(&options).unwrap();
        let back: GameOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
