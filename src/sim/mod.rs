//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One `update(dt, input)` then one `draw(surface)` per host frame
//! - Seeded RNG only, owned by the simulation that uses it
//! - No rendering or platform dependencies beyond the `Surface` trait

pub mod entity;
pub mod gameplay;
pub mod menu;
pub mod options;

pub use entity::{Asteroid, AsteroidSize, Body, Bullet, Player, wrap_position};
pub use gameplay::{Gameplay, SimError};
pub use menu::Menu;
pub use options::{AsteroidOptions, BulletOptions, GameOptions, PlayerOptions};

/// Notification from a simulation back to the flow controller.
///
/// Returned from `update` and routed the same frame; the simulation does
/// not wait for a response and keeps running until a state switch lands.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The menu wants a gameplay session, with a fresh option set.
    Start(GameOptions),
    /// The session is over, either by clearing the field or by dying.
    Ended { points: u32, won: bool },
}
