//! Per-frame input value
//!
//! The host samples keyboard/gamepad state once per frame and hands the
//! simulation a flag-set by value. Held-key semantics throughout; no edge
//! detection happens inside the simulation.

use bitflags::bitflags;

bitflags! {
    /// Player actions active during a single frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Input: u8 {
        /// Thrust along the ship's current heading
        const ACCELERATE = 1;
        /// Rotate the ship clockwise
        const ROTATE_RIGHT = 1 << 1;
        /// Rotate the ship counter-clockwise
        const ROTATE_LEFT = 1 << 2;
        /// Fire a bullet (also starts the game from the menu)
        const SHOOT = 1 << 3;
    }
}
