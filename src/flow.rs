//! Top-level game flow
//!
//! A two-state machine (menu, gameplay) with a timed crossfade layered on
//! top. While a transition runs the active state is suspended: only the
//! fade timer advances, and drawing routes through the opacity decorator.
//! The commit to the pending state deliberately lands before the fade
//! fully reaches zero; the timing quirk is part of the game's look.

use log::{debug, warn};
use thiserror::Error;

use crate::consts::{DESIGN_HEIGHT, DESIGN_WIDTH};
use crate::input::Input;
use crate::render::{Color, FadeSurface, Rect, Surface};
use crate::sim::{GameEvent, Gameplay, Menu, SimError};
use crate::sim::options::GameOptions;

/// Flow-level failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Which simulation is (or will become) active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StateId {
    Menu,
    Gameplay,
}

/// Fade duration in seconds.
const TRANSITION_DURATION: f32 = 0.5;
/// The pending state commits once the countdown falls to this value, so
/// the switch happens about 0.3s into the 0.5s fade.
const COMMIT_DELAY: f32 = -0.2;

/// The game: owns both simulations and drives the state machine.
pub struct Game {
    width: f32,
    height: f32,

    active: StateId,
    pending: Option<StateId>,

    transitioning: bool,
    duration: f32,
    opacity: f32,
    fade_rate: f32,

    menu: Menu,
    gameplay: Gameplay,
}

impl Game {
    /// Build a game on the 300x300 design viewport, starting in the menu.
    ///
    /// The seed feeds every random decision (star field, asteroid spawns,
    /// splits), so a fixed seed replays identically.
    pub fn new(seed: u64) -> Self {
        let width = DESIGN_WIDTH;
        let height = DESIGN_HEIGHT;

        Self {
            width,
            height,
            active: StateId::Menu,
            pending: None,
            transitioning: false,
            duration: 0.0,
            opacity: 0.0,
            fade_rate: 0.0,
            menu: Menu::new(width, height, seed),
            gameplay: Gameplay::new(GameOptions::default(), seed.wrapping_add(1)),
        }
    }

    /// Advance the game by `dt` seconds with this frame's input.
    pub fn update(&mut self, dt: f32, input: Input) -> Result<(), GameError> {
        if self.transitioning {
            // Commit check runs before the decrement, so the switch lands
            // on the frame after the countdown crosses the threshold.
            if self.duration <= COMMIT_DELAY {
                if let Some(next) = self.pending.take() {
                    debug!("transition committed: {next:?}");
                    self.active = next;
                }
                self.transitioning = false;
            }
            self.duration -= dt;
            self.opacity -= self.fade_rate * dt;
            return Ok(());
        }

        let event = match self.active {
            StateId::Menu => self.menu.update(dt, input),
            StateId::Gameplay => self.gameplay.update(dt, input)?,
        };

        match event {
            Some(GameEvent::Start(options)) => {
                self.gameplay.set_options(options);
                self.gameplay.reset(self.width, self.height);
                self.begin_transition(StateId::Gameplay);
            }
            Some(GameEvent::Ended { points, won }) => {
                debug!("session over (won: {won}, points: {points})");
                self.begin_transition(StateId::Menu);
            }
            None => {}
        }

        Ok(())
    }

    /// Draw the current frame: black background at full opacity, then the
    /// active state, faded while a transition runs.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), GameError> {
        surface.begin_frame();
        let result = self.draw_inner(surface);
        surface.end_frame();
        result
    }

    fn draw_inner<S: Surface>(&self, surface: &mut S) -> Result<(), GameError> {
        if self.transitioning {
            let mut fade = FadeSurface::new(surface, self.opacity);
            self.draw_background(&mut fade);
            self.draw_active(&mut fade)
        } else {
            self.draw_background(surface);
            self.draw_active(surface)
        }
    }

    fn draw_background<S: Surface>(&self, surface: &mut S) {
        let rect = Rect::new(0.0, 0.0, self.width, self.height);
        surface.fill_rect(rect, Color::BLACK);
    }

    fn draw_active<S: Surface>(&self, surface: &mut S) -> Result<(), GameError> {
        match self.active {
            StateId::Menu => {
                self.menu.draw(surface);
                Ok(())
            }
            StateId::Gameplay => Ok(self.gameplay.draw(surface)?),
        }
    }

    /// Start fading toward `target`. A request while another transition
    /// is running is dropped, not queued.
    fn begin_transition(&mut self, target: StateId) -> bool {
        if self.transitioning {
            warn!("transition to {target:?} requested while one is active; dropping");
            return false;
        }

        self.duration = TRANSITION_DURATION;
        self.opacity = 1.0;
        self.fade_rate = self.opacity / TRANSITION_DURATION;
        self.transitioning = true;
        self.pending = Some(target);

        true
    }

    /// True while a crossfade is in progress.
    pub fn transitioning(&self) -> bool {
        self.transitioning
    }
}
