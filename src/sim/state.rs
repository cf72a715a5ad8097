//! Game state and core simulation types
//!
//! All mutable gameplay state hangs off [`World`], which is owned by the
//! tick driver and mutated only from the scheduler callbacks. Renderer and
//! HUD reads go through the snapshot types at the bottom.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::bounds::Obb;
use super::fish::FishPopulation;
use crate::settings::Tuning;

/// Which way a paddle stroke pushes the boat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleDirection {
    #[default]
    Forward,
    Backward,
}

/// The player's rowing boat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boat {
    pub position: Vec3,
    /// Yaw in degrees. Applied to the heading each tick, never to the OBB.
    pub angle: f32,
    pub speed: f32,
    /// 1 or 2, toggled by input
    pub paddle_strength: i32,
    pub paddle_direction: PaddleDirection,
    /// Held-key state for each oar
    pub left_paddle_working: bool,
    pub right_paddle_working: bool,
    /// Cosmetic oar-swing accumulator; the renderer wraps it with trig
    pub paddle_angle: f32,
    /// Recomputed from `position` every tick
    pub obb: Obb,
}

impl Default for Boat {
    fn default() -> Self {
        Self::new()
    }
}

impl Boat {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            angle: 0.0,
            speed: 0.0,
            paddle_strength: 1,
            paddle_direction: PaddleDirection::Forward,
            left_paddle_working: false,
            right_paddle_working: false,
            paddle_angle: 0.0,
            obb: Obb::at(Vec3::ZERO),
        }
    }

    /// Back to the mooring: position, heading and speed zeroed.
    /// Paddle strength, direction and held-key flags survive a reset.
    pub fn reset(&mut self) {
        self.position = Vec3::ZERO;
        self.angle = 0.0;
        self.speed = 0.0;
        self.obb.center = Vec3::ZERO;
    }
}

/// Lives, play clock and pause flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub lives: i32,
    pub play_time_seconds: u32,
    pub paused: bool,
}

impl GameSession {
    pub fn new(lives: i32) -> Self {
        Self {
            lives,
            play_time_seconds: 0,
            paused: false,
        }
    }
}

/// Everything the simulation mutates. Single writer: the tick driver.
#[derive(Debug, Clone)]
pub struct World {
    pub boat: Boat,
    pub fish: FishPopulation,
    pub session: GameSession,
    pub tuning: Tuning,
}

impl World {
    /// World with default balance and the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        let session = GameSession::new(tuning.start_lives);
        Self {
            boat: Boat::new(),
            fish: FishPopulation::new(seed),
            session,
            tuning,
        }
    }

    /// Full reset: boat to the mooring, lives and play clock restored.
    /// Fired by the reset input or by running out of lives.
    pub fn reset_game(&mut self) {
        self.boat.reset();
        self.session.lives = self.tuning.start_lives;
        self.session.play_time_seconds = 0;
        log::info!("game reset");
    }

    /// 1 Hz clock callback; frozen while paused
    pub fn advance_clock(&mut self) {
        if !self.session.paused {
            self.session.play_time_seconds += 1;
        }
    }

    /// 30 s escalation callback; a no-op while paused, like every other
    /// state mutation
    pub fn escalate_fish(&mut self) {
        if self.session.paused {
            return;
        }
        self.fish.escalate();
    }

    /// Read-only per-frame state for the renderer
    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            boat_position: self.boat.position,
            boat_angle: self.boat.angle,
            paddle_angle: self.boat.paddle_angle,
            fish_positions: self.fish.iter().map(|f| f.position).collect(),
        }
    }

    /// Read-only session state for the on-screen text layer
    pub fn hud(&self) -> HudState {
        HudState {
            lives: self.session.lives,
            play_time_seconds: self.session.play_time_seconds,
            paused: self.session.paused,
        }
    }
}

/// What the renderer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub boat_position: Vec3,
    pub boat_angle: f32,
    pub paddle_angle: f32,
    pub fish_positions: Vec<Vec3>,
}

/// What the HUD text layer needs
#[derive(Debug, Clone, Serialize)]
pub struct HudState {
    pub lives: i32,
    pub play_time_seconds: u32,
    pub paused: bool,
}
