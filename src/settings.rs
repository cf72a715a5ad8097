//! Data-driven game balance
//!
//! Every gameplay constant the simulation consumes, with defaults mirroring
//! [`crate::consts`]. The driver may load overrides from a JSON file; the
//! simulation itself never touches the filesystem.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Failure to read or parse a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Gameplay balance knobs
///
/// Unknown fields in an override file are rejected; missing fields fall
/// back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Per-tick speed nudge while paddling, scaled by paddle strength
    pub paddle_accel: f32,
    /// Speed lost per tick while coasting
    pub speed_decay: f32,
    /// Heading change per one-sided paddling tick (degrees)
    pub turn_rate_deg: f32,
    /// Fish pool capacity
    pub max_fish: usize,
    /// Spawn ring radius, doubling as the despawn distance
    pub fish_max_distance: f32,
    /// Spawn-time fish speed range
    pub fish_min_speed: f32,
    pub fish_max_speed: f32,
    /// Seconds between fish speed doublings
    pub fish_escalation_secs: u32,
    /// Lives at the start of a run
    pub start_lives: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_accel: consts::PADDLE_ACCEL,
            speed_decay: consts::SPEED_DECAY,
            turn_rate_deg: consts::TURN_RATE_DEG,
            max_fish: consts::MAX_FISH,
            fish_max_distance: consts::FISH_MAX_DISTANCE,
            fish_min_speed: consts::FISH_MIN_SPEED,
            fish_max_speed: consts::FISH_MAX_SPEED,
            fish_escalation_secs: consts::FISH_ESCALATION_SECS,
            start_lives: consts::START_LIVES,
        }
    }
}

impl Tuning {
    /// Load tuning overrides from a JSON file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let text = fs::read_to_string(path)?;
        let tuning = serde_json::from_str(&text)?;
        Ok(tuning)
    }
}
