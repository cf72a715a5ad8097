//! Lagoon - simulation core for a lake-rowing demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (boat physics, fish population, collisions)
//! - `settings`: Data-driven game balance
//!
//! Rendering, windowing, shaders and text are external collaborators: they
//! read the snapshots exposed by [`sim::World`] and never mutate simulation
//! state.

pub mod settings;
pub mod sim;

pub use settings::Tuning;

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation cadence (physics ticks per second)
    pub const TICK_HZ: u32 = 60;
    /// Maximum sim ticks drained per scheduler advance to prevent spiral of death
    pub const MAX_CATCHUP_TICKS: u32 = 8;
    /// Integration step used by the boat integrator
    pub const SIM_DT: f32 = 0.05;

    /// Per-tick speed nudge while paddling, scaled by paddle strength
    pub const PADDLE_ACCEL: f32 = 0.1;
    /// Speed lost per tick while coasting
    pub const SPEED_DECAY: f32 = 0.01;
    /// Heading change per tick while paddling on one side only (degrees)
    pub const TURN_RATE_DEG: f32 = 2.0;
    /// Cosmetic oar-swing accumulation per tick, scaled by strength
    pub const PADDLE_SWING_RATE: f32 = 2.0;

    /// Half extents shared by every entity's bounding box
    pub const ENTITY_HALF_SIZE: [f32; 3] = [0.5, 0.25, 0.15];

    /// Fish pool capacity
    pub const MAX_FISH: usize = 10;
    /// Spawn ring radius, doubling as the despawn distance (planar, from the boat)
    pub const FISH_MAX_DISTANCE: f32 = 20.0;
    /// Fish speed range at spawn time
    pub const FISH_MIN_SPEED: f32 = 0.01;
    pub const FISH_MAX_SPEED: f32 = 0.06;
    /// Seconds between fish speed doublings
    pub const FISH_ESCALATION_SECS: u32 = 30;

    /// Lives at the start of a run
    pub const START_LIVES: i32 = 5;

    /// Island footprint in the XZ plane: a 10x10 quad centered at (-10, 0)
    pub const ISLAND_MIN: [f32; 2] = [-15.0, -5.0];
    pub const ISLAND_MAX: [f32; 2] = [-5.0, 5.0];

    /// Buoy anchor points in the XZ plane
    pub const BUOY_POSITIONS: [[f32; 2]; 6] = [
        [10.0, 7.0],
        [-12.0, 7.0],
        [16.5, -4.5],
        [0.0, -17.0],
        [-16.5, -4.5],
        [0.0, 17.0],
    ];
    /// Collision margin padded around each buoy anchor
    pub const BUOY_MARGIN: f32 = 0.15;
}

/// Unit heading vector in the XZ plane for a yaw angle in degrees
#[inline]
pub fn heading_vector(angle_deg: f32) -> Vec3 {
    let rad = angle_deg.to_radians();
    Vec3::new(rad.sin(), 0.0, rad.cos())
}

/// Distance between two points projected onto the XZ plane
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}
