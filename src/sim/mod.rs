//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host loop owns a [`World`], feeds wall time to a [`Scheduler`], and
//! dispatches the due firings: [`tick`] at 60 Hz, [`World::advance_clock`]
//! at 1 Hz and [`World::escalate_fish`] every 30 seconds. Input arrives as
//! discrete [`InputEvent`]s applied between ticks.

pub mod bounds;
pub mod clock;
pub mod collision;
pub mod fish;
pub mod state;
pub mod tick;

pub use bounds::{Aabb, Obb};
pub use clock::{DueFirings, Scheduler};
pub use fish::{Fish, FishPopulation};
pub use state::{Boat, GameSession, HudState, PaddleDirection, RenderSnapshot, World};
pub use tick::{InputEvent, apply_event, tick};
