//! Fixed timestep simulation tick
//!
//! One [`tick`] advances the whole world by a single 60 Hz step: boat
//! physics, fish lifecycle, then the collision policy. Input arrives as
//! discrete [`InputEvent`]s applied between ticks, mirroring key-down and
//! key-up callbacks in the host.

use super::bounds::Aabb;
use super::collision;
use super::state::{Boat, PaddleDirection, World};
use crate::consts::{PADDLE_SWING_RATE, SIM_DT};
use crate::heading_vector;
use crate::settings::Tuning;

/// Discrete input events from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    LeftPaddleDown,
    LeftPaddleUp,
    RightPaddleDown,
    RightPaddleUp,
    ToggleDirection,
    TogglePaddleStrength,
    TogglePause,
    ResetGame,
}

/// Apply one input event. Events land even while paused, so the pause
/// toggle itself always works.
pub fn apply_event(world: &mut World, event: InputEvent) {
    match event {
        InputEvent::LeftPaddleDown => world.boat.left_paddle_working = true,
        InputEvent::LeftPaddleUp => world.boat.left_paddle_working = false,
        InputEvent::RightPaddleDown => world.boat.right_paddle_working = true,
        InputEvent::RightPaddleUp => world.boat.right_paddle_working = false,
        InputEvent::ToggleDirection => {
            world.boat.paddle_direction = match world.boat.paddle_direction {
                PaddleDirection::Forward => PaddleDirection::Backward,
                PaddleDirection::Backward => PaddleDirection::Forward,
            };
        }
        InputEvent::TogglePaddleStrength => {
            world.boat.paddle_strength = if world.boat.paddle_strength == 1 { 2 } else { 1 };
        }
        InputEvent::TogglePause => {
            world.session.paused = !world.session.paused;
            log::debug!("pause: {}", world.session.paused);
        }
        InputEvent::ResetGame => world.reset_game(),
    }
}

/// Advance the world by one fixed 60 Hz step
pub fn tick(world: &mut World) {
    if world.session.paused {
        return;
    }

    step_boat(&mut world.boat, &world.tuning);

    // Fish lifecycle: cull far fish, refill to capacity, then move.
    let boat_position = world.boat.position;
    world.fish.despawn_far(boat_position, &world.tuning);
    world.fish.refill(boat_position, &world.tuning);
    world.fish.advance_all();

    // Static obstacles stall the boat; they never push it back out.
    if world.boat.speed != 0.0 {
        let boat_aabb = Aabb::from_obb(&world.boat.obb);
        if collision::hits_static_obstacle(&boat_aabb) {
            log::debug!("boat ran aground at {}", world.boat.position);
            world.boat.speed = 0.0;
        }
    }

    // Fish strikes, checked whatever the boat's speed. Every overlapping
    // fish costs a life; the pool stays short until the next tick refills.
    let boat_aabb = Aabb::from_obb(&world.boat.obb);
    let strikes = world.fish.collide_with_boat(&boat_aabb);
    for _ in 0..strikes {
        world.session.lives -= 1;
        world.boat.reset();
        log::info!("fish strike, {} lives left", world.session.lives);
        if world.session.lives == 0 {
            world.reset_game();
        }
    }
}

/// Boat physics for one step: paddle input, heading, integration, decay
fn step_boat(boat: &mut Boat, tuning: &Tuning) {
    if boat.left_paddle_working || boat.right_paddle_working {
        // Soft clamp: the branch condition bounds the nudge, not the
        // result, so the magnitude can drift past 1 when the paddle
        // direction flips mid-stroke. Kept as-is.
        let nudge = tuning.paddle_accel * boat.paddle_strength as f32;
        if boat.speed <= 1.0 && boat.paddle_direction == PaddleDirection::Forward {
            boat.speed += nudge;
        } else if boat.speed >= -1.0 {
            boat.speed -= nudge;
        }

        if boat.left_paddle_working && !boat.right_paddle_working {
            boat.angle += tuning.turn_rate_deg;
        } else if boat.right_paddle_working && !boat.left_paddle_working {
            boat.angle -= tuning.turn_rate_deg;
        }

        boat.paddle_angle += PADDLE_SWING_RATE * boat.paddle_strength as f32;
    }

    let heading = heading_vector(boat.angle);
    boat.position.x += boat.speed * heading.x * SIM_DT;
    boat.position.z += boat.speed * heading.z * SIM_DT;
    boat.obb.center = boat.position;

    if boat.speed > 0.0 {
        boat.speed -= tuning.speed_decay;
    } else if boat.speed < 0.0 {
        boat.speed += tuning.speed_decay;
    }
}
