//! Fixed-cadence scheduling for the three simulation timers
//!
//! Three cadences drive the game: a 60 Hz physics tick, a 1 Hz stats
//! clock and a 30 s fish escalation. One scheduler with three due-time
//! accumulators keeps them logically independent: the host loop feeds in
//! elapsed wall time and dispatches whatever came due. Tests can bypass
//! the scheduler entirely by calling the world hooks directly.

use crate::consts::{MAX_CATCHUP_TICKS, TICK_HZ};

/// Firings owed after an [`Scheduler::advance`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueFirings {
    pub sim_ticks: u32,
    pub clock_ticks: u32,
    pub escalations: u32,
}

/// Three-cadence accumulator driven by wall-clock deltas
#[derive(Debug, Clone)]
pub struct Scheduler {
    sim_period: f64,
    clock_period: f64,
    escalation_period: f64,
    sim_acc: f64,
    clock_acc: f64,
    escalation_acc: f64,
}

impl Scheduler {
    pub fn new(escalation_secs: u32) -> Self {
        Self {
            sim_period: 1.0 / f64::from(TICK_HZ),
            clock_period: 1.0,
            escalation_period: f64::from(escalation_secs),
            sim_acc: 0.0,
            clock_acc: 0.0,
            escalation_acc: 0.0,
        }
    }

    /// Feed elapsed seconds; returns how many of each firing came due.
    ///
    /// Sim ticks are capped per call; when the cap bites, the leftover
    /// backlog is dropped rather than replayed, so a long stall doesn't
    /// spiral.
    pub fn advance(&mut self, dt: f64) -> DueFirings {
        let mut due = DueFirings::default();

        self.sim_acc += dt;
        while self.sim_acc >= self.sim_period {
            self.sim_acc -= self.sim_period;
            due.sim_ticks += 1;
        }
        if due.sim_ticks > MAX_CATCHUP_TICKS {
            log::warn!(
                "dropping {} backlogged sim ticks",
                due.sim_ticks - MAX_CATCHUP_TICKS
            );
            due.sim_ticks = MAX_CATCHUP_TICKS;
            self.sim_acc = 0.0;
        }

        self.clock_acc += dt;
        while self.clock_acc >= self.clock_period {
            self.clock_acc -= self.clock_period;
            due.clock_ticks += 1;
        }

        self.escalation_acc += dt;
        while self.escalation_acc >= self.escalation_period {
            self.escalation_acc -= self.escalation_period;
            due.escalations += 1;
        }

        due
    }
}
