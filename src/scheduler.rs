//! Turns a stream of frame timestamps into fixed-cadence simulation steps.
//!
//! Frames may arrive faster or slower than the tick interval. A step fires on
//! the first frame at least one interval after the previous step, and that
//! frame's timestamp becomes the new reference, so a late frame never causes a
//! burst of catch-up steps.

use std::time::Duration;

use crate::config::Difficulty;
use crate::game::{GameEvent, GameStatus, Simulation};
use crate::input::Direction;

/// Owns a [`Simulation`] and decides on which frames it steps.
#[derive(Debug, Clone)]
pub struct Scheduler {
    simulation: Simulation,
    /// Timestamp of the last step, or `None` when the next frame must rebase.
    last_tick: Option<Duration>,
}

impl Scheduler {
    #[must_use]
    pub fn new(simulation: Simulation) -> Self {
        Self {
            simulation,
            last_tick: None,
        }
    }

    /// Starts a fresh run at the difficulty's tick interval.
    pub fn start(&mut self, difficulty: Difficulty) {
        self.start_with_interval(Duration::from_millis(difficulty.tick_interval_ms()));
    }

    /// Starts a fresh run with an explicit tick interval.
    pub fn start_with_interval(&mut self, interval: Duration) {
        self.simulation.start(interval);
        self.last_tick = None;
    }

    pub fn pause(&mut self) {
        self.simulation.pause();
    }

    /// Resumes and rebases the cadence on the next frame, so time spent
    /// paused never counts towards the next step.
    pub fn resume(&mut self) {
        if self.simulation.status() == GameStatus::Paused {
            self.simulation.resume();
            self.last_tick = None;
        }
    }

    /// Flips between running and paused. Ignored in any other state.
    pub fn toggle_pause(&mut self) {
        match self.simulation.status() {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::Ready | GameStatus::GameOver => {}
        }
    }

    pub fn stop(&mut self) {
        self.simulation.stop();
        self.last_tick = None;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.simulation.set_direction(direction);
    }

    /// Frame callback. `now` is a monotonic timestamp from any fixed origin.
    pub fn on_frame(&mut self, now: Duration) -> Option<GameEvent> {
        if !self.simulation.is_running() {
            return None;
        }

        let Some(last_tick) = self.last_tick else {
            self.last_tick = Some(now);
            return None;
        };

        if now.saturating_sub(last_tick) < self.simulation.tick_interval() {
            return None;
        }

        self.last_tick = Some(now);
        self.simulation.step()
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    #[must_use]
    pub fn last_tick(&self) -> Option<Duration> {
        self.last_tick
    }
}
