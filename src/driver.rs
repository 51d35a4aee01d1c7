//! Fixed-timestep driver
//!
//! Owns the session and feeds it ticks at 60 Hz from whatever wall-clock the
//! caller has, plus the two external signals the sim needs each tick: an
//! input snapshot and the spawn-timer pulse. The sim never sees real time
//! directly.

use crate::consts::*;
use crate::sim::{SessionState, TickInput, TickOutcome, advance};

/// Wall-clock spawn scheduler
///
/// Accumulates elapsed milliseconds and fires at most once per poll, carrying
/// the remainder so a long frame fires on consecutive ticks instead of
/// dropping a spawn.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: f32,
    accum_ms: f32,
}

impl SpawnTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            accum_ms: 0.0,
        }
    }

    /// Credit `dt_ms` of wall-clock time; true when a spawn is due
    pub fn poll(&mut self, dt_ms: f32) -> bool {
        self.accum_ms += dt_ms;
        if self.accum_ms >= self.interval_ms {
            self.accum_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accum_ms = 0.0;
    }
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL_MS)
    }
}

/// Per-tick input supplier
///
/// Gets read access to the session so an autopilot can steer from what it
/// sees; a real frontend would ignore the argument and report key state.
pub trait InputSource {
    fn poll(&mut self, state: &SessionState) -> TickInput;
}

/// Fixed-timestep loop around one session
///
/// Converts variable frame times into fixed 60 Hz ticks with an accumulator,
/// capped at `MAX_SUBSTEPS` ticks per frame.
pub struct Driver<I: InputSource> {
    pub state: SessionState,
    input: I,
    spawn_timer: SpawnTimer,
    accumulator_ms: f32,
}

impl<I: InputSource> Driver<I> {
    pub fn new(seed: u64, input: I) -> Self {
        Self {
            state: SessionState::new(seed),
            input,
            spawn_timer: SpawnTimer::default(),
            accumulator_ms: 0.0,
        }
    }

    /// Run the ticks covered by `elapsed_ms` of wall-clock time
    ///
    /// Returns `Terminated` as soon as a tick requests quit; remaining
    /// accumulated time is discarded with the session.
    pub fn step_frame(&mut self, elapsed_ms: f32) -> TickOutcome {
        // Clamp runaway frames (debugger pauses, suspended laptops)
        self.accumulator_ms += elapsed_ms.min(250.0);

        let mut substeps = 0;
        while self.accumulator_ms >= TICK_DT_MS && substeps < MAX_SUBSTEPS {
            let was_game_over = self.state.is_game_over();
            let input = self.input.poll(&self.state);
            // The timer keeps counting while game over, but its pulse is
            // consumed here so a restart doesn't inherit a stale backlog
            let spawn_due = self.spawn_timer.poll(TICK_DT_MS) && !was_game_over;

            if advance(&mut self.state, &input, TICK_DT_MS, spawn_due) == TickOutcome::Terminated {
                return TickOutcome::Terminated;
            }
            if was_game_over && !self.state.is_game_over() {
                log::info!("session restarted (seed {})", self.state.seed);
                self.spawn_timer.reset();
            }

            self.accumulator_ms -= TICK_DT_MS;
            substeps += 1;
        }

        TickOutcome::Running
    }
}
