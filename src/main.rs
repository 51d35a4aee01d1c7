//! Road Rush entry point
//!
//! Headless demo driver: an autopilot steers the car while the loop logs
//! score once per simulated second. Stands in for the real frontend, which
//! would supply key state and draw the session instead.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use road_rush::consts::*;
use road_rush::driver::{Driver, InputSource};
use road_rush::sim::{SessionState, TickInput, TickOutcome};

/// How many runs the demo plays before quitting
const DEMO_RUNS: u32 = 3;

/// Simple dodging autopilot
///
/// Steers away from the nearest obstacle that is above the car and closing
/// in on its column, drifting back to the road center otherwise. Restarts
/// after each crash until its runs are used up, then quits.
struct Autopilot {
    runs_left: u32,
    /// Ticks to sit on the game-over screen before acting
    restart_delay: u32,
}

impl Autopilot {
    fn new(runs: u32) -> Self {
        Self {
            runs_left: runs,
            restart_delay: TICK_RATE_HZ,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &SessionState) -> TickInput {
        let mut input = TickInput::default();

        if state.is_game_over() {
            if self.restart_delay > 0 {
                self.restart_delay -= 1;
                return input;
            }
            self.runs_left = self.runs_left.saturating_sub(1);
            if self.runs_left == 0 {
                input.quit = true;
            } else {
                input.restart = true;
            }
            return input;
        }
        self.restart_delay = TICK_RATE_HZ;

        let car = &state.player.rect;

        // Nearest obstacle above the car whose column overlaps ours,
        // widened by a dodge margin
        let margin = 30.0;
        let threat = state
            .obstacles
            .iter()
            .filter(|o| o.rect.bottom() < car.top())
            .filter(|o| o.rect.right() + margin > car.left() && o.rect.left() - margin < car.right())
            .min_by(|a, b| {
                let da = car.top() - a.rect.bottom();
                let db = car.top() - b.rect.bottom();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });

        match threat {
            Some(obs) => {
                // Dodge toward the wider side of the road
                let left_gap = obs.rect.left() - EDGE_MARGIN;
                let right_gap = (PLAYFIELD_WIDTH - EDGE_MARGIN) - obs.rect.right();
                if right_gap > left_gap {
                    input.right = true;
                } else {
                    input.left = true;
                }
            }
            None => {
                // Drift back toward the road center
                let center = PLAYFIELD_WIDTH / 2.0;
                if car.center().x < center - CAR_SPEED {
                    input.right = true;
                } else if car.center().x > center + CAR_SPEED {
                    input.left = true;
                }
            }
        }

        input
    }
}

fn main() {
    env_logger::init();
    log::info!("Road Rush (headless demo) starting");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0x5eed_cafe);
    let mut driver = Driver::new(seed, Autopilot::new(DEMO_RUNS));
    log::info!("session seed: {}", driver.state.seed);

    let mut last = Instant::now();
    let mut last_logged_second = 0u32;
    let mut was_game_over = false;

    loop {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_secs_f32() * 1000.0;
        last = now;

        if driver.step_frame(elapsed_ms) == TickOutcome::Terminated {
            break;
        }

        let state = &driver.state;
        if state.is_game_over() && !was_game_over {
            log::info!(
                "game over: survived {:.1}s, {} obstacles on screen, speed {:.2}",
                state.score,
                state.obstacles.len(),
                state.obstacle_speed
            );
            last_logged_second = 0;
        } else if !state.is_game_over() {
            let second = state.score as u32;
            if second > last_logged_second {
                last_logged_second = second;
                log::info!(
                    "score {:>4}  speed {:.2}  obstacles {}",
                    second,
                    state.obstacle_speed,
                    state.obstacles.len()
                );
            }
        }
        was_game_over = state.is_game_over();

        // Pace the loop near the tick rate; the accumulator absorbs jitter
        std::thread::sleep(std::time::Duration::from_millis(1000 / TICK_RATE_HZ as u64));
    }

    log::info!("demo finished");
}
