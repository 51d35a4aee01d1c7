//! Per-tick session update
//!
//! One `advance` call per fixed-rate tick. The rule order is load-bearing:
//! score and speed ramp first, then spawn, player movement, obstacle scroll,
//! cleanup, and collision last. The difficulty ramp is per tick, not per
//! elapsed second, so the curve is tied to tick count by design.

use glam::Vec2;

use super::state::{SessionPhase, SessionState};
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held movement keys, sampled once per tick
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Start a fresh session (honored only while game over)
    pub restart: bool,
    /// End the session and stop the outer loop
    pub quit: bool,
}

impl TickInput {
    /// Movement delta for this tick's held keys
    ///
    /// When opposing keys are both held, right wins over left and down wins
    /// over up. Diagonals are the raw vector sum, so diagonal speed is
    /// `sqrt(2) * CAR_SPEED`.
    pub fn steer_delta(&self) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.left {
            delta.x = -CAR_SPEED;
        }
        if self.right {
            delta.x = CAR_SPEED;
        }
        if self.up {
            delta.y = -CAR_SPEED;
        }
        if self.down {
            delta.y = CAR_SPEED;
        }
        delta
    }
}

/// What the driver should do after this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking
    Running,
    /// Quit was requested; the session is done
    Terminated,
}

/// Advance the session by one fixed tick
///
/// `dt_ms` is the elapsed wall-clock time credited to the score this tick.
/// `spawn_due` comes from the wall-clock spawn timer and is true at most
/// once per tick.
pub fn advance(
    state: &mut SessionState,
    input: &TickInput,
    dt_ms: f32,
    spawn_due: bool,
) -> TickOutcome {
    if state.is_game_over() {
        // Frozen: only the discrete commands are honored
        if input.restart {
            let seed = state.next_seed();
            *state = SessionState::new(seed);
            return TickOutcome::Running;
        }
        if input.quit {
            return TickOutcome::Terminated;
        }
        return TickOutcome::Running;
    }

    state.tick += 1;

    // Score is seconds survived
    state.score += dt_ms / 1000.0;
    // Ramp once per tick regardless of dt
    state.obstacle_speed += OBSTACLE_SPEED_INCREMENT;

    if spawn_due {
        state.spawn_obstacle();
    }

    state.player.steer(input.steer_delta());

    for obs in &mut state.obstacles {
        obs.advance();
    }
    state.obstacles.retain(|o| !o.is_offscreen());

    // Collision ends the run; the obstacle list is left as-is
    if state
        .obstacles
        .iter()
        .any(|o| state.player.rect.intersects(&o.rect))
    {
        state.phase = SessionPhase::GameOver;
    }

    // Quit is a per-event check, not a gate on the updates above
    if input.quit {
        return TickOutcome::Terminated;
    }

    TickOutcome::Running
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::Obstacle;

    fn held(left: bool, right: bool, up: bool, down: bool) -> TickInput {
        TickInput {
            left,
            right,
            up,
            down,
            ..TickInput::default()
        }
    }

    #[test]
    fn test_hold_right_ten_ticks() {
        let mut state = SessionState::new(0);
        let start_x = state.player.rect.center().x;
        assert_eq!(start_x, 300.0);

        let input = held(false, true, false, false);
        for _ in 0..10 {
            advance(&mut state, &input, 16.0, false);
        }
        assert_eq!(state.player.rect.center().x, start_x + 10.0 * CAR_SPEED);
    }

    #[test]
    fn test_clamp_at_right_road_edge() {
        let mut state = SessionState::new(0);
        let input = held(false, true, false, false);
        for _ in 0..200 {
            advance(&mut state, &input, 16.0, false);
        }
        assert_eq!(
            state.player.rect.right(),
            PLAYFIELD_WIDTH - EDGE_MARGIN
        );
    }

    #[test]
    fn test_opposing_keys_right_and_down_win() {
        let mut state = SessionState::new(0);
        let start = state.player.rect.center();
        advance(&mut state, &held(true, true, true, true), 16.0, false);
        let end = state.player.rect.center();
        assert_eq!(end.x - start.x, CAR_SPEED);
        assert_eq!(end.y - start.y, CAR_SPEED);
    }

    #[test]
    fn test_obstacle_advances_by_own_speed() {
        let mut state = SessionState::new(0);
        advance(&mut state, &TickInput::default(), 16.0, true);
        let start_y = state.obstacles[0].rect.top();
        let speed = state.obstacles[0].speed;

        // Later global ramp must not affect the spawned obstacle
        state.obstacle_speed = 50.0;
        for _ in 0..5 {
            advance(&mut state, &TickInput::default(), 16.0, false);
        }
        let moved = state.obstacles[0].rect.top() - start_y;
        assert!((moved - 5.0 * speed).abs() < 1e-3);
    }

    #[test]
    fn test_speed_ramp_is_per_tick() {
        let mut state = SessionState::new(0);
        advance(&mut state, &TickInput::default(), 16.0, false);
        let after_one = state.obstacle_speed;
        assert!((after_one - (OBSTACLE_BASE_SPEED + OBSTACLE_SPEED_INCREMENT)).abs() < 1e-6);

        // Same increment for a wildly different dt
        advance(&mut state, &TickInput::default(), 500.0, false);
        assert!(
            (state.obstacle_speed - (OBSTACLE_BASE_SPEED + 2.0 * OBSTACLE_SPEED_INCREMENT)).abs()
                < 1e-6
        );
    }

    #[test]
    fn test_offscreen_obstacles_dropped_in_order() {
        let mut state = SessionState::new(0);
        state.obstacles.push(Obstacleish(10.0, PLAYFIELD_HEIGHT + DESPAWN_BUFFER + 1.0).build());
        state.obstacles.push(Obstacleish(200.0, 100.0).build());
        state.obstacles.push(Obstacleish(300.0, 200.0).build());
        advance(&mut state, &TickInput::default(), 16.0, false);
        assert_eq!(state.obstacles.len(), 2);
        assert!(state.obstacles[0].rect.left() < state.obstacles[1].rect.left());
    }

    #[test]
    fn test_collision_sets_game_over_and_freezes() {
        let mut state = SessionState::new(0);
        // Park an obstacle on top of the car
        state.obstacles.push(Obstacle {
            rect: state.player.rect,
            speed: 0.0,
        });
        advance(&mut state, &TickInput::default(), 16.0, false);
        assert!(state.is_game_over());
        assert_eq!(state.obstacles.len(), 1);

        let score = state.score;
        let speed = state.obstacle_speed;
        for _ in 0..10 {
            advance(&mut state, &held(false, true, false, false), 16.0, true);
        }
        assert_eq!(state.score, score);
        assert_eq!(state.obstacle_speed, speed);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_game_over_ignores_movement() {
        let mut state = SessionState::new(0);
        state.phase = SessionPhase::GameOver;
        let pos = state.player.rect;
        advance(&mut state, &held(false, true, false, true), 16.0, false);
        assert_eq!(state.player.rect, pos);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = SessionState::new(0);
        for _ in 0..30 {
            advance(&mut state, &TickInput::default(), 16.0, true);
        }
        state.phase = SessionPhase::GameOver;

        let restart = TickInput {
            restart: true,
            ..TickInput::default()
        };
        assert_eq!(advance(&mut state, &restart, 16.0, false), TickOutcome::Running);
        assert!(!state.is_game_over());
        assert_eq!(state.score, 0.0);
        assert_eq!(state.obstacle_speed, OBSTACLE_BASE_SPEED);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.tick, 0);
    }

    #[test]
    fn test_restart_ignored_while_active() {
        let mut state = SessionState::new(0);
        advance(&mut state, &TickInput::default(), 16.0, false);
        let score = state.score;
        let restart = TickInput {
            restart: true,
            ..TickInput::default()
        };
        advance(&mut state, &restart, 16.0, false);
        assert!(state.score > score);
    }

    #[test]
    fn test_quit_from_active_still_scores_the_tick() {
        let mut state = SessionState::new(0);
        let quit = TickInput {
            quit: true,
            ..TickInput::default()
        };
        assert_eq!(advance(&mut state, &quit, 16.0, false), TickOutcome::Terminated);
        assert!((state.score - 0.016).abs() < 1e-6);
        assert!(state.obstacle_speed > OBSTACLE_BASE_SPEED);
    }

    #[test]
    fn test_quit_from_game_over() {
        let mut state = SessionState::new(0);
        state.phase = SessionPhase::GameOver;
        let quit = TickInput {
            quit: true,
            ..TickInput::default()
        };
        assert_eq!(advance(&mut state, &quit, 16.0, false), TickOutcome::Terminated);
    }

    /// Shorthand for building a test obstacle at (x, top)
    struct Obstacleish(f32, f32);

    impl Obstacleish {
        fn build(self) -> Obstacle {
            Obstacle {
                rect: Rect::new(self.0, self.1, 60.0, OBSTACLE_HEIGHT),
                speed: 1.0,
            }
        }
    }
}
