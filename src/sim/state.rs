//! Session state and core simulation types
//!
//! A session is one run of the game: everything here is rebuilt from a seed
//! on restart and nothing outlives it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Normal gameplay: scoring, spawning, movement, collision all run
    Active,
    /// Run ended by collision; score and speed are frozen until restart
    GameOver,
}

/// The player's car
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    /// Car centered on the road, near the bottom of the field
    pub fn new() -> Self {
        Self {
            rect: Rect::from_center(
                Vec2::new(PLAYFIELD_WIDTH / 2.0, CAR_START_CENTER_Y),
                Vec2::new(CAR_WIDTH, CAR_HEIGHT),
            ),
        }
    }

    /// The road rectangle the car must stay inside
    pub fn road_bounds() -> Rect {
        Rect::new(
            EDGE_MARGIN,
            EDGE_MARGIN,
            PLAYFIELD_WIDTH - 2.0 * EDGE_MARGIN,
            PLAYFIELD_HEIGHT - 2.0 * EDGE_MARGIN,
        )
    }

    /// Apply one tick of movement and clamp back onto the road
    pub fn steer(&mut self, delta: Vec2) {
        self.rect.translate(delta);
        self.rect.clamp_into(&Self::road_bounds());
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A falling obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub rect: Rect,
    /// Downward speed in pixels per tick, frozen at spawn time
    pub speed: f32,
}

impl Obstacle {
    /// Move down by this obstacle's own speed
    pub fn advance(&mut self) {
        self.rect.translate(Vec2::new(0.0, self.speed));
    }

    /// True once the obstacle has fully left the field, plus buffer
    pub fn is_offscreen(&self) -> bool {
        self.rect.top() > PLAYFIELD_HEIGHT + DESPAWN_BUFFER
    }
}

/// Complete state of one run (deterministic given the seed)
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session-owned RNG; only obstacle spawns draw from it
    rng: Pcg32,
    /// Simulation tick counter (Active ticks only)
    pub tick: u64,
    /// Seconds survived; this is the score
    pub score: f32,
    /// Speed given to newly spawned obstacles; ramps per tick while Active
    pub obstacle_speed: f32,
    pub phase: SessionPhase,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
}

impl SessionState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick: 0,
            score: 0.0,
            obstacle_speed: OBSTACLE_BASE_SPEED,
            phase: SessionPhase::Active,
            player: Player::new(),
            obstacles: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Spawn one obstacle just above the field
    ///
    /// Width and column are integer draws; the box, inset included, always
    /// fits within the road horizontally. Speed is fixed to the current
    /// global speed and never changes afterwards.
    pub fn spawn_obstacle(&mut self) {
        let w = self.rng.random_range(OBSTACLE_WIDTH_MIN..=OBSTACLE_WIDTH_MAX) as f32;

        let road_left = EDGE_MARGIN;
        let road_right = PLAYFIELD_WIDTH - EDGE_MARGIN;
        let x_min = (road_left + SPAWN_INSET) as i32;
        let x_max = (road_right - w - SPAWN_INSET) as i32;
        let x = self.rng.random_range(x_min..=x_max) as f32;

        let y = -(OBSTACLE_HEIGHT + SPAWN_DROP_GAP);

        self.obstacles.push(Obstacle {
            rect: Rect::new(x, y, w, OBSTACLE_HEIGHT),
            speed: self.obstacle_speed,
        });
    }

    /// Draw a seed for the next session in a restart chain
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}
