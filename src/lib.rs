//! Road Rush - a top-down car-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (session state, per-tick rules, collision)
//! - `driver`: Fixed-timestep driver and spawn timer that feed the simulation
//!
//! The simulation is headless: rendering, audio, and input devices live
//! outside the crate. A session advances one tick at a time from a
//! `TickInput` snapshot, so a full run is reproducible from its seed.

pub mod driver;
pub mod sim;

pub use driver::{Driver, InputSource, SpawnTimer};
pub use sim::{SessionState, TickInput, TickOutcome, advance};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_RATE_HZ: u32 = 60;
    /// Milliseconds per simulation tick
    pub const TICK_DT_MS: f32 = 1000.0 / TICK_RATE_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (the whole window, margins included)
    pub const PLAYFIELD_WIDTH: f32 = 600.0;
    pub const PLAYFIELD_HEIGHT: f32 = 800.0;
    /// Margin between the playfield edge and the drivable road
    pub const EDGE_MARGIN: f32 = 50.0;

    /// Player car
    pub const CAR_WIDTH: f32 = 50.0;
    pub const CAR_HEIGHT: f32 = 90.0;
    /// Pixels per tick, per axis (diagonal is the raw vector sum)
    pub const CAR_SPEED: f32 = 5.0;
    /// Vertical center of the car at session start
    pub const CAR_START_CENTER_Y: f32 = PLAYFIELD_HEIGHT - 160.0;

    /// Obstacles
    pub const OBSTACLE_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_WIDTH_MIN: i32 = 40;
    pub const OBSTACLE_WIDTH_MAX: i32 = 120;
    /// Extra inset from the road edges when choosing a spawn column
    pub const SPAWN_INSET: f32 = 10.0;
    /// Gap above the playfield at which new obstacles appear
    pub const SPAWN_DROP_GAP: f32 = 10.0;
    pub const OBSTACLE_BASE_SPEED: f32 = 4.0;
    /// Difficulty ramp, applied once per tick (not per elapsed second)
    pub const OBSTACLE_SPEED_INCREMENT: f32 = 0.002;
    /// Wall-clock interval between spawns
    pub const SPAWN_INTERVAL_MS: f32 = 1200.0;
    /// Obstacles are dropped once their top edge passes this far below the field
    pub const DESPAWN_BUFFER: f32 = 50.0;
}
