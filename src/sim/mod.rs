//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the session
//! - Stable obstacle order (spawn order, order-preserving removal)
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{Obstacle, Player, SessionPhase, SessionState};
pub use tick::{TickInput, TickOutcome, advance};
