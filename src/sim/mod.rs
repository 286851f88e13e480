//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod keeper;
pub mod region;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use keeper::{Dive, Keeper};
pub use region::Region;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, evaluate_outcome, reset, shoot, tick};
