//! Penalty Shootout - a one-on-one arcade shootout against a reactive keeper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, keeper AI, shot state machine)
//! - `config`: Data-driven tuning, loadable from JSON
//! - `shell`: Headless presentation shell (fixed timestep, inputs, snapshots)

pub mod config;
pub mod error;
pub mod shell;
pub mod sim;

pub use config::Config;
pub use error::ConfigError;
pub use shell::{Shell, Snapshot};

/// Game configuration constants (defaults for [`Config`])
pub mod consts {
    /// Nominal simulation rate (ticks per second)
    pub const FPS: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Goal mouth
    pub const GOAL_WIDTH: f32 = 400.0;
    pub const GOAL_HEIGHT: f32 = 250.0;
    pub const GOAL_TOP: f32 = 50.0;

    /// Goalkeeper body
    pub const KEEPER_WIDTH: f32 = 80.0;
    pub const KEEPER_HEIGHT: f32 = 120.0;

    /// Ball bounding square side
    pub const BALL_SIZE: f32 = 25.0;
    /// Distance of the ball's top edge from the bottom of the field at kickoff
    pub const LAUNCH_OFFSET: f32 = 100.0;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.15;
    /// Per-axis velocity damping, applied after gravity
    pub const FRICTION: f32 = 0.98;
    /// Trail history kept for rendering
    pub const TRAIL_LENGTH: usize = 10;

    /// Power meter
    pub const MAX_POWER: u32 = 100;
    pub const POWER_STEP: u32 = 2;
    pub const MIN_SHOT_POWER: u32 = 20;
}
