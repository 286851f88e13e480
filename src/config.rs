//! Game tuning and playfield layout
//!
//! Every constant the simulation reads lives here, with defaults matching
//! [`crate::consts`]. A JSON file can override any subset of the fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Timing ===
    /// Fixed tick rate; the keeper's reaction clock advances 1/fps per tick
    pub fps: u32,

    // === Layout ===
    pub width: f32,
    pub height: f32,
    pub goal_width: f32,
    pub goal_height: f32,
    pub goal_top: f32,
    pub keeper_width: f32,
    pub keeper_height: f32,
    pub ball_size: f32,
    /// Kickoff spot: ball top edge sits this far above the bottom of the field
    pub launch_offset: f32,

    // === Ball physics ===
    pub gravity: f32,
    pub friction: f32,
    pub trail_length: usize,

    // === Power meter ===
    pub max_power: u32,
    pub power_step: u32,
    /// Shots are never weaker than this, however early they are released
    pub min_shot_power: u32,
    /// Launch speed = speed_base + power / speed_divisor
    pub speed_base: f32,
    pub speed_divisor: f32,
    /// Launch angle range (radians, measured upward from +x)
    pub angle_min: f32,
    pub angle_max: f32,
    /// Independent multiplicative jitter on each velocity axis
    pub jitter_min: f32,
    pub jitter_max: f32,

    // === Keeper ===
    /// Reaction delay range in seconds
    pub reaction_min: f32,
    pub reaction_max: f32,
    /// Keeper stops homing once this close to its target
    pub homing_threshold: f32,
    /// Fraction of the remaining distance covered per tick while homing
    pub homing_rate: f32,
    /// Ticks of linear extrapolation when predicting the ball
    pub look_ahead_ticks: f32,
    /// Shots predicted within this distance of the keeper are not dived for
    pub dead_zone: f32,
    pub dive_scale: f32,
    pub dive_cap: f32,
    /// Fraction of dive power applied to position each tick
    pub dive_application: f32,
    pub dive_decay: f32,
}

impl Default for Config {
    fn default() -> Self {
        use std::f32::consts::FRAC_PI_4;

        Self {
            fps: FPS,

            width: WIDTH,
            height: HEIGHT,
            goal_width: GOAL_WIDTH,
            goal_height: GOAL_HEIGHT,
            goal_top: GOAL_TOP,
            keeper_width: KEEPER_WIDTH,
            keeper_height: KEEPER_HEIGHT,
            ball_size: BALL_SIZE,
            launch_offset: LAUNCH_OFFSET,

            gravity: GRAVITY,
            friction: FRICTION,
            trail_length: TRAIL_LENGTH,

            max_power: MAX_POWER,
            power_step: POWER_STEP,
            min_shot_power: MIN_SHOT_POWER,
            speed_base: 8.0,
            speed_divisor: 12.0,
            angle_min: FRAC_PI_4,
            angle_max: 3.0 * FRAC_PI_4,
            jitter_min: 0.9,
            jitter_max: 1.1,

            reaction_min: 0.3,
            reaction_max: 0.7,
            homing_threshold: 2.0,
            homing_rate: 0.1,
            look_ahead_ticks: 15.0,
            dead_zone: 40.0,
            dive_scale: 0.6,
            dive_cap: 25.0,
            dive_application: 0.5,
            dive_decay: 0.9,
        }
    }
}

impl Config {
    /// Duration of one simulation tick in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Load a config from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if self.fps == 0 {
            return Err(invalid("fps", "must be positive"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(invalid("width", "playfield must have positive size"));
        }
        if self.goal_width > self.width {
            return Err(invalid("goal_width", "goal is wider than the playfield"));
        }
        if self.keeper_width > self.goal_width {
            return Err(invalid("keeper_width", "keeper is wider than the goal"));
        }
        if self.ball_size <= 0.0 {
            return Err(invalid("ball_size", "must be positive"));
        }
        if self.trail_length == 0 {
            return Err(invalid("trail_length", "must keep at least one point"));
        }
        if self.power_step == 0 {
            return Err(invalid("power_step", "meter would never move"));
        }
        if self.max_power < self.min_shot_power {
            return Err(invalid(
                "max_power",
                format!("must be at least min_shot_power ({})", self.min_shot_power),
            ));
        }
        if self.speed_divisor == 0.0 {
            return Err(invalid("speed_divisor", "must be non-zero"));
        }
        if self.angle_min > self.angle_max {
            return Err(invalid("angle_min", "range is inverted"));
        }
        if self.jitter_min > self.jitter_max {
            return Err(invalid("jitter_min", "range is inverted"));
        }
        if self.reaction_min > self.reaction_max || self.reaction_min < 0.0 {
            return Err(invalid("reaction_min", "range is inverted or negative"));
        }
        if !(0.0..1.0).contains(&self.dive_decay) {
            return Err(invalid("dive_decay", "must be in [0, 1)"));
        }
        Ok(())
    }
}
