//! Game state and shot lifecycle types
//!
//! [`GameState`] is the single owner of everything the simulation touches:
//! ball, keeper, counters, power meter and the RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::keeper::{Dive, Keeper};
use super::region::Region;
use crate::config::Config;

/// Current phase of a shot attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Power meter oscillating, waiting for the shot
    Aiming,
    /// Ball in flight
    Shooting,
    /// Ball went in
    Scored,
    /// Keeper got to it
    Saved,
    /// Ball left the field
    Missed,
}

impl GamePhase {
    /// Whether the attempt is over and waiting for a reset
    pub fn is_resolved(&self) -> bool {
        matches!(self, GamePhase::Scored | GamePhase::Saved | GamePhase::Missed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Aiming => "aiming",
            GamePhase::Shooting => "shooting",
            GamePhase::Scored => "scored",
            GamePhase::Saved => "saved",
            GamePhase::Missed => "missed",
        }
    }

    /// Instruction line shown under the field
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            GamePhase::Aiming => Some("Hold SPACE to set power, release to shoot"),
            GamePhase::Shooting => None,
            _ => Some("Press R to restart"),
        }
    }
}

/// Things that happened during a tick, for the shell to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// Ball kicked with the given (clamped) power
    ShotFired { power: u32 },
    /// Keeper committed to a dive
    KeeperDived(Dive),
    /// Attempt resolved; carries the terminal phase
    Resolved(GamePhase),
    /// Fresh ball and keeper placed for the next attempt
    Reset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Power meter value, in [0, max_power]
    pub power: u32,
    pub power_increasing: bool,
    pub score: u32,
    pub attempts: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub goal: Region,
    pub ball: Ball,
    pub keeper: Keeper,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given config and seed
    pub fn new(config: Config, seed: u64) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    /// Create a new game drawing from a caller-supplied generator
    /// (e.g. a PCG stream other than the default)
    pub fn with_rng(config: Config, mut rng: Pcg32) -> Self {
        let goal = Region::new(
            config.width / 2.0 - config.goal_width / 2.0,
            config.goal_top,
            config.goal_width,
            config.goal_height,
        );
        let ball = Ball::at_kickoff(&config);
        let keeper = Keeper::in_goal(&goal, &config, &mut rng);

        Self {
            config,
            rng,
            phase: GamePhase::Aiming,
            power: 0,
            power_increasing: true,
            score: 0,
            attempts: 0,
            time_ticks: 0,
            goal,
            ball,
            keeper,
            events: Vec::new(),
        }
    }

    /// The playfield bounds
    pub fn field(&self) -> Region {
        Region::new(0.0, 0.0, self.config.width, self.config.height)
    }

    /// Power meter fill in [0, 1]
    pub fn power_fraction(&self) -> f32 {
        self.power as f32 / self.config.max_power as f32
    }

    /// Percentage of attempts scored, rounded down
    pub fn accuracy(&self) -> u32 {
        if self.attempts == 0 {
            0
        } else {
            self.score * 100 / self.attempts
        }
    }

    /// Replace the ball and keeper with fresh ones for the next attempt
    pub(crate) fn respawn(&mut self) {
        self.ball = Ball::at_kickoff(&self.config);
        self.keeper = Keeper::in_goal(&self.goal, &self.config, &mut self.rng);
    }
}
