//! The goalkeeper
//!
//! Simple, tunable heuristic rather than a trajectory solver:
//! - Eases toward a target position picked at the start of each attempt
//! - Waits out a random reaction delay once the ball is in play
//! - Extrapolates the ball linearly and commits to at most one dive
//! - Ignores shots heading straight at it (dead zone)

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::ball::Ball;
use super::region::Region;
use crate::config::Config;

/// Dive state for the current attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Dive {
    /// No dive yet this attempt
    Idle,
    /// Committed dive. Power carries the sign of `direction` and decays each tick.
    Committed { direction: f32, power: f32 },
}

/// The goalkeeper entity
#[derive(Debug, Clone, Serialize)]
pub struct Keeper {
    pub region: Region,
    /// Horizontal center the keeper eases toward
    pub target_x: f32,
    /// Seconds of in-play time before the keeper reads the shot
    pub reaction_time: f32,
    /// In-play time elapsed this attempt
    pub reaction_counter: f32,
    pub dive: Dive,
}

impl Keeper {
    /// A keeper standing in the middle of the goal mouth
    pub fn in_goal(goal: &Region, config: &Config, rng: &mut impl Rng) -> Self {
        let region = Region::from_center(
            Vec2::new(config.width / 2.0, goal.center().y),
            Vec2::new(config.keeper_width, config.keeper_height),
        );
        Self {
            target_x: region.center().x,
            region,
            reaction_time: rng.random_range(config.reaction_min..=config.reaction_max),
            reaction_counter: 0.0,
            dive: Dive::Idle,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.region.center().x
    }

    /// Signed dive power, zero while no dive is committed
    pub fn dive_power(&self) -> f32 {
        match self.dive {
            Dive::Idle => 0.0,
            Dive::Committed { power, .. } => power,
        }
    }

    pub fn has_dived(&self) -> bool {
        matches!(self.dive, Dive::Committed { .. })
    }

    /// Prepare for a new shot: new target inside the goal mouth, new reaction
    /// delay, dive cleared
    pub fn rearm(&mut self, goal: &Region, config: &Config, rng: &mut impl Rng) {
        let half = config.keeper_width / 2.0;
        self.target_x = rng.random_range(goal.left() + half..=goal.right() - half);
        self.reaction_time = rng.random_range(config.reaction_min..=config.reaction_max);
        self.reaction_counter = 0.0;
        self.dive = Dive::Idle;
    }

    /// Advance one tick. The ball must already have been updated this tick.
    ///
    /// Returns the dive if one was committed on this tick.
    pub fn update(&mut self, ball: &Ball, config: &Config) -> Option<Dive> {
        // Ease toward target
        let offset = self.target_x - self.center_x();
        if offset.abs() > config.homing_threshold {
            self.region.min.x += offset * config.homing_rate;
        }

        let mut committed = None;
        if ball.in_play {
            self.reaction_counter += config.tick_dt();

            if self.reaction_counter >= self.reaction_time && !self.has_dived() {
                committed = self.decide_dive(ball, config);
            }
        }

        if let Dive::Committed { ref mut power, .. } = self.dive {
            self.region.min.x += *power * config.dive_application;
            *power *= config.dive_decay;
        }

        committed
    }

    /// Read the shot and commit to a dive unless it's heading straight at us
    fn decide_dive(&mut self, ball: &Ball, config: &Config) -> Option<Dive> {
        let predicted_x = ball.center().x + ball.vel.x * config.look_ahead_ticks;
        let keeper_x = self.center_x();

        if (predicted_x - keeper_x).abs() <= config.dead_zone {
            return None;
        }

        let direction = if predicted_x < keeper_x { -1.0 } else { 1.0 };
        // Cap the magnitude so left and right dives are symmetric
        let magnitude = (ball.vel.x.abs() * config.dive_scale).min(config.dive_cap);
        let dive = Dive::Committed {
            direction,
            power: magnitude * direction,
        };
        log::debug!(
            "Keeper dives {} (predicted x {:.1}, keeper x {:.1}, power {:.2})",
            if direction < 0.0 { "left" } else { "right" },
            predicted_x,
            keeper_x,
            magnitude
        );
        self.dive = dive;
        Some(dive)
    }
}
