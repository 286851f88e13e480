//! The ball: kickoff, launch and per-tick flight

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::region::Region;
use crate::config::Config;

/// The ball entity
#[derive(Debug, Clone, Serialize)]
pub struct Ball {
    /// Bounding square used for all overlap checks
    pub region: Region,
    pub vel: Vec2,
    /// True from the shot until an outcome is decided
    pub in_play: bool,
    /// Recent centers, oldest first (rendering only)
    pub trail: VecDeque<Vec2>,
    #[serde(skip)]
    trail_length: usize,
}

impl Ball {
    /// A ball at rest on the penalty spot
    pub fn at_kickoff(config: &Config) -> Self {
        let x = config.width / 2.0 - config.ball_size / 2.0;
        let y = config.height - config.launch_offset;
        Self {
            region: Region::new(x, y, config.ball_size, config.ball_size),
            vel: Vec2::ZERO,
            in_play: false,
            trail: VecDeque::with_capacity(config.trail_length + 1),
            trail_length: config.trail_length,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.region.center()
    }

    /// Kick the ball with a randomized angle and per-axis jitter.
    ///
    /// `power` is expected to be already clamped to the playable range.
    pub fn launch(&mut self, power: u32, config: &Config, rng: &mut impl Rng) {
        let angle = rng.random_range(config.angle_min..=config.angle_max);
        let speed = config.speed_base + power as f32 / config.speed_divisor;
        let jitter_x = rng.random_range(config.jitter_min..=config.jitter_max);
        let jitter_y = rng.random_range(config.jitter_min..=config.jitter_max);

        // Screen y grows downward, so an upward shot has negative vel.y
        self.vel = Vec2::new(
            angle.cos() * speed * jitter_x,
            -angle.sin() * speed * jitter_y,
        );
        self.in_play = true;
    }

    /// Advance one tick: gravity, then friction, then move and record trail
    pub fn update(&mut self, config: &Config) {
        self.vel.y += config.gravity;
        self.vel *= config.friction;

        self.region.min += self.vel;

        self.trail.push_back(self.center());
        while self.trail.len() > self.trail_length {
            self.trail.pop_front();
        }
    }

    /// Trail points paired with a fade factor in [0, 1), oldest faintest.
    ///
    /// Renderers scale alpha and radius by the factor.
    pub fn trail_fade(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        let len = self.trail.len() as f32;
        self.trail
            .iter()
            .enumerate()
            .map(move |(i, &pos)| (pos, i as f32 / len))
    }
}
