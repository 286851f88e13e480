//! Headless presentation shell
//!
//! Owns the game state and drives it at a fixed rate from variable frame
//! times. A windowed front-end feeds it key presses and draws [`Snapshot`]s.

use glam::Vec2;
use serde::Serialize;

use crate::config::Config;
use crate::consts::MAX_SUBSTEPS;
use crate::error::ConfigError;
use crate::sim::{GameEvent, GamePhase, GameState, Region, TickInput, tick};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub ball: Region,
    /// Trail points with fade factors, oldest first
    pub trail: Vec<(Vec2, f32)>,
    pub keeper: Region,
    pub goal: Region,
    /// Only meaningful while aiming
    pub power: u32,
    pub power_fraction: f32,
    pub score: u32,
    pub attempts: u32,
    pub accuracy: u32,
    pub prompt: Option<&'static str>,
}

/// Fixed-timestep driver around a [`GameState`]
pub struct Shell {
    state: GameState,
    tick_dt: f32,
    accumulator: f32,
    input: TickInput,
    quit: bool,
}

impl Shell {
    /// Validate `config` and start a game seeded with `seed`
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let tick_dt = config.tick_dt();
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self {
            state: GameState::new(config, seed),
            tick_dt,
            accumulator: 0.0,
            input: TickInput::default(),
            quit: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Space released
    pub fn press_shoot(&mut self) {
        self.input.shoot = true;
    }

    /// R pressed
    pub fn press_reset(&mut self) {
        self.input.reset = true;
    }

    /// Window closed or quit button clicked
    pub fn request_quit(&mut self) {
        log::info!("Quit requested");
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run as many fixed ticks as `dt` seconds of wall time cover, at most
    /// `MAX_SUBSTEPS`. Time beyond the cap is dropped rather than carried
    /// into later frames.
    ///
    /// Returns the events from every tick that ran.
    pub fn frame(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.quit {
            return events;
        }

        self.accumulator += dt.max(0.0);

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            let last_phase = self.state.phase;
            tick(&mut self.state, &self.input);
            self.accumulator -= self.tick_dt;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input = TickInput::default();

            if self.state.phase != last_phase {
                log::debug!(
                    "Phase {} -> {}",
                    last_phase.as_str(),
                    self.state.phase.as_str()
                );
            }
            events.extend(self.state.events.iter().copied());
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= self.tick_dt {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        events
    }

    /// Advance exactly one tick regardless of elapsed time
    pub fn step(&mut self) -> Vec<GameEvent> {
        self.accumulator = 0.0;
        self.frame(self.tick_dt)
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = &self.state;
        Snapshot {
            phase: state.phase,
            ball: state.ball.region,
            trail: state.ball.trail_fade().collect(),
            keeper: state.keeper.region,
            goal: state.goal,
            power: state.power,
            power_fraction: state.power_fraction(),
            score: state.score,
            attempts: state.attempts,
            accuracy: state.accuracy(),
            prompt: state.phase.prompt(),
        }
    }

    /// HUD lines: score and accuracy
    pub fn hud(&self) -> [String; 2] {
        [
            format!("Score: {}/{}", self.state.score, self.state.attempts),
            format!("Accuracy: {}%", self.state.accuracy()),
        ]
    }
}
