//! Penalty Shootout entry point
//!
//! Runs a headless autoplay session: the bot releases each shot when the
//! meter reaches a chosen level, resets after every outcome, and prints the
//! final frame as JSON.
//!
//! Usage: `penalty-shootout [CONFIG] [--seed N] [--attempts N]`

use std::path::PathBuf;

use clap::Parser;
use penalty_shootout::sim::{GameEvent, GamePhase};
use penalty_shootout::{Config, Shell};
use rand::Rng;

#[derive(Parser, Debug)]
#[command(name = "penalty-shootout")]
#[command(about = "Headless penalty shootout autoplay")]
struct Args {
    /// JSON config file; built-in defaults when omitted
    config: Option<PathBuf>,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Number of shots to take
    #[arg(long, default_value_t = 10)]
    attempts: u32,
}

/// Meter levels the bot aims for, cycled per attempt
const AIM_LEVELS: [u32; 5] = [40, 100, 64, 82, 24];

/// Safety cap so a broken config can't spin forever
const MAX_TICKS_PER_ATTEMPT: u32 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Penalty Shootout (headless) starting...");

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let attempts = args.attempts;

    let mut shell = match Shell::new(config, seed) {
        Ok(shell) => shell,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    for attempt in 0..attempts {
        let aim = AIM_LEVELS[attempt as usize % AIM_LEVELS.len()];
        let mut resolved = None;

        for _ in 0..MAX_TICKS_PER_ATTEMPT {
            let state = shell.state();
            if state.phase == GamePhase::Aiming && state.power >= aim.min(state.config.max_power) {
                shell.press_shoot();
            }

            for event in shell.step() {
                if let GameEvent::Resolved(phase) = event {
                    resolved = Some(phase);
                }
            }
            if resolved.is_some() {
                break;
            }
        }

        match resolved {
            Some(phase) => println!("Attempt {:>2}: {}", attempt + 1, phase.as_str()),
            None => {
                log::error!("Attempt {} never resolved, stopping", attempt + 1);
                break;
            }
        }

        if attempt + 1 < attempts {
            shell.press_reset();
            shell.step();
        }
    }

    for line in shell.hud() {
        println!("{}", line);
    }
    match serde_json::to_string_pretty(&shell.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Failed to serialize snapshot: {}", err),
    }
}
