//! Fixed timestep simulation tick
//!
//! Core game loop that advances the shot state machine deterministically.
//! Inputs that don't apply to the current phase are ignored.

use super::ball::Ball;
use super::keeper::Keeper;
use super::region::Region;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Release the shot (only while aiming)
    pub shoot: bool,
    /// Line up the next attempt (only once resolved)
    pub reset: bool,
}

/// Apply this frame's input, then advance the game by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.shoot {
        shoot(state);
    }
    if input.reset {
        reset(state);
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Aiming => advance_power(state),
        GamePhase::Shooting => step_flight(state),
        _ => {}
    }
}

/// Release the shot at the current meter power.
///
/// Returns false (and does nothing) unless the game is aiming.
pub fn shoot(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Aiming {
        return false;
    }

    let config = &state.config;
    // max wins over min if a hand-built config inverts them
    state.power = state.power.max(config.min_shot_power).min(config.max_power);
    state.ball.launch(state.power, config, &mut state.rng);
    state.keeper.rearm(&state.goal, config, &mut state.rng);
    state.attempts += 1;
    state.phase = GamePhase::Shooting;

    log::info!(
        "Shot {} fired: power {}, velocity ({:.2}, {:.2})",
        state.attempts,
        state.power,
        state.ball.vel.x,
        state.ball.vel.y
    );
    state.events.push(GameEvent::ShotFired { power: state.power });
    true
}

/// Set up a fresh attempt after an outcome.
///
/// Returns false (and does nothing) unless the current attempt is resolved.
/// Score and attempts carry over.
pub fn reset(state: &mut GameState) -> bool {
    if !state.phase.is_resolved() {
        return false;
    }

    state.respawn();
    state.phase = GamePhase::Aiming;
    state.power = 0;
    state.power_increasing = true;

    log::debug!("Attempt reset ({} / {})", state.score, state.attempts);
    state.events.push(GameEvent::Reset);
    true
}

/// Triangle-wave power meter
fn advance_power(state: &mut GameState) {
    let max = state.config.max_power;
    let step = state.config.power_step;

    if state.power_increasing {
        state.power = (state.power + step).min(max);
        if state.power >= max {
            state.power_increasing = false;
        }
    } else {
        state.power = state.power.saturating_sub(step);
        if state.power == 0 {
            state.power_increasing = true;
        }
    }
}

/// One tick of flight: ball, then keeper, then outcome checks
fn step_flight(state: &mut GameState) {
    state.ball.update(&state.config);
    if let Some(dive) = state.keeper.update(&state.ball, &state.config) {
        state.events.push(GameEvent::KeeperDived(dive));
    }

    let field = state.field();
    let Some(outcome) = evaluate_outcome(&state.ball, &state.keeper, &state.goal, &field) else {
        return;
    };

    state.ball.in_play = false;
    state.phase = outcome;
    if outcome == GamePhase::Scored {
        state.score += 1;
    }

    log::info!(
        "Shot {} {} ({} / {})",
        state.attempts,
        outcome.as_str(),
        state.score,
        state.attempts
    );
    state.events.push(GameEvent::Resolved(outcome));
}

/// Decide whether the shot is over.
///
/// Checked in priority order, so a ball touching both the goal and the
/// keeper on the same tick counts as a goal.
pub fn evaluate_outcome(
    ball: &Ball,
    keeper: &Keeper,
    goal: &Region,
    field: &Region,
) -> Option<GamePhase> {
    let b = &ball.region;

    if b.overlaps(goal) {
        return Some(GamePhase::Scored);
    }
    if b.overlaps(&keeper.region) {
        return Some(GamePhase::Saved);
    }

    let out_of_field = b.bottom() < goal.top()
        || b.top() < field.top()
        || b.left() < field.left()
        || b.right() > field.right()
        || b.top() > field.bottom();
    if out_of_field {
        return Some(GamePhase::Missed);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use glam::Vec2;

    fn shoot_input() -> TickInput {
        TickInput {
            shoot: true,
            ..Default::default()
        }
    }

    fn reset_input() -> TickInput {
        TickInput {
            reset: true,
            ..Default::default()
        }
    }

    /// Tick with no input until the attempt resolves
    fn fly(state: &mut GameState) {
        for _ in 0..10_000 {
            if state.phase != GamePhase::Shooting {
                return;
            }
            tick(state, &TickInput::default());
        }
        panic!("shot never resolved");
    }

    #[test]
    fn test_power_meter_triangle_wave() {
        let mut state = GameState::new(Config::default(), 1);
        let input = TickInput::default();

        for expected in (2..=100).step_by(2) {
            tick(&mut state, &input);
            assert_eq!(state.power, expected);
        }
        assert!(!state.power_increasing);

        tick(&mut state, &input);
        assert_eq!(state.power, 98);

        for _ in 0..49 {
            tick(&mut state, &input);
        }
        assert_eq!(state.power, 0);
        assert!(state.power_increasing);

        tick(&mut state, &input);
        assert_eq!(state.power, 2);
    }

    #[test]
    fn test_power_never_exceeds_uneven_max() {
        let config = Config {
            max_power: 25,
            power_step: 7,
            min_shot_power: 10,
            ..Config::default()
        };
        let mut state = GameState::new(config, 1);
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
            assert!(state.power <= 25);
        }
    }

    #[test]
    fn test_shoot_clamps_weak_shots() {
        let mut state = GameState::new(Config::default(), 3);
        state.power = 4;
        assert!(shoot(&mut state));
        assert_eq!(state.power, 20);
        assert_eq!(state.phase, GamePhase::Shooting);
        assert!(state.ball.in_play);
        assert_eq!(state.events, vec![GameEvent::ShotFired { power: 20 }]);
    }

    #[test]
    fn test_shoot_with_inverted_power_bounds() {
        let config = Config {
            min_shot_power: 50,
            max_power: 30,
            ..Config::default()
        };
        let mut state = GameState::new(config, 3);
        state.power = 10;
        assert!(shoot(&mut state));
        assert_eq!(state.power, 30);
        assert_eq!(state.phase, GamePhase::Shooting);
    }

    #[test]
    fn test_shoot_rearms_keeper() {
        let mut state = GameState::new(Config::default(), 5);
        state.keeper.reaction_counter = 3.0;
        shoot(&mut state);

        let keeper = &state.keeper;
        assert_eq!(keeper.reaction_counter, 0.0);
        assert!(!keeper.has_dived());
        assert!(keeper.target_x >= 240.0 && keeper.target_x <= 560.0);
    }

    #[test]
    fn test_invalid_inputs_are_ignored() {
        let mut state = GameState::new(Config::default(), 11);

        // Reset while aiming
        tick(&mut state, &reset_input());
        assert_eq!(state.phase, GamePhase::Aiming);
        assert!(!state.events.contains(&GameEvent::Reset));

        // Second shot while the first is in flight
        tick(&mut state, &shoot_input());
        assert_eq!(state.attempts, 1);
        if state.phase == GamePhase::Shooting {
            let vel_before = state.ball.vel;
            assert!(!shoot(&mut state));
            assert_eq!(state.ball.vel, vel_before);
            assert_eq!(state.attempts, 1);
        }
    }

    #[test]
    fn test_goal_wins_over_keeper_overlap() {
        let config = Config::default();
        let state = GameState::new(config.clone(), 1);

        let mut ball = Ball::at_kickoff(&config);
        // Place the ball on top of the keeper, inside the goal
        ball.region.min = state.keeper.region.center();
        assert!(ball.region.overlaps(&state.goal));
        assert!(ball.region.overlaps(&state.keeper.region));

        let outcome = evaluate_outcome(&ball, &state.keeper, &state.goal, &state.field());
        assert_eq!(outcome, Some(GamePhase::Scored));
    }

    #[test]
    fn test_keeper_outside_goal_saves() {
        let config = Config::default();
        let mut state = GameState::new(config.clone(), 1);

        // Keeper dived past the post
        state.keeper.region.min.x = 100.0;
        let mut ball = Ball::at_kickoff(&config);
        ball.region.min = Vec2::new(110.0, state.keeper.region.top() + 10.0);
        assert!(!ball.region.overlaps(&state.goal));

        let outcome = evaluate_outcome(&ball, &state.keeper, &state.goal, &state.field());
        assert_eq!(outcome, Some(GamePhase::Saved));
    }

    #[test]
    fn test_out_of_field_misses() {
        let config = Config::default();
        let state = GameState::new(config.clone(), 1);
        let field = state.field();
        let check = |x: f32, y: f32| {
            let mut ball = Ball::at_kickoff(&config);
            ball.region.min = Vec2::new(x, y);
            evaluate_outcome(&ball, &state.keeper, &state.goal, &field)
        };

        assert_eq!(check(-1.0, 400.0), Some(GamePhase::Missed));
        assert_eq!(check(780.0, 400.0), Some(GamePhase::Missed));
        assert_eq!(check(50.0, -1.0), Some(GamePhase::Missed));
        // Above the crossbar line, wide of the goal
        assert_eq!(check(50.0, 20.0), Some(GamePhase::Missed));
        // Dropped off the bottom
        assert_eq!(check(400.0, 601.0), Some(GamePhase::Missed));
        // Still airborne below the goal
        assert_eq!(check(50.0, 400.0), None);
    }

    #[test]
    fn test_full_attempt_cycle() {
        let mut state = GameState::new(Config::default(), 2024);

        for _ in 0..25 {
            tick(&mut state, &TickInput::default());
        }
        tick(&mut state, &shoot_input());
        assert_eq!(state.attempts, 1);
        fly(&mut state);
        assert!(state.phase.is_resolved());
        assert!(!state.ball.in_play);
        assert!(state.events.iter().any(|e| matches!(e, GameEvent::Resolved(_))));

        let score = state.score;
        tick(&mut state, &reset_input());
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.score, score);
        assert_eq!(state.attempts, 1);
        assert!(state.events.contains(&GameEvent::Reset));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(Config::default(), 99999);
        let mut state2 = GameState::new(Config::default(), 99999);

        let mut inputs = vec![TickInput::default(); 30];
        inputs.push(shoot_input());
        inputs.extend(vec![TickInput::default(); 200]);
        inputs.push(reset_input());
        inputs.push(shoot_input());
        inputs.extend(vec![TickInput::default(); 200]);

        for input in &inputs {
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.attempts, state2.attempts);
        assert_eq!(state1.ball.region, state2.ball.region);
        assert_eq!(state1.keeper.region, state2.keeper.region);
    }
}
