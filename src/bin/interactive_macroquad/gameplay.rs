use log::warn;
use monkey_hunter::core::clock::{ClockPhase, TICK_S};

use crate::constants::MAX_CATCH_UP_S;
use crate::controls::FrameActions;
use crate::render::scatter_foliage;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.update {
        match state.form.to_scenario() {
            Ok(scenario) => {
                state.scenario = scenario;
                state.clock.start(scenario);
                state.tick_accumulator_s = 0.0;
                state.error_line = None;
                state.foliage = scatter_foliage();
                state.status_line = "Shot fired".to_string();
            }
            Err(err) => {
                warn!("Rejected scenario: {err}");
                state.error_line = Some(err.to_string());
            }
        }
    }

    if actions.reset {
        state.clock.reset();
        state.tick_accumulator_s = 0.0;
        state.status_line = "Reset".to_string();
    }
}

/// Feeds wall-clock frame time to the simulation in fixed ticks.
pub(crate) fn step_clock(state: &mut AppRuntime, frame_dt: f32) {
    if state.clock.phase() != ClockPhase::Running {
        return;
    }

    state.tick_accumulator_s += f64::from(frame_dt).min(MAX_CATCH_UP_S);
    while state.tick_accumulator_s >= TICK_S {
        state.tick_accumulator_s -= TICK_S;
        match state.clock.tick() {
            ClockPhase::Running => {}
            ClockPhase::Hit => {
                let sim = state.clock.state();
                state.status_line = format!(
                    "The stone hit the monkey at t={:.2} s, {:.2} m above the ground",
                    sim.intercept_time_s.unwrap_or(sim.elapsed_s),
                    sim.projectile.y.max(0.0)
                );
                break;
            }
            ClockPhase::Missed => {
                state.status_line =
                    format!("No hit after {:.1} s", state.clock.state().elapsed_s);
                break;
            }
            ClockPhase::Idle => break,
        }
    }
}
