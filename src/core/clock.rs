use log::info;
use serde::Serialize;

use super::ballistics::{Point2, Trajectory};
use super::scenario::Scenario;

/// Fixed simulated time per tick (~50 Hz visual cadence).
pub const TICK_S: f64 = 0.020;

const CONTACT_TOLERANCE_M: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ClockPhase {
    Idle,
    Running,
    Hit,
    /// Stopped by the host time limit without an interception.
    Missed,
}

impl ClockPhase {
    pub fn is_terminated(self) -> bool {
        matches!(self, Self::Hit | Self::Missed)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClockConfig {
    /// `None` keeps advancing until the shot connects.
    pub time_limit_s: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SimulationState {
    pub elapsed_s: f64,
    pub projectile: Point2,
    /// The monkey; `x` stays at the shooter distance.
    pub target: Point2,
    pub phase: ClockPhase,
    pub intercept_time_s: Option<f64>,
}

impl SimulationState {
    fn idle() -> Self {
        Self {
            elapsed_s: 0.0,
            projectile: Point2::default(),
            target: Point2::default(),
            phase: ClockPhase::Idle,
            intercept_time_s: None,
        }
    }

    fn launched(trajectory: &Trajectory) -> Self {
        Self {
            elapsed_s: 0.0,
            projectile: trajectory.projectile_at(0.0),
            target: trajectory.target_at(0.0),
            phase: ClockPhase::Running,
            intercept_time_s: None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.phase.is_terminated()
    }

    pub fn is_hit(&self) -> bool {
        self.phase == ClockPhase::Hit
    }
}

/// Owns elapsed time for one run and evaluates the closed-form paths at it.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    config: ClockConfig,
    trajectory: Option<Trajectory>,
    state: SimulationState,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::with_config(ClockConfig::default())
    }

    pub fn with_config(config: ClockConfig) -> Self {
        Self {
            config,
            trajectory: None,
            state: SimulationState::idle(),
        }
    }

    pub fn start(&mut self, scenario: Scenario) -> &SimulationState {
        let trajectory = Trajectory::solve(scenario);
        info!(
            "Shot fired: v={:.3} m/s horizontal, aim {:.2} deg, intercept due at {:.3} s",
            trajectory.solution().initial_velocity_mps,
            trajectory.solution().aim_angle_deg(),
            trajectory.intercept_time_s()
        );
        self.state = SimulationState::launched(&trajectory);
        self.trajectory = Some(trajectory);
        &self.state
    }

    pub fn reset(&mut self) {
        self.trajectory = None;
        self.state = SimulationState::idle();
    }

    /// Moves simulated time forward by `dt_s`.
    ///
    /// Outside the running phase, or for a non-positive step, nothing changes.
    pub fn advance(&mut self, dt_s: f64) -> ClockPhase {
        let Some(trajectory) = self.trajectory else {
            return self.state.phase;
        };
        if self.state.phase != ClockPhase::Running || !(dt_s > 0.0 && dt_s.is_finite()) {
            return self.state.phase;
        }

        let previous_s = self.state.elapsed_s;
        let now_s = previous_s + dt_s;
        self.state.elapsed_s = now_s;

        if trajectory.projectile_distance(now_s) >= trajectory.scenario().shooter_distance_m() {
            // The step usually overshoots; test heights at the crossing instant.
            let contact_s = trajectory.intercept_time_s().clamp(previous_s, now_s);
            if trajectory.projectile_height(contact_s)
                <= trajectory.target_height(contact_s) + CONTACT_TOLERANCE_M
            {
                self.state.projectile = trajectory.projectile_at(contact_s);
                self.state.target = trajectory.target_at(contact_s);
                self.state.intercept_time_s = Some(contact_s);
                self.state.phase = ClockPhase::Hit;
                info!(
                    "Hit at t={contact_s:.3} s, x={:.3} m, y={:.3} m",
                    self.state.projectile.x, self.state.projectile.y
                );
                return ClockPhase::Hit;
            }
        }

        self.state.projectile = trajectory.projectile_at(now_s);
        self.state.target = trajectory.target_at(now_s);

        if self
            .config
            .time_limit_s
            .is_some_and(|limit_s| now_s >= limit_s)
        {
            self.state.phase = ClockPhase::Missed;
            info!("No interception within {now_s:.2} s");
        }

        self.state.phase
    }

    pub fn tick(&mut self) -> ClockPhase {
        self.advance(TICK_S)
    }

    /// Ticks until the run terminates or `max_ticks` have elapsed.
    pub fn run_to_end(&mut self, max_ticks: usize) -> ClockPhase {
        for _ in 0..max_ticks {
            if self.state.phase != ClockPhase::Running {
                break;
            }
            self.tick();
        }
        self.state.phase
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn phase(&self) -> ClockPhase {
        self.state.phase
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }
}
