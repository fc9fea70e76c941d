use monkey_hunter::core::clock::{ClockConfig, SimulationClock};
use monkey_hunter::core::scenario::{Scenario, ScenarioError};
use monkey_hunter::core::window::{SceneExtent, ViewportMapping, ViewportScaler, ViewportSize};

use crate::constants::MAX_SIM_TIME_S;
use crate::render::{Leaf, scatter_foliage};

/// Raw form values; only turned into a [`Scenario`] on "Update".
#[derive(Clone, Copy)]
pub(crate) struct ScenarioForm {
    pub(crate) height_m: f32,
    pub(crate) distance_m: f32,
    pub(crate) gravity_mps2: f32,
}

impl ScenarioForm {
    pub(crate) fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            height_m: scenario.monkey_height_m() as f32,
            distance_m: scenario.shooter_distance_m() as f32,
            gravity_mps2: scenario.gravity_mps2() as f32,
        }
    }

    pub(crate) fn to_scenario(self) -> Result<Scenario, ScenarioError> {
        Scenario::new(
            f64::from(self.height_m),
            f64::from(self.distance_m),
            f64::from(self.gravity_mps2),
        )
    }
}

pub(crate) struct AppRuntime {
    pub(crate) form: ScenarioForm,
    pub(crate) scenario: Scenario,
    pub(crate) clock: SimulationClock,
    pub(crate) scaler: ViewportScaler,
    pub(crate) mapping: Option<ViewportMapping>,
    pub(crate) tick_accumulator_s: f64,
    pub(crate) status_line: String,
    pub(crate) error_line: Option<String>,
    pub(crate) foliage: Vec<Leaf>,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let scenario = Scenario::default();
        Self {
            form: ScenarioForm::from_scenario(&scenario),
            scenario,
            clock: SimulationClock::with_config(ClockConfig {
                time_limit_s: Some(MAX_SIM_TIME_S),
            }),
            scaler: ViewportScaler::new(),
            mapping: None,
            tick_accumulator_s: 0.0,
            status_line: "Ready".to_string(),
            error_line: None,
            foliage: scatter_foliage(),
        }
    }

    /// Re-derives the mapping for the current canvas; `None` while it has no area.
    pub(crate) fn refresh_mapping(&mut self, canvas_w: f32, canvas_h: f32) {
        self.mapping = self
            .scaler
            .rescale(
                ViewportSize::new(f64::from(canvas_w), f64::from(canvas_h)),
                SceneExtent::from(&self.scenario),
            )
            .mapping();
    }
}
