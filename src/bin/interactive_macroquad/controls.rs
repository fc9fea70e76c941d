use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use monkey_hunter::core::clock::ClockPhase;

use crate::constants::{
    DISTANCE_RANGE_M, FORM_HEIGHT, GRAVITY_RANGE_MPS2, HEADER_HEIGHT, HEIGHT_RANGE_M,
};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) update: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            update: self.update || other.update,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        update: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    let solution = state
        .clock
        .trajectory()
        .map(|trajectory| (*trajectory.solution(), trajectory.intercept_time_s()));

    widgets::Window::new(hash!(), vec2(16.0, HEADER_HEIGHT), vec2(328.0, FORM_HEIGHT))
        .label("Scenario")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Height (m)",
                HEIGHT_RANGE_M.0..HEIGHT_RANGE_M.1,
                &mut state.form.height_m,
            );
            ui.slider(
                hash!(),
                "Distance (m)",
                DISTANCE_RANGE_M.0..DISTANCE_RANGE_M.1,
                &mut state.form.distance_m,
            );
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                GRAVITY_RANGE_MPS2.0..GRAVITY_RANGE_MPS2.1,
                &mut state.form.gravity_mps2,
            );
            ui.separator();
            if ui.button(None, "Update Simulation (Enter)") {
                actions.update = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            ui.separator();
            match solution {
                Some((launch, intercept_s)) => {
                    ui.label(
                        None,
                        &format!("Launch: {:.2} m/s horizontal", launch.initial_velocity_mps),
                    );
                    ui.label(
                        None,
                        &format!(
                            "Aim: {:.1} deg | {:.2} m/s on barrel",
                            launch.aim_angle_deg(),
                            launch.launch_speed_mps()
                        ),
                    );
                    ui.label(None, &format!("Intercept due: {intercept_s:.3} s"));
                }
                None => ui.label(None, "Press Update to fire"),
            }
            ui.label(
                None,
                &format!("State: {}", phase_text(state.clock.phase())),
            );
        });

    actions
}

pub(crate) fn phase_text(phase: ClockPhase) -> &'static str {
    match phase {
        ClockPhase::Idle => "Waiting",
        ClockPhase::Running => "Falling",
        ClockPhase::Hit => "Hit",
        ClockPhase::Missed => "Missed",
    }
}
