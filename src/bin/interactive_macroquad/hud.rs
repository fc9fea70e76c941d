use macroquad::prelude::*;

use crate::constants::{ERROR_COLOR, FORM_HEIGHT, HEADER_HEIGHT, PANEL_WIDTH, TITLE_Y};
use crate::controls::phase_text;
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, screen_w: f32, screen_h: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        "Hunter and Monkey",
        PANEL_WIDTH,
        TITLE_Y,
        30,
        header_color,
        font,
    );
    draw_ui_text(
        "Aim at the monkey: it lets go as the gun fires, yet the stone still finds it.",
        PANEL_WIDTH,
        TITLE_Y + 28.0,
        18,
        DARKGRAY,
        font,
    );

    let sim = state.clock.state();
    let scale_text = state.mapping.map_or_else(
        || "Scale: waiting for layout".to_string(),
        |m| format!("Scale: {:.0} x {:.0} px/m", m.scale_x, m.scale_y),
    );
    let scale_size = measure_text(&scale_text, font, 18, 1.0);
    draw_ui_text(
        &scale_text,
        screen_w - scale_size.width - 20.0,
        TITLE_Y,
        18,
        DARKGRAY,
        font,
    );

    draw_ui_text(
        &format!(
            "Time: {:.2} s | Stone: ({:.2}, {:.2}) m | Monkey: {:.2} m | State: {}",
            sim.elapsed_s,
            sim.projectile.x,
            sim.projectile.y,
            sim.target.y,
            phase_text(sim.phase)
        ),
        PANEL_WIDTH,
        screen_h - 40.0,
        20,
        BLUE,
        font,
    );
    draw_ui_text(
        &state.status_line,
        PANEL_WIDTH,
        screen_h - 14.0,
        18,
        DARKGRAY,
        font,
    );

    if let Some(error) = &state.error_line {
        let mut y = HEADER_HEIGHT + FORM_HEIGHT + 28.0;
        for line in error.split_inclusive(". ") {
            draw_ui_text(line.trim_end(), 20.0, y, 18, ERROR_COLOR, font);
            y += 22.0;
        }
    }
}
