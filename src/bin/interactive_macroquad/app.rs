use log::info;
use macroquad::prelude::*;
use monkey_hunter::core::ballistics::Point2;
use monkey_hunter::core::clock::ClockPhase;
use monkey_hunter::core::window::ViewportMapping;

use crate::constants::{
    FOOTER_HEIGHT, HEADER_HEIGHT, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES,
    PANEL_WIDTH, SKY_BG, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::gameplay::{apply_actions, step_clock};
use crate::hud::draw_hud;
use crate::render::{
    draw_axes, draw_hit_marker, draw_monkey, draw_shooter, draw_sight_line, draw_stone,
    draw_tree, monkey_size_px, world_to_screen,
};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Hunter and Monkey".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn draw_scene(state: &AppRuntime, mapping: &ViewportMapping, canvas: Rect, font: Option<&Font>) {
    draw_axes(mapping, canvas, font);

    let scenario = &state.scenario;
    let origin = world_to_screen(mapping, canvas, Point2::new(0.0, 0.0));
    let branch = world_to_screen(
        mapping,
        canvas,
        Point2::new(scenario.shooter_distance_m(), scenario.monkey_height_m()),
    );
    let monkey_size = monkey_size_px(mapping);

    draw_tree(branch.x, origin.y, branch.y, monkey_size, &state.foliage);
    draw_sight_line(origin, branch);
    draw_shooter(origin, branch - origin, mapping.scale_y);

    let sim = state.clock.state();
    if sim.phase == ClockPhase::Idle {
        draw_monkey(branch, monkey_size, true);
        return;
    }

    let monkey = world_to_screen(mapping, canvas, sim.target);
    draw_monkey(monkey, monkey_size, false);
    let stone = world_to_screen(mapping, canvas, sim.projectile);
    draw_stone(stone);
    if sim.is_hit() {
        draw_hit_marker(stone);
    }
}

pub(crate) async fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    macroquad::rand::srand((macroquad::miniquad::date::now() * 1000.0) as u64);

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            info!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();
        let canvas = Rect::new(
            PANEL_WIDTH,
            HEADER_HEIGHT,
            screen_w - PANEL_WIDTH,
            screen_h - HEADER_HEIGHT - FOOTER_HEIGHT,
        );

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        step_clock(&mut state, frame_dt);
        state.refresh_mapping(canvas.w, canvas.h);

        clear_background(SKY_BG);
        if let Some(mapping) = state.mapping {
            draw_scene(&state, &mapping, canvas, ui_font.as_ref());
        }
        draw_hud(&state, screen_w, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
