use macroquad::prelude::*;
use macroquad::rand::gen_range;
use monkey_hunter::core::ballistics::Point2;
use monkey_hunter::core::window::ViewportMapping;

use crate::constants::{
    AXIS_COLOR, BARK_COLOR, FACE_COLOR, FOLIAGE_CLUMPS, FUR_COLOR, GROUND_COLOR, LABEL_COLOR,
    SIGHT_LINE_COLOR, STONE_COLOR, STONE_RADIUS_PX,
};

/// One clump of leaves, positioned relative to the crown in crown radii.
#[derive(Clone, Copy)]
pub(crate) struct Leaf {
    pub(crate) offset: Vec2,
    pub(crate) radius: f32,
    pub(crate) shade: f32,
}

pub(crate) fn scatter_foliage() -> Vec<Leaf> {
    (0..FOLIAGE_CLUMPS)
        .map(|_| Leaf {
            offset: vec2(gen_range(-1.0f32, 1.0f32), gen_range(-0.6f32, 0.5f32)),
            radius: gen_range(0.45f32, 0.75f32),
            shade: gen_range(0.0f32, 1.0f32),
        })
        .collect()
}

pub(crate) fn world_to_screen(mapping: &ViewportMapping, canvas: Rect, world: Point2) -> Vec2 {
    let p = mapping.to_screen(world);
    vec2(canvas.x + p.x as f32, canvas.y + p.y as f32)
}

/// Figure size in pixels for the monkey, bounded so it stays recognisable.
pub(crate) fn monkey_size_px(mapping: &ViewportMapping) -> f32 {
    (mapping.scale_x.min(mapping.scale_y) as f32 * 0.75).clamp(15.0, 30.0)
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_axes(mapping: &ViewportMapping, canvas: Rect, font: Option<&Font>) {
    let origin = world_to_screen(mapping, canvas, Point2::new(0.0, 0.0));
    let x_end = world_to_screen(mapping, canvas, Point2::new(mapping.visible_max_x, 0.0));
    let y_end = world_to_screen(mapping, canvas, Point2::new(0.0, mapping.visible_max_y));
    let tick_font_size: u16 = 14;

    draw_line(canvas.x, origin.y, canvas.x + canvas.w, origin.y, 4.0, GROUND_COLOR);
    draw_line(origin.x, origin.y, x_end.x, origin.y, 2.0, AXIS_COLOR);
    draw_line(origin.x, origin.y, origin.x, y_end.y, 2.0, AXIS_COLOR);

    for x in mapping.x_ticks() {
        let p = world_to_screen(mapping, canvas, Point2::new(x, 0.0));
        draw_line(p.x, p.y, p.x, p.y + 5.0, 1.0, AXIS_COLOR);
        let label = format!("{x:.0}");
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            p.x - (size.width * 0.5),
            p.y + 20.0,
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    for y in mapping.y_ticks() {
        let p = world_to_screen(mapping, canvas, Point2::new(0.0, y));
        draw_line(p.x - 5.0, p.y, p.x, p.y, 1.0, AXIS_COLOR);
        let label = format!("{y:.0}");
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (p.x - 8.0) - size.width,
            p.y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    draw_ui_text("Distance (m)", x_end.x - 100.0, origin.y + 36.0, 16, LABEL_COLOR, font);
    draw_ui_text("Height (m)", origin.x + 8.0, y_end.y + 4.0, 16, LABEL_COLOR, font);
}

pub(crate) fn draw_sight_line(from: Vec2, to: Vec2) {
    let span = to - from;
    let length = span.length();
    if length < 1.0 {
        return;
    }
    let dir = span / length;
    let dash = 8.0;
    let mut travelled = 0.0;
    while travelled < length {
        let a = from + dir * travelled;
        let b = from + dir * (travelled + dash).min(length);
        draw_line(a.x, a.y, b.x, b.y, 1.5, SIGHT_LINE_COLOR);
        travelled += dash * 2.0;
    }
}

pub(crate) fn draw_shooter(base: Vec2, aim: Vec2, scale_y: f64) {
    let height = (scale_y as f32 * 2.0).clamp(30.0, 80.0);
    let body_w = height * 0.4;
    let hip = vec2(base.x, base.y - height * 0.45);
    let shoulder = vec2(base.x, base.y - height * 0.8);
    let head_r = height * 0.12;
    let head = vec2(base.x, shoulder.y - head_r * 1.2);

    draw_line(hip.x, hip.y, base.x - body_w * 0.4, base.y, 4.0, DARKBLUE);
    draw_line(hip.x, hip.y, base.x + body_w * 0.4, base.y, 4.0, DARKBLUE);
    draw_rectangle(
        shoulder.x - body_w * 0.5,
        shoulder.y,
        body_w,
        hip.y - shoulder.y,
        Color::from_rgba(52, 101, 164, 255),
    );
    draw_circle(head.x, head.y, head_r, FACE_COLOR);
    draw_triangle(
        vec2(head.x - head_r * 1.4, head.y - head_r * 0.6),
        vec2(head.x + head_r * 1.4, head.y - head_r * 0.6),
        vec2(head.x, head.y - head_r * 2.0),
        DARKGREEN,
    );

    let dir = aim.normalize_or_zero();
    let grip = vec2(shoulder.x, shoulder.y + height * 0.1);
    let muzzle = grip + dir * (height * 0.6);
    draw_line(grip.x, grip.y, muzzle.x, muzzle.y, 4.0, DARKGRAY);
}

pub(crate) fn draw_tree(
    monkey_x: f32,
    ground_y: f32,
    branch_y: f32,
    monkey_size: f32,
    foliage: &[Leaf],
) {
    let trunk_x = monkey_x + monkey_size * 0.5;
    let trunk_w = ((ground_y - branch_y) / 8.0).clamp(20.0, 40.0);
    let crown_y = branch_y - monkey_size;

    draw_rectangle(
        trunk_x,
        crown_y,
        trunk_w,
        (ground_y - crown_y).max(0.0),
        BARK_COLOR,
    );
    draw_line(
        monkey_x - monkey_size * 0.6,
        branch_y,
        trunk_x + trunk_w * 0.5,
        branch_y,
        monkey_size * 0.3,
        BARK_COLOR,
    );

    let crown_r = trunk_w * 2.2;
    let crown = vec2(trunk_x + trunk_w * 0.5, crown_y);
    for leaf in foliage {
        let center = crown + leaf.offset * crown_r;
        let green = 0.45 + leaf.shade * 0.25;
        draw_circle(
            center.x,
            center.y,
            crown_r * leaf.radius,
            Color::new(0.15, green, 0.18, 0.92),
        );
    }
}

/// `anchor` is the point the monkey holds on to (or its hands, once falling).
pub(crate) fn draw_monkey(anchor: Vec2, size: f32, hanging: bool) {
    let body_h = size * 1.2;
    let head_r = size * 0.45;
    let body_top = anchor.y + size * 0.5;
    let body_center = vec2(anchor.x, body_top + body_h * 0.5);

    let hand_l = vec2(anchor.x - size * 0.35, anchor.y);
    let hand_r = vec2(anchor.x + size * 0.35, anchor.y);
    let arm_base = if hanging {
        (hand_l, hand_r)
    } else {
        (
            vec2(anchor.x - size * 0.7, anchor.y - size * 0.2),
            vec2(anchor.x + size * 0.7, anchor.y - size * 0.2),
        )
    };
    draw_line(
        body_center.x,
        body_top,
        arm_base.0.x,
        arm_base.0.y,
        size * 0.15,
        FUR_COLOR,
    );
    draw_line(
        body_center.x,
        body_top,
        arm_base.1.x,
        arm_base.1.y,
        size * 0.15,
        FUR_COLOR,
    );

    draw_rectangle(
        body_center.x - size * 0.4,
        body_top,
        size * 0.8,
        body_h,
        FUR_COLOR,
    );
    let head = vec2(anchor.x, body_top - head_r * 0.6);
    draw_circle(head.x, head.y, head_r, FUR_COLOR);
    draw_circle(head.x, head.y + head_r * 0.15, head_r * 0.65, FACE_COLOR);
    draw_circle(head.x - head_r * 0.25, head.y - head_r * 0.05, head_r * 0.1, BLACK);
    draw_circle(head.x + head_r * 0.25, head.y - head_r * 0.05, head_r * 0.1, BLACK);
}

pub(crate) fn draw_stone(position: Vec2) {
    draw_circle(position.x, position.y, STONE_RADIUS_PX, STONE_COLOR);
    draw_circle_lines(position.x, position.y, STONE_RADIUS_PX, 1.0, DARKGRAY);
}

pub(crate) fn draw_hit_marker(position: Vec2) {
    draw_circle_lines(position.x, position.y, STONE_RADIUS_PX * 3.0, 2.0, RED);
}
