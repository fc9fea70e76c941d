//! SVG chart of a finished run.

use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::core::ballistics::Trajectory;
use crate::core::clock::SimulationState;
use crate::core::window::{SceneExtent, ViewportScaler, ViewportSize};

pub const CHART_SIZE_PX: (u32, u32) = (960, 540);
const PATH_INTERVALS: usize = 200;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Chart area {0}x{1} px leaves no room to plot.")]
    NoDrawableArea(u32, u32),
    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

fn draw_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Draw(err.to_string())
}

fn label_count(visible_max: f64, interval: u32) -> usize {
    (visible_max / f64::from(interval.max(1))).floor() as usize + 1
}

pub fn render_svg(
    path: &Path,
    trajectory: &Trajectory,
    state: &SimulationState,
) -> Result<(), ChartError> {
    let scenario = trajectory.scenario();
    let (width_px, height_px) = CHART_SIZE_PX;
    let mapping = ViewportScaler::new()
        .rescale(
            ViewportSize::new(f64::from(width_px), f64::from(height_px)),
            SceneExtent::from(scenario),
        )
        .mapping()
        .ok_or(ChartError::NoDrawableArea(width_px, height_px))?;

    let root = SVGBackend::new(path, CHART_SIZE_PX).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Hunter and monkey: h = {} m, d = {} m, g = {} m/s^2",
                scenario.monkey_height_m(),
                scenario.shooter_distance_m(),
                scenario.gravity_mps2()
            ),
            ("sans-serif", 22),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..mapping.visible_max_x, 0f64..mapping.visible_max_y)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_labels(label_count(mapping.visible_max_x, mapping.x_tick_interval()))
        .y_labels(label_count(mapping.visible_max_y, mapping.y_tick_interval()))
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(draw_error)?;

    let end_s = state
        .intercept_time_s
        .unwrap_or_else(|| state.elapsed_s.min(trajectory.intercept_time_s()));
    let samples = trajectory.sample(end_s, PATH_INTERVALS);
    let tree_x = scenario.shooter_distance_m();

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.projectile.x, s.projectile.y)),
            &BLUE,
        ))
        .map_err(draw_error)?
        .label("Stone")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (tree_x, s.target_height_m)),
            &RED,
        ))
        .map_err(draw_error)?
        .label("Monkey")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    if state.is_hit() {
        chart
            .draw_series(std::iter::once(Circle::new(
                (state.projectile.x, state.projectile.y),
                5,
                BLACK.filled(),
            )))
            .map_err(draw_error)?
            .label("Interception")
            .legend(|(x, y)| Circle::new((x + 10, y), 4, BLACK.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::label_count;

    #[test]
    fn label_count_includes_the_origin() {
        assert_eq!(label_count(17.75, 2), 9);
        assert_eq!(label_count(9.0, 1), 10);
        assert_eq!(label_count(0.5, 1), 1);
    }
}
