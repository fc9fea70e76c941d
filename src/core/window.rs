use log::debug;
use serde::Serialize;

use super::ballistics::Point2;
use super::scenario::Scenario;

pub const X_MARGIN_PX: f64 = 60.0;
pub const Y_MARGIN_PX: f64 = 40.0;
pub const INITIAL_SCALE_PX_PER_M: f64 = 20.0;
pub const MIN_SCALE_PX_PER_M: f64 = 1.0;
pub const MAX_SCALE_PX_PER_M: f64 = 4096.0;

const MARGIN_RESERVE_RATIO: f64 = 1.5;
const GROW_BELOW_RATIO: f64 = 0.4;
const HEADROOM_RATIO: f64 = 1.2;

// (largest visible value, tick interval)
const TICK_TABLE: [(f64, u32); 7] = [
    (10.0, 1),
    (20.0, 2),
    (50.0, 5),
    (100.0, 10),
    (500.0, 50),
    (1000.0, 100),
    (5000.0, 250),
];
const WIDEST_TICK_INTERVAL: u32 = 1000;

/// Spacing between labelled ticks for an axis that shows `0..=max_value`.
pub fn tick_interval(max_value: f64) -> u32 {
    TICK_TABLE
        .iter()
        .find(|(limit, _)| max_value <= *limit)
        .map_or(WIDEST_TICK_INTERVAL, |&(_, interval)| interval)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width_px: f64,
    pub height_px: f64,
}

impl ViewportSize {
    pub const fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}

/// Physical extent the viewport must show: shooter distance by monkey height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneExtent {
    pub width_m: f64,
    pub height_m: f64,
}

impl SceneExtent {
    pub const fn new(width_m: f64, height_m: f64) -> Self {
        Self { width_m, height_m }
    }
}

impl From<&Scenario> for SceneExtent {
    fn from(scenario: &Scenario) -> Self {
        Self::new(scenario.shooter_distance_m(), scenario.monkey_height_m())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ViewportMapping {
    pub scale_x: f64,
    pub scale_y: f64,
    pub visible_max_x: f64,
    pub visible_max_y: f64,
    /// Screen position of the world origin (gun muzzle on the ground line).
    pub origin_px: Point2,
}

impl ViewportMapping {
    pub fn to_screen(&self, world: Point2) -> Point2 {
        Point2::new(
            self.origin_px.x + (world.x * self.scale_x),
            self.origin_px.y - (world.y * self.scale_y),
        )
    }

    pub fn to_world(&self, screen: Point2) -> Point2 {
        Point2::new(
            (screen.x - self.origin_px.x) / self.scale_x,
            (self.origin_px.y - screen.y) / self.scale_y,
        )
    }

    pub fn x_tick_interval(&self) -> u32 {
        tick_interval(self.visible_max_x)
    }

    pub fn y_tick_interval(&self) -> u32 {
        tick_interval(self.visible_max_y)
    }

    pub fn x_ticks(&self) -> impl Iterator<Item = f64> {
        axis_ticks(self.visible_max_x, self.x_tick_interval())
    }

    pub fn y_ticks(&self) -> impl Iterator<Item = f64> {
        axis_ticks(self.visible_max_y, self.y_tick_interval())
    }
}

fn axis_ticks(visible_max: f64, interval: u32) -> impl Iterator<Item = f64> {
    let last = visible_max.max(0.0).floor() as u64;
    (0..=last)
        .step_by(interval.max(1) as usize)
        .map(|value| value as f64)
}

/// Outcome of [`ViewportScaler::rescale`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rescale {
    Ready(ViewportMapping),
    /// The viewport has no drawable area yet (transient during layout).
    NotReady,
}

impl Rescale {
    pub fn mapping(self) -> Option<ViewportMapping> {
        match self {
            Self::Ready(mapping) => Some(mapping),
            Self::NotReady => None,
        }
    }
}

/// Remembers the last px/m factors; [`ViewportScaler::rescale`] only moves
/// them by powers of two.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportScaler {
    scale_x: f64,
    scale_y: f64,
    x_margin_px: f64,
    y_margin_px: f64,
}

impl Default for ViewportScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportScaler {
    pub fn new() -> Self {
        Self {
            scale_x: INITIAL_SCALE_PX_PER_M,
            scale_y: INITIAL_SCALE_PX_PER_M,
            x_margin_px: X_MARGIN_PX,
            y_margin_px: Y_MARGIN_PX,
        }
    }

    pub fn with_margins(mut self, x_margin_px: f64, y_margin_px: f64) -> Self {
        self.x_margin_px = x_margin_px.max(0.0);
        self.y_margin_px = y_margin_px.max(0.0);
        self
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x.clamp(MIN_SCALE_PX_PER_M, MAX_SCALE_PX_PER_M);
        self.scale_y = scale_y.clamp(MIN_SCALE_PX_PER_M, MAX_SCALE_PX_PER_M);
        self
    }

    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    pub fn margins(&self) -> (f64, f64) {
        (self.x_margin_px, self.y_margin_px)
    }

    pub fn rescale(&mut self, viewport: ViewportSize, scene: SceneExtent) -> Rescale {
        if !(viewport.width_px.is_finite()
            && viewport.height_px.is_finite()
            && viewport.width_px > 0.0
            && viewport.height_px > 0.0)
        {
            return Rescale::NotReady;
        }

        let available_w = viewport.width_px - (self.x_margin_px * MARGIN_RESERVE_RATIO);
        let available_h = viewport.height_px - (self.y_margin_px * MARGIN_RESERVE_RATIO);
        if !(available_w > 0.0 && available_h > 0.0) {
            return Rescale::NotReady;
        }

        let scene_w = scene.width_m.max(0.0);
        let scene_h = scene.height_m.max(0.0);
        let previous = (self.scale_x, self.scale_y);

        let x_ratio = (scene_w * self.scale_x) / available_w;
        let y_ratio = (scene_h * self.scale_y) / available_h;

        if x_ratio > 1.0 || y_ratio > 1.0 {
            // Only overflowing axes shrink; when just one overflows it is
            // necessarily the one with the worse ratio.
            if x_ratio > 1.0 {
                self.scale_x = halve_until_fits(scene_w, self.scale_x, available_w);
            }
            if y_ratio > 1.0 {
                self.scale_y = halve_until_fits(scene_h, self.scale_y, available_h);
            }
        } else {
            // Lock-step growth keeps proportions when re-expanding.
            while scene_w * self.scale_x < available_w * GROW_BELOW_RATIO
                && scene_h * self.scale_y < available_h * GROW_BELOW_RATIO
                && self.scale_x * 2.0 <= MAX_SCALE_PX_PER_M
                && self.scale_y * 2.0 <= MAX_SCALE_PX_PER_M
            {
                self.scale_x *= 2.0;
                self.scale_y *= 2.0;
            }
        }

        self.scale_x = self.scale_x.max(MIN_SCALE_PX_PER_M);
        self.scale_y = self.scale_y.max(MIN_SCALE_PX_PER_M);

        if previous != (self.scale_x, self.scale_y) {
            debug!(
                "Adjusted scale to: x={} px/m, y={} px/m",
                self.scale_x, self.scale_y
            );
        }

        Rescale::Ready(ViewportMapping {
            scale_x: self.scale_x,
            scale_y: self.scale_y,
            visible_max_x: (scene_w * HEADROOM_RATIO).max(available_w / self.scale_x),
            visible_max_y: (scene_h * HEADROOM_RATIO).max(available_h / self.scale_y),
            origin_px: Point2::new(self.x_margin_px, viewport.height_px - self.y_margin_px),
        })
    }
}

fn halve_until_fits(extent_m: f64, mut scale: f64, available_px: f64) -> f64 {
    while extent_m * scale > available_px && scale > MIN_SCALE_PX_PER_M {
        scale /= 2.0;
    }
    scale
}
