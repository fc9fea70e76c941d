use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 800;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

// Window regions around the simulation canvas.
pub const PANEL_WIDTH: f32 = 360.0;
pub const HEADER_HEIGHT: f32 = 96.0;
pub const FOOTER_HEIGHT: f32 = 70.0;
pub const FORM_HEIGHT: f32 = 330.0;

pub const TITLE_Y: f32 = 40.0;
pub const MAX_SIM_TIME_S: f64 = 60.0;
pub const MAX_CATCH_UP_S: f64 = 0.25;

pub const HEIGHT_RANGE_M: (f32, f32) = (0.0, 500.0);
pub const DISTANCE_RANGE_M: (f32, f32) = (0.0, 1000.0);
pub const GRAVITY_RANGE_MPS2: (f32, f32) = (0.0, 30.0);

pub const FOLIAGE_CLUMPS: usize = 9;
pub const STONE_RADIUS_PX: f32 = 5.0;

pub const SKY_BG: Color = Color::new(0.93, 0.96, 0.99, 1.0);
pub const GROUND_COLOR: Color = Color::new(0.36, 0.55, 0.27, 1.0);
pub const AXIS_COLOR: Color = Color::new(0.25, 0.27, 0.30, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.44, 0.49, 1.0);
pub const BARK_COLOR: Color = Color::new(0.45, 0.30, 0.15, 1.0);
pub const FUR_COLOR: Color = Color::new(0.55, 0.35, 0.17, 1.0);
pub const FACE_COLOR: Color = Color::new(0.87, 0.72, 0.53, 1.0);
pub const STONE_COLOR: Color = Color::new(0.50, 0.50, 0.50, 1.0);
pub const SIGHT_LINE_COLOR: Color = Color::new(0.86, 0.15, 0.15, 0.45);
pub const ERROR_COLOR: Color = Color::new(0.80, 0.10, 0.10, 1.0);
