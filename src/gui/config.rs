use crate::Seed;
use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const CELL_SIZE: f32 = 15.;
    pub const MAX_FPS: f64 = 7.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 220.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const WIDGET_GAP: f32 = 20.;

    pub const ALIVE_COLOR: Color32 = Color32::from_gray(51);
    pub const DEAD_COLOR: Color32 = Color32::WHITE;
    pub const GRID_LINE_COLOR: Color32 = Color32::BLACK;
    pub const GRID_LINE_WIDTH: f32 = 1.;

    pub const DEFAULT_SEED: Seed = Seed::Random { seed: None };
}
