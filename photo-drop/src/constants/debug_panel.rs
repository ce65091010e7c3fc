pub const PANEL_OPEN_WIDTH: f32 = 280.0;
pub const PANEL_CLOSED_WIDTH: f32 = 32.0;

pub const SLIDER_TRACK_HEIGHT: f32 = 14.0;
pub const LABEL_FONT_SIZE: f32 = 14.0;
