pub mod animation;
pub mod debug_panel;
pub mod photos;
pub mod render_settings;
pub mod scene_layout;
