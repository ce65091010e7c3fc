//! Interactive tooling layered over the scene.

/// Slider panel for light and camera parameters.
pub mod debug_panel;
