use bevy::prelude::*;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("canvas.webgl".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Photo Drop".into(),
            present_mode: bevy::window::PresentMode::AutoVsync,
            ..default()
        }
    }
}
