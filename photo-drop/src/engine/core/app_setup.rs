use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

use crate::constants::render_settings::LOG_FILTER;
// Crate engine modules
use crate::engine::camera::ViewportPlugin;
use crate::engine::camera::viewport_camera::spawn_viewport_camera;
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::settings::{SceneSettings, init_scene_rng};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::photo_loader::{create_photo_library, poll_photo_fetches};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::PhotoScenePlugin;
use crate::engine::scene::ground::spawn_ground;
use crate::engine::scene::lighting::spawn_scene_light;
use crate::engine::scene::photos::spawn_photo_wall;
use crate::engine::systems::frame_driver::FrameDriverPlugin;
// Crate tools modules
use crate::tools::debug_panel::DebugPanelPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

pub fn create_app() -> App {
    create_app_with_settings(SceneSettings::default())
}

pub fn create_app_with_settings(settings: SceneSettings) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(PhotoScenePlugin)
        .add_plugins(ViewportPlugin)
        .add_plugins(FrameDriverPlugin)
        .add_plugins(DebugPanelPlugin);

    // Initialise resources early
    app.insert_resource(settings)
        .init_resource::<LoadingProgress>();

    // The photo library must exist before the wall picks materials from it.
    app.add_systems(
        Startup,
        (
            init_scene_rng,
            create_photo_library,
            spawn_ground,
            spawn_photo_wall,
            spawn_scene_light,
            spawn_viewport_camera,
        )
            .chain(),
    )
    .add_systems(
        Update,
        transition_to_running.run_if(in_state(AppState::Building)),
    )
    // Photos keep streaming in regardless of state.
    .add_systems(Update, poll_photo_fetches);

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, spawn_fps_overlay)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.into(),
        level: Level::INFO,
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
