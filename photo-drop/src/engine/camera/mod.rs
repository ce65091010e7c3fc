//! Viewport camera for the photo wall.
//!
//! Provides the perspective camera, resize and pixel-ratio handling,
//! and damped orbit controls around the origin.

/// Damped mouse orbit and dolly around a fixed target.
pub mod orbit_controls;

/// Camera spawning, projection setup and window resize reactions.
pub mod viewport_camera;

use bevy::prelude::*;

use orbit_controls::{OrbitControls, UiPointerCapture};
use viewport_camera::{ViewportMetrics, track_scale_factor_changes, handle_viewport_resize};

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportMetrics>()
            .init_resource::<OrbitControls>()
            .init_resource::<UiPointerCapture>()
            .add_systems(
                Update,
                (track_scale_factor_changes, handle_viewport_resize).chain(),
            );
    }
}
