//! Debug panel for live light and camera tuning.
//!
//! A collapsible `bevy_ui` panel in the top-right corner with one slider per
//! parameter. Sliders emit `ParamEdited` events while held; edits are snapped
//! to the slider step and written straight into the bound scene values:
//!
//! ```text
//! lightIntensity  0..10    SceneLight::intensity
//! lightX/Y/Z     -5..5     SceneLight::position
//! cameraX        -5..5     camera translation x (read-only, swept each frame)
//! cameraY         1..80    camera translation y
//! cameraZ       -60..60    camera translation z
//! ```
//!
//! While the pointer is over the panel (or a slider is held) orbit controls
//! are suppressed through `UiPointerCapture`.

/// Button and slider interactions plus the scene/value bindings.
pub mod interactions;

/// Parameter table, panel state resources and marker components.
pub mod state;

/// Panel spawning and collapse layout.
pub mod ui;

use bevy::prelude::*;

use crate::engine::camera::orbit_controls::orbit_controls;
use crate::engine::systems::frame_driver::FrameSet;

use state::{DebugPanelUiState, ParamEdited};
use interactions::{
    apply_param_edits, collapse_button_interaction, reflect_param_values, slider_drag_interaction,
    update_pointer_capture,
};
use ui::{apply_collapse_state, spawn_debug_panel};

pub struct DebugPanelPlugin;

impl Plugin for DebugPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugPanelUiState>()
            .add_event::<ParamEdited>()
            .add_systems(Startup, spawn_debug_panel)
            .add_systems(Update, (collapse_button_interaction, apply_collapse_state).chain())
            .add_systems(
                Update,
                (update_pointer_capture, slider_drag_interaction, apply_param_edits)
                    .chain()
                    .in_set(FrameSet::Controls)
                    .before(orbit_controls),
            )
            .add_systems(Update, reflect_param_values.after(FrameSet::Camera));
    }
}
