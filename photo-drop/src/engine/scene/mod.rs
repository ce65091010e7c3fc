//! Static scene content: ground, photo wall and the key light.
//!
//! Everything is spawned once at startup. Afterwards only panel heights
//! (fall animation) and light parameters (debug panel) change.

/// Shadow-receiving ground plane under the wall.
pub mod ground;

/// Directional light with panel-editable intensity and position.
pub mod lighting;

/// Photo panel layout, spawning and the indexable photo group.
pub mod photos;

use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;

use crate::constants::render_settings::SHADOW_MAP_SIZE;
use lighting::sync_scene_light;
use photos::PhotoGroup;

pub struct PhotoScenePlugin;

impl Plugin for PhotoScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhotoGroup>()
            .insert_resource(DirectionalLightShadowMap {
                size: SHADOW_MAP_SIZE,
            })
            .add_systems(Update, sync_scene_light);
    }
}
