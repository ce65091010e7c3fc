use bevy::pbr::CascadeShadowConfigBuilder;
use bevy::prelude::*;

use crate::constants::render_settings::{
    CAMERA_FAR, LIGHT_INTENSITY, LIGHT_POSITION, LUX_PER_INTENSITY, SHADOW_NORMAL_BIAS,
};

/// Editable light parameters. The light always shines from `position` towards the origin.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SceneLight {
    pub intensity: f32,
    pub position: Vec3,
}

impl Default for SceneLight {
    fn default() -> Self {
        Self {
            intensity: LIGHT_INTENSITY,
            position: LIGHT_POSITION,
        }
    }
}

impl SceneLight {
    pub fn illuminance(&self) -> f32 {
        self.intensity.max(0.0) * LUX_PER_INTENSITY
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

pub fn spawn_scene_light(mut commands: Commands) {
    let light = SceneLight::default();
    commands.spawn((
        light,
        Name::new("KeyLight"),
        DirectionalLight {
            color: Color::WHITE,
            illuminance: light.illuminance(),
            shadows_enabled: true,
            shadow_normal_bias: SHADOW_NORMAL_BIAS,
            ..default()
        },
        CascadeShadowConfigBuilder {
            num_cascades: 1,
            maximum_distance: CAMERA_FAR,
            ..default()
        }
        .build(),
        light.transform(),
    ));
}

// Pushes panel edits into the engine light.
pub fn sync_scene_light(
    mut lights: Query<(&SceneLight, &mut DirectionalLight, &mut Transform), Changed<SceneLight>>,
) {
    for (scene_light, mut light, mut transform) in &mut lights {
        light.illuminance = scene_light.illuminance();
        *transform = scene_light.transform();
    }
}
