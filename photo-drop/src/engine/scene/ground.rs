use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use crate::constants::scene_layout::{GROUND_HEIGHT, GROUND_SIZE};
use crate::engine::loading::photo_loader::placeholder_material;

#[derive(Component)]
pub struct Ground;

pub fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Ground,
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(placeholder_material())),
        Transform::from_xyz(0.0, GROUND_HEIGHT, 0.0),
        NotShadowCaster,
    ));
}
