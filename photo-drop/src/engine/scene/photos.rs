use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::scene_layout::PANEL_SIZE;
use crate::engine::core::settings::{SceneRng, SceneSettings};
use crate::engine::loading::photo_loader::PhotoLibrary;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::simulation::fall::FallAnimator;

/// A single photo on the wall. Panels lie flat (plane normal +Y) and cast shadows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoPanel {
    pub cell: UVec2,
    pub texture_slot: usize,
}

/// Panel entities in spawn order; the fall animation selects by index.
#[derive(Resource, Default, Debug)]
pub struct PhotoGroup {
    pub panels: Vec<Entity>,
}

#[derive(Component)]
pub struct PhotoWall;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    pub cell: UVec2,
    pub position: Vec3,
    pub texture_slot: usize,
}

/// World coordinate of grid index `index`, centred so index `grid_size / 2` lands on 0.
pub fn grid_coordinate(index: u32, grid_size: u32, spacing: f32) -> f32 {
    (index as i32 - (grid_size / 2) as i32) as f32 * spacing
}

/// Lays out `grid_size²` panels with random heights and random photo slots.
///
/// Draw order per panel is height, then slot, walking x-major.
pub fn layout_panels(
    settings: &SceneSettings,
    texture_count: usize,
    rng: &mut impl Rng,
) -> Vec<PanelPlacement> {
    let size = settings.grid_size;
    let mut placements = Vec::with_capacity((size * size) as usize);

    for i in 0..size {
        for j in 0..size {
            let y = if settings.max_height > 0.0 {
                rng.random_range(0.0..settings.max_height)
            } else {
                0.0
            };
            let texture_slot = if texture_count > 0 {
                rng.random_range(0..texture_count)
            } else {
                0
            };

            placements.push(PanelPlacement {
                cell: UVec2::new(i, j),
                position: Vec3::new(
                    grid_coordinate(i, size, settings.spacing),
                    y,
                    grid_coordinate(j, size, settings.spacing),
                ),
                texture_slot,
            });
        }
    }

    placements
}

pub fn spawn_photo_wall(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut scene_rng: ResMut<SceneRng>,
    mut loading_progress: ResMut<LoadingProgress>,
    library: Res<PhotoLibrary>,
    settings: Res<SceneSettings>,
) {
    let mesh = meshes.add(Plane3d::default().mesh().size(PANEL_SIZE, PANEL_SIZE));
    let placements = layout_panels(&settings, library.len(), &mut scene_rng.0);
    let mut group = PhotoGroup::default();

    commands
        .spawn((
            PhotoWall,
            Name::new("PhotoWall"),
            Transform::IDENTITY,
            Visibility::default(),
        ))
        .with_children(|wall| {
            for placement in &placements {
                let Some(material) = library.material(placement.texture_slot) else {
                    warn!("No photo slot {} for panel {}", placement.texture_slot, placement.cell);
                    continue;
                };

                let panel = wall
                    .spawn((
                        PhotoPanel {
                            cell: placement.cell,
                            texture_slot: placement.texture_slot,
                        },
                        Mesh3d(mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_translation(placement.position),
                    ))
                    .id();
                group.panels.push(panel);
            }
        });

    info!("✓ Spawned {} photo panels", group.panels.len());

    let fall_seed: u64 = scene_rng.0.random();
    commands.insert_resource(FallAnimator::with_motion(
        StdRng::seed_from_u64(fall_seed),
        settings.fall_step,
        settings.rest_threshold,
    ));
    commands.insert_resource(group);
    loading_progress.scene_built = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::loading::photo_loader::{PhotoSlot, PhotoSlotState, placeholder_material};

    fn layout(seed: u64) -> Vec<PanelPlacement> {
        let mut rng = StdRng::seed_from_u64(seed);
        layout_panels(&SceneSettings::default(), 5, &mut rng)
    }

    #[test]
    fn grid_is_centred_on_origin() {
        assert_eq!(grid_coordinate(0, 20, 10.0), -100.0);
        assert_eq!(grid_coordinate(10, 20, 10.0), 0.0);
        assert_eq!(grid_coordinate(19, 20, 10.0), 90.0);
    }

    #[test]
    fn places_four_hundred_panels_on_the_grid() {
        let placements = layout(1);
        assert_eq!(placements.len(), 400);

        for placement in &placements {
            let UVec2 { x: i, y: j } = placement.cell;
            assert_eq!(placement.position.x, (i as f32 - 10.0) * 10.0);
            assert_eq!(placement.position.z, (j as f32 - 10.0) * 10.0);
        }
    }

    #[test]
    fn heights_and_slots_stay_in_range() {
        let placements = layout(2);
        assert!(placements.iter().all(|p| (0.0..40.0).contains(&p.position.y)));
        assert!(placements.iter().all(|p| p.texture_slot < 5));

        // 400 uniform draws over five slots: every photo shows up.
        for slot in 0..5 {
            assert!(placements.iter().any(|p| p.texture_slot == slot));
        }
    }

    #[test]
    fn same_seed_same_wall() {
        assert_eq!(layout(77), layout(77));
        assert_ne!(layout(77), layout(78));
    }

    #[test]
    fn flat_wall_when_height_range_is_empty() {
        let settings = SceneSettings {
            max_height: 0.0,
            grid_size: 2,
            ..default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let placements = layout_panels(&settings, 0, &mut rng);
        assert_eq!(placements.len(), 4);
        assert!(placements.iter().all(|p| p.position.y == 0.0 && p.texture_slot == 0));
    }

    fn wall_app(slot_count: usize) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<LoadingProgress>()
            .insert_resource(SceneSettings {
                seed: Some(5),
                ..default()
            })
            .insert_resource(SceneRng(StdRng::seed_from_u64(5)))
            .add_systems(Startup, spawn_photo_wall);

        let slots = (0..slot_count)
            .map(|slot| PhotoSlot {
                url: format!("https://example.invalid/{slot}.jpg"),
                material: app
                    .world_mut()
                    .resource_mut::<Assets<StandardMaterial>>()
                    .add(placeholder_material()),
                state: PhotoSlotState::Pending,
            })
            .collect();
        app.insert_resource(PhotoLibrary { slots });
        app
    }

    #[test]
    fn wall_spawns_every_panel_into_the_group() {
        let mut app = wall_app(5);
        app.update();

        let group = app.world().resource::<PhotoGroup>();
        assert_eq!(group.panels.len(), 400);

        let world = app.world();
        let library = world.resource::<PhotoLibrary>();
        for &entity in &group.panels {
            let panel = world.get::<PhotoPanel>(entity).unwrap();
            let material = world.get::<MeshMaterial3d<StandardMaterial>>(entity).unwrap();
            assert_eq!(Some(&material.0), library.material(panel.texture_slot));
            assert!(world.get::<ChildOf>(entity).is_some());

            let translation = world.get::<Transform>(entity).unwrap().translation;
            assert_eq!(translation.x, grid_coordinate(panel.cell.x, 20, 10.0));
            assert_eq!(translation.z, grid_coordinate(panel.cell.y, 20, 10.0));
        }
    }

    #[test]
    fn wall_hands_over_to_the_frame_driver() {
        let mut app = wall_app(5);
        app.update();

        assert!(app.world().resource::<LoadingProgress>().scene_built);
        assert!(app.world().get_resource::<FallAnimator>().is_some());
        let mut walls = app.world_mut().query_filtered::<Entity, With<PhotoWall>>();
        assert_eq!(walls.iter(app.world()).count(), 1);
    }

    #[test]
    fn empty_library_leaves_an_empty_group() {
        let mut app = wall_app(0);
        app.update();

        assert!(app.world().resource::<PhotoGroup>().panels.is_empty());
        assert!(app.world().resource::<LoadingProgress>().scene_built);
    }
}
