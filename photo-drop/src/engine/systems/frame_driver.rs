use bevy::prelude::*;

use crate::engine::camera::orbit_controls::orbit_controls;
use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::core::app_state::AppState;
use crate::engine::scene::photos::{PhotoGroup, PhotoPanel};
use crate::engine::simulation::fall::{FallAnimator, FallTick, PanelHeights};
use crate::engine::simulation::sweep::sweep_x;

/// Per-frame phases, run in declaration order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Controls,
    Animate,
    Camera,
}

pub struct FrameDriverPlugin;

impl Plugin for FrameDriverPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (FrameSet::Controls, FrameSet::Animate, FrameSet::Camera)
                .chain()
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(Update, orbit_controls.in_set(FrameSet::Controls))
        .add_systems(Update, advance_fall.in_set(FrameSet::Animate))
        .add_systems(Update, sweep_camera.in_set(FrameSet::Camera));
    }
}

/// Exposes panel transforms to the fall machine by group index.
struct PanelTransforms<'a, 'w, 's, 't> {
    group: &'a [Entity],
    panels: &'a mut Query<'w, 's, &'t mut Transform, With<PhotoPanel>>,
}

impl PanelHeights for PanelTransforms<'_, '_, '_, '_> {
    fn panel_count(&self) -> usize {
        self.group.len()
    }

    fn height(&self, index: usize) -> Option<f32> {
        let entity = *self.group.get(index)?;
        self.panels.get(entity).ok().map(|t| t.translation.y)
    }

    fn set_height(&mut self, index: usize, height: f32) {
        let Some(&entity) = self.group.get(index) else {
            return;
        };
        if let Ok(mut transform) = self.panels.get_mut(entity) {
            transform.translation.y = height;
        }
    }
}

pub fn advance_fall(
    fall: Option<ResMut<FallAnimator>>,
    group: Res<PhotoGroup>,
    mut panels: Query<&mut Transform, With<PhotoPanel>>,
    photos: Query<&PhotoPanel>,
) {
    let Some(mut fall) = fall else {
        return;
    };

    let mut heights = PanelTransforms {
        group: &group.panels,
        panels: &mut panels,
    };
    match fall.step(&mut heights) {
        FallTick::Dropped {
            index,
            height,
            newly_selected: true,
        } => {
            if let Some(panel) = group.panels.get(index).and_then(|&e| photos.get(e).ok()) {
                debug!(
                    "Panel {} (photo {}) starts falling from {height:.2}",
                    panel.cell, panel.texture_slot
                );
            }
        }
        FallTick::Released { index } => debug!("Panel {index} released"),
        _ => {}
    }
}

// Sweeps the camera along x and keeps it aimed at the origin. Virtual time is
// clamped per frame and can pause, so the sweep runs on the real clock.
pub fn sweep_camera(
    time: Res<Time<Real>>,
    mut cameras: Query<&mut Transform, With<ViewportCamera>>,
) {
    let elapsed_ms = time.elapsed().as_secs_f64() * 1000.0;
    for mut transform in &mut cameras {
        transform.translation.x = sweep_x(elapsed_ms);
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}
