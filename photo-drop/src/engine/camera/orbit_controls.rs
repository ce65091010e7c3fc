use std::f32::consts::{PI, TAU};

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::render_settings::{
    ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP,
};
use crate::engine::camera::viewport_camera::ViewportCamera;

const POLAR_EPSILON: f32 = 1e-6;
const SETTLED_EPSILON: f32 = 1e-5;

/// Set while the pointer is over UI, so drags and scrolls don't reach the scene.
#[derive(Resource, Default, Debug)]
pub struct UiPointerCapture(pub bool);

/// Damped spherical orbit around `target`.
///
/// Input accumulates into pending azimuth/polar deltas; each `update` applies
/// `damping` of what is pending and keeps the rest for later frames, so the
/// camera glides to a stop after the mouse is released.
#[derive(Resource, Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pending_azimuth: f32,
    pending_polar: f32,
    pending_scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_step: ORBIT_ZOOM_STEP,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_scale: 1.0,
        }
    }
}

impl OrbitControls {
    /// Queues a rotation for a drag of `pixels`; a full viewport height turns one revolution.
    pub fn rotate(&mut self, pixels: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let radians_per_pixel = TAU * self.rotate_speed / viewport_height;
        self.pending_azimuth -= pixels.x * radians_per_pixel;
        self.pending_polar -= pixels.y * radians_per_pixel;
    }

    /// Positive `lines` dolly towards the target.
    pub fn zoom(&mut self, lines: f32) {
        self.pending_scale *= self.zoom_step.powf(lines);
    }

    pub fn is_settled(&self) -> bool {
        self.pending_azimuth.abs() < SETTLED_EPSILON
            && self.pending_polar.abs() < SETTLED_EPSILON
            && (self.pending_scale - 1.0).abs() < SETTLED_EPSILON
    }

    /// Returns the damped next camera position for a camera currently at `position`.
    pub fn update(&mut self, position: Vec3) -> Vec3 {
        if self.is_settled() {
            self.pending_azimuth = 0.0;
            self.pending_polar = 0.0;
            self.pending_scale = 1.0;
            return position;
        }

        let offset = position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return position;
        }

        let azimuth = offset.x.atan2(offset.z) + self.pending_azimuth * self.damping;
        let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos()
            + self.pending_polar * self.damping)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        let radius = (radius * self.pending_scale).clamp(self.min_distance, self.max_distance);

        self.pending_azimuth *= 1.0 - self.damping;
        self.pending_polar *= 1.0 - self.damping;
        self.pending_scale = 1.0;

        self.target
            + Vec3::new(
                radius * polar.sin() * azimuth.sin(),
                radius * polar.cos(),
                radius * polar.sin() * azimuth.cos(),
            )
    }
}

pub fn orbit_controls(
    mut controls: ResMut<OrbitControls>,
    mut cameras: Query<&mut Transform, With<ViewportCamera>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    capture: Res<UiPointerCapture>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let scroll: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        })
        .sum();

    if !capture.0 {
        if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
            let viewport_height = windows.single().map(|w| w.height()).unwrap_or(0.0);
            controls.rotate(mouse_delta, viewport_height);
        }
        if scroll.abs() > f32::EPSILON {
            controls.zoom(scroll);
        }
    }

    for mut transform in &mut cameras {
        transform.translation = controls.update(transform.translation);
    }
}
