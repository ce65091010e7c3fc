use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowBackendScaleFactorChanged, WindowResized};

use crate::constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START, MAX_PIXEL_RATIO,
};

#[derive(Component)]
pub struct ViewportCamera;

/// Last applied viewport size, in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub width: f32,
    pub height: f32,
    pub aspect_ratio: f32,
    pub pixel_ratio: f32,
}

pub fn capped_pixel_ratio(device_ratio: f32) -> f32 {
    device_ratio.min(MAX_PIXEL_RATIO)
}

/// Metrics for a `width` x `height` viewport, or `None` for a collapsed one.
pub fn viewport_metrics(width: f32, height: f32, device_ratio: f32) -> Option<ViewportMetrics> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(ViewportMetrics {
        width,
        height,
        aspect_ratio: width / height,
        pixel_ratio: capped_pixel_ratio(device_ratio),
    })
}

pub fn camera_projection(aspect_ratio: f32) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        aspect_ratio,
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    })
}

pub fn spawn_viewport_camera(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut metrics: ResMut<ViewportMetrics>,
) {
    let mut aspect_ratio = 1.0;
    if let Some(initial) = windows
        .single()
        .ok()
        .and_then(|window| viewport_metrics(window.width(), window.height(), window.scale_factor()))
    {
        aspect_ratio = initial.aspect_ratio;
        *metrics = initial;
    }

    commands.spawn((
        ViewportCamera,
        Name::new("ViewportCamera"),
        Camera3d::default(),
        camera_projection(aspect_ratio),
        Msaa::Sample4,
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

// Bevy renders at the window's physical size; the capped ratio is recorded
// in the metrics and never written back to the window.
pub fn track_scale_factor_changes(
    mut scale_changes: EventReader<WindowBackendScaleFactorChanged>,
    primary: Query<(), With<PrimaryWindow>>,
    mut metrics: ResMut<ViewportMetrics>,
) {
    for event in scale_changes.read() {
        if primary.contains(event.window) {
            metrics.pixel_ratio = capped_pixel_ratio(event.scale_factor as f32);
        }
    }
}

pub fn handle_viewport_resize(
    mut resized: EventReader<WindowResized>,
    windows: Query<&Window>,
    mut cameras: Query<&mut Projection, With<ViewportCamera>>,
    mut metrics: ResMut<ViewportMetrics>,
) {
    for event in resized.read() {
        let Ok(window) = windows.get(event.window) else {
            continue;
        };
        let Some(next) = viewport_metrics(event.width, event.height, window.scale_factor()) else {
            debug!("Ignoring collapsed viewport {}x{}", event.width, event.height);
            continue;
        };

        debug!(
            "Viewport resized to {}x{} (aspect {:.3}, pixel ratio {})",
            next.width, next.height, next.aspect_ratio, next.pixel_ratio
        );
        for mut projection in &mut cameras {
            if let Projection::Perspective(perspective) = &mut *projection {
                perspective.aspect_ratio = next.aspect_ratio;
            }
        }
        *metrics = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::WindowResolution;

    fn resize_app(device_ratio: f32) -> (App, Entity, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<WindowResized>()
            .add_event::<WindowBackendScaleFactorChanged>()
            .init_resource::<ViewportMetrics>()
            .add_systems(Update, (track_scale_factor_changes, handle_viewport_resize).chain());

        let mut resolution = WindowResolution::new(1280.0, 720.0);
        resolution.set_scale_factor(device_ratio);
        let window = app
            .world_mut()
            .spawn((
                Window {
                    resolution,
                    ..default()
                },
                PrimaryWindow,
            ))
            .id();
        let camera = app
            .world_mut()
            .spawn((ViewportCamera, camera_projection(1.0)))
            .id();
        (app, window, camera)
    }

    fn aspect_of(app: &App, camera: Entity) -> f32 {
        match app.world().get::<Projection>(camera).unwrap() {
            Projection::Perspective(perspective) => perspective.aspect_ratio,
            _ => panic!("viewport camera must be perspective"),
        }
    }

    fn assert_window_untouched(app: &App, window: Entity) {
        let resolution = &app.world().get::<Window>(window).unwrap().resolution;
        assert_eq!(resolution.scale_factor_override(), None);
        assert_eq!(resolution.physical_width(), 1280);
        assert_eq!(resolution.physical_height(), 720);
    }

    #[test]
    fn pixel_ratio_is_capped_at_two() {
        assert_eq!(capped_pixel_ratio(1.0), 1.0);
        assert_eq!(capped_pixel_ratio(1.5), 1.5);
        assert_eq!(capped_pixel_ratio(3.0), 2.0);
    }

    #[test]
    fn collapsed_viewport_has_no_metrics() {
        assert_eq!(viewport_metrics(800.0, 0.0, 1.0), None);
        assert_eq!(viewport_metrics(0.0, 600.0, 1.0), None);
    }

    #[test]
    fn projection_matches_camera_settings() {
        let Projection::Perspective(perspective) = camera_projection(1.5) else {
            panic!("expected a perspective projection");
        };
        assert!((perspective.fov - 75f32.to_radians()).abs() < 1e-6);
        assert_eq!(perspective.near, 0.1);
        assert_eq!(perspective.far, 200.0);
        assert_eq!(perspective.aspect_ratio, 1.5);
    }

    #[test]
    fn resize_updates_aspect_and_pixel_ratio() {
        let (mut app, window, camera) = resize_app(3.0);

        app.world_mut().send_event(WindowResized {
            window,
            width: 800.0,
            height: 400.0,
        });
        app.update();

        assert_eq!(aspect_of(&app, camera), 2.0);
        let metrics = *app.world().resource::<ViewportMetrics>();
        assert_eq!(metrics.width, 800.0);
        assert_eq!(metrics.height, 400.0);
        assert_eq!(metrics.pixel_ratio, 2.0);
        assert_window_untouched(&app, window);
    }

    #[test]
    fn low_density_displays_keep_their_ratio() {
        let (mut app, window, camera) = resize_app(1.25);

        app.world_mut().send_event(WindowResized {
            window,
            width: 1000.0,
            height: 800.0,
        });
        app.update();

        assert_eq!(aspect_of(&app, camera), 1.25);
        assert_eq!(app.world().resource::<ViewportMetrics>().pixel_ratio, 1.25);
        assert_window_untouched(&app, window);
    }

    #[test]
    fn collapsed_resize_leaves_camera_alone() {
        let (mut app, window, camera) = resize_app(1.0);

        app.world_mut().send_event(WindowResized {
            window,
            width: 1000.0,
            height: 0.0,
        });
        app.update();

        assert_eq!(aspect_of(&app, camera), 1.0);
        assert_eq!(*app.world().resource::<ViewportMetrics>(), ViewportMetrics::default());
    }

    #[test]
    fn moving_to_a_denser_display_recaps_without_resizing() {
        let (mut app, window, camera) = resize_app(1.0);

        app.world_mut().send_event(WindowBackendScaleFactorChanged {
            window,
            scale_factor: 3.0,
        });
        app.update();
        assert_eq!(app.world().resource::<ViewportMetrics>().pixel_ratio, 2.0);

        app.world_mut().send_event(WindowBackendScaleFactorChanged {
            window,
            scale_factor: 1.5,
        });
        app.update();
        assert_eq!(app.world().resource::<ViewportMetrics>().pixel_ratio, 1.5);

        assert_eq!(aspect_of(&app, camera), 1.0);
        assert_window_untouched(&app, window);
    }

    #[test]
    fn scale_changes_on_other_windows_are_ignored() {
        let (mut app, _, _) = resize_app(1.0);
        let other = app.world_mut().spawn(Window::default()).id();

        app.world_mut().send_event(WindowBackendScaleFactorChanged {
            window: other,
            scale_factor: 3.0,
        });
        app.update();

        assert_eq!(app.world().resource::<ViewportMetrics>().pixel_ratio, 0.0);
    }
}
