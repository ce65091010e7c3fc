use bevy::math::Vec3;

/// Vertical field of view of the viewport camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const CAMERA_START: Vec3 = Vec3::new(20.0, 55.0, 10.0);

/// Upper bound on the pixel ratio recorded in the viewport metrics.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Light intensity as exposed on the debug panel.
pub const LIGHT_INTENSITY: f32 = 3.0;
pub const LIGHT_POSITION: Vec3 = Vec3::new(0.25, 3.0, -2.25);

/// Converts panel intensity units into Bevy illuminance (lux).
pub const LUX_PER_INTENSITY: f32 = 3_000.0;

pub const SHADOW_MAP_SIZE: usize = 1024;
pub const SHADOW_NORMAL_BIAS: f32 = 0.05;

/// Orbit damping, fraction of the pending rotation applied per frame.
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
/// Radius multiplier per scroll line.
pub const ORBIT_ZOOM_STEP: f32 = 0.95;
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 190.0;

pub const LOG_FILTER: &str = "wgpu=error,naga=warn,photo_drop=info";
