use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::constants::animation::{FALL_STEP, REST_THRESHOLD};
use crate::constants::scene_layout::{PANEL_GRID_SIZE, PANEL_MAX_HEIGHT, PANEL_SPACING};

/// Runtime tunables for scene construction and the fall animation.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneSettings {
    /// Fixed seed for reproducible layouts; `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    pub grid_size: u32,
    pub spacing: f32,
    pub max_height: f32,
    pub fall_step: f32,
    pub rest_threshold: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            seed: None,
            grid_size: PANEL_GRID_SIZE,
            spacing: PANEL_SPACING,
            max_height: PANEL_MAX_HEIGHT,
            fall_step: FALL_STEP,
            rest_threshold: REST_THRESHOLD,
        }
    }
}

impl SceneSettings {
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(entropy_seed)
    }
}

/// Random source consumed during scene setup.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

pub fn init_scene_rng(mut commands: Commands, settings: Res<SceneSettings>) {
    let seed = settings.resolve_seed();
    info!("Scene seed: {seed}");
    commands.insert_resource(SceneRng(StdRng::seed_from_u64(seed)));
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0x5eed_cafe)
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u64 {
    let millis = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    millis.rotate_left(17) ^ noise
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed_wins_over_entropy() {
        let settings = SceneSettings {
            seed: Some(99),
            ..default()
        };
        assert_eq!(settings.resolve_seed(), 99);
    }

    #[test]
    fn defaults_describe_a_twenty_by_twenty_wall() {
        let settings = SceneSettings::default();
        assert_eq!(settings.grid_size, 20);
        assert_eq!(settings.spacing, 10.0);
        assert_eq!(settings.max_height, 40.0);
        assert_eq!(settings.seed, None);
    }
}
