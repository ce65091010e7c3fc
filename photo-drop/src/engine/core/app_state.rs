use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Building,
    Running,
}

#[derive(Component)]
pub struct FpsText;

// Photos stream in while running, so only the scene itself gates the frame driver.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.scene_built {
        info!("→ Scene built, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
