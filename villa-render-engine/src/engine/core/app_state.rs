use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Native-only FPS readout.
#[derive(Component)]
pub struct FpsText;

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.is_ready() {
        info!("→ Loading finished, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
