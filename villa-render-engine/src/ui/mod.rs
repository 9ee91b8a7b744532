//! On-screen UI: loading overlay, control panels and their transitions.
//!
//! Bevy UI has no inherited opacity, so fading works through `Opacity` roots
//! and per-node `Tint`/`TextTint` base colours that `apply_opacity` combines
//! every frame.

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::loading_progress_system;

/// Preset button panels, click handling, hover scaling and highlights.
pub mod control_panel;

/// Full-screen loading overlay with progress bar and fade-out.
pub mod loading_screen;

/// Tween component, opacity/slide/scale application and completion events.
pub mod transitions;

use control_panel::{
    preset_button_click_system, preset_button_highlight_system, preset_button_hover_system,
    spawn_control_panel,
};
use loading_screen::{
    finish_loading_screen, spawn_loading_screen, start_loading_fade, update_loading_bar,
};
use transitions::{TweenCompleted, advance_tweens, apply_opacity, apply_slide_offsets};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TweenCompleted>()
            .add_systems(Startup, (spawn_loading_screen, spawn_control_panel))
            .add_systems(
                OnEnter(AppState::Running),
                (update_loading_bar, start_loading_fade),
            )
            .add_systems(
                Update,
                update_loading_bar
                    .after(loading_progress_system)
                    .run_if(in_state(AppState::Loading)),
            )
            .add_systems(
                Update,
                (
                    preset_button_click_system,
                    preset_button_hover_system,
                    preset_button_highlight_system,
                )
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(
                Update,
                (
                    advance_tweens,
                    finish_loading_screen,
                    apply_slide_offsets,
                    apply_opacity,
                )
                    .chain(),
            );
    }
}
