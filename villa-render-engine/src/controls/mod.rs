//! User controls: the preset selection state and its input sources.

use bevy::prelude::*;

/// Selection state, control requests and the handler that applies them.
pub mod selection;

/// Native keyboard shortcuts for every control action.
pub mod shortcuts;

use selection::{ControlEvent, Selection, handle_control_events};
use shortcuts::handle_keyboard_shortcuts;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .add_event::<ControlEvent>()
            .add_systems(
                Update,
                (handle_keyboard_shortcuts, handle_control_events).chain(),
            );
    }
}
