use bevy::prelude::*;

use super::selection::{ControlEvent, ControlRequest, ControlSource};
use crate::engine::assets::materials::MaterialKind;
use crate::engine::camera::viewport_camera::ViewPreset;
use crate::engine::scene::lighting::TimeOfDay;

/// Keyboard bindings for every control-panel action.
pub const SHORTCUTS: &[(KeyCode, ControlRequest)] = &[
    (KeyCode::Digit1, ControlRequest::WallMaterial(MaterialKind::Concrete)),
    (KeyCode::Digit2, ControlRequest::WallMaterial(MaterialKind::Stone)),
    (KeyCode::Digit3, ControlRequest::WallMaterial(MaterialKind::Wood)),
    (KeyCode::Digit4, ControlRequest::WallMaterial(MaterialKind::Glass)),
    (KeyCode::Digit5, ControlRequest::RoofMaterial(MaterialKind::Metal)),
    (KeyCode::Digit6, ControlRequest::RoofMaterial(MaterialKind::Tiles)),
    (KeyCode::KeyJ, ControlRequest::TimeOfDay(TimeOfDay::Day)),
    (KeyCode::KeyK, ControlRequest::TimeOfDay(TimeOfDay::Sunset)),
    (KeyCode::KeyL, ControlRequest::TimeOfDay(TimeOfDay::Night)),
    (KeyCode::KeyZ, ControlRequest::View(ViewPreset::Front)),
    (KeyCode::KeyX, ControlRequest::View(ViewPreset::Side)),
    (KeyCode::KeyC, ControlRequest::View(ViewPreset::Top)),
    (KeyCode::KeyV, ControlRequest::View(ViewPreset::Iso)),
    (KeyCode::Space, ControlRequest::ToggleAutoRotate),
];

/// Native builds only; on wasm the host page drives controls over RPC.
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut control_events: EventWriter<ControlEvent>,
) {
    for &(key, request) in SHORTCUTS {
        if keyboard.just_pressed(key) {
            control_events.write(ControlEvent {
                request,
                source: ControlSource::Keyboard,
            });
        }
    }
}

/// No keyboard shortcuts in WASM builds.
#[cfg(target_arch = "wasm32")]
pub fn handle_keyboard_shortcuts() {}
