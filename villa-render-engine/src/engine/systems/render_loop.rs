use bevy::prelude::*;

use crate::engine::interaction::controller::InteractionController;
use crate::engine::interaction::rotation::RotationState;
use crate::engine::scene::villa::VillaRoot;

/// Per-frame model rotation: ease toward the target, apply to the villa
/// root, then let auto-rotation drift the target unless a drag is active.
pub fn villa_rotation_system(
    mut rotation: ResMut<RotationState>,
    controller: Res<InteractionController>,
    mut villa_query: Query<&mut Transform, With<VillaRoot>>,
) {
    let orientation = rotation.step(controller.auto_rotate_active());

    for mut transform in &mut villa_query {
        transform.rotation = orientation;
    }
}
