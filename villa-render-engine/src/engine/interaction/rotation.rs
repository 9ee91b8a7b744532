use bevy::prelude::*;
use constants::render_settings::{AUTO_ROTATE_STEP, DRAG_SENSITIVITY, ROTATION_EASING};

/// Model rotation in radians. `current_*` chases `target_*` a fixed fraction
/// per frame; input and auto-rotation only ever move the targets.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub current_x: f32,
    pub current_y: f32,
    pub target_x: f32,
    pub target_y: f32,
}

impl RotationState {
    /// Accumulate a pointer delta (pixels). Horizontal travel turns around Y,
    /// vertical travel around X. Unclamped.
    pub fn add_drag(&mut self, delta: Vec2) {
        self.target_y += delta.x * DRAG_SENSITIVITY;
        self.target_x += delta.y * DRAG_SENSITIVITY;
    }

    pub fn ease(&mut self) {
        self.current_x += (self.target_x - self.current_x) * ROTATION_EASING;
        self.current_y += (self.target_y - self.current_y) * ROTATION_EASING;
    }

    pub fn advance_auto_rotate(&mut self) {
        self.target_y += AUTO_ROTATE_STEP;
    }

    /// One render-loop frame: ease, sample the orientation to apply, then
    /// drift the target if auto-rotation is active.
    pub fn step(&mut self, auto_rotate: bool) -> Quat {
        self.ease();
        let orientation = self.orientation();
        if auto_rotate {
            self.advance_auto_rotate();
        }
        orientation
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.current_x, self.current_y, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_frames_converge_monotonically() {
        let mut rotation = RotationState {
            target_x: -0.4,
            target_y: 1.2,
            ..default()
        };

        let mut last_gap = (rotation.current_y - rotation.target_y).abs();
        for _ in 0..200 {
            rotation.step(false);
            let gap = (rotation.current_y - rotation.target_y).abs();
            assert!(gap < last_gap, "gap grew from {last_gap} to {gap}");
            last_gap = gap;
        }
        assert!(last_gap < 1e-3);
    }

    #[test]
    fn each_frame_closes_five_percent() {
        let mut rotation = RotationState {
            target_y: 1.0,
            ..default()
        };
        rotation.ease();
        assert!((rotation.current_y - 0.05).abs() < 1e-6);
        rotation.ease();
        assert!((rotation.current_y - (0.05 + 0.95 * 0.05)).abs() < 1e-6);
    }

    #[test]
    fn auto_rotate_drifts_target_by_fixed_step() {
        let mut rotation = RotationState::default();
        for _ in 0..10 {
            let before = rotation.target_y;
            rotation.step(true);
            assert!((rotation.target_y - before - AUTO_ROTATE_STEP).abs() < 1e-6);
        }
    }

    #[test]
    fn no_drift_when_auto_rotate_inactive() {
        let mut rotation = RotationState::default();
        for _ in 0..10 {
            rotation.step(false);
        }
        assert_eq!(rotation.target_y, 0.0);
    }

    #[test]
    fn drag_maps_axes() {
        let mut rotation = RotationState::default();
        rotation.add_drag(Vec2::new(30.0, -10.0));
        assert!((rotation.target_y - 0.3).abs() < 1e-6);
        assert!((rotation.target_x + 0.1).abs() < 1e-6);
    }

    #[test]
    fn orientation_uses_current_not_target() {
        let rotation = RotationState {
            target_y: 2.0,
            ..default()
        };
        assert!(rotation.orientation().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }
}
