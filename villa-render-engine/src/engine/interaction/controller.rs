use bevy::prelude::*;

/// Pointer and touch state. Deltas are only produced between a press and the
/// matching release; stray moves are dropped.
#[derive(Resource, Debug, Clone)]
pub struct InteractionController {
    dragging: bool,
    last_pointer: Vec2,
    active_touch: Option<u64>,
    pub auto_rotate: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self {
            dragging: false,
            last_pointer: Vec2::ZERO,
            active_touch: None,
            auto_rotate: true,
        }
    }
}

impl InteractionController {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Auto-rotation pauses while the user holds the model.
    pub fn auto_rotate_active(&self) -> bool {
        self.auto_rotate && !self.is_dragging()
    }

    pub fn pointer_down(&mut self, position: Vec2) {
        self.dragging = true;
        self.last_pointer = position;
    }

    /// Delta since the previous pointer event, or `None` when not dragging.
    pub fn pointer_move(&mut self, position: Vec2) -> Option<Vec2> {
        if !self.dragging {
            return None;
        }
        let delta = position - self.last_pointer;
        self.last_pointer = position;
        Some(delta)
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Only the first finger down drives rotation.
    pub fn touch_start(&mut self, id: u64, position: Vec2) {
        if self.active_touch.is_some() {
            return;
        }
        self.active_touch = Some(id);
        self.pointer_down(position);
    }

    pub fn touch_move(&mut self, id: u64, position: Vec2) -> Option<Vec2> {
        if self.active_touch != Some(id) {
            return None;
        }
        self.pointer_move(position)
    }

    pub fn touch_end(&mut self, id: u64) {
        if self.active_touch == Some(id) {
            self.active_touch = None;
            self.pointer_up();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_without_press_is_ignored() {
        let mut controller = InteractionController::default();
        assert_eq!(controller.pointer_move(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn deltas_are_relative_to_last_event() {
        let mut controller = InteractionController::default();
        controller.pointer_down(Vec2::new(100.0, 100.0));
        assert_eq!(
            controller.pointer_move(Vec2::new(110.0, 95.0)),
            Some(Vec2::new(10.0, -5.0))
        );
        assert_eq!(
            controller.pointer_move(Vec2::new(115.0, 95.0)),
            Some(Vec2::new(5.0, 0.0))
        );
        controller.pointer_up();
        assert_eq!(controller.pointer_move(Vec2::new(200.0, 200.0)), None);
    }

    #[test]
    fn drag_pauses_auto_rotate() {
        let mut controller = InteractionController::default();
        assert!(controller.auto_rotate_active());
        controller.pointer_down(Vec2::ZERO);
        assert!(!controller.auto_rotate_active());
        controller.pointer_up();
        assert!(controller.auto_rotate_active());
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut controller = InteractionController::default();
        controller.touch_start(1, Vec2::new(0.0, 0.0));
        controller.touch_start(2, Vec2::new(50.0, 50.0));
        assert_eq!(controller.touch_move(2, Vec2::new(60.0, 60.0)), None);
        assert_eq!(
            controller.touch_move(1, Vec2::new(4.0, 3.0)),
            Some(Vec2::new(4.0, 3.0))
        );

        controller.touch_end(2);
        assert!(controller.is_dragging());
        controller.touch_end(1);
        assert!(!controller.is_dragging());
    }
}
