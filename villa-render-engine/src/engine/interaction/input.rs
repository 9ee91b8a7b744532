use bevy::input::mouse::MouseWheel;
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::controller::InteractionController;
use super::rotation::RotationState;
use crate::engine::camera::viewport_camera::{CameraRig, ZoomDirection};

/// Map one wheel event to a zoom notch. Scrolling up (away from the user)
/// zooms in; horizontal-only events are ignored.
pub fn wheel_direction(event: &MouseWheel) -> Option<ZoomDirection> {
    if event.y > 0.0 {
        Some(ZoomDirection::In)
    } else if event.y < 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}

/// Feed mouse, touch and wheel input into the rotation targets and camera rig.
pub fn pointer_input_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    ui_buttons: Query<&Interaction, With<Button>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut touch_events: EventReader<TouchInput>,
    mut wheel_events: EventReader<MouseWheel>,
    mut controller: ResMut<InteractionController>,
    mut rotation: ResMut<RotationState>,
    mut rig: ResMut<CameraRig>,
) {
    let over_ui = ui_buttons
        .iter()
        .any(|interaction| *interaction != Interaction::None);

    if mouse_button.just_pressed(MouseButton::Left) && !over_ui {
        let cursor = windows
            .single()
            .ok()
            .and_then(|window| window.cursor_position());
        if let Some(position) = cursor {
            controller.pointer_down(position);
        }
    }

    for cursor in cursor_moved.read() {
        if let Some(delta) = controller.pointer_move(cursor.position) {
            rotation.add_drag(delta);
        }
    }

    if mouse_button.just_released(MouseButton::Left) {
        controller.pointer_up();
    }

    for touch in touch_events.read() {
        match touch.phase {
            TouchPhase::Started if !over_ui => controller.touch_start(touch.id, touch.position),
            TouchPhase::Started => {}
            TouchPhase::Moved => {
                if let Some(delta) = controller.touch_move(touch.id, touch.position) {
                    rotation.add_drag(delta);
                }
            }
            TouchPhase::Ended | TouchPhase::Canceled => controller.touch_end(touch.id),
        }
    }

    for wheel in wheel_events.read() {
        if let Some(direction) = wheel_direction(wheel) {
            rig.zoom(direction);
            debug!("Camera distance {:.2}", rig.distance());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::mouse::MouseScrollUnit;

    fn wheel(y: f32) -> MouseWheel {
        MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y,
            window: Entity::PLACEHOLDER,
        }
    }

    #[test]
    fn wheel_up_zooms_in_and_down_zooms_out() {
        assert_eq!(wheel_direction(&wheel(1.0)), Some(ZoomDirection::In));
        assert_eq!(wheel_direction(&wheel(-120.0)), Some(ZoomDirection::Out));
        assert_eq!(wheel_direction(&wheel(0.0)), None);
    }

    fn input_world() -> (World, Schedule) {
        let mut world = World::new();
        world.init_resource::<Events<CursorMoved>>();
        world.init_resource::<Events<TouchInput>>();
        world.init_resource::<Events<MouseWheel>>();
        world.init_resource::<ButtonInput<MouseButton>>();
        world.init_resource::<InteractionController>();
        world.init_resource::<RotationState>();
        world.init_resource::<CameraRig>();

        let mut schedule = Schedule::default();
        schedule.add_systems(pointer_input_system);
        (world, schedule)
    }

    fn spawn_window(world: &mut World, cursor: Vec2) -> Entity {
        let mut window = Window::default();
        window.set_cursor_position(Some(cursor));
        world.spawn((window, PrimaryWindow)).id()
    }

    fn cursor_moved(window: Entity, position: Vec2) -> CursorMoved {
        CursorMoved {
            window,
            position,
            delta: None,
        }
    }

    fn touch(phase: TouchPhase, id: u64, position: Vec2) -> TouchInput {
        TouchInput {
            phase,
            position,
            window: Entity::PLACEHOLDER,
            force: None,
            id,
        }
    }

    #[test]
    fn wheel_events_keep_camera_in_band() {
        let (mut world, mut schedule) = input_world();

        for _ in 0..40 {
            world.send_event(wheel(-1.0));
        }
        schedule.run(&mut world);
        let distance = world.resource::<CameraRig>().distance();
        assert!((distance - 50.0).abs() < 1e-4);

        for _ in 0..40 {
            world.send_event(wheel(1.0));
        }
        schedule.run(&mut world);
        let distance = world.resource::<CameraRig>().distance();
        assert!((distance - 5.0).abs() < 1e-4);
    }

    #[test]
    fn press_over_a_button_does_not_drag() {
        let (mut world, mut schedule) = input_world();
        let window = spawn_window(&mut world, Vec2::new(100.0, 100.0));
        world.spawn((Button, Interaction::Hovered));

        world
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        world.send_event(cursor_moved(window, Vec2::new(160.0, 140.0)));
        schedule.run(&mut world);

        let rotation = *world.resource::<RotationState>();
        assert_eq!(rotation.target_x, 0.0);
        assert_eq!(rotation.target_y, 0.0);
        assert!(!world.resource::<InteractionController>().is_dragging());
    }

    #[test]
    fn mouse_drag_turns_targets_until_release() {
        let (mut world, mut schedule) = input_world();
        let window = spawn_window(&mut world, Vec2::new(100.0, 100.0));

        world
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        world.send_event(cursor_moved(window, Vec2::new(130.0, 80.0)));
        schedule.run(&mut world);

        assert!(world.resource::<InteractionController>().is_dragging());
        let rotation = *world.resource::<RotationState>();
        assert!((rotation.target_y - 0.3).abs() < 1e-6);
        assert!((rotation.target_x + 0.2).abs() < 1e-6);

        {
            let mut buttons = world.resource_mut::<ButtonInput<MouseButton>>();
            buttons.clear();
            buttons.release(MouseButton::Left);
        }
        schedule.run(&mut world);
        assert!(!world.resource::<InteractionController>().is_dragging());

        world.resource_mut::<ButtonInput<MouseButton>>().clear();
        world.send_event(cursor_moved(window, Vec2::new(300.0, 300.0)));
        schedule.run(&mut world);
        assert_eq!(*world.resource::<RotationState>(), rotation);
    }

    #[test]
    fn first_touch_drives_rotation() {
        let (mut world, mut schedule) = input_world();

        world.send_event(touch(TouchPhase::Started, 1, Vec2::ZERO));
        world.send_event(touch(TouchPhase::Started, 2, Vec2::new(50.0, 50.0)));
        world.send_event(touch(TouchPhase::Moved, 2, Vec2::new(90.0, 90.0)));
        world.send_event(touch(TouchPhase::Moved, 1, Vec2::new(20.0, 0.0)));
        schedule.run(&mut world);

        let rotation = *world.resource::<RotationState>();
        assert!((rotation.target_y - 0.2).abs() < 1e-6);
        assert_eq!(rotation.target_x, 0.0);

        world.send_event(touch(TouchPhase::Ended, 2, Vec2::new(90.0, 90.0)));
        schedule.run(&mut world);
        assert!(world.resource::<InteractionController>().is_dragging());

        world.send_event(touch(TouchPhase::Ended, 1, Vec2::new(20.0, 0.0)));
        schedule.run(&mut world);
        assert!(!world.resource::<InteractionController>().is_dragging());
    }
}
