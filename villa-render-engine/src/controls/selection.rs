use bevy::prelude::*;
use serde::Serialize;

use crate::engine::assets::materials::MaterialKind;
use crate::engine::camera::viewport_camera::{CameraRig, ViewPreset};
use crate::engine::interaction::controller::InteractionController;
use crate::engine::scene::lighting::TimeOfDay;
use crate::rpc::web_rpc::WebRpcInterface;

/// Current preset choices. Only `handle_control_events` and the settings
/// loader write it; rendering systems react to its change ticks.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub wall_material: MaterialKind,
    pub roof_material: MaterialKind,
    pub time_of_day: TimeOfDay,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            wall_material: MaterialKind::Concrete,
            roof_material: MaterialKind::Metal,
            time_of_day: TimeOfDay::Day,
        }
    }
}

impl Selection {
    /// Selection after applying `request`. Requests that are not preset
    /// choices leave it as is.
    pub fn with_request(mut self, request: ControlRequest) -> Self {
        match request {
            ControlRequest::WallMaterial(kind) => self.wall_material = kind,
            ControlRequest::RoofMaterial(kind) => self.roof_material = kind,
            ControlRequest::TimeOfDay(time) => self.time_of_day = time,
            ControlRequest::View(_)
            | ControlRequest::SetAutoRotate(_)
            | ControlRequest::ToggleAutoRotate => {}
        }
        self
    }

    /// Whether a control-panel button for `request` shows as active.
    pub fn is_active(&self, request: ControlRequest) -> bool {
        match request {
            ControlRequest::WallMaterial(kind) => self.wall_material == kind,
            ControlRequest::RoofMaterial(kind) => self.roof_material == kind,
            ControlRequest::TimeOfDay(time) => self.time_of_day == time,
            _ => false,
        }
    }
}

/// A user-level action, independent of where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest {
    WallMaterial(MaterialKind),
    RoofMaterial(MaterialKind),
    TimeOfDay(TimeOfDay),
    View(ViewPreset),
    SetAutoRotate(bool),
    ToggleAutoRotate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSource {
    Panel,
    Rpc,
    Keyboard,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ControlEvent {
    pub request: ControlRequest,
    pub source: ControlSource,
}

/// Payload of the `selection_changed` notification.
#[derive(Serialize)]
struct SelectionSnapshot {
    #[serde(flatten)]
    selection: Selection,
    auto_rotate: bool,
}

pub fn selection_snapshot(selection: &Selection, auto_rotate: bool) -> serde_json::Value {
    serde_json::to_value(SelectionSnapshot {
        selection: *selection,
        auto_rotate,
    })
    .unwrap_or_default()
}

pub fn handle_control_events(
    mut events: EventReader<ControlEvent>,
    mut selection: ResMut<Selection>,
    mut controller: ResMut<InteractionController>,
    mut rig: ResMut<CameraRig>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let mut changed = false;

    for event in events.read() {
        debug!("Control request {:?} from {:?}", event.request, event.source);

        match event.request {
            ControlRequest::View(view) => {
                info!("Camera flying to {} view", view);
                rig.fly_to(view);
            }
            ControlRequest::SetAutoRotate(enabled) => {
                changed |= controller.auto_rotate != enabled;
                controller.auto_rotate = enabled;
            }
            ControlRequest::ToggleAutoRotate => {
                controller.auto_rotate = !controller.auto_rotate;
                changed = true;
            }
            request => {
                let next = selection.with_request(request);
                changed |= selection.set_if_neq(next);
            }
        }
    }

    if changed {
        rpc_interface.send_notification(
            "selection_changed",
            selection_snapshot(&selection, controller.auto_rotate),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_requests(requests: &[ControlRequest]) -> World {
        let mut world = World::new();
        world.init_resource::<Events<ControlEvent>>();
        world.init_resource::<Selection>();
        world.init_resource::<InteractionController>();
        world.init_resource::<CameraRig>();
        world.init_resource::<WebRpcInterface>();

        for &request in requests {
            world.send_event(ControlEvent {
                request,
                source: ControlSource::Panel,
            });
        }

        let mut schedule = Schedule::default();
        schedule.add_systems(handle_control_events);
        schedule.run(&mut world);
        world
    }

    #[test]
    fn roof_changes_leave_wall_alone() {
        let world = run_requests(&[
            ControlRequest::WallMaterial(MaterialKind::Stone),
            ControlRequest::RoofMaterial(MaterialKind::Tiles),
            ControlRequest::RoofMaterial(MaterialKind::Metal),
        ]);
        let selection = world.resource::<Selection>();
        assert_eq!(selection.wall_material, MaterialKind::Stone);
        assert_eq!(selection.roof_material, MaterialKind::Metal);
    }

    #[test]
    fn view_request_starts_flight_without_touching_selection() {
        let world = run_requests(&[ControlRequest::View(ViewPreset::Top)]);
        assert!(world.resource::<CameraRig>().is_flying());
        assert_eq!(*world.resource::<Selection>(), Selection::default());
        assert_eq!(world.resource::<WebRpcInterface>().pending_notifications(), 0);
    }

    #[test]
    fn toggle_flips_auto_rotate_and_notifies() {
        let world = run_requests(&[ControlRequest::ToggleAutoRotate]);
        assert!(!world.resource::<InteractionController>().auto_rotate);
        assert_eq!(world.resource::<WebRpcInterface>().pending_notifications(), 1);
    }

    #[test]
    fn reselecting_current_preset_sends_nothing() {
        let world = run_requests(&[ControlRequest::TimeOfDay(TimeOfDay::Day)]);
        assert_eq!(world.resource::<WebRpcInterface>().pending_notifications(), 0);
    }

    #[test]
    fn active_state_is_exclusive_per_group() {
        let selection = Selection::default();
        let active_walls = MaterialKind::WALL_CHOICES
            .iter()
            .filter(|&&kind| selection.is_active(ControlRequest::WallMaterial(kind)))
            .count();
        assert_eq!(active_walls, 1);
        assert!(!selection.is_active(ControlRequest::View(ViewPreset::Iso)));
    }

    #[test]
    fn snapshot_flattens_selection() {
        let value = selection_snapshot(&Selection::default(), true);
        assert_eq!(value["wall_material"], "concrete");
        assert_eq!(value["roof_material"], "metal");
        assert_eq!(value["time_of_day"], "day");
        assert_eq!(value["auto_rotate"], true);
    }
}
