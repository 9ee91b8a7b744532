use std::fmt;
use std::str::FromStr;

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::math::curve::{Curve, EaseFunction, EasingCurve};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use constants::camera::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, INITIAL_CAMERA_POSITION, MAX_CAMERA_DISTANCE,
    MIN_CAMERA_DISTANCE, VIEW_FRONT, VIEW_ISO, VIEW_SIDE, VIEW_TOP, VIEW_TRANSITION_SECS,
    ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
use constants::lighting::{FOG_COLOR, FOG_END, FOG_START};
use serde::Serialize;

use crate::engine::assets::materials::hex_color;
use crate::error::UnknownPreset;

/// Discrete camera positions reachable from the view buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPreset {
    Front,
    Side,
    Top,
    #[default]
    Iso,
}

impl ViewPreset {
    pub const ALL: [Self; 4] = [Self::Front, Self::Side, Self::Top, Self::Iso];

    pub fn position(self) -> Vec3 {
        match self {
            Self::Front => VIEW_FRONT,
            Self::Side => VIEW_SIDE,
            Self::Top => VIEW_TOP,
            Self::Iso => VIEW_ISO,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Side => "side",
            Self::Top => "top",
            Self::Iso => "iso",
        }
    }
}

impl fmt::Display for ViewPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPreset::new("view", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    pub fn factor(self) -> f32 {
        match self {
            Self::In => ZOOM_IN_FACTOR,
            Self::Out => ZOOM_OUT_FACTOR,
        }
    }
}

/// Keep a camera position inside the allowed distance band around the origin.
pub fn clamp_distance(position: Vec3) -> Vec3 {
    position.clamp_length(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE)
}

struct CameraFlight {
    path: EasingCurve<Vec3>,
    elapsed: f32,
    duration: f32,
}

/// Marker for the single scene camera.
#[derive(Component)]
pub struct ViewerCamera;

/// Camera pose. The camera always looks at the origin, so the position is the
/// whole pose.
#[derive(Resource)]
pub struct CameraRig {
    position: Vec3,
    flight: Option<CameraFlight>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(INITIAL_CAMERA_POSITION)
    }
}

impl CameraRig {
    pub fn new(position: Vec3) -> Self {
        Self {
            position: clamp_distance(position),
            flight: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn distance(&self) -> f32 {
        self.position.length()
    }

    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// Scale the distance to the origin by one wheel notch, then clamp.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        self.position = clamp_distance(self.position * direction.factor());
    }

    /// Start a flight to a view preset. Replaces any flight in progress,
    /// starting from wherever the camera currently is.
    pub fn fly_to(&mut self, view: ViewPreset) {
        self.flight = Some(CameraFlight {
            path: EasingCurve::new(self.position, view.position(), EaseFunction::QuadraticInOut),
            elapsed: 0.0,
            duration: VIEW_TRANSITION_SECS,
        });
    }

    /// Place the camera at a view preset immediately.
    pub fn jump_to(&mut self, view: ViewPreset) {
        self.flight = None;
        self.position = clamp_distance(view.position());
    }

    /// Advance an in-flight transition by `delta_secs`.
    pub fn advance(&mut self, delta_secs: f32) {
        let Some(flight) = self.flight.as_mut() else {
            return;
        };

        flight.elapsed += delta_secs;
        let t = (flight.elapsed / flight.duration).min(1.0);
        self.position = clamp_distance(flight.path.sample_clamped(t));

        if t >= 1.0 {
            self.flight = None;
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

pub fn spawn_camera(commands: &mut Commands, rig: &CameraRig) {
    commands.spawn((
        Name::new("Viewer camera"),
        ViewerCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        DistanceFog {
            color: hex_color(FOG_COLOR),
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
        rig.transform(),
    ));
}

pub fn camera_rig_system(
    time: Res<Time>,
    mut rig: ResMut<CameraRig>,
    mut camera_query: Query<&mut Transform, With<ViewerCamera>>,
) {
    if rig.is_flying() {
        rig.advance(time.delta_secs());
    }

    if !rig.is_changed() {
        return;
    }

    for mut transform in &mut camera_query {
        *transform = rig.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig_at_distance(distance: f32) -> CameraRig {
        CameraRig::new(Vec3::new(0.0, 0.0, distance))
    }

    #[test]
    fn zoom_in_scales_by_point_nine() {
        let mut rig = rig_at_distance(21.2);
        rig.zoom(ZoomDirection::In);
        assert!((rig.distance() - 19.08).abs() < 1e-4);
    }

    #[test]
    fn zoom_out_scales_by_one_point_one() {
        let mut rig = rig_at_distance(20.0);
        rig.zoom(ZoomDirection::Out);
        assert!((rig.distance() - 22.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_never_leaves_distance_band() {
        let mut rig = CameraRig::default();
        for _ in 0..100 {
            rig.zoom(ZoomDirection::In);
            assert!(rig.distance() >= MIN_CAMERA_DISTANCE - 1e-4);
        }
        assert!((rig.distance() - MIN_CAMERA_DISTANCE).abs() < 1e-4);

        for _ in 0..100 {
            rig.zoom(ZoomDirection::Out);
            assert!(rig.distance() <= MAX_CAMERA_DISTANCE + 1e-4);
        }
        assert!((rig.distance() - MAX_CAMERA_DISTANCE).abs() < 1e-4);
    }

    #[test]
    fn zoom_keeps_direction() {
        let mut rig = CameraRig::default();
        let before = rig.position().normalize();
        rig.zoom(ZoomDirection::Out);
        assert!(rig.position().normalize().abs_diff_eq(before, 1e-5));
    }

    #[test]
    fn flight_reaches_target_after_duration() {
        let mut rig = CameraRig::default();
        rig.fly_to(ViewPreset::Front);
        assert!(rig.is_flying());

        for _ in 0..60 {
            rig.advance(VIEW_TRANSITION_SECS / 60.0);
        }
        rig.advance(0.01);

        assert!(!rig.is_flying());
        assert!(rig.position().abs_diff_eq(VIEW_FRONT, 1e-4));
    }

    #[test]
    fn flight_midpoint_is_halfway_for_symmetric_easing() {
        let mut rig = CameraRig::new(VIEW_FRONT);
        rig.fly_to(ViewPreset::Side);
        rig.advance(VIEW_TRANSITION_SECS * 0.5);
        let expected = VIEW_FRONT.lerp(VIEW_SIDE, 0.5);
        assert!(rig.position().abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn new_flight_overwrites_in_flight_one() {
        let mut rig = CameraRig::default();
        rig.fly_to(ViewPreset::Front);
        rig.advance(VIEW_TRANSITION_SECS * 0.3);
        let mid = rig.position();

        rig.fly_to(ViewPreset::Top);
        rig.advance(0.0);
        assert!(rig.position().abs_diff_eq(mid, 1e-4));

        rig.advance(VIEW_TRANSITION_SECS);
        assert!(rig.position().abs_diff_eq(VIEW_TOP, 1e-4));
    }

    #[test]
    fn view_preset_names_round_trip_through_parse() {
        for view in ViewPreset::ALL {
            assert_eq!(view.name().parse::<ViewPreset>(), Ok(view));
        }
        assert!("bird".parse::<ViewPreset>().is_err());
    }
}
