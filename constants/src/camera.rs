use bevy::math::Vec3;

/// Initial camera position, identical to the iso view.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(15.0, 10.0, 15.0);

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera distance from the origin is always kept inside this range.
pub const MIN_CAMERA_DISTANCE: f32 = 5.0;
pub const MAX_CAMERA_DISTANCE: f32 = 50.0;

pub const ZOOM_OUT_FACTOR: f32 = 1.1;
pub const ZOOM_IN_FACTOR: f32 = 0.9;

pub const VIEW_FRONT: Vec3 = Vec3::new(0.0, 8.0, 20.0);
pub const VIEW_SIDE: Vec3 = Vec3::new(20.0, 8.0, 0.0);
pub const VIEW_TOP: Vec3 = Vec3::new(0.0, 25.0, 0.0);
pub const VIEW_ISO: Vec3 = Vec3::new(15.0, 10.0, 15.0);

/// Duration of a view-preset camera flight in seconds.
pub const VIEW_TRANSITION_SECS: f32 = 1.0;
