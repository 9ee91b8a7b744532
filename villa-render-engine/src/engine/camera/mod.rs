//! Viewer camera: a look-at-origin rig with clamped wheel zoom and tweened
//! flights between the fixed view presets.

/// Camera rig resource, view presets and the camera sync system.
pub mod viewport_camera;
