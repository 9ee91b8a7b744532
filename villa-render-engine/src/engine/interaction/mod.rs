//! User input: pointer/touch drags rotate the model, wheel notches zoom.

/// Pointer and touch drag tracking.
pub mod controller;

/// Bevy input systems feeding the controller, rotation and camera rig.
pub mod input;

/// Eased model rotation with optional auto-rotation drift.
pub mod rotation;
