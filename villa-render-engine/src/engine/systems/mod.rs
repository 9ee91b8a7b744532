//! Runtime systems for the render loop and diagnostics.

/// FPS overlay on native builds and FPS notifications to the host page.
pub mod fps_tracking;

/// Per-frame eased model rotation and auto-rotate drift.
pub mod render_loop;
