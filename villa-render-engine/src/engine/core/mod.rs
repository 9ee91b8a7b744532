//! Core application setup and state management.
//!
//! Handles the application lifecycle, window configuration and the
//! loading-to-running transition for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the scene, controls, UI and RPC plugins plus
/// platform-specific systems.
pub mod app_setup;

/// Application state machine and the transition out of loading.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
