//! Material presets and runtime viewer settings.
//!
//! Material presets are built once at startup from the fixed tables in the
//! `constants` crate. Viewer settings are read from a JSON asset.

/// Material preset names, their PBR parameters and the handle registry.
pub mod materials;

/// Startup settings asset (initial presets, auto-rotate, initial view).
pub mod viewer_settings;
