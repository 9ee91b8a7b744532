//! Fixed preset tables and tuning constants shared by the villa viewer.

pub mod camera;
pub mod lighting;
pub mod material;
pub mod path;
pub mod render_settings;
