//! Startup loading: the simulated progress bar and the settings asset.
//!
//! The app leaves `AppState::Loading` once progress reaches 100% and the
//! settings file has either loaded or failed over to defaults.

/// Loading progress resource with randomised increments.
pub mod progress;

/// `ViewerSettings` asset loading and application to the live state.
pub mod settings_loader;
