/// Startup preferences, relative to the asset root.
pub const SETTINGS_ASSET_PATH: &str = "villa_settings.json";
