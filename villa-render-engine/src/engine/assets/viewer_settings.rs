use std::fmt::Display;
use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use crate::controls::selection::Selection;
use crate::engine::assets::materials::MaterialKind;
use crate::engine::camera::viewport_camera::ViewPreset;
use crate::engine::scene::lighting::TimeOfDay;

/// Startup preferences loaded from `assets/villa_settings.json`. Missing
/// fields take their defaults; an unknown preset name fails the whole load.
/// Preset names match case-insensitively, as they do over RPC.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    #[serde(deserialize_with = "preset_name")]
    pub wall_material: MaterialKind,
    #[serde(deserialize_with = "preset_name")]
    pub roof_material: MaterialKind,
    #[serde(deserialize_with = "preset_name")]
    pub time_of_day: TimeOfDay,
    pub auto_rotate: bool,
    #[serde(deserialize_with = "preset_name")]
    pub view: ViewPreset,
}

fn preset_name<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    String::deserialize(deserializer)?
        .parse()
        .map_err(serde::de::Error::custom)
}

impl Default for ViewerSettings {
    fn default() -> Self {
        let selection = Selection::default();
        Self {
            wall_material: selection.wall_material,
            roof_material: selection.roof_material,
            time_of_day: selection.time_of_day,
            auto_rotate: true,
            view: ViewPreset::default(),
        }
    }
}

impl ViewerSettings {
    pub fn selection(&self) -> Selection {
        Selection {
            wall_material: self.wall_material,
            roof_material: self.roof_material,
            time_of_day: self.time_of_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_settings_parse() {
        let json = include_str!("../../../assets/villa_settings.json");
        let settings: ViewerSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings, ViewerSettings::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: ViewerSettings =
            serde_json::from_str(r#"{ "time_of_day": "night", "auto_rotate": false }"#).unwrap();
        assert_eq!(settings.time_of_day, TimeOfDay::Night);
        assert!(!settings.auto_rotate);
        assert_eq!(settings.wall_material, MaterialKind::Concrete);
        assert_eq!(settings.view, ViewPreset::Iso);
    }

    #[test]
    fn unknown_preset_rejects_file() {
        assert!(serde_json::from_str::<ViewerSettings>(r#"{ "roof_material": "straw" }"#).is_err());
    }

    #[test]
    fn preset_names_ignore_case() {
        let settings: ViewerSettings = serde_json::from_str(
            r#"{ "wall_material": "Stone", "roof_material": "TILES", "time_of_day": "Sunset", "view": "Top" }"#,
        )
        .unwrap();
        assert_eq!(settings.wall_material, MaterialKind::Stone);
        assert_eq!(settings.roof_material, MaterialKind::Tiles);
        assert_eq!(settings.time_of_day, TimeOfDay::Sunset);
        assert_eq!(settings.view, ViewPreset::Top);
    }
}
