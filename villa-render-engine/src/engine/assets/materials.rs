use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use constants::material::{MATERIAL_MAP, MaterialInfo, hex_channels, material_index};
use serde::Serialize;

use crate::error::UnknownPreset;

/// Named material preset. Discriminants index `MATERIAL_MAP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Concrete = 0,
    Stone = 1,
    Wood = 2,
    Glass = 3,
    Metal = 4,
    Tiles = 5,
}

impl MaterialKind {
    pub const ALL: [Self; 6] = [
        Self::Concrete,
        Self::Stone,
        Self::Wood,
        Self::Glass,
        Self::Metal,
        Self::Tiles,
    ];

    /// Presets offered in the wall group of the control panel.
    pub const WALL_CHOICES: [Self; 4] = [Self::Concrete, Self::Stone, Self::Wood, Self::Glass];

    /// Presets offered in the roof group of the control panel.
    pub const ROOF_CHOICES: [Self; 2] = [Self::Metal, Self::Tiles];

    pub fn info(self) -> &'static MaterialInfo {
        &MATERIAL_MAP[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaterialKind {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        material_index(s.trim())
            .map(|index| Self::ALL[index])
            .ok_or_else(|| UnknownPreset::new("material", s))
    }
}

/// Convert a 0xRRGGBB table colour to a Bevy sRGB colour.
pub fn hex_color(hex: u32) -> Color {
    let [r, g, b] = hex_channels(hex);
    Color::srgb_u8(r, g, b)
}

/// PBR material for a preset table entry. Presets with an opacity below one
/// are alpha blended.
pub fn preset_material(info: &MaterialInfo) -> StandardMaterial {
    let opacity = info.opacity.unwrap_or(1.0);
    StandardMaterial {
        base_color: hex_color(info.base_color).with_alpha(opacity),
        perceptual_roughness: info.roughness,
        metallic: info.metalness,
        specular_transmission: info.transmission.unwrap_or(0.0),
        thickness: info.thickness.unwrap_or(0.0),
        alpha_mode: if opacity < 1.0 {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        },
        ..default()
    }
}

/// Plain material for parts that never change preset (trim, door, columns).
pub fn solid_material(hex: u32) -> StandardMaterial {
    StandardMaterial {
        base_color: hex_color(hex),
        perceptual_roughness: 0.8,
        ..default()
    }
}

/// One shared material handle per preset, created at startup and never mutated.
#[derive(Resource)]
pub struct MaterialRegistry {
    handles: Vec<Handle<StandardMaterial>>,
}

impl MaterialRegistry {
    pub fn build(materials: &mut Assets<StandardMaterial>) -> Self {
        let handles = MaterialKind::ALL
            .iter()
            .map(|kind| materials.add(preset_material(kind.info())))
            .collect();
        Self { handles }
    }

    pub fn get(&self, kind: MaterialKind) -> Handle<StandardMaterial> {
        self.handles[kind as usize].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_match_table_order() {
        for kind in MaterialKind::ALL {
            assert_eq!(
                kind.name(),
                format!("{kind:?}").to_lowercase(),
                "table entry out of order for {kind:?}"
            );
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("tiles".parse::<MaterialKind>(), Ok(MaterialKind::Tiles));
        assert_eq!(" Stone ".parse::<MaterialKind>(), Ok(MaterialKind::Stone));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "marble".parse::<MaterialKind>().unwrap_err();
        assert_eq!(err.kind, "material");
        assert_eq!(err.name, "marble");
    }

    #[test]
    fn glass_is_translucent_and_concrete_is_opaque() {
        let glass = preset_material(MaterialKind::Glass.info());
        assert!(matches!(glass.alpha_mode, AlphaMode::Blend));
        assert!((glass.base_color.alpha() - 0.3).abs() < 1e-6);
        assert!((glass.specular_transmission - 0.9).abs() < 1e-6);

        let concrete = preset_material(MaterialKind::Concrete.info());
        assert!(matches!(concrete.alpha_mode, AlphaMode::Opaque));
        assert!((concrete.perceptual_roughness - 0.8).abs() < 1e-6);
    }

    #[test]
    fn registry_returns_distinct_handles() {
        let mut materials = Assets::<StandardMaterial>::default();
        let registry = MaterialRegistry::build(&mut materials);
        assert_eq!(materials.len(), MaterialKind::ALL.len());
        assert_ne!(
            registry.get(MaterialKind::Metal),
            registry.get(MaterialKind::Tiles)
        );
        let metal = materials.get(&registry.get(MaterialKind::Metal)).unwrap();
        assert!((metal.metallic - 0.8).abs() < 1e-6);
    }
}
