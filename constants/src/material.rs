/// Shading parameters for one named material preset.
pub struct MaterialInfo {
    pub name: &'static str,
    /// sRGB colour as 0xRRGGBB.
    pub base_color: u32,
    pub roughness: f32,
    pub metalness: f32,
    pub transmission: Option<f32>,
    pub thickness: Option<f32>,
    pub opacity: Option<f32>,
}

pub const MATERIAL_MAP: &[MaterialInfo] = &[
    MaterialInfo {
        name: "concrete",
        base_color: 0xcccccc,
        roughness: 0.8,
        metalness: 0.1,
        transmission: None,
        thickness: None,
        opacity: None,
    },
    MaterialInfo {
        name: "stone",
        base_color: 0x8b7355,
        roughness: 0.9,
        metalness: 0.0,
        transmission: None,
        thickness: None,
        opacity: None,
    },
    MaterialInfo {
        name: "wood",
        base_color: 0x8b4513,
        roughness: 0.7,
        metalness: 0.0,
        transmission: None,
        thickness: None,
        opacity: None,
    },
    MaterialInfo {
        name: "glass",
        base_color: 0x87ceeb,
        roughness: 0.0,
        metalness: 0.1,
        transmission: Some(0.9),
        thickness: Some(0.5),
        opacity: Some(0.3),
    },
    MaterialInfo {
        name: "metal",
        base_color: 0x2c3e50,
        roughness: 0.3,
        metalness: 0.8,
        transmission: None,
        thickness: None,
        opacity: None,
    },
    MaterialInfo {
        name: "tiles",
        base_color: 0x8b0000,
        roughness: 0.7,
        metalness: 0.1,
        transmission: None,
        thickness: None,
        opacity: None,
    },
];

/// Fixed colours of the villa parts that never change material.
pub const FOUNDATION_COLOR: u32 = 0x666666;
pub const TRIM_COLOR: u32 = 0x333333;
pub const ROOF_DECORATION_COLOR: u32 = 0xd4af37;
pub const DOOR_COLOR: u32 = 0x8b4513;
pub const COLUMN_COLOR: u32 = 0xffffff;

/// Position of a preset in `MATERIAL_MAP`, matched case-insensitively.
pub fn material_index(name: &str) -> Option<usize> {
    MATERIAL_MAP.iter().position(|m| m.name.eq_ignore_ascii_case(name))
}

/// Split 0xRRGGBB into its three channel bytes.
pub const fn hex_channels(hex: u32) -> [u8; 3] {
    [
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let glass = &MATERIAL_MAP[material_index("GLASS").unwrap()];
        assert_eq!(glass.base_color, 0x87ceeb);
        assert_eq!(glass.opacity, Some(0.3));
        assert!(material_index("marble").is_none());
    }

    #[test]
    fn preset_names_are_unique() {
        for (i, a) in MATERIAL_MAP.iter().enumerate() {
            for b in &MATERIAL_MAP[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn hex_splits_into_channels() {
        assert_eq!(hex_channels(0xd4af37), [0xd4, 0xaf, 0x37]);
        assert_eq!(hex_channels(0x000000), [0, 0, 0]);
    }
}
