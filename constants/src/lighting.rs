/// Light and background values applied by one time-of-day preset.
pub struct LightingInfo {
    pub name: &'static str,
    pub sun_color: u32,
    pub sun_intensity: f32,
    pub ambient_intensity: f32,
    pub background: u32,
}

pub const LIGHTING_MAP: &[LightingInfo] = &[
    LightingInfo {
        name: "day",
        sun_color: 0xffffff,
        sun_intensity: 1.0,
        ambient_intensity: 0.4,
        background: 0x1a1d29,
    },
    LightingInfo {
        name: "sunset",
        sun_color: 0xff6b35,
        sun_intensity: 0.7,
        ambient_intensity: 0.3,
        background: 0x2c1810,
    },
    LightingInfo {
        name: "night",
        sun_color: 0x4169e1,
        sun_intensity: 0.2,
        ambient_intensity: 0.1,
        background: 0x0a0a0a,
    },
];

/// Secondary light from the opposite side, untouched by presets.
pub const FILL_LIGHT_COLOR: u32 = 0x87ceeb;
pub const FILL_LIGHT_INTENSITY: f32 = 0.3;

pub const FOG_COLOR: u32 = 0x1a1d29;
pub const FOG_START: f32 = 50.0;
pub const FOG_END: f32 = 200.0;

/// Lux per unit of preset intensity for directional lights.
pub const DIRECTIONAL_LUX_PER_UNIT: f32 = 10_000.0;

/// cd/m² per unit of preset intensity for the ambient light.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 750.0;

pub fn lighting_index(name: &str) -> Option<usize> {
    LIGHTING_MAP.iter().position(|l| l.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_is_darker_than_day() {
        let day = &LIGHTING_MAP[lighting_index("day").unwrap()];
        let night = &LIGHTING_MAP[lighting_index("Night").unwrap()];
        assert!(night.sun_intensity < day.sun_intensity);
        assert!(night.ambient_intensity < day.ambient_intensity);
        assert_eq!(night.background, 0x0a0a0a);
    }

    #[test]
    fn unknown_preset_is_absent() {
        assert!(lighting_index("dawn").is_none());
    }
}
