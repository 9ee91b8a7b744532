use std::fmt;
use std::str::FromStr;

use bevy::pbr::CascadeShadowConfigBuilder;
use bevy::prelude::*;
use constants::lighting::{
    AMBIENT_BRIGHTNESS_PER_UNIT, DIRECTIONAL_LUX_PER_UNIT, FILL_LIGHT_COLOR,
    FILL_LIGHT_INTENSITY, LIGHTING_MAP, LightingInfo, lighting_index,
};
use serde::Serialize;

use crate::controls::selection::Selection;
use crate::engine::assets::materials::hex_color;
use crate::error::UnknownPreset;

/// Time-of-day preset. Discriminants index `LIGHTING_MAP`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Day = 0,
    Sunset = 1,
    Night = 2,
}

impl TimeOfDay {
    pub const ALL: [Self; 3] = [Self::Day, Self::Sunset, Self::Night];

    pub fn info(self) -> &'static LightingInfo {
        &LIGHTING_MAP[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeOfDay {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lighting_index(s.trim())
            .map(|index| Self::ALL[index])
            .ok_or_else(|| UnknownPreset::new("time of day", s))
    }
}

/// Main directional light driven by the time-of-day preset.
#[derive(Component)]
pub struct SunLight;

pub fn spawn_lighting(commands: &mut Commands) {
    let day = TimeOfDay::Day.info();

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: day.ambient_intensity * AMBIENT_BRIGHTNESS_PER_UNIT,
        ..default()
    });
    commands.insert_resource(ClearColor(hex_color(day.background)));

    commands.spawn((
        Name::new("Sun"),
        SunLight,
        DirectionalLight {
            color: hex_color(day.sun_color),
            illuminance: day.sun_intensity * DIRECTIONAL_LUX_PER_UNIT,
            shadows_enabled: true,
            ..default()
        },
        CascadeShadowConfigBuilder {
            maximum_distance: 100.0,
            ..default()
        }
        .build(),
        Transform::from_xyz(20.0, 30.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Name::new("Fill light"),
        DirectionalLight {
            color: hex_color(FILL_LIGHT_COLOR),
            illuminance: FILL_LIGHT_INTENSITY * DIRECTIONAL_LUX_PER_UNIT,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, 20.0, -10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Overwrite sun, ambient and background with one preset. Applying the same
/// preset again writes identical values.
pub fn apply_lighting_preset(
    info: &LightingInfo,
    sun: &mut DirectionalLight,
    ambient: &mut AmbientLight,
    clear_color: &mut ClearColor,
) {
    sun.color = hex_color(info.sun_color);
    sun.illuminance = info.sun_intensity * DIRECTIONAL_LUX_PER_UNIT;
    ambient.brightness = info.ambient_intensity * AMBIENT_BRIGHTNESS_PER_UNIT;
    clear_color.0 = hex_color(info.background);
}

pub fn lighting_preset_system(
    selection: Res<Selection>,
    mut sun_query: Query<&mut DirectionalLight, With<SunLight>>,
    mut ambient: ResMut<AmbientLight>,
    mut clear_color: ResMut<ClearColor>,
) {
    if !selection.is_changed() {
        return;
    }

    let info = selection.time_of_day.info();
    for mut sun in &mut sun_query {
        apply_lighting_preset(info, &mut sun, &mut ambient, &mut clear_color);
    }
    debug!("Lighting preset applied: {}", info.name);
}
