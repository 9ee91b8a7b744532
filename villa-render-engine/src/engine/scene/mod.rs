//! Scene content: the villa part hierarchy, its lights and the decorative
//! particle field.

use bevy::prelude::*;

use crate::controls::selection::Selection;
use crate::engine::assets::materials::MaterialRegistry;

/// Time-of-day presets, sun/fill lights and background.
pub mod lighting;

/// Drifting point-cloud decoration.
pub mod particles;

/// Hand-authored villa part list and material assignment by surface.
pub mod villa;

use lighting::{lighting_preset_system, spawn_lighting};
use particles::{animate_particles, spawn_particles};
use villa::{spawn_villa, surface_material_system};

pub struct VillaScenePlugin;

impl Plugin for VillaScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene).add_systems(
            Update,
            (
                surface_material_system,
                lighting_preset_system,
                animate_particles,
            ),
        );
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    selection: Res<Selection>,
) {
    let registry = MaterialRegistry::build(&mut materials);

    spawn_villa(
        &mut commands,
        &mut meshes,
        &mut materials,
        &registry,
        &selection,
    );
    spawn_particles(&mut commands, &mut meshes, &mut materials);
    spawn_lighting(&mut commands);

    commands.insert_resource(registry);
}
