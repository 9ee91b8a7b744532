use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{PrimitiveTopology, VertexAttributeValues};
use bevy::render::view::NoFrustumCulling;
use constants::render_settings::{
    PARTICLE_COLOR, PARTICLE_COUNT, PARTICLE_DRIFT_AMPLITUDE, PARTICLE_MAX_HEIGHT,
    PARTICLE_OPACITY, PARTICLE_SEED, PARTICLE_SPIN_STEP, PARTICLE_SPREAD,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Decorative point cloud floating around the villa.
#[derive(Component)]
pub struct ParticleField;

/// Scatter points over a square of side `PARTICLE_SPREAD` centred on the
/// origin, at heights in `[0, PARTICLE_MAX_HEIGHT)`.
pub fn scatter_particles(count: usize, rng: &mut impl Rng) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
                rng.random::<f32>() * PARTICLE_MAX_HEIGHT,
                (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
            ]
        })
        .collect()
}

/// Nudge every particle's Y by a sine of elapsed time, phase-shifted by its
/// flat buffer index (`3 * i + 1`).
pub fn drift_particles(positions: &mut [[f32; 3]], elapsed_secs: f32) {
    for (i, position) in positions.iter_mut().enumerate() {
        let flat_index = (i * 3 + 1) as f32;
        position[1] += (elapsed_secs + flat_index).sin() * PARTICLE_DRIFT_AMPLITUDE;
    }
}

pub fn particle_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    let [r, g, b] = PARTICLE_COLOR;
    let colors = vec![[r, g, b, 1.0]; positions.len()];
    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
}

pub fn spawn_particles(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let mut rng = SmallRng::seed_from_u64(PARTICLE_SEED);
    let positions = scatter_particles(PARTICLE_COUNT, &mut rng);

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(PARTICLE_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Name::new("Particles"),
        ParticleField,
        Mesh3d(meshes.add(particle_mesh(positions))),
        MeshMaterial3d(material),
        Transform::default(),
        NoFrustumCulling,
    ));
}

/// Spin the field and drift its points. Mutating the mesh asset re-uploads
/// the vertex buffer.
pub fn animate_particles(
    time: Res<Time>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut fields: Query<(&Mesh3d, &mut Transform), With<ParticleField>>,
) {
    let elapsed = time.elapsed_secs();

    for (mesh_handle, mut transform) in &mut fields {
        transform.rotate_y(PARTICLE_SPIN_STEP);

        let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
            continue;
        };
        if let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
        {
            drift_particles(positions, elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_stays_in_volume() {
        let mut rng = SmallRng::seed_from_u64(PARTICLE_SEED);
        let positions = scatter_particles(PARTICLE_COUNT, &mut rng);
        assert_eq!(positions.len(), PARTICLE_COUNT);
        for [x, y, z] in positions {
            assert!(x.abs() <= PARTICLE_SPREAD / 2.0);
            assert!(z.abs() <= PARTICLE_SPREAD / 2.0);
            assert!((0.0..PARTICLE_MAX_HEIGHT).contains(&y));
        }
    }

    #[test]
    fn scatter_is_reproducible_for_a_seed() {
        let a = scatter_particles(8, &mut SmallRng::seed_from_u64(7));
        let b = scatter_particles(8, &mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn drift_only_moves_y() {
        let mut positions = vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        drift_particles(&mut positions, 10.0);

        assert_eq!(positions[0][0], 1.0);
        assert_eq!(positions[0][2], 3.0);
        let expected_first = 2.0 + (10.0f32 + 1.0).sin() * PARTICLE_DRIFT_AMPLITUDE;
        let expected_second = 5.0 + (10.0f32 + 4.0).sin() * PARTICLE_DRIFT_AMPLITUDE;
        assert!((positions[0][1] - expected_first).abs() < 1e-6);
        assert!((positions[1][1] - expected_second).abs() < 1e-6);
    }

    #[test]
    fn mesh_carries_colour_per_point() {
        let mesh = particle_mesh(vec![[0.0; 3]; 5]);
        assert_eq!(mesh.count_vertices(), 5);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
    }
}
