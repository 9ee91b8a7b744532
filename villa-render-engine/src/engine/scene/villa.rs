use std::f32::consts::{FRAC_PI_2, PI};

use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use constants::material::{
    COLUMN_COLOR, DOOR_COLOR, FOUNDATION_COLOR, ROOF_DECORATION_COLOR, TRIM_COLOR,
};

use crate::controls::selection::Selection;
use crate::engine::assets::materials::{MaterialKind, MaterialRegistry, solid_material};

/// Root transform of the house; the render loop rotates it.
#[derive(Component)]
pub struct VillaRoot;

/// Parts whose material follows the wall or roof selection.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VillaSurface {
    Wall,
    Roof,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    Cuboid(Vec3),
    Cylinder { radius: f32, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartFinish {
    Surface(VillaSurface),
    Preset(MaterialKind),
    Solid(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VillaPart {
    pub name: &'static str,
    pub shape: PartShape,
    pub translation: Vec3,
    pub yaw: f32,
    pub finish: PartFinish,
    pub casts_shadow: bool,
    pub receives_shadow: bool,
}

impl VillaPart {
    fn cuboid(name: &'static str, size: Vec3, translation: Vec3, finish: PartFinish) -> Self {
        Self {
            name,
            shape: PartShape::Cuboid(size),
            translation,
            yaw: 0.0,
            finish,
            casts_shadow: false,
            receives_shadow: false,
        }
    }

    fn with_shadows(mut self, casts: bool, receives: bool) -> Self {
        self.casts_shadow = casts;
        self.receives_shadow = receives;
        self
    }

    fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn mesh(&self) -> Mesh {
        match self.shape {
            PartShape::Cuboid(size) => Cuboid::from_size(size).into(),
            PartShape::Cylinder { radius, height } => Cylinder::new(radius, height).into(),
        }
    }
}

/// Full hand-authored part list, in spawn order.
pub fn villa_parts() -> Vec<VillaPart> {
    let mut parts = vec![
        VillaPart::cuboid(
            "Foundation",
            Vec3::new(12.0, 0.5, 12.0),
            Vec3::new(0.0, -0.25, 0.0),
            PartFinish::Solid(FOUNDATION_COLOR),
        )
        .with_shadows(false, true),
    ];

    push_storey(&mut parts, "Ground floor", 0.0, 3.0, 12.0);
    push_storey(&mut parts, "Upper floor", 3.5, 2.5, 10.0);
    push_roof(&mut parts, 6.5, 1.5, 10.0);
    push_windows(&mut parts, "Ground floor window", 6.0, 1.5, Vec3::new(2.0, 1.5, 0.1));
    push_windows(&mut parts, "Upper floor window", 5.0, 4.5, Vec3::new(1.5, 1.2, 0.1));

    parts.push(VillaPart::cuboid(
        "Door",
        Vec3::new(1.5, 2.5, 0.1),
        Vec3::new(0.0, 1.25, 6.05),
        PartFinish::Solid(DOOR_COLOR),
    ));

    for (x, z) in [(4.0, 6.0), (-4.0, 6.0), (4.0, -6.0), (-4.0, -6.0)] {
        parts.push(VillaPart {
            name: "Column",
            shape: PartShape::Cylinder {
                radius: 0.3,
                height: 3.0,
            },
            translation: Vec3::new(x, 1.5, z),
            yaw: 0.0,
            finish: PartFinish::Solid(COLUMN_COLOR),
            casts_shadow: true,
            receives_shadow: false,
        });
    }

    parts
}

/// Square storey body plus a slightly wider trim band along its top edge.
fn push_storey(parts: &mut Vec<VillaPart>, name: &'static str, y: f32, height: f32, width: f32) {
    parts.push(
        VillaPart::cuboid(
            name,
            Vec3::new(width, height, width),
            Vec3::new(0.0, y + height / 2.0, 0.0),
            PartFinish::Surface(VillaSurface::Wall),
        )
        .with_shadows(true, true),
    );
    parts.push(VillaPart::cuboid(
        "Trim",
        Vec3::new(width + 0.2, 0.2, width + 0.2),
        Vec3::new(0.0, y + height, 0.0),
        PartFinish::Solid(TRIM_COLOR),
    ));
}

fn push_roof(parts: &mut Vec<VillaPart>, y: f32, height: f32, width: f32) {
    parts.push(
        VillaPart::cuboid(
            "Roof",
            Vec3::new(width, height, width),
            Vec3::new(0.0, y + height / 2.0, 0.0),
            PartFinish::Surface(VillaSurface::Roof),
        )
        .with_shadows(true, true),
    );
    parts.push(VillaPart::cuboid(
        "Roof decoration",
        Vec3::new(width * 0.8, 0.3, width * 0.8),
        Vec3::new(0.0, y + height + 0.15, 0.0),
        PartFinish::Solid(ROOF_DECORATION_COLOR),
    ));
}

/// One glass pane centred on each face of a storey, turned to face outward.
fn push_windows(
    parts: &mut Vec<VillaPart>,
    name: &'static str,
    offset: f32,
    y: f32,
    size: Vec3,
) {
    let faces = [
        (Vec3::new(offset, y, 0.0), FRAC_PI_2),
        (Vec3::new(-offset, y, 0.0), -FRAC_PI_2),
        (Vec3::new(0.0, y, offset), 0.0),
        (Vec3::new(0.0, y, -offset), PI),
    ];
    for (translation, yaw) in faces {
        parts.push(
            VillaPart::cuboid(name, size, translation, PartFinish::Preset(MaterialKind::Glass))
                .with_yaw(yaw),
        );
    }
}

/// Spawn the root and every part as its child. Returns the root entity.
pub fn spawn_villa(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &MaterialRegistry,
    selection: &Selection,
) -> Entity {
    let parts = villa_parts();
    info!("Building villa from {} parts", parts.len());

    commands
        .spawn((
            Name::new("Villa"),
            VillaRoot,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for part in &parts {
                let material = match part.finish {
                    PartFinish::Surface(VillaSurface::Wall) => {
                        registry.get(selection.wall_material)
                    }
                    PartFinish::Surface(VillaSurface::Roof) => {
                        registry.get(selection.roof_material)
                    }
                    PartFinish::Preset(kind) => registry.get(kind),
                    PartFinish::Solid(hex) => materials.add(solid_material(hex)),
                };

                let mut entity = parent.spawn((
                    Name::new(part.name),
                    Mesh3d(meshes.add(part.mesh())),
                    MeshMaterial3d(material),
                    Transform::from_translation(part.translation)
                        .with_rotation(Quat::from_rotation_y(part.yaw)),
                ));

                if let PartFinish::Surface(surface) = part.finish {
                    entity.insert(surface);
                }
                if !part.casts_shadow {
                    entity.insert(NotShadowCaster);
                }
                if !part.receives_shadow {
                    entity.insert(NotShadowReceiver);
                }
            }
        })
        .id()
}

/// Swap wall and roof materials whenever the selection changes.
pub fn surface_material_system(
    selection: Res<Selection>,
    registry: Res<MaterialRegistry>,
    mut parts: Query<(&VillaSurface, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    if !selection.is_changed() {
        return;
    }

    for (surface, mut material) in &mut parts {
        let kind = match surface {
            VillaSurface::Wall => selection.wall_material,
            VillaSurface::Roof => selection.roof_material,
        };
        let handle = registry.get(kind);
        if material.0 != handle {
            material.0 = handle;
        }
    }

    info!(
        "Villa materials updated - wall: {}, roof: {}",
        selection.wall_material, selection.roof_material
    );
}
