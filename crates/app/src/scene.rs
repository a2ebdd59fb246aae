//! Demo scene: a ground plane driven by the season switcher and three groups
//! of placeholder vegetation, all hidden until their season comes around.

use bevy::prelude::*;

use rendering::{season_ground_material, SeasonDecoration, SeasonGround, SeasonGroundMaterial};
use seasons::{DecorationKind, SeasonSwitcherSettings};

/// Side length of the square ground plane, in meters.
const GROUND_SIZE: f32 = 40.0;

/// Props scattered per decoration group.
const PROPS_PER_GROUP: usize = 60;

/// Color of each group's placeholder props.
fn decoration_color(kind: DecorationKind) -> Color {
    match kind {
        // Spring: pink blossoms.
        DecorationKind::Spring => Color::srgb(0.95, 0.60, 0.75),
        // Summer: tall green grass.
        DecorationKind::Summer => Color::srgb(0.30, 0.65, 0.25),
        // Autumn: orange leaf piles.
        DecorationKind::Autumn => Color::srgb(0.85, 0.45, 0.15),
    }
}

/// Deterministic prop position within the ground bounds for (`kind`, `i`).
fn prop_position(kind: DecorationKind, i: usize) -> Vec3 {
    let seed = i.wrapping_mul(73).wrapping_add(kind as usize * 1009);
    let hx = seed.wrapping_mul(47) % 1000;
    let hz = seed.wrapping_mul(61).wrapping_add(17) % 1000;
    let half = GROUND_SIZE * 0.45;
    Vec3::new(
        (hx as f32 / 1000.0) * 2.0 * half - half,
        0.0,
        (hz as f32 / 1000.0) * 2.0 * half - half,
    )
}

pub fn setup_scene(
    mut commands: Commands,
    settings: Res<SeasonSwitcherSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut ground_materials: ResMut<Assets<SeasonGroundMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 18.0, 26.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
    ));

    let ground_base = StandardMaterial {
        perceptual_roughness: 0.95,
        reflectance: 0.1,
        ..default()
    };
    commands.spawn((
        SeasonGround,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(ground_materials.add(season_ground_material(ground_base, settings.use_normals))),
        Transform::default(),
    ));

    let prop_mesh = meshes.add(Cuboid::new(0.15, 0.6, 0.15));
    for kind in DecorationKind::ALL {
        let material = materials.add(StandardMaterial {
            base_color: decoration_color(kind),
            perceptual_roughness: 0.8,
            ..default()
        });
        commands
            .spawn((
                SeasonDecoration(kind),
                Transform::default(),
                Visibility::Hidden,
            ))
            .with_children(|group| {
                for i in 0..PROPS_PER_GROUP {
                    let pos = prop_position(kind, i);
                    group.spawn((
                        Mesh3d(prop_mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_translation(pos + Vec3::Y * 0.3),
                    ));
                }
            });
    }
}
