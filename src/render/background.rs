//! Background rendering for the Earth scene.
//!
//! Provides starfield and lighting systems.

use bevy::prelude::*;
use rand::Rng;

use crate::types::SCENE_SCALE;

/// Number of background stars.
pub const STAR_COUNT: usize = 1000;

/// Side of the cube the stars are scattered in, in render units
/// (1,000,000 km).
pub const STARFIELD_EXTENT: f32 = (1_000_000.0 * SCENE_SCALE) as f32;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Random star position inside the starfield cube centred on the Earth.
pub fn random_star_position(rng: &mut impl Rng) -> Vec3 {
    let half = STARFIELD_EXTENT * 0.5;
    Vec3::new(
        rng.gen_range(-half..half),
        rng.gen_range(-half..half),
        rng.gen_range(-half..half),
    )
}

/// Spawn a starfield background with randomly placed stars.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Material for stars - unlit white
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });

    // Small sphere mesh shared by every star
    let star_mesh = meshes.add(Sphere::new(0.1).mesh().uv(24, 24));

    let mut rng = rand::thread_rng();

    for _ in 0..STAR_COUNT {
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(random_star_position(&mut rng)),
        ));
    }

    info!("Spawned {} background stars", STAR_COUNT);
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    // Sun from the +X direction
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(1.0, 0.0, 0.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Dim fill so the night side is not pitch black
    commands.spawn((
        DirectionalLight {
            illuminance: 800.0,
            color: Color::srgb(0.25, 0.25, 0.35),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-1.0, 0.3, 0.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Scene lighting initialized");
}
