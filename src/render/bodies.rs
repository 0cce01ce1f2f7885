//! Earth and satellite rendering.
//!
//! Spawns the textured Earth globe, rotates it at the sidereal rate in
//! simulated time, and gives every satellite entity a visible marker.

use bevy::prelude::*;

use crate::clock::SimulationClock;
use crate::physics::SimulationSet;
use crate::satellite::{Satellite, SatelliteStatus};
use crate::scenarios::SatelliteColor;
use crate::types::{EARTH_MEAN_RADIUS_KM, EARTH_ROTATION_RATE, SCENE_SCALE};

/// Texture loaded onto the Earth globe, relative to the asset folder.
pub const EARTH_TEXTURE: &str = "textures/earth.jpg";

/// Radius of a satellite marker in render units.
pub const MARKER_RADIUS: f32 = 0.1;

/// Component marking the Earth globe.
#[derive(Component)]
pub struct Earth;

/// Plugin providing Earth and satellite visuals.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_earth)
            .add_systems(
                Update,
                (
                    rotate_earth.after(SimulationSet::Clock),
                    attach_satellite_markers,
                    sync_marker_visibility.after(SimulationSet::Propagate),
                ),
            );
    }
}

/// Rotation of the Earth after `dt` simulated seconds (rad).
pub fn earth_rotation_angle(dt: f64) -> f32 {
    (EARTH_ROTATION_RATE * dt) as f32
}

/// Spawn the Earth at the origin.
fn spawn_earth(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let radius = (EARTH_MEAN_RADIUS_KM * SCENE_SCALE) as f32;
    let mesh = meshes.add(Sphere::new(radius).mesh().uv(64, 64));

    let material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(EARTH_TEXTURE)),
        perceptual_roughness: 0.9,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Earth,
    ));

    info!("Spawned Earth (radius {:.3} units)", radius);
}

/// Spin the globe about the scene's up axis.
fn rotate_earth(mut earth: Query<&mut Transform, With<Earth>>, clock: Res<SimulationClock>) {
    let angle = earth_rotation_angle(clock.last_delta);
    if angle == 0.0 {
        return;
    }
    for mut transform in earth.iter_mut() {
        transform.rotate_y(angle);
    }
}

/// Give newly spawned satellites a mesh in their configured color.
fn attach_satellite_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    added: Query<(Entity, &Satellite, Option<&SatelliteColor>), Added<Satellite>>,
) {
    for (entity, satellite, color) in added.iter() {
        let color = color.map_or(Color::srgb(1.0, 0.0, 0.0), |c| c.0);

        let mesh = meshes.add(Sphere::new(MARKER_RADIUS).mesh().uv(16, 16));
        let material = materials.add(StandardMaterial {
            base_color: color,
            unlit: true,
            ..default()
        });

        commands
            .entity(entity)
            .insert((Mesh3d(mesh), MeshMaterial3d(material)));

        debug!("Attached marker to satellite '{}'", satellite.name);
    }
}

/// Hide markers of decayed satellites; faulted ones stay visible, frozen.
fn sync_marker_visibility(mut satellites: Query<(&Satellite, &mut Visibility), Changed<Satellite>>) {
    for (satellite, mut visibility) in satellites.iter_mut() {
        let wanted = if matches!(satellite.status(), SatelliteStatus::Decayed) {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        visibility.set_if_neq(wanted);
    }
}
