//! Orbit path rendering using Bevy Gizmos.
//!
//! Draws each active satellite's osculating ellipse: the current elements
//! swept through a full turn of true anomaly. J2 and drag make the real
//! path drift away from this curve over time, which is what the paths are
//! meant to show.

use bevy::prelude::*;

use crate::orbit::{OrbitalElements, scene_position};
use crate::satellite::Satellite;
use crate::scenarios::SatelliteColor;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Update, draw_orbit_paths);
    }
}

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Number of segments for drawing the ellipse (higher = smoother).
    pub segments: u32,
    /// Alpha value for orbit path color.
    pub alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 256,
            alpha: 0.35,
        }
    }
}

/// Scene points along the osculating ellipse, closed (first point repeated).
pub fn ellipse_points(elements: &OrbitalElements, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(8);
    (0..=segments)
        .map(|k| {
            let nu = k as f64 / segments as f64 * std::f64::consts::TAU;
            let probe = OrbitalElements {
                true_anomaly: nu,
                ..*elements
            };
            scene_position(&probe).as_vec3()
        })
        .collect()
}

fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    satellites: Query<(&Satellite, Option<&SatelliteColor>)>,
) {
    if !settings.visible {
        return;
    }

    for (satellite, color) in satellites.iter() {
        if !satellite.status().is_active() {
            continue;
        }
        let color = color.map_or(Color::WHITE, |c| c.0).with_alpha(settings.alpha);
        gizmos.linestrip(ellipse_points(satellite.elements(), settings.segments), color);
    }
}
