//! Orbital elements to Cartesian position.
//!
//! The inertial frame is Earth-centred with Z along the rotation axis.
//! The scene frame is Y-up: inertial Z maps to scene Y and inertial Y maps
//! to scene −Z.

use bevy::math::DVec3;

use crate::orbit::elements::OrbitalElements;
use crate::types::SCENE_SCALE;

/// Orbit-plane radius at the current true anomaly (km).
pub fn orbit_radius(elements: &OrbitalElements) -> f64 {
    let p = elements.a * (1.0 - elements.e * elements.e);
    p / (1.0 + elements.e * elements.true_anomaly.cos())
}

/// Inertial position in km.
pub fn inertial_position(elements: &OrbitalElements) -> DVec3 {
    let r = orbit_radius(elements);

    // Argument of latitude
    let u = elements.arg_of_perigee + elements.true_anomaly;

    let (sin_raan, cos_raan) = elements.raan.sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_i, cos_i) = elements.i.sin_cos();

    DVec3::new(
        r * (cos_raan * cos_u - sin_raan * sin_u * cos_i),
        r * (sin_raan * cos_u + cos_raan * sin_u * cos_i),
        r * sin_u * sin_i,
    )
}

/// Map an inertial position (km) into scene units.
pub fn inertial_to_scene(position: DVec3) -> DVec3 {
    DVec3::new(
        position.x * SCENE_SCALE,
        position.z * SCENE_SCALE,
        -position.y * SCENE_SCALE,
    )
}

/// Scene-space position of a satellite with the given elements.
pub fn scene_position(elements: &OrbitalElements) -> DVec3 {
    inertial_to_scene(inertial_position(elements))
}
