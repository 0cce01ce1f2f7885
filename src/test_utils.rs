//! Test utilities for orbit propagation tests.
//!
//! Provides fixtures for common element sets and assertions for the
//! invariants the propagation model is expected to keep.

use crate::orbit::{OrbitalElements, PerturbationModel};
use crate::satellite::Satellite;
use crate::types::EARTH_RADIUS_KM;

/// Fixtures for creating test element sets and satellites.
pub mod fixtures {
    use super::*;

    /// The reference low Earth orbit: a = 7000 km, e = 0.001, i = 45°,
    /// 10 m² of drag area on 1000 kg.
    pub fn reference_leo() -> OrbitalElements {
        OrbitalElements::new(
            7000.0,
            0.001,
            std::f64::consts::FRAC_PI_4,
            0.0,
            0.0,
            0.0,
            10.0,
            1000.0,
        )
    }

    /// Reference orbit propagated with J2 and drag.
    pub fn reference_satellite() -> Satellite {
        Satellite::new("reference", reference_leo(), PerturbationModel::perturbed())
            .expect("reference orbit is valid")
    }

    /// Circular orbit at `altitude_km` with a large area-to-mass ratio so
    /// drag is visible in a few steps.
    pub fn draggy_orbit(altitude_km: f64) -> OrbitalElements {
        OrbitalElements::new(
            EARTH_RADIUS_KM + altitude_km,
            0.0,
            0.9,
            0.0,
            0.0,
            0.0,
            100.0,
            10.0,
        )
    }
}

/// Assertions for verifying propagation invariants.
pub mod assertions {
    use super::*;

    /// Assert the three constant elements are bit-identical.
    pub fn assert_shape_unchanged(before: &OrbitalElements, after: &OrbitalElements) {
        assert_eq!(before.a, after.a, "semi-major axis changed");
        assert_eq!(before.e, after.e, "eccentricity changed");
        assert_eq!(before.i, after.i, "inclination changed");
    }

    /// Assert two satellites carry bit-identical elements.
    pub fn assert_same_state(left: &Satellite, right: &Satellite) {
        assert_eq!(
            left.elements().to_state(),
            right.elements().to_state(),
            "states diverged: {} vs {}",
            left.name,
            right.name
        );
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_satellite_is_above_surface() {
        let sat = fixtures::reference_satellite();
        assert!(sat.elements().altitude() > 600.0);
        assert!(sat.status().is_active());
    }

    #[test]
    fn test_draggy_orbit_is_valid() {
        let elements = fixtures::draggy_orbit(250.0);
        assert!(elements.validate().is_ok());
        assert!((elements.altitude() - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_headless_app_updates() {
        let mut app = bevy_test::headless_app();
        app.update();
    }
}
