//! Preset satellites spawned by the default configuration.
//!
//! A small constellation spanning the regimes the model is meant to show:
//! drag-dominated LEO, J2 nodal regression, a frozen-perigee Molniya orbit
//! and a plain Keplerian geostationary satellite.

use bevy::prelude::Color;

use crate::orbit::OrbitalElements;

use super::{PropagationMode, SatelliteSpec};

/// The reference low orbit: 7000 km, e = 0.001, 45°, 10 m² on 1000 kg.
pub fn reference_leo() -> SatelliteSpec {
    SatelliteSpec {
        name: "Reference LEO".into(),
        elements: OrbitalElements::from_degrees(7000.0, 0.001, 45.0, 0.0, 0.0, 0.0, 10.0, 1000.0),
        mode: PropagationMode::Perturbed,
        color: Color::srgb(1.0, 0.2, 0.2),
    }
}

/// Space-station-like orbit, ~400 km at 51.6°.
pub fn station() -> SatelliteSpec {
    SatelliteSpec {
        name: "Station".into(),
        elements: OrbitalElements::from_degrees(
            6778.0, 0.0005, 51.64, 30.0, 0.0, 90.0, 1600.0, 420_000.0,
        ),
        mode: PropagationMode::Perturbed,
        color: Color::srgb(1.0, 0.85, 0.3),
    }
}

/// Dawn-dusk sun-synchronous orbit at ~700 km.
pub fn sun_synchronous() -> SatelliteSpec {
    SatelliteSpec {
        name: "Sun-synchronous".into(),
        elements: OrbitalElements::from_degrees(7078.0, 0.001, 98.2, 120.0, 0.0, 180.0, 4.0, 800.0),
        mode: PropagationMode::Perturbed,
        color: Color::srgb(0.3, 0.9, 0.4),
    }
}

/// Highly eccentric orbit at the critical inclination.
pub fn molniya() -> SatelliteSpec {
    SatelliteSpec {
        name: "Molniya".into(),
        elements: OrbitalElements::from_degrees(
            26_600.0, 0.74, 63.4, 200.0, 270.0, 0.0, 20.0, 1600.0,
        ),
        mode: PropagationMode::Perturbed,
        color: Color::srgb(0.7, 0.4, 1.0),
    }
}

/// Geostationary satellite on an unperturbed circular orbit.
pub fn geostationary() -> SatelliteSpec {
    SatelliteSpec {
        name: "Geostationary".into(),
        elements: OrbitalElements::circular(42_164.0, 3000.0),
        mode: PropagationMode::Keplerian,
        color: Color::srgb(0.3, 0.7, 1.0),
    }
}

/// All preset satellites, in spawn order.
pub fn all_presets() -> Vec<SatelliteSpec> {
    vec![
        reference_leo(),
        station(),
        sun_synchronous(),
        molniya(),
        geostationary(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EARTH_RADIUS_KM;

    #[test]
    fn test_presets_build() {
        for spec in all_presets() {
            let sat = spec.build().unwrap_or_else(|e| panic!("{}: {}", spec.name, e));
            assert!(!sat.has_decayed(), "{} starts below the surface", spec.name);
        }
    }

    #[test]
    fn test_preset_names_unique() {
        let presets = all_presets();
        for (i, a) in presets.iter().enumerate() {
            for b in &presets[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_molniya_perigee_above_atmosphere() {
        let spec = molniya();
        assert!(spec.elements.perigee_altitude() > 300.0);
        assert!(spec.elements.a * (1.0 + spec.elements.e) > 39_000.0 + EARTH_RADIUS_KM);
    }

    #[test]
    fn test_geostationary_period_is_sidereal_day() {
        let sat = geostationary().build().unwrap();
        let period = sat.elements().period(sat.model().mu);
        assert!((period - 86_164.0).abs() < 5.0, "period {} s", period);
    }
}
