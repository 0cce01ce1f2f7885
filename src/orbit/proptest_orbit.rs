//! Property-based tests for element propagation using proptest.
//!
//! These tests verify propagation invariants across a wide range of orbits.

use proptest::prelude::*;

use crate::orbit::{DomainError, OrbitalElements, PerturbationModel, inertial_position};
use crate::satellite::Satellite;
use crate::test_utils::assertions;
use crate::types::{EARTH_RADIUS_KM, MU_EARTH};

/// Valid bound orbits above the surface.
fn any_orbit() -> impl Strategy<Value = OrbitalElements> {
    (
        EARTH_RADIUS_KM + 200.0..50_000.0f64,
        0.0f64..0.7,
        0.0f64..std::f64::consts::PI,
        0.0f64..std::f64::consts::TAU,
        0.0f64..std::f64::consts::TAU,
        0.0f64..std::f64::consts::TAU,
        0.0f64..50.0,
        1.0f64..10_000.0,
    )
        .prop_map(|(a, e, i, raan, argp, nu, area, mass)| {
            OrbitalElements::new(a, e, i, raan, argp, nu, area, mass)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A zero-length tick changes nothing.
    #[test]
    fn prop_zero_tick_is_identity(elements in any_orbit()) {
        let mut sat = Satellite::new("p", elements, PerturbationModel::perturbed()).unwrap();
        sat.tick(0.0).unwrap();
        prop_assert_eq!(*sat.elements(), elements);
    }

    /// Identical inputs give bit-identical outputs.
    #[test]
    fn prop_propagation_is_deterministic(
        elements in any_orbit(),
        steps in prop::collection::vec(0.0f64..600.0, 1..20),
    ) {
        let mut first = Satellite::new("first", elements, PerturbationModel::perturbed()).unwrap();
        let mut second = first.clone();

        for dt in &steps {
            let p1 = first.tick(*dt);
            let p2 = second.tick(*dt);
            prop_assert_eq!(p1, p2);
        }
        assertions::assert_same_state(&first, &second);
    }

    /// Without perturbations the orbit shape is frozen and the anomaly
    /// advances at the two-body mean motion.
    #[test]
    fn prop_keplerian_motion(
        elements in any_orbit(),
        dt in 1.0f64..120.0,
        ticks in 1usize..50,
    ) {
        let mut sat = Satellite::new("kepler", elements, PerturbationModel::keplerian()).unwrap();
        let n = elements.mean_motion(MU_EARTH);

        for _ in 0..ticks {
            sat.tick(dt).unwrap();
        }

        assertions::assert_shape_unchanged(&elements, sat.elements());
        let advanced = sat.elements().true_anomaly - elements.true_anomaly;
        let expected = n * dt * ticks as f64;
        prop_assert!(
            ((advanced - expected) / expected).abs() < 1e-8,
            "anomaly advanced {} rad, expected {}",
            advanced, expected
        );
    }

    /// Drag only ever lowers the semi-major axis.
    ///
    /// Altitudes and area-to-mass ratios are chosen so each step's decrement
    /// is larger than the f64 spacing at the semi-major axis.
    #[test]
    fn prop_drag_strictly_lowers_semi_major_axis(
        altitude in 150.0f64..350.0,
        area in 50.0f64..200.0,
        mass in 5.0f64..20.0,
        dt in 60.0f64..300.0,
    ) {
        let elements = OrbitalElements::new(
            EARTH_RADIUS_KM + altitude, 0.0, 0.5, 0.0, 0.0, 0.0, area, mass,
        );
        let mut sat = Satellite::new("drag", elements, PerturbationModel::perturbed()).unwrap();

        let mut previous = sat.elements().a;
        for _ in 0..10 {
            sat.tick(dt).unwrap();
            let a = sat.elements().a;
            prop_assert!(a < previous, "a did not decrease: {} -> {}", previous, a);
            previous = a;
        }
    }

    /// Circular equatorial orbits stay on a circle of radius a.
    #[test]
    fn prop_circular_equatorial_radius(
        a in EARTH_RADIUS_KM..100_000.0f64,
        raan in 0.0f64..std::f64::consts::TAU,
        argp in 0.0f64..std::f64::consts::TAU,
        nu in 0.0f64..std::f64::consts::TAU,
    ) {
        let elements = OrbitalElements::new(a, 0.0, 0.0, raan, argp, nu, 0.0, 1.0);
        let r = inertial_position(&elements).length();
        prop_assert!(((r - a) / a).abs() < 1e-12, "radius {} vs a {}", r, a);
    }

    /// The rotation into the inertial frame preserves the conic radius.
    #[test]
    fn prop_rotation_preserves_radius(elements in any_orbit()) {
        let p = elements.a * (1.0 - elements.e * elements.e);
        let expected = p / (1.0 + elements.e * elements.true_anomaly.cos());
        let r = inertial_position(&elements).length();
        prop_assert!(((r - expected) / expected).abs() < 1e-12);
    }

    /// Unbound or degenerate eccentricities are rejected.
    #[test]
    fn prop_unbound_eccentricity_rejected(e in 1.0f64..10.0) {
        let mut elements = OrbitalElements::circular(7000.0, 1.0);
        elements.e = e;
        let result = PerturbationModel::perturbed().derivatives(&elements.to_state(), 0.0, 1.0);
        prop_assert_eq!(result, Err(DomainError::Eccentricity(e)));
    }
}
