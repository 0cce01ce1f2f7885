//! Classical orbital elements and the physical properties used by drag.

use crate::types::{DEG_TO_RAD, EARTH_RADIUS_KM};

/// Number of propagated elements in the state vector.
pub const STATE_LEN: usize = 6;

/// Propagated state vector, ordered `[a, e, i, raan, arg_of_perigee, true_anomaly]`.
pub type ElementState = [f64; STATE_LEN];

/// Rejected physical properties at satellite construction.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    #[error("invalid mass {0} kg (must be positive and finite)")]
    Mass(f64),

    #[error("invalid cross-sectional area {0} m² (must be non-negative and finite)")]
    Area(f64),
}

/// Osculating orbital elements of a single satellite.
///
/// Distances in km, angles in radians. Angles are not wrapped to
/// `[0, 2π)` by propagation; use [`OrbitalElements::normalized_angles`]
/// for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (km)
    pub a: f64,
    /// Eccentricity, in `[0, 1)` for a bound orbit
    pub e: f64,
    /// Inclination (rad)
    pub i: f64,
    /// Right ascension of the ascending node (rad)
    pub raan: f64,
    /// Argument of perigee (rad)
    pub arg_of_perigee: f64,
    /// True anomaly (rad)
    pub true_anomaly: f64,
    /// Cross-sectional area (m²)
    pub area: f64,
    /// Mass (kg)
    pub mass: f64,
}

impl OrbitalElements {
    /// Create elements from radians.
    pub fn new(
        a: f64,
        e: f64,
        i: f64,
        raan: f64,
        arg_of_perigee: f64,
        true_anomaly: f64,
        area: f64,
        mass: f64,
    ) -> Self {
        Self {
            a,
            e,
            i,
            raan,
            arg_of_perigee,
            true_anomaly,
            area,
            mass,
        }
    }

    /// Create elements with all angles given in degrees.
    pub fn from_degrees(
        a: f64,
        e: f64,
        i_deg: f64,
        raan_deg: f64,
        arg_of_perigee_deg: f64,
        true_anomaly_deg: f64,
        area: f64,
        mass: f64,
    ) -> Self {
        Self::new(
            a,
            e,
            i_deg * DEG_TO_RAD,
            raan_deg * DEG_TO_RAD,
            arg_of_perigee_deg * DEG_TO_RAD,
            true_anomaly_deg * DEG_TO_RAD,
            area,
            mass,
        )
    }

    /// Circular equatorial orbit of the given radius with no drag surface.
    pub fn circular(radius_km: f64, mass: f64) -> Self {
        Self::new(radius_km, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, mass)
    }

    /// Check the drag-related physical properties.
    ///
    /// A zero area is accepted and switches the drag term off.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigurationError::Mass(self.mass));
        }
        if !(self.area.is_finite() && self.area >= 0.0) {
            return Err(ConfigurationError::Area(self.area));
        }
        Ok(())
    }

    /// Pack the six orbital elements into a state vector.
    pub fn to_state(&self) -> ElementState {
        [
            self.a,
            self.e,
            self.i,
            self.raan,
            self.arg_of_perigee,
            self.true_anomaly,
        ]
    }

    /// Copy of these elements with the orbital state replaced.
    ///
    /// Area and mass are carried over unchanged.
    pub fn with_state(&self, state: &ElementState) -> Self {
        let [a, e, i, raan, arg_of_perigee, true_anomaly] = *state;
        Self {
            a,
            e,
            i,
            raan,
            arg_of_perigee,
            true_anomaly,
            ..*self
        }
    }

    /// Height of the semi-major axis above the equatorial radius (km).
    pub fn altitude(&self) -> f64 {
        self.a - EARTH_RADIUS_KM
    }

    /// Perigee height above the equatorial radius (km).
    pub fn perigee_altitude(&self) -> f64 {
        self.a * (1.0 - self.e) - EARTH_RADIUS_KM
    }

    /// Unperturbed mean motion (rad/s).
    pub fn mean_motion(&self, mu: f64) -> f64 {
        (mu / self.a.powi(3)).sqrt()
    }

    /// Unperturbed orbital period (s).
    pub fn period(&self, mu: f64) -> f64 {
        std::f64::consts::TAU / self.mean_motion(mu)
    }

    /// Angles wrapped to `[0, 2π)` as `(raan, arg_of_perigee, true_anomaly)`.
    pub fn normalized_angles(&self) -> (f64, f64, f64) {
        use std::f64::consts::TAU;
        (
            self.raan.rem_euclid(TAU),
            self.arg_of_perigee.rem_euclid(TAU),
            self.true_anomaly.rem_euclid(TAU),
        )
    }
}
