//! Secular J2 and atmospheric drag rates for the six orbital elements.
//!
//! Eccentricity and inclination are held constant. J2 drives the node,
//! perigee and anomaly rates; drag only contracts the semi-major axis
//! using a circular-orbit speed.

use crate::orbit::elements::{ElementState, STATE_LEN};
use crate::types::{EARTH_RADIUS_KM, J2_EARTH, MU_EARTH};

/// The element state cannot be propagated.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("eccentricity {0} outside [0, 1)")]
    Eccentricity(f64),

    #[error("semi-major axis {0} km is not positive")]
    SemiMajorAxis(f64),

    #[error("propagation produced a non-finite state")]
    NonFinite,
}

/// Reject states outside the model's domain: non-finite values,
/// `a ≤ 0` or `e` outside `[0, 1)`.
pub fn check_domain(state: &ElementState) -> Result<(), DomainError> {
    let [a, e, ..] = *state;
    if !(a.is_finite() && a > 0.0) {
        return Err(DomainError::SemiMajorAxis(a));
    }
    if !(0.0..1.0).contains(&e) {
        return Err(DomainError::Eccentricity(e));
    }
    if state.iter().any(|v| !v.is_finite()) {
        return Err(DomainError::NonFinite);
    }
    Ok(())
}

/// Exponential atmospheric density profile used by the drag term.
///
/// `ρ(h) = reference_density · exp(−(h − reference_altitude) / scale_height)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereModel {
    /// Density at the reference altitude. Default: 1e-13.
    pub reference_density: f64,
    /// Reference altitude in km. Default: 200.
    pub reference_altitude: f64,
    /// Density scale height in km. Default: 60.
    pub scale_height: f64,
}

impl Default for AtmosphereModel {
    fn default() -> Self {
        Self {
            reference_density: 1e-13,
            reference_altitude: 200.0,
            scale_height: 60.0,
        }
    }
}

impl AtmosphereModel {
    /// Density at height `h` km above the equatorial radius. Not clamped
    /// below the surface.
    pub fn density(&self, h: f64) -> f64 {
        self.reference_density * (-(h - self.reference_altitude) / self.scale_height).exp()
    }
}

/// Derivative function of the element state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerturbationModel {
    /// Gravitational parameter (km³/s²)
    pub mu: f64,
    /// J2 coefficient; zero disables oblateness effects
    pub j2: f64,
    /// Reference radius for J2 and drag altitude (km)
    pub earth_radius: f64,
    /// Drag density model; `None` disables drag
    pub atmosphere: Option<AtmosphereModel>,
}

impl Default for PerturbationModel {
    fn default() -> Self {
        Self::perturbed()
    }
}

impl PerturbationModel {
    /// Earth model with J2 and the default drag atmosphere.
    pub fn perturbed() -> Self {
        Self {
            mu: MU_EARTH,
            j2: J2_EARTH,
            earth_radius: EARTH_RADIUS_KM,
            atmosphere: Some(AtmosphereModel::default()),
        }
    }

    /// Pure two-body motion: no J2, no drag.
    pub fn keplerian() -> Self {
        Self {
            j2: 0.0,
            atmosphere: None,
            ..Self::perturbed()
        }
    }

    /// Whether any perturbation term is active.
    pub fn is_perturbed(&self) -> bool {
        self.j2 != 0.0 || self.atmosphere.is_some()
    }

    /// Rates `[da, de, di, dΩ, dω, dν]` per second for the given state.
    ///
    /// `area` (m²) and `mass` (kg) only enter the drag term.
    pub fn derivatives(
        &self,
        state: &ElementState,
        area: f64,
        mass: f64,
    ) -> Result<ElementState, DomainError> {
        check_domain(state)?;
        let [a, e, i, _raan, _argp, _nu] = *state;

        let one_minus_e2 = 1.0 - e * e;
        let p = a * one_minus_e2;
        let j2_effect = 1.5 * self.j2 * (self.earth_radius / p).powi(2);
        let n = (self.mu / a.powi(3)).sqrt();

        let (sin_i, cos_i) = i.sin_cos();

        let raan_dot = -j2_effect * n * cos_i;
        let argp_dot = j2_effect * n * (2.0 - 2.5 * sin_i * sin_i);
        let nu_dot = n * (1.0 + j2_effect * one_minus_e2.sqrt() * (1.5 * cos_i * cos_i - 0.5));

        let a_dot = match self.atmosphere {
            Some(atmosphere) => {
                let h = a - self.earth_radius;
                let rho = atmosphere.density(h);
                let v = (self.mu / a).sqrt();
                let drag_accel = -0.5 * rho * v * v * area / mass;
                2.0 * a * drag_accel / self.mu
            }
            None => 0.0,
        };

        let rates: [f64; STATE_LEN] = [a_dot, 0.0, 0.0, raan_dot, argp_dot, nu_dot];
        Ok(rates)
    }
}
