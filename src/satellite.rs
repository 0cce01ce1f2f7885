//! Satellite entity: element propagation and published scene position.
//!
//! A satellite owns its orbital elements and the perturbation model that
//! drives them. Each tick advances the elements by one RK4 step and
//! recomputes the scene position. Failed steps leave the last good
//! elements in place.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::orbit::{
    ConfigurationError, DomainError, OrbitalElements, PerturbationModel, check_domain,
    scene_position,
};
use crate::physics::{PropagationSettings, rk4_step};

/// Error raised while building or propagating a satellite.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SatelliteError {
    #[error("invalid satellite configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("orbit cannot be propagated: {0}")]
    Domain(#[from] DomainError),
}

/// Propagation status as decided by the simulation loop.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum SatelliteStatus {
    /// Propagating normally.
    #[default]
    Active,
    /// A step failed; elements are frozen at the last good state.
    Faulted(DomainError),
    /// Perigee dropped below the Earth's surface.
    Decayed,
}

impl SatelliteStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, SatelliteStatus::Active)
    }

    /// Short label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            SatelliteStatus::Active => "active",
            SatelliteStatus::Faulted(_) => "faulted",
            SatelliteStatus::Decayed => "decayed",
        }
    }
}

/// A simulated satellite.
///
/// The scene position is always derived from the current elements and is
/// never written directly.
#[derive(Component, Clone, Debug)]
#[require(Transform, Visibility)]
pub struct Satellite {
    /// Display name.
    pub name: String,
    elements: OrbitalElements,
    model: PerturbationModel,
    position: DVec3,
    status: SatelliteStatus,
    /// Simulated seconds successfully propagated.
    elapsed: f64,
}

impl Satellite {
    /// Build a satellite, rejecting bad physical properties and orbits the
    /// model cannot propagate.
    pub fn new(
        name: impl Into<String>,
        elements: OrbitalElements,
        model: PerturbationModel,
    ) -> Result<Self, SatelliteError> {
        elements.validate()?;
        model.derivatives(&elements.to_state(), elements.area, elements.mass)?;

        Ok(Self {
            name: name.into(),
            position: scene_position(&elements),
            elements,
            model,
            status: SatelliteStatus::Active,
            elapsed: 0.0,
        })
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn model(&self) -> &PerturbationModel {
        &self.model
    }

    /// Scene position after the last successful tick.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn status(&self) -> SatelliteStatus {
        self.status
    }

    pub fn set_status(&mut self, status: SatelliteStatus) {
        self.status = status;
    }

    /// Simulated seconds successfully propagated since construction.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance the elements by `dt` simulated seconds with one RK4 step.
    ///
    /// Returns the new scene position. On error the elements and position
    /// are left exactly as they were.
    pub fn tick(&mut self, dt: f64) -> Result<DVec3, DomainError> {
        let area = self.elements.area;
        let mass = self.elements.mass;
        let model = self.model;

        let next = rk4_step(&self.elements.to_state(), dt, |state| {
            model.derivatives(state, area, mass)
        })?;

        // A step can overshoot out of the domain without any stage failing
        check_domain(&next)?;

        self.elements = self.elements.with_state(&next);
        self.position = scene_position(&self.elements);
        self.elapsed += dt;
        Ok(self.position)
    }

    /// Advance by `dt`, split into sub-steps no longer than the settings allow.
    ///
    /// Stops at the first failing sub-step; earlier sub-steps stay applied.
    pub fn advance(
        &mut self,
        dt: f64,
        settings: &PropagationSettings,
    ) -> Result<DVec3, DomainError> {
        let (count, step) = settings.substeps(dt);
        for _ in 0..count {
            self.tick(step)?;
        }
        Ok(self.position)
    }

    /// Whether the perigee lies below the model's reference radius.
    pub fn has_decayed(&self) -> bool {
        self.elements.a * (1.0 - self.elements.e) < self.model.earth_radius
    }
}
