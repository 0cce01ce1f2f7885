//! Orbital-element propagation model.
//!
//! Plain math with no engine state: the element set, its rate equations
//! under J2 and drag, and the conversion to scene coordinates.

pub mod cartesian;
pub mod elements;
pub mod perturbation;

#[cfg(test)]
mod proptest_orbit;

pub use cartesian::{inertial_position, inertial_to_scene, scene_position};
pub use elements::{ConfigurationError, ElementState, OrbitalElements, STATE_LEN};
pub use perturbation::{AtmosphereModel, DomainError, PerturbationModel, check_domain};
