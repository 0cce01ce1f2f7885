//! Per-frame satellite propagation.
//!
//! Runs in Bevy's Update schedule after the simulation clock has been
//! advanced, so every satellite covers exactly the simulated time the
//! clock reports for the frame.

mod integrator;

use bevy::prelude::*;

pub use integrator::{PropagationSettings, rk4_step};

use crate::clock::SimulationClock;
use crate::satellite::{Satellite, SatelliteStatus};

/// Ordering of the simulation systems within a frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Convert real frame time into simulated time.
    Clock,
    /// Advance satellite elements and publish positions.
    Propagate,
}

/// Plugin providing satellite propagation.
///
/// Adds systems for:
/// - Orbital element integration (RK4) in Update
/// - Status tracking for faulted and decayed satellites
pub struct PropagationPlugin;

impl Plugin for PropagationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PropagationSettings>()
            .configure_sets(
                Update,
                (SimulationSet::Clock, SimulationSet::Propagate).chain(),
            )
            .add_systems(
                Update,
                propagate_satellites.in_set(SimulationSet::Propagate),
            );
    }
}

/// Main propagation system.
///
/// Advances every active satellite by the clock's simulated delta and
/// writes the resulting scene position into its `Transform`. A satellite
/// whose step fails is frozen at its last good state; one whose perigee
/// falls below the surface is marked decayed.
pub fn propagate_satellites(
    mut satellites: Query<(&mut Satellite, &mut Transform)>,
    clock: Res<SimulationClock>,
    settings: Res<PropagationSettings>,
) {
    let dt = clock.last_delta;

    // Skip if no time to advance
    if dt <= 0.0 {
        return;
    }

    for (mut satellite, mut transform) in satellites.iter_mut() {
        if !satellite.status().is_active() {
            continue;
        }

        match satellite.advance(dt, &settings) {
            Ok(position) => {
                transform.translation = position.as_vec3();
            }
            Err(err) => {
                warn!("Satellite '{}' stopped propagating: {}", satellite.name, err);
                satellite.set_status(SatelliteStatus::Faulted(err));
                transform.translation = satellite.position().as_vec3();
                continue;
            }
        }

        if satellite.has_decayed() {
            debug!(
                "Satellite '{}' perigee below surface (a = {:.3} km, e = {:.5})",
                satellite.name,
                satellite.elements().a,
                satellite.elements().e
            );
            info!("Satellite '{}' has re-entered", satellite.name);
            satellite.set_status(SatelliteStatus::Decayed);
        }
    }
}
