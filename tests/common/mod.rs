//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use earth_orbits::SimulationPlugin;
use earth_orbits::clock::SimulationClock;
use earth_orbits::orbit::{OrbitalElements, PerturbationModel};
use earth_orbits::satellite::Satellite;
use earth_orbits::scenarios::{PropagationMode, SatelliteSpec, ScenarioConfig};
use earth_orbits::types::EARTH_RADIUS_KM;

/// Real seconds per headless frame.
pub const FRAME_SECONDS: f64 = 0.1;

/// The reference low Earth orbit: a = 7000 km, e = 0.001, i = 45°,
/// 10 m² on 1000 kg.
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

/// Low circular orbit with a large area-to-mass ratio.
pub fn draggy_orbit(altitude_km: f64, inclination: f64) -> OrbitalElements {
    OrbitalElements::new(
        EARTH_RADIUS_KM + altitude_km,
        0.0,
        inclination,
        0.0,
        0.0,
        0.0,
        100.0,
        10.0,
    )
}

/// Elements that build fine but blow up on the first long step: already
/// inside the atmosphere with an absurd area-to-mass ratio.
pub fn doomed_orbit() -> OrbitalElements {
    OrbitalElements::new(6000.0, 0.0, 0.3, 0.0, 0.0, 0.0, 1.0e6, 1.0e-3)
}

pub fn perturbed(name: &str, elements: OrbitalElements) -> Satellite {
    Satellite::new(name, elements, PerturbationModel::perturbed()).expect("valid test orbit")
}

/// Tick a satellite `steps` times by `dt`.
pub fn run_ticks(satellite: &mut Satellite, steps: usize, dt: f64) {
    for _ in 0..steps {
        satellite.tick(dt).expect("tick should succeed");
    }
}

pub fn spec(name: &str, elements: OrbitalElements, mode: PropagationMode) -> SatelliteSpec {
    SatelliteSpec {
        name: name.to_string(),
        elements,
        mode,
        color: Color::WHITE,
    }
}

/// Headless app running the simulation with a fixed frame time.
///
/// The first update only runs startup; every later update advances the
/// clock by `FRAME_SECONDS` of real time.
pub fn simulation_app(config: ScenarioConfig, clock: SimulationClock) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            FRAME_SECONDS,
        )))
        .insert_resource(config)
        .insert_resource(clock)
        .add_plugins(SimulationPlugin);
    app.update();
    app
}

/// Snapshot of every satellite, sorted by name.
pub fn satellites(app: &mut App) -> Vec<(Entity, Satellite, Transform)> {
    let mut query = app
        .world_mut()
        .query::<(Entity, &Satellite, &Transform)>();
    let mut rows: Vec<_> = query
        .iter(app.world())
        .map(|(entity, sat, transform)| (entity, sat.clone(), *transform))
        .collect();
    rows.sort_by(|a, b| a.1.name.cmp(&b.1.name));
    rows
}
