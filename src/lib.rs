//! Earth Orbits - Satellite Propagation Visualizer
//!
//! A library crate providing orbit propagation (J2 oblateness and
//! atmospheric drag over classical elements) and the Bevy plugins that
//! animate it, for testing and integration purposes.

pub mod camera;
pub mod clock;
pub mod input;
pub mod orbit;
pub mod physics;
pub mod render;
pub mod satellite;
pub mod scenarios;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

use bevy::prelude::*;

use clock::ClockPlugin;
use physics::PropagationPlugin;
use scenarios::ScenarioPlugin;

/// Plugin bundling the simulation itself: clock, propagation and the
/// configured satellites. Needs no window or renderer.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((ClockPlugin, PropagationPlugin, ScenarioPlugin));
    }
}
