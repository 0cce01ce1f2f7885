//! Satellite configuration and spawning.
//!
//! The satellites present at startup come from the [`ScenarioConfig`]
//! resource, which defaults to the preset constellation. A
//! [`ResetSimulation`] message despawns every satellite, rewinds the clock
//! and respawns the configured set.

pub mod presets;

use bevy::prelude::*;

use crate::clock::SimulationClock;
use crate::physics::SimulationSet;
use crate::orbit::{OrbitalElements, PerturbationModel};
use crate::satellite::{Satellite, SatelliteError};

/// Which perturbation terms a satellite is propagated with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropagationMode {
    /// Two-body motion only.
    Keplerian,
    /// J2 oblateness and atmospheric drag.
    #[default]
    Perturbed,
}

impl PropagationMode {
    pub fn model(self) -> PerturbationModel {
        match self {
            PropagationMode::Keplerian => PerturbationModel::keplerian(),
            PropagationMode::Perturbed => PerturbationModel::perturbed(),
        }
    }
}

/// Initial conditions for one satellite.
#[derive(Clone, Debug)]
pub struct SatelliteSpec {
    /// Display name.
    pub name: String,
    /// Elements at spawn time.
    pub elements: OrbitalElements,
    /// Perturbation terms to apply.
    pub mode: PropagationMode,
    /// Marker color.
    pub color: Color,
}

impl SatelliteSpec {
    /// Build the satellite component described by this spec.
    pub fn build(&self) -> Result<Satellite, SatelliteError> {
        Satellite::new(self.name.clone(), self.elements, self.mode.model())
    }
}

/// Marker color for a satellite entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct SatelliteColor(pub Color);

/// Resource listing the satellites to spawn.
#[derive(Resource, Clone, Debug)]
pub struct ScenarioConfig {
    pub satellites: Vec<SatelliteSpec>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            satellites: presets::all_presets(),
        }
    }
}

/// Message to trigger a full simulation reset.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ResetSimulation;

/// Plugin providing satellite spawning and reset.
pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScenarioConfig>()
            .add_message::<ResetSimulation>()
            .add_systems(Startup, spawn_configured_satellites)
            .add_systems(Update, handle_reset.before(SimulationSet::Clock));
    }
}

/// Spawn a satellite entity from a spec.
///
/// The entity starts at the satellite's initial scene position.
pub fn spawn_satellite(
    commands: &mut Commands,
    spec: &SatelliteSpec,
) -> Result<Entity, SatelliteError> {
    let satellite = spec.build()?;
    let translation = satellite.position().as_vec3();

    Ok(commands
        .spawn((
            satellite,
            SatelliteColor(spec.color),
            Name::new(spec.name.clone()),
            Transform::from_translation(translation),
        ))
        .id())
}

/// Spawn every configured satellite, skipping the ones that fail to build.
fn spawn_all(commands: &mut Commands, config: &ScenarioConfig) -> usize {
    let mut spawned = 0;
    for spec in &config.satellites {
        match spawn_satellite(commands, spec) {
            Ok(_) => spawned += 1,
            Err(err) => warn!("Skipping satellite '{}': {}", spec.name, err),
        }
    }
    spawned
}

fn spawn_configured_satellites(mut commands: Commands, config: Res<ScenarioConfig>) {
    let spawned = spawn_all(&mut commands, &config);
    info!("Spawned {} of {} satellites", spawned, config.satellites.len());
}

/// System to handle simulation reset.
///
/// When a `ResetSimulation` message is received:
/// 1. Despawns all existing satellites
/// 2. Rewinds the simulation clock (speed is kept)
/// 3. Spawns the configured satellites again
pub fn handle_reset(
    mut commands: Commands,
    mut reset_messages: MessageReader<ResetSimulation>,
    mut clock: ResMut<SimulationClock>,
    satellites: Query<Entity, With<Satellite>>,
    config: Res<ScenarioConfig>,
) {
    // Only process if there's a reset message
    if reset_messages.read().next().is_none() {
        return;
    }
    reset_messages.clear();

    info!("Resetting simulation...");

    for entity in satellites.iter() {
        commands.entity(entity).despawn();
    }

    clock.reset();
    let spawned = spawn_all(&mut commands, &config);

    info!("Simulation reset complete ({} satellites)", spawned);
}
