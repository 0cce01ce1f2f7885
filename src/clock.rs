//! Simulation clock: speed control and simulated time.
//!
//! Real frame time is scaled by a factor chosen on a logarithmic slider,
//! from real time (1x) up to one simulated day per second (86400x).

use bevy::prelude::*;

use crate::physics::SimulationSet;

/// Slowest speed factor (slider at 0).
pub const MIN_SPEED_FACTOR: f64 = 1.0;

/// Fastest speed factor (slider at [`SLIDER_MAX`]).
pub const MAX_SPEED_FACTOR: f64 = 86400.0;

/// Upper end of the linear speed slider.
pub const SLIDER_MAX: f64 = 100.0;

/// Map a linear slider position in `[0, 100]` to a speed factor.
///
/// `factor = exp(ln(min) + (ln(max) − ln(min)) / 100 · slider)`
pub fn speed_factor_from_slider(slider: f64) -> f64 {
    let slider = slider.clamp(0.0, SLIDER_MAX);
    let min = MIN_SPEED_FACTOR.ln();
    let max = MAX_SPEED_FACTOR.ln();
    (min + (max - min) / SLIDER_MAX * slider).exp()
}

/// Inverse of [`speed_factor_from_slider`], clamped to the slider range.
pub fn slider_from_speed_factor(factor: f64) -> f64 {
    let factor = factor.clamp(MIN_SPEED_FACTOR, MAX_SPEED_FACTOR);
    let min = MIN_SPEED_FACTOR.ln();
    let max = MAX_SPEED_FACTOR.ln();
    (factor.ln() - min) / (max - min) * SLIDER_MAX
}

/// Simulation-wide time state, passed explicitly to every system that
/// advances the simulation.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Speed slider position in `[0, 100]`.
    pub slider: f64,
    /// Whether simulation is paused
    pub paused: bool,
    /// Simulated seconds since start
    pub elapsed: f64,
    /// Simulated seconds covered by the most recent frame
    pub last_delta: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            slider: 0.0,
            paused: false,
            elapsed: 0.0,
            last_delta: 0.0,
        }
    }
}

impl SimulationClock {
    /// Clock starting at the given speed factor.
    pub fn with_speed_factor(factor: f64) -> Self {
        Self {
            slider: slider_from_speed_factor(factor),
            ..Default::default()
        }
    }

    /// Current speed multiplier.
    pub fn speed_factor(&self) -> f64 {
        speed_factor_from_slider(self.slider)
    }

    /// Consume `real_dt` wall-clock seconds and return the simulated delta.
    ///
    /// Returns zero while paused or for non-positive input.
    pub fn advance(&mut self, real_dt: f64) -> f64 {
        let dt = if self.paused || !(real_dt > 0.0) {
            0.0
        } else {
            real_dt * self.speed_factor()
        };
        self.last_delta = dt;
        self.elapsed += dt;
        dt
    }

    /// Rewind to the start, keeping the speed setting.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.last_delta = 0.0;
    }
}

/// Plugin providing simulated time advancement.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, advance_clock.in_set(SimulationSet::Clock));
    }
}

/// Advance the clock by this frame's real delta.
fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.advance(time.delta_secs_f64());
}
