//! Keyboard shortcuts for simulation time and display toggles.

use bevy::prelude::*;

use crate::clock::{SLIDER_MAX, SimulationClock, slider_from_speed_factor};
use crate::render::OrbitPathSettings;
use crate::scenarios::ResetSimulation;
use crate::ui::UiState;

/// Slider increment for `[` and `]`.
pub const SLIDER_STEP: f64 = 10.0;

/// Speed factors bound to the number keys 1 to 4.
pub const QUICK_SPEEDS: [f64; 4] = [1.0, 60.0, 3600.0, 86400.0];

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// Move the speed slider by `delta`, staying inside its range.
pub fn nudge_slider(clock: &mut SimulationClock, delta: f64) {
    clock.slider = (clock.slider + delta).clamp(0.0, SLIDER_MAX);
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
    mut ui_state: ResMut<UiState>,
    mut orbit_settings: ResMut<OrbitPathSettings>,
    mut reset_messages: MessageWriter<ResetSimulation>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.paused = !clock.paused;
        info!("Simulation {}", if clock.paused { "paused" } else { "running" });
    }

    // [ and ]: step the logarithmic speed slider
    if keys.just_pressed(KeyCode::BracketLeft) {
        nudge_slider(&mut clock, -SLIDER_STEP);
        info!("Speed: {:.0}x", clock.speed_factor());
    }

    if keys.just_pressed(KeyCode::BracketRight) {
        nudge_slider(&mut clock, SLIDER_STEP);
        info!("Speed: {:.0}x", clock.speed_factor());
    }

    // Quick speed selection with number keys
    let digits = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4];
    for (key, factor) in digits.into_iter().zip(QUICK_SPEEDS) {
        if keys.just_pressed(key) {
            clock.slider = slider_from_speed_factor(factor);
            info!("Speed: {}x", factor);
        }
    }

    if keys.just_pressed(KeyCode::KeyO) {
        orbit_settings.visible = !orbit_settings.visible;
    }

    if keys.just_pressed(KeyCode::KeyL) {
        ui_state.satellite_list_open = !ui_state.satellite_list_open;
    }

    // R: reset simulation (clock and satellites)
    if keys.just_pressed(KeyCode::KeyR) {
        reset_messages.write(ResetSimulation);
    }
}
