//! Time controls panel at the bottom of the screen.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::clock::{SLIDER_MAX, SimulationClock};
use crate::scenarios::ResetSimulation;
use crate::types::format_elapsed;

/// Human-readable speed factor, e.g. "1x", "294x", "86400x".
pub fn speed_label(factor: f64) -> String {
    if factor < 10.0 {
        format!("{:.1}x", factor)
    } else {
        format!("{:.0}x", factor)
    }
}

/// System that renders the time controls panel.
pub fn time_controls_panel(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    mut reset_messages: MessageWriter<ResetSimulation>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("time_controls").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            // Play/Pause button
            let icon = if clock.paused { "\u{25B6}" } else { "\u{23F8}" };
            if ui
                .button(icon)
                .on_hover_text(if clock.paused {
                    "Play (Space)"
                } else {
                    "Pause (Space)"
                })
                .clicked()
            {
                clock.paused = !clock.paused;
            }

            ui.separator();

            // Elapsed simulated time
            ui.label(egui::RichText::new(format_elapsed(clock.elapsed)).monospace());

            ui.separator();

            // Logarithmic speed slider
            ui.label("Speed:");
            let mut slider = clock.slider;
            let response = ui.add(
                egui::Slider::new(&mut slider, 0.0..=SLIDER_MAX)
                    .show_value(false)
                    .clamping(egui::SliderClamping::Always),
            );
            if response.changed() {
                clock.slider = slider;
            }
            ui.label(egui::RichText::new(speed_label(clock.speed_factor())).monospace());

            ui.separator();

            // Reset button
            if ui
                .button("\u{21BA}")
                .on_hover_text("Reset simulation (R)")
                .clicked()
            {
                reset_messages.write(ResetSimulation);
            }
        });
    });
}
