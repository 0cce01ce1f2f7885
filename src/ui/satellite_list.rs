//! Satellite list panel: status, current elements and removal.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::render::OrbitPathSettings;
use crate::satellite::{Satellite, SatelliteStatus};
use crate::types::{MU_EARTH, RAD_TO_DEG};

use super::UiState;

fn status_color(status: SatelliteStatus) -> egui::Color32 {
    match status {
        SatelliteStatus::Active => egui::Color32::from_rgb(85, 221, 136),
        SatelliteStatus::Faulted(_) => egui::Color32::from_rgb(221, 170, 85),
        SatelliteStatus::Decayed => egui::Color32::from_rgb(150, 150, 160),
    }
}

/// One-line element summary shown under each satellite.
pub fn element_summary(satellite: &Satellite) -> String {
    let elements = satellite.elements();
    let period_min = elements.period(MU_EARTH) / 60.0;
    format!(
        "alt {:.1} km  e {:.4}  i {:.2}°  T {:.1} min",
        elements.altitude(),
        elements.e,
        elements.i * RAD_TO_DEG,
        period_min
    )
}

/// System that renders the satellite list.
pub fn satellite_list_panel(
    mut contexts: EguiContexts,
    mut commands: Commands,
    mut ui_state: ResMut<UiState>,
    mut orbit_settings: ResMut<OrbitPathSettings>,
    satellites: Query<(Entity, &Satellite)>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if !ui_state.satellite_list_open {
        return;
    }

    let mut open = true;
    egui::Window::new("Satellites")
        .open(&mut open)
        .default_pos(egui::pos2(12.0, 12.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.checkbox(&mut orbit_settings.visible, "Show orbits (O)");
            ui.separator();

            let mut rows: Vec<_> = satellites.iter().collect();
            rows.sort_by(|a, b| a.1.name.cmp(&b.1.name));

            if rows.is_empty() {
                ui.label("No satellites. Reset to respawn the configured set.");
            }

            for (entity, satellite) in rows {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&satellite.name).strong());
                    ui.label(
                        egui::RichText::new(satellite.status().label())
                            .color(status_color(satellite.status())),
                    );
                    if ui.small_button("\u{2715}").on_hover_text("Remove").clicked() {
                        info!("Removing satellite '{}'", satellite.name);
                        commands.entity(entity).despawn();
                    }
                });
                let summary = ui.label(egui::RichText::new(element_summary(satellite)).small());
                if let SatelliteStatus::Faulted(err) = satellite.status() {
                    summary.on_hover_text(err.to_string());
                }
                ui.add_space(4.0);
            }
        });

    if !open {
        ui_state.satellite_list_open = false;
    }
}
