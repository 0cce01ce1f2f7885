//! UI module providing egui-based interface.
//!
//! A bottom bar with the simulation clock controls and a floating window
//! listing every satellite with its status and current elements.

mod satellite_list;
mod time_controls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use satellite_list::element_summary;
pub use time_controls::speed_label;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>().add_systems(
            EguiPrimaryContextPass,
            (
                // Bottom panel first so the window is laid out above it
                time_controls::time_controls_panel,
                satellite_list::satellite_list_panel,
            )
                .chain(),
        );
    }
}

/// Global UI state.
#[derive(Resource)]
pub struct UiState {
    /// Whether the satellite list window is shown.
    pub satellite_list_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            satellite_list_open: true,
        }
    }
}
