//! Earth Orbits - Satellite Propagation Visualizer
//!
//! A desktop application showing satellites around a rotating Earth,
//! propagated with J2 and atmospheric drag under adjustable time
//! acceleration.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use earth_orbits::SimulationPlugin;
use earth_orbits::camera::CameraPlugin;
use earth_orbits::input::InputPlugin;
use earth_orbits::render::RenderPlugin;
use earth_orbits::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Earth Orbits".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(ClearColor(Color::BLACK))
        // Add simulation plugins
        .add_plugins((SimulationPlugin, CameraPlugin, RenderPlugin))
        .add_plugins((UiPlugin, InputPlugin))
        .run();
}
