//! Rendering systems for the Earth orbit visualizer.
//!
//! This module provides visual representation of the Earth, satellites,
//! their osculating orbits, and background elements. Positions themselves
//! are written by the propagation system; rendering only reads them.

mod background;
pub mod bodies;
pub mod orbits;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::BodiesPlugin;
use self::orbits::OrbitPathPlugin;

pub use self::bodies::Earth;
pub use self::orbits::OrbitPathSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodiesPlugin, BackgroundPlugin, OrbitPathPlugin));
    }
}
