//! Camera system for the Earth orbit visualizer.
//!
//! A perspective camera orbiting the Earth: scroll to zoom, middle or
//! right mouse drag to rotate around the globe.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};

use crate::types::{EARTH_MEAN_RADIUS_KM, SCENE_SCALE};

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 45.0;

/// Near clipping plane in render units.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clipping plane in render units.
pub const FAR_PLANE: f32 = 1_000_000.0;

/// Initial camera distance: four Earth radii.
pub const DEFAULT_DISTANCE: f32 = (4.0 * EARTH_MEAN_RADIUS_KM * SCENE_SCALE) as f32;

/// Closest zoom, just outside the globe.
pub const MIN_DISTANCE: f32 = (1.2 * EARTH_MEAN_RADIUS_KM * SCENE_SCALE) as f32;

/// Furthest zoom, well beyond geostationary altitude.
pub const MAX_DISTANCE: f32 = 300.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Rotation speed in radians per pixel of mouse motion.
pub const ORBIT_SPEED: f32 = 0.005;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking the orbiting camera.
#[derive(Resource, Clone, Debug)]
pub struct CameraState {
    /// Distance from the origin in render units.
    pub distance: f32,
    /// Rotation about the scene's up axis (rad).
    pub yaw: f32,
    /// Elevation above the equatorial plane (rad).
    pub pitch: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl CameraState {
    /// Camera transform looking at the origin.
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        let eye = rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y)
    }

    /// Apply a scroll delta (positive zooms in).
    pub fn zoom(&mut self, scroll: f32) {
        let zoom_factor = 1.0 - scroll * ZOOM_SPEED;
        self.distance = (self.distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Apply a mouse drag in pixels.
    pub fn orbit(&mut self, delta: Vec2) {
        let limit = std::f32::consts::FRAC_PI_2 - 0.01;
        self.yaw -= delta.x * ORBIT_SPEED;
        self.pitch = (self.pitch + delta.y * ORBIT_SPEED).clamp(-limit, limit);
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_zoom, camera_orbit, apply_camera_state).chain());
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, state: Res<CameraState>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        state.transform(),
        MainCamera,
    ));
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(mouse_scroll: Res<AccumulatedMouseScroll>, mut state: ResMut<CameraState>) {
    // Skip if no scroll input
    if mouse_scroll.delta.y == 0.0 {
        return;
    }
    state.zoom(mouse_scroll.delta.y);
}

/// Handle middle or right mouse drag for rotating around the Earth.
fn camera_orbit(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut state: ResMut<CameraState>,
) {
    if !mouse_buttons.any_pressed([MouseButton::Middle, MouseButton::Right]) {
        return;
    }
    if mouse_motion.delta == Vec2::ZERO {
        return;
    }
    state.orbit(mouse_motion.delta);
}

fn apply_camera_state(
    state: Res<CameraState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !state.is_changed() {
        return;
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = state.transform();
}
