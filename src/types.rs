//! Physical constants and unit conversions shared by the simulation.

/// Physical constants (km, kg, s)

/// Earth's standard gravitational parameter (km³/s²)
pub const MU_EARTH: f64 = 398_600.4418;

/// Second zonal harmonic of Earth's gravity field (dimensionless)
pub const J2_EARTH: f64 = 1.082_626_68e-3;

/// Equatorial Earth radius in km, used by the perturbation terms
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Mean Earth radius in km, used for the rendered globe
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Sidereal rotation rate of the Earth (rad/s)
pub const EARTH_ROTATION_RATE: f64 = 7.292_115_9e-5;

/// Scene units per kilometer: 1 render unit = 1000 km.
pub const SCENE_SCALE: f64 = 1.0 / 1000.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Format a simulated duration in seconds as "Dd HH:MM:SS".
pub fn format_elapsed(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let days = total / 86400;
    let hours = (total % 86400) / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, secs)
}
