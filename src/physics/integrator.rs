//! Numerical integrator for the orbital element state.
//!
//! Classical fourth-order Runge-Kutta over a fixed-size state vector.
//! The derivative function may fail, in which case the step is abandoned
//! and the caller keeps its previous state.

use bevy::prelude::Resource;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for live propagation.
#[derive(Resource, Clone, Debug)]
pub struct PropagationSettings {
    /// Largest simulated time covered by a single RK4 step, in seconds.
    /// Frame deltas above this are split into equal sub-steps. Default: 60.
    pub max_step: f64,
    /// Upper bound on sub-steps per frame. Default: 1440 (one day at 60 s).
    pub max_substeps: usize,
}

impl Default for PropagationSettings {
    fn default() -> Self {
        Self {
            max_step: 60.0,
            max_substeps: 1440,
        }
    }
}

impl PropagationSettings {
    /// Split a frame delta into `(count, step)` equal sub-steps.
    ///
    /// Returns `(0, 0.0)` for a non-positive delta. The step count is capped
    /// at `max_substeps`, in which case each step grows beyond `max_step`.
    pub fn substeps(&self, dt: f64) -> (usize, f64) {
        if !(dt > 0.0) {
            return (0, 0.0);
        }
        let wanted = (dt / self.max_step.max(f64::MIN_POSITIVE)).ceil() as usize;
        let count = wanted.clamp(1, self.max_substeps.max(1));
        (count, dt / count as f64)
    }
}

// =============================================================================
// Runge-Kutta 4
// =============================================================================

/// `state + k * h`, element-wise.
fn offset<const N: usize>(state: &[f64; N], k: &[f64; N], h: f64) -> [f64; N] {
    std::array::from_fn(|j| state[j] + k[j] * h)
}

/// Advance `state` by `dt` with one classical RK4 step.
///
/// ```text
/// k1 = f(y)
/// k2 = f(y + k1·dt/2)
/// k3 = f(y + k2·dt/2)
/// k4 = f(y + k3·dt)
/// y' = y + (k1 + 2k2 + 2k3 + k4)·dt/6
/// ```
///
/// The input is never modified; the advanced state is returned only when
/// all four derivative evaluations succeed.
pub fn rk4_step<const N: usize, F, E>(state: &[f64; N], dt: f64, f: F) -> Result<[f64; N], E>
where
    F: Fn(&[f64; N]) -> Result<[f64; N], E>,
{
    let half = dt * 0.5;

    let k1 = f(state)?;
    let k2 = f(&offset(state, &k1, half))?;
    let k3 = f(&offset(state, &k2, half))?;
    let k4 = f(&offset(state, &k3, dt))?;

    Ok(std::array::from_fn(|j| {
        state[j] + (k1[j] + 2.0 * k2[j] + 2.0 * k3[j] + k4[j]) * (dt / 6.0)
    }))
}

// =============================================================================
// Tests
// =============================================================================
