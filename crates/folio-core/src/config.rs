//! Application configuration, built once at startup and passed down.
//!
//! Every field defaults to the matching constant in [`crate::constants`]; the
//! web frontend constructs a single [`AppConfig`] in its start routine and
//! hands references to each mounted widget instead of consulting globals.

use crate::constants::*;
use std::time::Duration;

/// Orbit geometry and rotation cadence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    /// Radius used for items at even positions.
    pub outer_radius: f64,
    /// Radius used for items at odd positions.
    pub inner_radius: f64,
    pub tick_period: Duration,
    pub step_degrees: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            outer_radius: ORBIT_OUTER_RADIUS,
            inner_radius: ORBIT_INNER_RADIUS,
            tick_period: Duration::from_millis(ORBIT_TICK_MS),
            step_degrees: ORBIT_STEP_DEGREES,
        }
    }
}

/// Camera, geometry and motion parameters of the decorative background object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera_z: f32,
    pub outer_size: f32,
    pub inner_size: f32,
    pub color: [f32; 3],
    pub outer_opacity: f32,
    pub inner_opacity: f32,
    pub outer_spin: f32,
    pub inner_spin: f32,
    pub float_amplitude: f32,
    pub float_rate_per_ms: f64,
    pub pointer_gain: f32,
    pub ambient: f32,
    pub directional: f32,
    pub light_position: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: CAMERA_FOV_Y_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            camera_z: CAMERA_Z,
            outer_size: OUTER_CUBE_SIZE,
            inner_size: INNER_CUBE_SIZE,
            color: CUBE_COLOR,
            outer_opacity: OUTER_CUBE_OPACITY,
            inner_opacity: INNER_CUBE_OPACITY,
            outer_spin: OUTER_SPIN_PER_FRAME,
            inner_spin: INNER_SPIN_PER_FRAME,
            float_amplitude: FLOAT_AMPLITUDE,
            float_rate_per_ms: FLOAT_RATE_PER_MS,
            pointer_gain: POINTER_SPIN_GAIN,
            ambient: AMBIENT_INTENSITY,
            directional: DIRECTIONAL_INTENSITY,
            light_position: DIRECTIONAL_POSITION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Fraction of the viewport height the top edge of a section must cross to be revealed.
    pub reveal_start_fraction: f64,
    pub smooth_duration_sec: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            reveal_start_fraction: REVEAL_START_FRACTION,
            smooth_duration_sec: SMOOTH_SCROLL_DURATION_SEC,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactConfig {
    pub simulated_delay: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_delay: Duration::from_millis(CONTACT_SIMULATED_DELAY_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub orbit: OrbitConfig,
    pub scene: SceneConfig,
    pub scroll: ScrollConfig,
    pub contact: ContactConfig,
}
