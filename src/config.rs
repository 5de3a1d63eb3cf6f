//! Controller calibration parameters
//!
//! All tunable timing and threshold values for the decision loop.  Each
//! default is a named constant so the numbers are documented in one place;
//! a JSON file (see [`crate::adapters::config_file`]) may override them.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Pause between decision cycles (ms).  Bounds the reaction latency to line
/// deviation; must stay above zero so the I²C bus is not saturated.
pub const TICK_INTERVAL_MS: u32 = 100;

/// Hold after the obstacle stop so the chassis has no residual velocity (ms).
pub const OBSTACLE_SETTLE_MS: u32 = 1_000;

/// Length of the forward nudge that closes the last few centimetres to the
/// object (ms).
pub const NUDGE_MS: u32 = 500;

/// An object at or below this distance triggers the avoidance sequence (cm).
pub const OBSTACLE_THRESHOLD_CM: f32 = 4.0;

/// How long the auxiliary motor runs forward to engage the object (ms).
pub const AUX_ENGAGE_MS: u32 = 5_000;

/// How long the auxiliary motor runs in reverse at the end of the course (ms).
pub const AUX_RELEASE_MS: u32 = 5_000;

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // --- Timing ---
    /// Decision-loop tick (milliseconds)
    pub tick_interval_ms: u32,
    /// Settle hold after the obstacle stop (milliseconds)
    pub obstacle_settle_ms: u32,
    /// Forward nudge after settling (milliseconds)
    pub nudge_ms: u32,

    // --- Obstacle ---
    /// Trigger distance (centimetres, inclusive)
    pub obstacle_threshold_cm: f32,

    // --- Auxiliary motor ---
    /// Engage run after an obstacle (milliseconds)
    pub aux_engage_ms: u32,
    /// Release run at end of course (milliseconds)
    pub aux_release_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            obstacle_settle_ms: OBSTACLE_SETTLE_MS,
            nudge_ms: NUDGE_MS,
            obstacle_threshold_cm: OBSTACLE_THRESHOLD_CM,
            aux_engage_ms: AUX_ENGAGE_MS,
            aux_release_ms: AUX_RELEASE_MS,
        }
    }
}

impl ControllerConfig {
    /// Reject values the loop cannot run with.  Invalid values are refused,
    /// never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_interval_ms must be > 0"));
        }
        if !self.obstacle_threshold_cm.is_finite() || self.obstacle_threshold_cm <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "obstacle_threshold_cm must be a positive number",
            ));
        }
        if self.nudge_ms == 0 {
            return Err(ConfigError::ValidationFailed("nudge_ms must be > 0"));
        }
        if self.aux_engage_ms == 0 || self.aux_release_ms == 0 {
            return Err(ConfigError::ValidationFailed("aux durations must be > 0"));
        }
        Ok(())
    }
}
