//! Port traits: the hexagonal boundary between the decision core and the robot.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DecisionLoop (domain)
//! ```
//!
//! Driven adapters (sensors, chassis, event sinks, config storage) implement
//! these traits.  The [`DecisionLoop`](super::controller::DecisionLoop)
//! consumes them via generics, so the core never touches a bus directly.
//!
//! ## Error contract
//!
//! - Sensor reads never fail outward.  A bus fault makes a line read return
//!   `None` and a distance read return [`DistanceReading::Unavailable`]; the
//!   loop simply tries again next tick.
//! - `Err` from a [`MotionPort`] means the actuator is gone for good.  The
//!   loop propagates it without retrying.

use crate::config::ControllerConfig;
use crate::error::Result;

use super::events::AppEvent;
use super::motion::{AuxDirection, MotionCommand};
use super::readings::{DistanceReading, LineReading};

// ───────────────────────────────────────────────────────────────
// Sensor ports (driven adapters: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// The 4-channel line follower.
pub trait LineSensorPort {
    /// Read the bitmask.  `None` if the sensor gave no data this time.
    fn read_line(&mut self) -> Option<LineReading>;
}

/// The forward ultrasonic ranger.
pub trait DistanceSensorPort {
    fn read_distance(&mut self) -> DistanceReading;
}

// ───────────────────────────────────────────────────────────────
// Motion port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Chassis drive plus the auxiliary motor.
pub trait MotionPort {
    /// Set the chassis motion.  Fire-and-forget; repeating a command is
    /// harmless.
    fn drive(&mut self, cmd: MotionCommand) -> Result<()>;

    /// Set the auxiliary motor.  Persists until the next call.
    fn set_aux(&mut self, dir: AuxDirection) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The loop emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: calibration file → domain)
// ───────────────────────────────────────────────────────────────

/// Read-only source of calibration.
///
/// Implementations MUST validate after loading.
pub trait ConfigPort {
    /// Load configuration.  Returns [`ControllerConfig::default()`] if no
    /// stored config exists.
    fn load(&self) -> core::result::Result<ControllerConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// Stored config could not be parsed.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
