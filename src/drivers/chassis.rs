//! Mecanum chassis driver.
//!
//! Turns a symbolic [`MotionCommand`] into a `(speed, heading, rotation)`
//! velocity, resolves that into four wheel speeds and writes them to the
//! expansion board's motor registers.
//!
//! ```text
//!   front
//!  1 ┌───┐ 2        vx = v·cos θ     v1 = vy + vx − vp
//!    │   │          vy = v·sin θ     v2 = vy − vx + vp
//!  4 └───┘ 3        vp = −ω·(a+b)    v3 = vy − vx − vp
//!                                    v4 = vy + vx + vp
//! ```
//!
//! θ = 90° is straight ahead.  Wheel speeds are signed percent, clamped to
//! ±100, written one register per motor as a two's-complement byte.

use embedded_hal::i2c::{Error as _, I2c};
use log::{debug, warn};

use crate::app::motion::MotionCommand;
use crate::error::ActuatorError;
use crate::pins::MotorBoardMap;

/// Cruise speed used by every moving command (percent of full scale).
pub const CRUISE_SPEED: f64 = 35.0;

/// Chassis velocity in the board's units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChassisVelocity {
    /// Linear speed, 0–100.
    pub speed: f64,
    /// Heading in degrees; 90 is forward, larger values bias left.
    pub heading_deg: f64,
    /// Rotation rate; positive spins counter-clockwise.
    pub angular_rate: f64,
}

impl ChassisVelocity {
    pub const ZERO: Self = Self {
        speed: 0.0,
        heading_deg: 0.0,
        angular_rate: 0.0,
    };

    const fn heading(deg: f64) -> Self {
        Self {
            speed: CRUISE_SPEED,
            heading_deg: deg,
            angular_rate: 0.0,
        }
    }
}

/// Calibration table: what each primitive means on this chassis.
///
/// The headings are empirical values tuned on the track, not a graded
/// scale; `MiniRight` leans harder than `Right`, and `TurnRight` least.
pub const fn velocity_for(cmd: MotionCommand) -> ChassisVelocity {
    match cmd {
        MotionCommand::Forward => ChassisVelocity::heading(90.0),
        MotionCommand::Left => ChassisVelocity::heading(110.0),
        MotionCommand::Right => ChassisVelocity::heading(20.0),
        MotionCommand::TurnLeft => ChassisVelocity::heading(130.0),
        MotionCommand::TurnRight => ChassisVelocity::heading(30.0),
        MotionCommand::MiniLeft => ChassisVelocity::heading(115.0),
        MotionCommand::MiniRight => ChassisVelocity::heading(15.0),
        MotionCommand::Stop => ChassisVelocity::ZERO,
    }
}

/// Wheelbase half-lengths (mm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub a: f64,
    pub b: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self { a: 67.0, b: 59.0 }
    }
}

/// Resolve a chassis velocity into wheel speeds `[v1, v2, v3, v4]`.
pub fn wheel_speeds(v: ChassisVelocity, geometry: Geometry) -> [i8; 4] {
    let theta = v.heading_deg.to_radians();
    let vx = v.speed * theta.cos();
    let vy = v.speed * theta.sin();
    let vp = -v.angular_rate * (geometry.a + geometry.b);

    [vy + vx - vp, vy - vx + vp, vy - vx - vp, vy + vx + vp]
        .map(|w| (w.trunc() as i32).clamp(-100, 100) as i8)
}

// ───────────────────────────────────────────────────────────────
// Driver
// ───────────────────────────────────────────────────────────────

pub struct MecanumChassis {
    map: MotorBoardMap,
    geometry: Geometry,
}

impl MecanumChassis {
    pub fn new(map: MotorBoardMap) -> Self {
        Self {
            map,
            geometry: Geometry::default(),
        }
    }

    /// Write all four wheels for `cmd`.  Every wheel is attempted even if an
    /// earlier write fails, so a stop reaches as many motors as possible.
    pub fn apply<I: I2c>(&mut self, bus: &mut I, cmd: MotionCommand) -> Result<(), ActuatorError> {
        let wheels = wheel_speeds(velocity_for(cmd), self.geometry);
        debug!("Chassis {} -> {:?}", cmd, wheels);

        let mut result = Ok(());
        for (i, speed) in wheels.into_iter().enumerate() {
            let reg = self.map.motor_base_reg + i as u8;
            if let Err(e) = bus.write(self.map.address, &[reg, speed as u8]) {
                warn!("Motor {} write failed: {:?}", i + 1, e.kind());
                result = Err(ActuatorError::BusWriteFailed);
            }
        }

        result
    }
}
