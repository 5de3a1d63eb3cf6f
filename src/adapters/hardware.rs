//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the shared I²C bus, both sensors, the chassis and the auxiliary
//! motor, exposing them through [`LineSensorPort`], [`DistanceSensorPort`]
//! and [`MotionPort`].  This is the only module that touches hardware.
//!
//! Bus faults are transient here.  A failed sensor read becomes "no
//! reading"; a failed chassis write is logged and the next cycle's command
//! rewrites every wheel anyway.  Only GPIO failures on the aux motor reach
//! the loop as errors.

use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use log::warn;

use crate::app::motion::{AuxDirection, MotionCommand};
use crate::app::ports::{DistanceSensorPort, LineSensorPort, MotionPort};
use crate::app::readings::{DistanceReading, LineReading};
use crate::drivers::aux_motor::AuxMotorDriver;
use crate::drivers::chassis::MecanumChassis;
use crate::error::Result;
use crate::pins;
use crate::sensors::line::LineFollowerSensor;
use crate::sensors::ultrasound::UltrasoundSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I, A, B>
where
    I: I2c,
    A: OutputPin,
    B: OutputPin,
{
    bus: I,
    line: LineFollowerSensor,
    ultrasound: UltrasoundSensor,
    chassis: MecanumChassis,
    aux: AuxMotorDriver<A, B>,
    chassis_write_failures: u32,
}

impl<I, A, B> HardwareAdapter<I, A, B>
where
    I: I2c,
    A: OutputPin,
    B: OutputPin,
{
    pub fn new(bus: I, aux: AuxMotorDriver<A, B>) -> Self {
        Self {
            bus,
            line: LineFollowerSensor::new(pins::LINE_FOLLOWER),
            ultrasound: UltrasoundSensor::new(pins::ULTRASOUND),
            chassis: MecanumChassis::new(pins::MOTOR_BOARD),
            aux,
            chassis_write_failures: 0,
        }
    }

    /// Transient bus faults absorbed so far, across all devices.
    pub fn bus_faults(&self) -> u32 {
        self.line.failures() + self.ultrasound.failures() + self.chassis_write_failures
    }
}

// ── Sensor ports ──────────────────────────────────────────────

impl<I, A, B> LineSensorPort for HardwareAdapter<I, A, B>
where
    I: I2c,
    A: OutputPin,
    B: OutputPin,
{
    fn read_line(&mut self) -> Option<LineReading> {
        self.line.read(&mut self.bus)
    }
}

impl<I, A, B> DistanceSensorPort for HardwareAdapter<I, A, B>
where
    I: I2c,
    A: OutputPin,
    B: OutputPin,
{
    fn read_distance(&mut self) -> DistanceReading {
        self.ultrasound.read(&mut self.bus)
    }
}

// ── Motion port ───────────────────────────────────────────────

impl<I, A, B> MotionPort for HardwareAdapter<I, A, B>
where
    I: I2c,
    A: OutputPin,
    B: OutputPin,
{
    fn drive(&mut self, cmd: MotionCommand) -> Result<()> {
        if let Err(e) = self.chassis.apply(&mut self.bus, cmd) {
            self.chassis_write_failures = self.chassis_write_failures.saturating_add(1);
            warn!("Chassis {} not delivered: {}", cmd, e);
        }
        Ok(())
    }

    fn set_aux(&mut self, dir: AuxDirection) -> Result<()> {
        self.aux.set(dir)?;
        Ok(())
    }
}
