//! 4-channel I²C line follower.
//!
//! The module answers a register-select write followed by a plain one-byte
//! read (no repeated start).  The low nibble of that byte is the sensor
//! bitmask, sensor 1 in bit 0.
//!
//! Bus errors are transient from the loop's point of view: they are logged
//! and reported as "no reading" for this cycle.

use embedded_hal::i2c::{Error as _, I2c};
use log::warn;

use crate::app::readings::LineReading;
use crate::pins::LineFollowerMap;

pub struct LineFollowerSensor {
    map: LineFollowerMap,
    failures: u32,
}

impl LineFollowerSensor {
    pub fn new(map: LineFollowerMap) -> Self {
        Self { map, failures: 0 }
    }

    /// Read the bitmask.  `None` on any bus error.
    pub fn read<I: I2c>(&mut self, bus: &mut I) -> Option<LineReading> {
        let mut buf = [0u8; 1];
        let result = bus
            .write(self.map.address, &[self.map.state_reg])
            .and_then(|()| bus.read(self.map.address, &mut buf));

        match result {
            Ok(()) => Some(LineReading::from_raw(buf[0])),
            Err(e) => {
                self.failures = self.failures.saturating_add(1);
                warn!("Line follower read failed: {:?}", e.kind());
                None
            }
        }
    }

    /// Bus errors seen since construction.
    pub fn failures(&self) -> u32 {
        self.failures
    }
}
