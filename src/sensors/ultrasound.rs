//! I²C ultrasonic ranger.
//!
//! Distance is two consecutive registers, low byte first, in millimetres.
//! The module also drives two RGB LEDs; that side is not used here.

use embedded_hal::i2c::{Error as _, I2c};
use log::warn;

use crate::app::readings::DistanceReading;
use crate::pins::UltrasoundMap;

pub struct UltrasoundSensor {
    map: UltrasoundMap,
    failures: u32,
}

impl UltrasoundSensor {
    pub fn new(map: UltrasoundMap) -> Self {
        Self { map, failures: 0 }
    }

    /// Read the distance.  A bus error is `Unavailable`, never `0 mm`.
    pub fn read<I: I2c>(&mut self, bus: &mut I) -> DistanceReading {
        let mut buf = [0u8; 2];
        match bus.write_read(self.map.address, &[self.map.distance_lo], &mut buf) {
            Ok(()) => DistanceReading::Millimetres(u16::from_le_bytes(buf)),
            Err(e) => {
                self.failures = self.failures.saturating_add(1);
                warn!("Ultrasound read failed: {:?}", e.kind());
                DistanceReading::Unavailable
            }
        }
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }
}
