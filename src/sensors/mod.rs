//! Sensor drivers.
//!
//! Both sensors sit on the shared I²C bus, so neither owns it: each read
//! borrows the bus from [`HardwareAdapter`](crate::adapters::hardware::HardwareAdapter).

pub mod line;
pub mod ultrasound;
