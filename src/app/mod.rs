//! Application core: pure decision logic, zero I/O.
//!
//! Line classification, the obstacle one-shot and the run loop live here.
//! All interaction with the robot happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod classifier;
pub mod controller;
pub mod events;
pub mod interrupt;
pub mod motion;
pub mod ports;
pub mod readings;
pub mod state;
