//! Actuator drivers.

pub mod aux_motor;
pub mod chassis;
