//! Trackbot controller library.
//!
//! Line following with a one-shot obstacle pickup for a mecanum-wheeled
//! Raspberry Pi robot.  Everything except the binary's peripheral setup
//! lives here, so the decision core runs on any host against mock ports.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;
