//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements          | Connects to                 |
//! |---------------|---------------------|-----------------------------|
//! | `config_file` | ConfigPort          | JSON calibration file       |
//! | `hardware`    | LineSensorPort      | I²C line follower           |
//! |               | DistanceSensorPort  | I²C ultrasonic ranger       |
//! |               | MotionPort          | I²C motor board, GPIO H-bridge |
//! | `log_sink`    | EventSink           | `log` facade                |
//! | `time`        | DelayNs             | `std::thread::sleep`        |

pub mod config_file;
pub mod hardware;
pub mod log_sink;
pub mod time;
