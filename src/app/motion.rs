//! Motion primitives the decision core can ask for.
//!
//! The core only speaks in these symbols.  What a `Left` means in wheel
//! speeds is calibration owned by the chassis driver.

use core::fmt;

/// The closed set of chassis motions.
///
/// Names come from the line pattern that selects them, not from how hard
/// the chassis turns; see [`velocity_for`](crate::drivers::chassis::velocity_for).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionCommand {
    /// Straight ahead, line centred.
    Forward,
    /// Outer pair on the left (`1100`).
    Left,
    /// Outer pair on the right (`0011`).
    Right,
    /// Three sensors, left side (`1110`).
    TurnLeft,
    /// Three sensors, right side (`0111`).
    TurnRight,
    /// Leftmost sensor alone (`1000`).
    MiniLeft,
    /// Rightmost sensor alone (`0001`).
    MiniRight,
    /// Zero velocity.
    Stop,
}

impl MotionCommand {
    pub const ALL: [Self; 8] = [
        Self::Forward,
        Self::Left,
        Self::Right,
        Self::TurnLeft,
        Self::TurnRight,
        Self::MiniLeft,
        Self::MiniRight,
        Self::Stop,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Left => "left",
            Self::Right => "right",
            Self::TurnLeft => "turn_left",
            Self::TurnRight => "turn_right",
            Self::MiniLeft => "mini_left",
            Self::MiniRight => "mini_right",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for MotionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction for the auxiliary (pickup) motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxDirection {
    Forward,
    Reverse,
    Stop,
}
