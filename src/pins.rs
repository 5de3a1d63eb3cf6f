//! Bus addresses, register maps and GPIO assignments for the robot.
//!
//! Single source of truth: every driver takes its map from here rather than
//! hard-coding addresses.  Each I2C peripheral gets its own typed map so the
//! decision core never sees a register number.
//!
//! GPIO numbers are BCM numbering (what `rppal` expects).

// ---------------------------------------------------------------------------
// I²C bus
// ---------------------------------------------------------------------------

/// `/dev/i2c-1`, the header I²C bus on every Pi since the model B rev 2.
pub const I2C_BUS: u8 = 1;

// ---------------------------------------------------------------------------
// 4-channel line follower
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFollowerMap {
    pub address: u8,
    /// Register holding the sensor bitmask in its low nibble.
    pub state_reg: u8,
}

pub const LINE_FOLLOWER: LineFollowerMap = LineFollowerMap {
    address: 0x78,
    state_reg: 1,
};

// ---------------------------------------------------------------------------
// I²C ultrasonic ranger (with RGB "eyes", which we leave alone)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UltrasoundMap {
    pub address: u8,
    /// Distance low byte (mm); the high byte follows at `distance_lo + 1`.
    pub distance_lo: u8,
}

pub const ULTRASOUND: UltrasoundMap = UltrasoundMap {
    address: 0x77,
    distance_lo: 0,
};

// ---------------------------------------------------------------------------
// Expansion board motor channels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorBoardMap {
    pub address: u8,
    /// Register for motor 1; motors 2–4 follow consecutively.
    pub motor_base_reg: u8,
}

pub const MOTOR_BOARD: MotorBoardMap = MotorBoardMap {
    address: 0x7A,
    motor_base_reg: 31,
};

// ---------------------------------------------------------------------------
// Auxiliary DC motor (DRV8833 channel A)
// ---------------------------------------------------------------------------

/// AIN1, header pin 15.
pub const AUX_AIN1_GPIO: u8 = 22;
/// AIN2, header pin 18.
pub const AUX_AIN2_GPIO: u8 = 24;
