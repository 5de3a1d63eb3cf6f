//! Sensor readings as the decision core sees them.

use core::fmt;

// ---------------------------------------------------------------------------
// Line reading
// ---------------------------------------------------------------------------

/// 4-bit line-sensor bitmask.  Bit 0 is sensor 1 (leftmost), bit 3 is
/// sensor 4.  A set bit means the sensor sees the line.
///
/// Always in `0..=15`.  A failed read is not a `LineReading` at all; the
/// port hands back `None` instead, so "no data" never looks like `0000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineReading(u8);

impl LineReading {
    /// Mask covering the four sensor bits.
    pub const MASK: u8 = 0x0F;

    /// Every sensor on the line.
    pub const ALL_ON: Self = Self(Self::MASK);

    /// Checked constructor; `None` if any bit above the low nibble is set.
    pub const fn new(bits: u8) -> Option<Self> {
        if bits & !Self::MASK == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Keep the low nibble of a raw register byte.
    pub const fn from_raw(byte: u8) -> Self {
        Self(byte & Self::MASK)
    }

    /// Build from individual sensor states, `[s1, s2, s3, s4]`.
    pub const fn from_sensors(sensors: [bool; 4]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < 4 {
            if sensors[i] {
                bits |= 1 << i;
            }
            i += 1;
        }
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// State of sensor `n` (1-based, `1..=4`).
    pub fn sensor(self, n: u8) -> bool {
        debug_assert!((1..=4).contains(&n), "sensor index out of range: {n}");
        (self.0 >> (n - 1)) & 1 == 1
    }
}

/// Prints `s1 s2 s3 s4` as four digits, e.g. `0110` for a centred line.
impl fmt::Display for LineReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in 1..=4 {
            f.write_str(if self.sensor(n) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Distance reading
// ---------------------------------------------------------------------------

/// Forward distance from the ultrasonic ranger.
///
/// `Unavailable` is distinct from `Millimetres(0)`: the ranger adapter only
/// produces `Millimetres` from a successful bus read, so a zero there really
/// is something touching the bumper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceReading {
    Millimetres(u16),
    Unavailable,
}

impl DistanceReading {
    /// Distance in centimetres (`mm / 10`), `None` when unavailable.
    pub fn centimetres(self) -> Option<f32> {
        match self {
            Self::Millimetres(mm) => Some(f32::from(mm) / 10.0),
            Self::Unavailable => None,
        }
    }

    /// `true` if the reading shows an object at or inside `threshold_cm`.
    /// An unavailable reading never counts as an object.
    pub fn is_within(self, threshold_cm: f32) -> bool {
        self.centimetres().is_some_and(|cm| cm <= threshold_cm)
    }
}

impl fmt::Display for DistanceReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.centimetres() {
            Some(cm) => write!(f, "{cm:.1} cm"),
            None => f.write_str("unavailable"),
        }
    }
}
