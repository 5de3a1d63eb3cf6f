//! Line-sensor classifier as an ordered rule table.
//!
//! ```text
//! ┌──────────┬──────────────────┬──────────────┐
//! │ Priority │ s1 s2 s3 s4      │ Decision     │
//! ├──────────┼──────────────────┼──────────────┤
//! │ 1        │ 1  1  1  1       │ Terminal     │
//! │ 2        │ 0  1  1  0       │ Forward      │
//! │ 3        │ 1  1  0  0       │ Left         │
//! │ 4        │ 0  0  1  1       │ Right        │
//! │ 5        │ 1  1  1  0       │ TurnLeft     │
//! │ 6        │ 0  1  1  1       │ TurnRight    │
//! │ 7        │ 1  0  0  0       │ MiniLeft     │
//! │ 8        │ 0  0  0  1       │ MiniRight    │
//! │ else     │ anything else    │ Stop         │
//! └──────────┴──────────────────┴──────────────┘
//! ```
//!
//! Rules are scanned top to bottom and the first match wins.  The catch-all
//! `Stop` covers all-off and noisy patterns so the robot never drives blind.

use super::motion::MotionCommand;
use super::readings::LineReading;

/// What the classifier tells the loop to do with one line reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineDecision {
    /// Issue this motion.
    Drive(MotionCommand),
    /// End-of-course marker: every sensor on the line.
    Terminal,
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct LineRule {
    pub pattern: LineReading,
    pub decision: LineDecision,
}

const fn rule(sensors: [bool; 4], decision: LineDecision) -> LineRule {
    LineRule {
        pattern: LineReading::from_sensors(sensors),
        decision,
    }
}

const X: bool = true;
const O: bool = false;

/// Rule table in priority order.
pub const RULES: [LineRule; 8] = [
    rule([X, X, X, X], LineDecision::Terminal),
    rule([O, X, X, O], LineDecision::Drive(MotionCommand::Forward)),
    rule([X, X, O, O], LineDecision::Drive(MotionCommand::Left)),
    rule([O, O, X, X], LineDecision::Drive(MotionCommand::Right)),
    rule([X, X, X, O], LineDecision::Drive(MotionCommand::TurnLeft)),
    rule([O, X, X, X], LineDecision::Drive(MotionCommand::TurnRight)),
    rule([X, O, O, O], LineDecision::Drive(MotionCommand::MiniLeft)),
    rule([O, O, O, X], LineDecision::Drive(MotionCommand::MiniRight)),
];

/// Fallback when no rule matches.
pub const FALLBACK: LineDecision = LineDecision::Drive(MotionCommand::Stop);

/// Map a reading to exactly one decision.
pub fn classify(reading: LineReading) -> LineDecision {
    RULES
        .iter()
        .find(|r| r.pattern == reading)
        .map_or(FALLBACK, |r| r.decision)
}
