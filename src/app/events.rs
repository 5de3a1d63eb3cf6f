//! Outbound application events.
//!
//! The [`DecisionLoop`](super::controller::DecisionLoop) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use super::readings::DistanceReading;

/// How a run ended, when it ended without a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The end-of-course pattern was seen; robot stopped and released.
    Completed,
    /// The operator cancelled; robot stopped.
    Interrupted,
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Decision cycles started.
    pub cycles: u64,
    /// Distance sensor polls.
    pub distance_reads: u64,
    /// Line sensor polls, including unavailable ones.
    pub line_reads: u64,
    /// Line polls that produced no data.
    pub line_unavailable: u64,
    /// Chassis commands issued.
    pub drive_commands: u64,
}

/// Structured events emitted by the decision core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The loop is about to run its first cycle.
    Started { tick_interval_ms: u32 },

    /// A reading inside the threshold fired the avoidance sequence.
    ObstacleDetected { distance: DistanceReading },

    /// The avoidance sequence ran to the end; line following resumes.
    AvoidanceComplete,

    /// The line sensor gave no data; this cycle does nothing.
    LineUnavailable,

    /// The run is over.
    Finished(RunOutcome),

    /// Final counters, emitted once after `Finished`.
    Summary(RunStats),
}
