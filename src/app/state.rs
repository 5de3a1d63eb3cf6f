//! Cross-cycle controller state.
//!
//! Two flags, one transition:
//!
//! ```text
//!   ARMED  (sensing on, not reacted)
//!     │
//!     │ [distance <= threshold]  latch_obstacle()
//!     ▼
//!   REACTED (sensing off, reacted) ── no way back within a run
//! ```

/// The only state the decision loop carries from one cycle to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    /// Whether the distance sensor is still polled this run.
    pub distance_sensing_enabled: bool,
    /// Whether the one-shot avoidance sequence has fired.
    pub obstacle_reacted: bool,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerState {
    /// Fresh run: sensing enabled, nothing reacted to yet.
    pub const fn new() -> Self {
        Self {
            distance_sensing_enabled: true,
            obstacle_reacted: false,
        }
    }

    /// Poll distance this cycle?
    pub const fn should_poll_distance(&self) -> bool {
        self.distance_sensing_enabled && !self.obstacle_reacted
    }

    /// Record that the avoidance sequence fired.  Returns `false` if it had
    /// already been latched, in which case nothing changes.
    pub fn latch_obstacle(&mut self) -> bool {
        if self.obstacle_reacted {
            return false;
        }
        self.obstacle_reacted = true;
        self.distance_sensing_enabled = false;
        true
    }
}
