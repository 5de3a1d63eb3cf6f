//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! `log` facade (stderr through `env_logger` on the robot).  Per-cycle noise
//! goes to `debug`; run milestones go to `info`.

use log::{debug, info};

use crate::app::events::{AppEvent, RunOutcome};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { tick_interval_ms } => {
                info!("START | tick={}ms", tick_interval_ms);
            }
            AppEvent::ObstacleDetected { distance } => {
                info!("OBSTACLE | distance={}", distance);
            }
            AppEvent::AvoidanceComplete => {
                info!("AVOID | sequence complete, distance sensing disarmed");
            }
            AppEvent::LineUnavailable => {
                debug!("LINE | no reading this cycle");
            }
            AppEvent::Finished(outcome) => {
                let outcome = match outcome {
                    RunOutcome::Completed => "completed",
                    RunOutcome::Interrupted => "interrupted",
                };
                info!("FINISH | {}", outcome);
            }
            AppEvent::Summary(s) => {
                info!(
                    "SUMMARY | cycles={} distance_reads={} line_reads={} \
                     line_unavailable={} drive_commands={}",
                    s.cycles, s.distance_reads, s.line_reads, s.line_unavailable, s.drive_commands,
                );
            }
        }
    }
}
