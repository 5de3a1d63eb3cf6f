//! Decision loop, the hexagonal core.
//!
//! [`DecisionLoop`] owns the controller state and the hardware ports for one
//! run.  Each cycle it fuses the distance and line readings into motion:
//!
//! ```text
//!  DistanceSensorPort ──▶ ┌──────────────────────────┐
//!                         │       DecisionLoop       │ ──▶ MotionPort
//!  LineSensorPort ──────▶ │  state · rules · timing  │ ──▶ EventSink
//!                         └──────────────────────────┘
//! ```
//!
//! 1. If distance sensing is armed, poll the ranger; an object at or inside
//!    the threshold runs the one-shot avoidance sequence.
//! 2. Poll the line sensor and classify.  All-on ends the run; no data does
//!    nothing; anything else is driven.
//! 3. Sleep one tick.
//!
//! ## Stopping guarantee
//!
//! The robot is *parked* once the chassis and auxiliary motor have both
//! been commanded to stop as the run's final act.  Every exit path parks:
//! the end-of-course sequence parks itself, an interrupt or fatal port
//! error parks through [`DecisionLoop::run`], and `Drop` parks anything
//! left running (e.g. a panic unwinding through the loop).

use embedded_hal::delay::DelayNs;
use log::{debug, error, info, warn};

use crate::config::ControllerConfig;
use crate::error::Result;

use super::classifier::{LineDecision, classify};
use super::events::{AppEvent, RunOutcome, RunStats};
use super::interrupt::InterruptFlag;
use super::motion::{AuxDirection, MotionCommand};
use super::ports::{DistanceSensorPort, EventSink, LineSensorPort, MotionPort};
use super::state::ControllerState;

/// Result of a single decision cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// Keep going.
    Continue,
    /// The run is over.
    Finished(RunOutcome),
}

// ───────────────────────────────────────────────────────────────
// DecisionLoop
// ───────────────────────────────────────────────────────────────

/// The decision loop for one run.
///
/// `hw` satisfies every hardware port at once, the same way the robot's
/// single I²C bus does; `delay` provides the blocking sleeps.
pub struct DecisionLoop<H: MotionPort, T: DelayNs> {
    hw: H,
    delay: T,
    config: ControllerConfig,
    state: ControllerState,
    interrupt: InterruptFlag,
    stats: RunStats,
    /// Chassis and aux stopped as a final act; cleared by any later motion.
    parked: bool,
}

impl<H, T> DecisionLoop<H, T>
where
    H: LineSensorPort + DistanceSensorPort + MotionPort,
    T: DelayNs,
{
    /// Take ownership of the hardware for a run.
    ///
    /// `config` is assumed validated (see [`ControllerConfig::validate`]).
    pub fn new(hw: H, delay: T, config: ControllerConfig, interrupt: InterruptFlag) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated config");
        Self {
            hw,
            delay,
            config,
            state: ControllerState::new(),
            interrupt,
            stats: RunStats::default(),
            parked: false,
        }
    }

    // ── Run ───────────────────────────────────────────────────

    /// Cycle until the end-of-course marker, an interrupt, or a fatal
    /// port error.  The robot is parked on every path.
    pub fn run(&mut self, sink: &mut impl EventSink) -> Result<RunOutcome> {
        sink.emit(&AppEvent::Started {
            tick_interval_ms: self.config.tick_interval_ms,
        });
        info!("Decision loop started (tick {} ms)", self.config.tick_interval_ms);

        let result = loop {
            match self.step(sink) {
                Ok(Cycle::Continue) => {}
                Ok(Cycle::Finished(outcome)) => break Ok(outcome),
                Err(e) => break Err(e),
            }
        };

        match result {
            Ok(RunOutcome::Completed) => info!("Course complete"),
            Ok(RunOutcome::Interrupted) => {
                info!("Interrupted, stopping");
                if let Err(e) = self.park() {
                    error!("Stop after interrupt failed: {}", e);
                }
            }
            Err(e) => {
                error!("Fatal fault: {}", e);
                if let Err(stop_err) = self.park() {
                    error!("Stop after fault failed: {}", stop_err);
                }
            }
        }

        if let Ok(outcome) = result {
            sink.emit(&AppEvent::Finished(outcome));
        }
        sink.emit(&AppEvent::Summary(self.stats));
        result
    }

    /// Run one full cycle: distance → line → sleep.
    pub fn step(&mut self, sink: &mut impl EventSink) -> Result<Cycle> {
        if self.interrupt.is_raised() {
            return Ok(Cycle::Finished(RunOutcome::Interrupted));
        }
        self.stats.cycles += 1;

        // 1. Obstacle check (until the one-shot has fired)
        if self.state.should_poll_distance() {
            let distance = self.hw.read_distance();
            self.stats.distance_reads += 1;
            debug!("Distance: {}", distance);

            if distance.is_within(self.config.obstacle_threshold_cm) {
                self.state.latch_obstacle();
                info!("Object detected at {}, avoidance sequence", distance);
                sink.emit(&AppEvent::ObstacleDetected { distance });
                if let Cycle::Finished(outcome) = self.avoid_obstacle()? {
                    return Ok(Cycle::Finished(outcome));
                }
                sink.emit(&AppEvent::AvoidanceComplete);
            }
        }

        // 2. Line following
        let reading = self.hw.read_line();
        self.stats.line_reads += 1;
        match reading {
            None => {
                self.stats.line_unavailable += 1;
                sink.emit(&AppEvent::LineUnavailable);
            }
            Some(reading) => {
                debug!("Sensors: {}", reading);
                match classify(reading) {
                    LineDecision::Terminal => {
                        info!("End-of-course marker {}", reading);
                        return self.finish_course();
                    }
                    LineDecision::Drive(cmd) => self.drive(cmd)?,
                }
            }
        }

        // 3. Tick
        if self.pause(self.config.tick_interval_ms) {
            return Ok(Cycle::Finished(RunOutcome::Interrupted));
        }
        Ok(Cycle::Continue)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    // ── Sequences ─────────────────────────────────────────────

    /// Stop, settle, nudge forward, engage the aux motor.  Blocks for the
    /// whole maneuver; the line sensor is meaningless while it runs.
    fn avoid_obstacle(&mut self) -> Result<Cycle> {
        self.drive(MotionCommand::Stop)?;
        if self.pause(self.config.obstacle_settle_ms) {
            return Ok(Cycle::Finished(RunOutcome::Interrupted));
        }

        self.drive(MotionCommand::Forward)?;
        if self.pause(self.config.nudge_ms) {
            return Ok(Cycle::Finished(RunOutcome::Interrupted));
        }
        self.drive(MotionCommand::Stop)?;

        self.aux_actuate(AuxDirection::Forward, Some(self.config.aux_engage_ms))
    }

    /// Stop and run the aux motor in reverse.  Leaves the robot parked.
    fn finish_course(&mut self) -> Result<Cycle> {
        self.drive(MotionCommand::Stop)?;
        if let Cycle::Finished(outcome) =
            self.aux_actuate(AuxDirection::Reverse, Some(self.config.aux_release_ms))?
        {
            return Ok(Cycle::Finished(outcome));
        }
        self.parked = true;
        Ok(Cycle::Finished(RunOutcome::Completed))
    }

    // ── Primitives ────────────────────────────────────────────

    fn drive(&mut self, cmd: MotionCommand) -> Result<()> {
        self.hw.drive(cmd)?;
        self.stats.drive_commands += 1;
        self.parked = false;
        Ok(())
    }

    /// Run the aux motor.  With a duration: blocks, then stops the motor.
    /// Without: leaves it running.
    fn aux_actuate(&mut self, dir: AuxDirection, duration_ms: Option<u32>) -> Result<Cycle> {
        self.hw.set_aux(dir)?;
        self.parked = false;
        if let Some(ms) = duration_ms {
            debug!("Aux {:?} for {} ms", dir, ms);
            if self.pause(ms) {
                return Ok(Cycle::Finished(RunOutcome::Interrupted));
            }
            self.hw.set_aux(AuxDirection::Stop)?;
        }
        Ok(Cycle::Continue)
    }

    /// Blocking sleep.  Returns `true` if an interrupt arrived meanwhile.
    fn pause(&mut self, ms: u32) -> bool {
        self.delay.delay_ms(ms);
        self.interrupt.is_raised()
    }
}

impl<H: MotionPort, T: DelayNs> DecisionLoop<H, T> {
    /// Stop chassis and aux motor.  Both are attempted even if the first
    /// fails; the first error is returned.
    fn park(&mut self) -> Result<()> {
        let chassis = self.hw.drive(MotionCommand::Stop);
        let aux = self.hw.set_aux(AuxDirection::Stop);
        self.parked = true;
        chassis.and(aux)
    }
}

impl<H: MotionPort, T: DelayNs> Drop for DecisionLoop<H, T> {
    fn drop(&mut self) {
        if !self.parked {
            warn!("Decision loop dropped with motors live, stopping");
            if let Err(e) = self.park() {
                error!("Stop on drop failed: {}", e);
            }
        }
    }
}
