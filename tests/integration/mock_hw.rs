//! Mock robot for integration tests.
//!
//! Records every port call (sensor reads, chassis commands, aux motor
//! commands, sleeps) into one shared, ordered log so tests can assert on
//! the full interleaving without touching a bus.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;

use trackbot::app::events::AppEvent;
use trackbot::app::interrupt::InterruptFlag;
use trackbot::app::motion::{AuxDirection, MotionCommand};
use trackbot::app::ports::{DistanceSensorPort, EventSink, LineSensorPort, MotionPort};
use trackbot::app::readings::{DistanceReading, LineReading};
use trackbot::error::{ActuatorError, Result};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    ReadDistance,
    ReadLine,
    Drive(MotionCommand),
    Aux(AuxDirection),
    Sleep(u32),
}

/// Ordered call log shared by [`MockRobot`] and [`MockDelay`].
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    trip: Option<(usize, InterruptFlag)>,
}

impl Recorder {
    fn record(&mut self, call: Call) {
        self.calls.push(call);
        if let Some((n, flag)) = &self.trip {
            if self.calls.len() == *n {
                flag.raise();
            }
        }
    }
}

pub type Log = Rc<RefCell<Recorder>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Recorder::default()))
}

/// Raise `flag` as soon as the log holds `n` calls.
pub fn raise_after(log: &Log, n: usize, flag: &InterruptFlag) {
    log.borrow_mut().trip = Some((n, flag.clone()));
}

pub fn calls(log: &Log) -> Vec<Call> {
    log.borrow().calls.clone()
}

#[allow(dead_code)]
pub fn count(log: &Log, call: Call) -> usize {
    log.borrow().calls.iter().filter(|c| **c == call).count()
}

/// Parse `"0110"` (s1 first) into a reading.
pub fn line(pattern: &str) -> LineReading {
    let mut sensors = [false; 4];
    for (i, c) in pattern.chars().enumerate() {
        sensors[i] = c == '1';
    }
    LineReading::from_sensors(sensors)
}

// ── MockRobot ─────────────────────────────────────────────────

/// Scripted sensors plus recording actuators.
///
/// An exhausted distance script reads far away; an exhausted line script
/// reads the end-of-course marker so every run terminates.
pub struct MockRobot {
    log: Log,
    distances: VecDeque<DistanceReading>,
    lines: VecDeque<Option<LineReading>>,
    /// Fail the drive call with this 1-based index.
    fail_drive: Option<usize>,
    drives: usize,
    /// Fail every aux motor command.
    fail_aux: bool,
}

#[allow(dead_code)]
impl MockRobot {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            distances: VecDeque::new(),
            lines: VecDeque::new(),
            fail_drive: None,
            drives: 0,
            fail_aux: false,
        }
    }

    pub fn distances_mm(mut self, mm: impl IntoIterator<Item = u16>) -> Self {
        self.distances
            .extend(mm.into_iter().map(DistanceReading::Millimetres));
        self
    }

    pub fn distance(mut self, reading: DistanceReading) -> Self {
        self.distances.push_back(reading);
        self
    }

    pub fn lines<'a>(mut self, patterns: impl IntoIterator<Item = &'a str>) -> Self {
        self.lines
            .extend(patterns.into_iter().map(|p| Some(line(p))));
        self
    }

    pub fn line_unavailable(mut self) -> Self {
        self.lines.push_back(None);
        self
    }

    pub fn fail_drive(mut self, nth: usize) -> Self {
        self.fail_drive = Some(nth);
        self
    }

    pub fn fail_aux(mut self) -> Self {
        self.fail_aux = true;
        self
    }
}

impl DistanceSensorPort for MockRobot {
    fn read_distance(&mut self) -> DistanceReading {
        self.log.borrow_mut().record(Call::ReadDistance);
        self.distances
            .pop_front()
            .unwrap_or(DistanceReading::Millimetres(1_000))
    }
}

impl LineSensorPort for MockRobot {
    fn read_line(&mut self) -> Option<LineReading> {
        self.log.borrow_mut().record(Call::ReadLine);
        self.lines
            .pop_front()
            .unwrap_or(Some(LineReading::ALL_ON))
    }
}

impl MotionPort for MockRobot {
    fn drive(&mut self, cmd: MotionCommand) -> Result<()> {
        self.drives += 1;
        if self.fail_drive == Some(self.drives) {
            return Err(ActuatorError::BusWriteFailed.into());
        }
        self.log.borrow_mut().record(Call::Drive(cmd));
        Ok(())
    }

    fn set_aux(&mut self, dir: AuxDirection) -> Result<()> {
        if self.fail_aux {
            return Err(ActuatorError::GpioWriteFailed.into());
        }
        self.log.borrow_mut().record(Call::Aux(dir));
        Ok(())
    }
}

// ── MockDelay ─────────────────────────────────────────────────

/// Records sleeps instead of sleeping.
pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().record(Call::Sleep(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().record(Call::Sleep(ms));
    }
}

// ── Event sink ────────────────────────────────────────────────

/// Sink that keeps every event.
#[derive(Default)]
pub struct CollectSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for CollectSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
