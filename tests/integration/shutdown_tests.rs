//! Every exit path leaves the robot stopped.

use trackbot::app::controller::DecisionLoop;
use trackbot::app::events::{AppEvent, RunOutcome};
use trackbot::app::interrupt::InterruptFlag;
use trackbot::app::motion::{AuxDirection, MotionCommand};
use trackbot::config::ControllerConfig;
use trackbot::error::{ActuatorError, Error};

use crate::mock_hw::{
    Call, CollectSink, Log, MockDelay, MockRobot, calls, count, new_log, raise_after,
};

use crate::mock_hw::Call::{Aux, Drive, ReadDistance, ReadLine, Sleep};

const PARK: [Call; 2] = [Drive(MotionCommand::Stop), Aux(AuxDirection::Stop)];

/// Run to completion, drop the loop, return the outcome.
fn run_with(hw: MockRobot, log: &Log, flag: InterruptFlag) -> Result<RunOutcome, Error> {
    let mut dl = DecisionLoop::new(hw, MockDelay::new(log), ControllerConfig::default(), flag);
    dl.run(&mut CollectSink::default())
}

/// Calls recorded after the first `n`.
fn tail(log: &Log, n: usize) -> Vec<Call> {
    calls(log)[n..].to_vec()
}

#[test]
fn interrupt_during_tick_stops_once() {
    let log = new_log();
    let flag = InterruptFlag::new();
    // ReadDistance, ReadLine, Drive(Forward), Sleep(100)
    raise_after(&log, 4, &flag);
    let hw = MockRobot::new(&log).lines(["0110"; 3]);

    let outcome = run_with(hw, &log, flag).unwrap();

    assert_eq!(outcome, RunOutcome::Interrupted);
    assert_eq!(tail(&log, 4), PARK);
    assert_eq!(count(&log, Drive(MotionCommand::Stop)), 1);
}

#[test]
fn interrupt_during_settle_stops_once_more() {
    let log = new_log();
    let flag = InterruptFlag::new();
    // ReadDistance, Drive(Stop), Sleep(1000)
    raise_after(&log, 3, &flag);
    let hw = MockRobot::new(&log).distances_mm([20]).lines(["0110"]);

    let outcome = run_with(hw, &log, flag).unwrap();

    assert_eq!(outcome, RunOutcome::Interrupted);
    assert_eq!(
        calls(&log)[..3],
        [ReadDistance, Drive(MotionCommand::Stop), Sleep(1_000)]
    );
    assert_eq!(tail(&log, 3), PARK, "no nudge after the interrupt");
}

#[test]
fn interrupt_during_engage_releases_aux() {
    let log = new_log();
    let flag = InterruptFlag::new();
    // ReadDistance, Stop, Sleep, Forward, Sleep, Stop, Aux(Forward), Sleep(5000)
    raise_after(&log, 8, &flag);
    let hw = MockRobot::new(&log).distances_mm([20]).lines(["0110"]);

    run_with(hw, &log, flag).unwrap();

    assert_eq!(calls(&log)[7], Sleep(5_000));
    assert_eq!(tail(&log, 8), PARK);
    assert_eq!(count(&log, ReadLine), 0);
}

#[test]
fn interrupt_during_release_reports_interrupted() {
    let log = new_log();
    let flag = InterruptFlag::new();
    // ReadDistance, ReadLine, Drive(Stop), Aux(Reverse), Sleep(5000)
    raise_after(&log, 5, &flag);
    let hw = MockRobot::new(&log).lines(["1111"]);

    let outcome = run_with(hw, &log, flag).unwrap();

    assert_eq!(outcome, RunOutcome::Interrupted);
    assert_eq!(tail(&log, 5), PARK);
}

#[test]
fn interrupt_before_start_reads_nothing() {
    let log = new_log();
    let flag = InterruptFlag::new();
    flag.raise();
    let hw = MockRobot::new(&log);

    let outcome = run_with(hw, &log, flag).unwrap();

    assert_eq!(outcome, RunOutcome::Interrupted);
    assert_eq!(calls(&log), PARK);
}

#[test]
fn fatal_aux_fault_parks_and_propagates() {
    let log = new_log();
    // ReadDistance, Stop, Sleep, Forward, Sleep, Stop, then the aux engage fails
    let hw = MockRobot::new(&log).distances_mm([5]).fail_aux();
    let mut dl = DecisionLoop::new(
        hw,
        MockDelay::new(&log),
        ControllerConfig::default(),
        InterruptFlag::new(),
    );
    let mut sink = CollectSink::default();

    let result = dl.run(&mut sink);
    drop(dl);

    assert_eq!(result, Err(Error::Actuator(ActuatorError::GpioWriteFailed)));
    assert_eq!(
        calls(&log)[5..],
        [Drive(MotionCommand::Stop), Drive(MotionCommand::Stop)],
        "chassis still stopped although the aux stop failed too"
    );
    assert_eq!(count(&log, ReadLine), 0);
    assert!(!sink.events.iter().any(|e| matches!(e, AppEvent::Finished(_))));
    assert!(matches!(sink.events.last(), Some(AppEvent::Summary(_))));
}

#[test]
fn fatal_drive_fault_still_attempts_stop() {
    let log = new_log();
    let hw = MockRobot::new(&log).lines(["0110"]).fail_drive(1);

    let result = run_with(hw, &log, InterruptFlag::new());

    assert_eq!(result, Err(Error::Actuator(ActuatorError::BusWriteFailed)));
    assert_eq!(calls(&log), [&[ReadDistance, ReadLine][..], &PARK[..]].concat());
}

#[test]
fn drop_parks_a_moving_robot() {
    let log = new_log();
    let hw = MockRobot::new(&log).lines(["0110"]);
    let mut dl = DecisionLoop::new(
        hw,
        MockDelay::new(&log),
        ControllerConfig::default(),
        InterruptFlag::new(),
    );

    dl.step(&mut CollectSink::default()).unwrap();
    assert_eq!(calls(&log)[2], Drive(MotionCommand::Forward));
    drop(dl);

    assert_eq!(tail(&log, 4), PARK);
}
