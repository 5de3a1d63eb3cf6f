//! Auxiliary DC motor driver (DRV8833, one H-bridge channel).
//!
//! Two digital inputs select the bridge state:
//!
//! | AIN1 | AIN2 | Motor   |
//! |------|------|---------|
//! | H    | L    | forward |
//! | L    | H    | reverse |
//! | L    | L    | coast   |
//!
//! The pin being released is always written first so the bridge never
//! passes through the brake state on a direction change.

use embedded_hal::digital::OutputPin;
use log::info;

use crate::app::motion::AuxDirection;
use crate::error::ActuatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxMotorState {
    Stopped,
    Forward,
    Reverse,
}

pub struct AuxMotorDriver<A: OutputPin, B: OutputPin> {
    ain1: A,
    ain2: B,
    state: AuxMotorState,
}

impl<A: OutputPin, B: OutputPin> AuxMotorDriver<A, B> {
    /// Take the pins and drive both low.
    pub fn new(ain1: A, ain2: B) -> Result<Self, ActuatorError> {
        let mut driver = Self {
            ain1,
            ain2,
            state: AuxMotorState::Stopped,
        };
        driver.stop()?;
        Ok(driver)
    }

    pub fn set(&mut self, dir: AuxDirection) -> Result<(), ActuatorError> {
        match dir {
            AuxDirection::Forward => {
                self.ain2.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
                self.ain1.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?;
                self.state = AuxMotorState::Forward;
            }
            AuxDirection::Reverse => {
                self.ain1.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
                self.ain2.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?;
                self.state = AuxMotorState::Reverse;
            }
            AuxDirection::Stop => return self.stop(),
        }
        info!("Aux motor {:?}", self.state);
        Ok(())
    }

    /// Both inputs low.  Both pins are attempted even if the first fails.
    pub fn stop(&mut self) -> Result<(), ActuatorError> {
        let a = self.ain1.set_low();
        let b = self.ain2.set_low();
        if a.is_err() || b.is_err() {
            return Err(ActuatorError::GpioWriteFailed);
        }
        if self.state != AuxMotorState::Stopped {
            info!("Aux motor stopped");
        }
        self.state = AuxMotorState::Stopped;
        Ok(())
    }

    pub fn state(&self) -> AuxMotorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != AuxMotorState::Stopped
    }

    /// `(ain1, ain2)`, for inspecting level history.
    #[cfg(test)]
    fn pins(&self) -> (&A, &B) {
        (&self.ain1, &self.ain2)
    }
}
