// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Console-facing motor controller.
//!
//! Bundles the [`MotorDriver`], the [`TimedRunController`] and the [`MotionProfile`] and maps
//! each parsed [`Command`] onto them. The board keeps one of these in a
//! [`Shared`](crate::shared::Shared) so the tick interrupt can reach
//! [`on_tick`](MotorControl::on_tick).
//!
//! Every foreground command disarms the tick interrupt before it blocks or touches the motor.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::MotorConfig;
use crate::control::{MotionProfile, RunState, TimedRunController};
use crate::drivers::MotorDriver;
use crate::error::CommandError;
use crate::hw::{PwmChannel, TickSource};
use crate::protocol::Command;

pub struct MotorControl<IN1, IN2, PWM, D, T> {
    driver: MotorDriver<IN1, IN2, PWM, D>,
    timed: TimedRunController<T>,
    profile: MotionProfile,
    default_pulse: u16,
    initialized: bool,
}

impl<IN1, IN2, PWM, D, T> MotorControl<IN1, IN2, PWM, D, T>
where
    IN1: OutputPin,
    IN2: OutputPin,
    PWM: PwmChannel,
    D: DelayNs,
    T: TickSource,
{
    pub fn new(
        driver: MotorDriver<IN1, IN2, PWM, D>,
        tick: T,
        profile: MotionProfile,
        config: &MotorConfig,
    ) -> Self {
        Self {
            driver,
            timed: TimedRunController::new(tick),
            profile,
            default_pulse: config.default_pulse,
            initialized: false,
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn run_state(&self) -> RunState {
        self.timed.state()
    }

    pub fn timed(&self) -> &TimedRunController<T> {
        &self.timed
    }

    /// Execute one console command.
    ///
    /// Nothing is written to the motor when an error is returned.
    pub fn execute(&mut self, cmd: Command) -> Result<(), CommandError> {
        match cmd {
            Command::Help => Ok(()),
            Command::Init => {
                self.initialize();
                Ok(())
            }
            _ if !self.initialized => Err(CommandError::NotInitialized),
            Command::Run { direction, duty } => {
                self.run(direction, duty);
                Ok(())
            }
            Command::RunTimed {
                direction,
                duty,
                ticks,
            } => {
                self.timed.start_timed(&mut self.driver, direction, duty, ticks);
                Ok(())
            }
            Command::RunProfile => {
                self.run_profile();
                Ok(())
            }
        }
    }

    /// Put the motor into its power-on state: lines low, default pulse loaded, waveform off.
    pub fn initialize(&mut self) {
        self.timed.cancel();
        self.driver.release();
        self.driver.set_duty(self.default_pulse as u32);
        self.driver.stop_pwm();
        self.initialized = true;
        #[cfg(feature = "defmt")]
        defmt::info!("motor initialized");
    }

    /// Untimed run. Direction code 0 is a full brake.
    pub fn run(&mut self, direction: u32, duty: u32) {
        self.timed.cancel();
        if direction == 0 {
            self.driver.brake();
        } else {
            self.driver.run_code(direction, duty);
        }
    }

    /// Play the fixed ramp. Blocks for the whole profile.
    pub fn run_profile(&mut self) {
        self.timed.cancel();
        self.profile.run(&mut self.driver);
    }

    /// Tick interrupt body.
    pub fn on_tick(&mut self) -> bool {
        self.timed.on_tick(&mut self.driver)
    }
}
