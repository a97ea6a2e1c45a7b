// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed trapezoidal speed ramp.
//!
//! The ramp is expressed as an iterator of [`ProfileStep`]s so it can be driven either by the
//! blocking executor in [`MotionProfile::run`] or by a timer, one step per period.
//!
//! ```text
//!  duty
//!   ^        cruise
//!   |      +--------+
//!   |     /|        |\
//!   |    / |        | \
//!   |   /  |        |  \
//!   +--+---+--------+---+--> step
//!    start accel  decel  end
//! ```

use core::iter::FusedIterator;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::ProfileConfig;
use crate::drivers::{Direction, MotorDriver};
use crate::hw::PwmChannel;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Accelerate,
    Cruise,
    Decelerate,
}

/// One point of the ramp.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileStep {
    pub index: u32,
    pub phase: Phase,
    pub duty: u16,
}

/// Step generator for a [`ProfileConfig`].
///
/// Accelerating steps emit a running counter that starts at `base_duty` and rises by one per
/// step. Decelerating steps emit the same counter and lower it by one per step, so the ramp
/// down mirrors the ramp up.
#[derive(Clone, Debug)]
pub struct Steps {
    config: ProfileConfig,
    index: u32,
    counter: u16,
}

impl Iterator for Steps {
    type Item = ProfileStep;

    fn next(&mut self) -> Option<ProfileStep> {
        if self.index >= self.config.end_step {
            return None;
        }
        let index = self.index;
        self.index += 1;

        let (phase, duty) = if index < self.config.accel_end {
            let duty = self.counter;
            self.counter = self.counter.saturating_add(1);
            (Phase::Accelerate, duty)
        } else if index < self.config.decel_start {
            (Phase::Cruise, self.config.cruise_duty)
        } else {
            let duty = self.counter;
            self.counter = self.counter.saturating_sub(1);
            (Phase::Decelerate, duty)
        };

        Some(ProfileStep { index, phase, duty })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.config.end_step.saturating_sub(self.index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Steps {}
impl FusedIterator for Steps {}

/// The preprogrammed acceleration / cruise / deceleration run.
#[derive(Copy, Clone, Debug, Default)]
pub struct MotionProfile {
    config: ProfileConfig,
}

impl MotionProfile {
    pub const fn new(config: ProfileConfig) -> Self {
        Self { config }
    }

    pub fn steps(&self) -> Steps {
        Steps {
            config: self.config,
            index: self.config.start_step,
            counter: self.config.base_duty,
        }
    }

    /// Play the whole ramp forward, blocking for `step_delay_ms` after every step.
    ///
    /// On completion the direction lines are dropped and the waveform is left running.
    pub fn run<IN1, IN2, PWM, D>(&self, driver: &mut MotorDriver<IN1, IN2, PWM, D>)
    where
        IN1: OutputPin,
        IN2: OutputPin,
        PWM: PwmChannel,
        D: DelayNs,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("profile start, {=u32} steps", self.config.len());

        driver.set_direction(Direction::Forward);
        for step in self.steps() {
            driver.set_duty(step.duty as u32);
            driver.start_pwm();
            driver.pause_ms(self.config.step_delay_ms);
        }
        driver.release();

        #[cfg(feature = "defmt")]
        defmt::debug!("profile done");
    }
}
