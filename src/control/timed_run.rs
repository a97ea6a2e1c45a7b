// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Run the motor for a fixed number of ticks, then stop it from the tick interrupt.
//!
//! The controller owns the tick timer and the deadline/elapsed pair. The foreground arms it with
//! [`start_timed`](TimedRunController::start_timed) and the board's timer interrupt calls
//! [`on_tick`](TimedRunController::on_tick). Both paths take `&mut self`, so the board has to
//! share the controller through a critical section (see [`crate::shared::Shared`]); that is what
//! keeps a tick from observing a half-written deadline.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! // foreground
//! timed.start_timed(&mut driver, 1, 600, 2000);
//!
//! // TIMx interrupt
//! timed.on_tick(&mut driver);
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::drivers::MotorDriver;
use crate::hw::{PwmChannel, TickSource};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    Idle,
    Running,
}

pub struct TimedRunController<T> {
    tick: T,
    /// Ticks to run for; the stop happens on tick `deadline + 1`.
    deadline: u32,
    /// Ticks seen since the run was armed. Only `on_tick` increments it.
    elapsed: u32,
    state: RunState,
}

impl<T: TickSource> TimedRunController<T> {
    /// Wrap a tick source. The timer is disarmed.
    pub fn new(mut tick: T) -> Self {
        tick.stop();
        Self {
            tick,
            deadline: 0,
            elapsed: 0,
            state: RunState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Deadline of the most recent run. Not cleared when the run expires.
    #[inline]
    pub fn deadline(&self) -> u32 {
        self.deadline
    }

    /// Disarm the tick interrupt and forget any in-flight countdown.
    ///
    /// Must run before any other command touches the motor so a stale deadline cannot stop it.
    pub fn cancel(&mut self) {
        self.tick.stop();
        #[cfg(feature = "defmt")]
        if self.state == RunState::Running {
            defmt::debug!("timed run cancelled at {=u32}/{=u32}", self.elapsed, self.deadline);
        }
        self.elapsed = 0;
        self.state = RunState::Idle;
    }

    /// Start the motor and arm a countdown of `ticks`.
    ///
    /// Any previous timed run is cancelled first. `direction` is a raw console code, so unknown
    /// codes keep the latched direction as [`MotorDriver::run_code`] does.
    pub fn start_timed<IN1, IN2, PWM, D>(
        &mut self,
        driver: &mut MotorDriver<IN1, IN2, PWM, D>,
        direction: u32,
        duty: u32,
        ticks: u32,
    ) where
        IN1: OutputPin,
        IN2: OutputPin,
        PWM: PwmChannel,
        D: DelayNs,
    {
        self.cancel();
        driver.run_code(direction, duty);
        self.deadline = ticks;
        self.elapsed = 0;
        self.state = RunState::Running;
        self.tick.start();
        #[cfg(feature = "defmt")]
        defmt::debug!("timed run armed for {=u32} ticks", ticks);
    }

    /// Tick interrupt body. Returns `true` on the tick that stopped the motor.
    ///
    /// The stop only drops the direction lines; the PWM waveform is left running.
    pub fn on_tick<IN1, IN2, PWM, D>(&mut self, driver: &mut MotorDriver<IN1, IN2, PWM, D>) -> bool
    where
        IN1: OutputPin,
        IN2: OutputPin,
        PWM: PwmChannel,
        D: DelayNs,
    {
        self.tick.acknowledge();

        // A tick latched just before `cancel` can still be delivered afterwards.
        if self.state != RunState::Running {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(1);
        if self.elapsed > self.deadline {
            driver.release();
            self.elapsed = 0;
            self.state = RunState::Idle;
            self.tick.stop();
            #[cfg(feature = "defmt")]
            defmt::debug!("timed run expired after {=u32} ticks", self.deadline);
            return true;
        }
        false
    }
}
