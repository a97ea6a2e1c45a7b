// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time tunables for the motor core.
//!
//! Defaults reproduce the bench setup: a 1000-count PWM period, 1 kHz tick, and a
//! 100 ms dead time on direction changes.

/// Driver and timer configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorConfig {
    /// Blocking wait before the direction lines change, in milliseconds.
    pub settle_delay_ms: u32,
    /// PWM counter period; duty values are compare counts in `0..=pwm_period`.
    pub pwm_period: u16,
    /// Compare value loaded by `dcinit`, before any speed has been commanded.
    pub default_pulse: u16,
    /// Tick interrupt rate. Timed-run durations are counted in these ticks.
    pub tick_hz: u32,
}

impl MotorConfig {
    pub const fn new() -> Self {
        Self {
            settle_delay_ms: 100,
            pwm_period: 1000,
            default_pulse: 500,
            tick_hz: 1000,
        }
    }

    /// Set the direction-change dead time.
    pub const fn with_settle_delay_ms(mut self, ms: u32) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    /// Set the PWM counter period.
    pub const fn with_pwm_period(mut self, period: u16) -> Self {
        self.pwm_period = period;
        self
    }

    /// Set the compare value preloaded on initialization.
    pub const fn with_default_pulse(mut self, pulse: u16) -> Self {
        self.default_pulse = pulse;
        self
    }

    /// Set the tick interrupt rate.
    pub const fn with_tick_hz(mut self, hz: u32) -> Self {
        self.tick_hz = hz;
        self
    }
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape of the fixed trapezoidal ramp.
///
/// The step index runs over `start_step..end_step`. Steps below `accel_end` accelerate, steps in
/// `accel_end..decel_start` cruise, and the rest decelerate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileConfig {
    pub start_step: u32,
    pub accel_end: u32,
    pub decel_start: u32,
    pub end_step: u32,
    /// Duty of the first accelerating step.
    pub base_duty: u16,
    /// Duty held through the cruise phase.
    pub cruise_duty: u16,
    /// Blocking wait after each step, in milliseconds.
    pub step_delay_ms: u32,
}

impl ProfileConfig {
    pub const fn new() -> Self {
        Self {
            start_step: 300,
            accel_end: 800,
            decel_start: 1300,
            end_step: 1800,
            base_duty: 300,
            cruise_duty: 1000,
            step_delay_ms: 10,
        }
    }

    /// Set the three phase boundaries and the final step.
    pub const fn with_phases(
        mut self,
        start_step: u32,
        accel_end: u32,
        decel_start: u32,
        end_step: u32,
    ) -> Self {
        self.start_step = start_step;
        self.accel_end = accel_end;
        self.decel_start = decel_start;
        self.end_step = end_step;
        self
    }

    /// Set the starting and cruise duty values.
    pub const fn with_duties(mut self, base_duty: u16, cruise_duty: u16) -> Self {
        self.base_duty = base_duty;
        self.cruise_duty = cruise_duty;
        self
    }

    /// Set the per-step wait.
    pub const fn with_step_delay_ms(mut self, ms: u32) -> Self {
        self.step_delay_ms = ms;
        self
    }

    /// Number of steps in the full ramp.
    pub const fn len(&self) -> u32 {
        self.end_step.saturating_sub(self.start_step)
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self::new()
    }
}
