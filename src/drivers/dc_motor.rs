// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Brushed DC motor on a two-line direction bridge with a single PWM enable.
//!
//! Truth table for the direction lines:
//!
//! | IN1 | IN2 | State   |
//! |-----|-----|---------|
//! | 0   | 0   | Brake   |
//! | 0   | 1   | Forward |
//! | 1   | 0   | Reverse |
//!
//! The PWM channel gates power independently of the lines, so braking the lines does not by
//! itself stop the waveform. Motor state lives only in the pin and timer registers; nothing
//! here caches it.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::MotorConfig;
use crate::hw::PwmChannel;

/// Logical drive direction for the motor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Brake,
    Forward,
    Reverse,
}

impl Direction {
    /// Decode a console direction code. Codes other than 0, 1, 2 have no direction.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Direction::Brake),
            1 => Some(Direction::Forward),
            2 => Some(Direction::Reverse),
            _ => None,
        }
    }
}

/// Exclusive owner of the motor's direction lines, PWM channel and delay provider.
pub struct MotorDriver<IN1, IN2, PWM, D> {
    in1: IN1,
    in2: IN2,
    pwm: PWM,
    delay: D,
    settle_delay_ms: u32,
}

impl<IN1, IN2, PWM, D> MotorDriver<IN1, IN2, PWM, D>
where
    IN1: OutputPin,
    IN2: OutputPin,
    PWM: PwmChannel,
    D: DelayNs,
{
    /// Take ownership of the motor peripherals. Lines start in the brake pattern with PWM off.
    pub fn new(in1: IN1, in2: IN2, pwm: PWM, delay: D, config: &MotorConfig) -> Self {
        let mut drv = Self {
            in1,
            in2,
            pwm,
            delay,
            settle_delay_ms: config.settle_delay_ms,
        };
        drv.write_lines(Direction::Brake);
        drv.pwm.disable();
        drv
    }

    fn write_lines(&mut self, dir: Direction) {
        let (in1, in2) = match dir {
            Direction::Brake => (false, false),
            Direction::Forward => (false, true),
            Direction::Reverse => (true, false),
        };
        // Deassert first so both lines are never high together.
        if !in1 {
            self.in1.set_low().ok();
        }
        if !in2 {
            self.in2.set_low().ok();
        }
        if in1 {
            self.in1.set_high().ok();
        }
        if in2 {
            self.in2.set_high().ok();
        }
    }

    /// Wait out the dead time, then latch `dir` onto the lines. Blocks the caller.
    pub fn set_direction(&mut self, dir: Direction) {
        self.delay.delay_ms(self.settle_delay_ms);
        self.write_lines(dir);
    }

    /// Write the compare register, clamped to the channel period. Returns the value written.
    pub fn set_duty(&mut self, duty: u32) -> u16 {
        let max = self.pwm.get_max_duty();
        let clamped = duty.min(max as u32) as u16;
        #[cfg(feature = "defmt")]
        if clamped as u32 != duty {
            defmt::debug!("duty {=u32} clamped to {=u16}", duty, clamped);
        }
        self.pwm.set_duty(clamped);
        clamped
    }

    #[inline]
    pub fn start_pwm(&mut self) {
        self.pwm.enable();
    }

    #[inline]
    pub fn stop_pwm(&mut self) {
        self.pwm.disable();
    }

    /// Set direction and speed, then start the waveform.
    pub fn run(&mut self, dir: Direction, duty: u32) {
        #[cfg(feature = "defmt")]
        defmt::debug!("run {} duty {=u32}", dir, duty);
        self.set_direction(dir);
        self.set_duty(duty);
        self.start_pwm();
    }

    /// Apply a new duty without touching the lines; whatever direction is latched keeps driving.
    pub fn drive(&mut self, duty: u32) {
        self.set_duty(duty);
        self.start_pwm();
    }

    /// [`run`](Self::run) for a raw console code.
    ///
    /// Unknown codes fall back to [`drive`](Self::drive).
    pub fn run_code(&mut self, code: u32, duty: u32) {
        match Direction::from_code(code) {
            Some(dir) => self.run(dir, duty),
            None => {
                #[cfg(feature = "defmt")]
                defmt::debug!("direction code {=u32} unknown, holding lines", code);
                self.drive(duty);
            }
        }
    }

    /// Full stop: dead time, lines to brake, zero duty, waveform off.
    pub fn brake(&mut self) {
        self.set_direction(Direction::Brake);
        self.pwm.set_duty(0);
        self.pwm.disable();
    }

    /// Drop both lines immediately. The waveform keeps running.
    ///
    /// Safe to call from interrupt context: no delay.
    #[inline]
    pub fn release(&mut self) {
        self.write_lines(Direction::Brake);
    }

    /// Block on the driver's delay provider.
    #[inline]
    pub fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{self, Event, HwState, Line};

    #[test]
    fn test_new_leaves_lines_low_and_pwm_off() {
        let (_drv, log) = mock::fresh_driver();
        assert_eq!(
            log.events(),
            [
                Event::Pin(Line::In1, false),
                Event::Pin(Line::In2, false),
                Event::PwmOff,
            ]
        );
    }

    #[test]
    fn test_run_sets_line_pattern_and_duty() {
        for (dir, in1, in2) in [
            (Direction::Brake, false, false),
            (Direction::Forward, false, true),
            (Direction::Reverse, true, false),
        ] {
            let (mut drv, log) = mock::driver();
            drv.run(dir, 640);

            let st = log.state();
            assert_eq!((st.in1, st.in2), (in1, in2), "{:?}", dir);
            assert_eq!(st.duty, 640);
            assert!(st.pwm_on);
        }
    }

    #[test]
    fn test_run_waits_before_touching_lines() {
        let (mut drv, log) = mock::driver();
        drv.run(Direction::Forward, 10);

        let events = log.events();
        assert_eq!(events[0], Event::DelayMs(100));
        assert_eq!(events.last(), Some(&Event::PwmOn));
        let duty_at = events.iter().position(|e| *e == Event::Duty(10)).unwrap();
        let last_pin = events
            .iter()
            .rposition(|e| matches!(e, Event::Pin(..)))
            .unwrap();
        assert!(last_pin < duty_at);
    }

    #[test]
    fn test_direction_switch_never_overlaps_lines() {
        let (mut drv, log) = mock::driver();
        drv.run(Direction::Forward, 100);
        drv.run(Direction::Reverse, 100);

        let mut in1 = false;
        let mut in2 = false;
        for ev in log.events() {
            match ev {
                Event::Pin(Line::In1, l) => in1 = l,
                Event::Pin(Line::In2, l) => in2 = l,
                _ => {}
            }
            assert!(!(in1 && in2));
        }
        assert_eq!((in1, in2), (true, false));
    }

    #[test]
    fn test_unknown_code_holds_previous_direction() {
        let (mut drv, log) = mock::driver();
        drv.run(Direction::Reverse, 200);
        log.clear();

        drv.run_code(7, 450);

        let events = log.events();
        assert!(!events.iter().any(|e| matches!(e, Event::Pin(..))));
        assert!(!events.iter().any(|e| matches!(e, Event::DelayMs(_))));
        assert_eq!(events, [Event::Duty(450), Event::PwmOn]);
    }

    #[test]
    fn test_duty_is_clamped_to_period() {
        let (mut drv, log) = mock::driver();
        assert_eq!(drv.set_duty(70_000), 1000);
        assert_eq!(log.state().duty, 1000);
    }

    #[test]
    fn test_clamp_follows_configured_period() {
        let (mut drv, log) = mock::driver_with(&MotorConfig::new().with_pwm_period(255));
        drv.run(Direction::Reverse, 300);
        assert_eq!(log.state().duty, 255);
        assert_eq!(drv.set_duty(200), 200);
    }

    #[test]
    fn test_settle_delay_is_configurable() {
        let (mut drv, log) = mock::driver_with(&MotorConfig::new().with_settle_delay_ms(5));
        drv.run(Direction::Forward, 10);
        drv.brake();

        let waits: Vec<_> = log
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::DelayMs(_)))
            .collect();
        assert_eq!(waits, [Event::DelayMs(5), Event::DelayMs(5)]);
    }

    #[test]
    fn test_brake_is_idempotent() {
        let (mut drv, log) = mock::driver();
        drv.run(Direction::Forward, 800);
        drv.brake();
        let once = log.state();
        drv.brake();
        assert_eq!(log.state(), once);
        assert_eq!(
            once,
            HwState {
                in1: false,
                in2: false,
                duty: 0,
                pwm_on: false,
                tick_armed: false,
            }
        );
    }

    #[test]
    fn test_release_leaves_pwm_running() {
        let (mut drv, log) = mock::driver();
        drv.run(Direction::Forward, 500);
        log.clear();

        drv.release();

        let events = log.events();
        assert!(!events.iter().any(|e| matches!(e, Event::DelayMs(_))));
        let st = log.state();
        assert!(!st.in1 && !st.in2);
        assert!(!events.contains(&Event::PwmOff));
    }
}
