// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Recording test doubles for the hardware seams.
//!
//! Every mock appends to one shared [`Log`], so tests can check both the final hardware state
//! and the order in which writes happened.

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::config::MotorConfig;
use crate::drivers::MotorDriver;
use crate::hw::{PwmChannel, TickSource};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Line {
    In1,
    In2,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Pin(Line, bool),
    Duty(u16),
    PwmOn,
    PwmOff,
    DelayMs(u32),
    TickStart,
    TickStop,
    TickAck,
}

#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, ev: Event) {
        self.0.borrow_mut().push(ev);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// True if any GPIO or PWM register was touched.
    pub fn has_motor_writes(&self) -> bool {
        self.0.borrow().iter().any(|ev| {
            matches!(
                ev,
                Event::Pin(..) | Event::Duty(_) | Event::PwmOn | Event::PwmOff
            )
        })
    }

    /// Sequence of duty values written, in order.
    pub fn duties(&self) -> Vec<u16> {
        self.0
            .borrow()
            .iter()
            .filter_map(|ev| match ev {
                Event::Duty(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    /// Replay the log into the hardware state it leaves behind.
    pub fn state(&self) -> HwState {
        let mut st = HwState::default();
        for ev in self.0.borrow().iter() {
            match *ev {
                Event::Pin(Line::In1, level) => st.in1 = level,
                Event::Pin(Line::In2, level) => st.in2 = level,
                Event::Duty(d) => st.duty = d,
                Event::PwmOn => st.pwm_on = true,
                Event::PwmOff => st.pwm_on = false,
                Event::TickStart => st.tick_armed = true,
                Event::TickStop => st.tick_armed = false,
                Event::DelayMs(_) | Event::TickAck => {}
            }
        }
        st
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HwState {
    pub in1: bool,
    pub in2: bool,
    pub duty: u16,
    pub pwm_on: bool,
    pub tick_armed: bool,
}

pub struct MockPin {
    line: Line,
    log: Log,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Pin(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Pin(self.line, true));
        Ok(())
    }
}

pub struct MockPwm {
    max: u16,
    log: Log,
}

impl PwmChannel for MockPwm {
    fn get_max_duty(&self) -> u16 {
        self.max
    }

    fn set_duty(&mut self, duty: u16) {
        self.log.push(Event::Duty(duty));
    }

    fn enable(&mut self) {
        self.log.push(Event::PwmOn);
    }

    fn disable(&mut self) {
        self.log.push(Event::PwmOff);
    }
}

pub struct MockDelay {
    log: Log,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

pub struct MockTick {
    log: Log,
}

impl TickSource for MockTick {
    fn start(&mut self) {
        self.log.push(Event::TickStart);
    }

    fn stop(&mut self) {
        self.log.push(Event::TickStop);
    }

    fn acknowledge(&mut self) {
        self.log.push(Event::TickAck);
    }
}

pub type TestDriver = MotorDriver<MockPin, MockPin, MockPwm, MockDelay>;

/// Driver wired to mocks, with the construction-time writes cleared from the log.
pub fn driver() -> (TestDriver, Log) {
    let (drv, log) = fresh_driver();
    log.clear();
    (drv, log)
}

/// Driver wired to mocks, log still holding what `MotorDriver::new` wrote.
pub fn fresh_driver() -> (TestDriver, Log) {
    fresh_driver_with(&MotorConfig::new())
}

/// Like [`driver`], with a non-default configuration.
pub fn driver_with(config: &MotorConfig) -> (TestDriver, Log) {
    let (drv, log) = fresh_driver_with(config);
    log.clear();
    (drv, log)
}

fn fresh_driver_with(config: &MotorConfig) -> (TestDriver, Log) {
    let log = Log::new();
    let drv = MotorDriver::new(
        MockPin {
            line: Line::In1,
            log: log.clone(),
        },
        MockPin {
            line: Line::In2,
            log: log.clone(),
        },
        MockPwm {
            max: config.pwm_period,
            log: log.clone(),
        },
        MockDelay { log: log.clone() },
        config,
    );
    (drv, log)
}

pub fn tick(log: &Log) -> MockTick {
    MockTick { log: log.clone() }
}
