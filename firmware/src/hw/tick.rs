// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Timed-run tick source on basic timer TIM7.
//!
//! The update interrupt fires once per tick while armed. The `TIM7` handler itself lives in
//! `main.rs`.

use cortex_m::peripheral::NVIC;
use dcdrive::hw::TickSource;
use stm32f7xx_hal::pac::{self, Interrupt};

/// Counter clock after the prescaler.
const COUNTER_HZ: u32 = 10_000;

pub struct Tim7Tick {
    tim: pac::TIM7,
}

impl Tim7Tick {
    /// Configure TIM7 for `tick_hz` update events, disarmed.
    ///
    /// `timer_clk_hz` is the APB1 timer kernel clock.
    pub fn new(tim7: pac::TIM7, timer_clk_hz: u32, tick_hz: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim7en().set_bit());

        let tim = tim7;

        tim.cr1.modify(|_, w| w.cen().clear_bit());
        tim.dier.modify(|_, w| w.uie().clear_bit());

        let psc = (timer_clk_hz / COUNTER_HZ).saturating_sub(1);
        let arr = (COUNTER_HZ / tick_hz.max(1)).saturating_sub(1);
        tim.psc.write(|w| unsafe { w.bits(psc) });
        tim.arr.write(|w| unsafe { w.bits(arr) });

        // Load PSC now; UG also raises UIF, so clear it
        tim.egr.write(|w| w.ug().set_bit());
        tim.sr.modify(|_, w| w.uif().clear_bit());

        Self { tim }
    }
}

impl TickSource for Tim7Tick {
    fn start(&mut self) {
        self.tim.cnt.write(|w| unsafe { w.bits(0) });
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
        // A request latched under a critical section before `stop` would count as tick 1
        NVIC::unpend(Interrupt::TIM7);
        self.tim.dier.modify(|_, w| w.uie().set_bit());
        self.tim.cr1.modify(|_, w| w.cen().set_bit());
    }

    fn stop(&mut self) {
        self.tim.dier.modify(|_, w| w.uie().clear_bit());
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
    }

    #[inline]
    fn acknowledge(&mut self) {
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
    }
}
