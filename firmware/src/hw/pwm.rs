// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor PWM on TIM1 channel 1 (PA8) via direct PAC register access.
//!
//! The counter runs at 1 MHz and wraps at `period`, so duty values are compare counts in
//! `0..=period` and a period of 1000 gives a 1 kHz carrier.

use dcdrive::hw::PwmChannel;
use stm32f7xx_hal::{
    gpio::{gpioa, Alternate},
    pac,
};

/// Counter clock after the prescaler.
const COUNTER_HZ: u32 = 1_000_000;

// CCMR1 output compare: OC1M = PWM mode 1, OC1PE = preload enable
const OC1M_PWM1: u32 = 0b110 << 4;
const OC1PE: u32 = 1 << 3;

pub struct Tim1Ch1 {
    tim: pac::TIM1,
    /// Held so nothing else can reconfigure PA8.
    _pin: gpioa::PA8<Alternate<1>>,
    period: u16,
}

impl Tim1Ch1 {
    /// Configure TIM1 CH1 as an edge-aligned PWM output. The output starts disabled.
    ///
    /// `timer_clk_hz` is the APB2 timer kernel clock.
    pub fn new(
        tim1: pac::TIM1,
        pin: gpioa::PA8<Alternate<1>>,
        timer_clk_hz: u32,
        period: u16,
    ) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.tim1en().set_bit());

        let tim = tim1;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        let psc = (timer_clk_hz / COUNTER_HZ).saturating_sub(1);
        tim.psc.write(|w| unsafe { w.bits(psc) });
        tim.arr.write(|w| unsafe { w.bits(period as u32) });
        tim.ccr1.write(|w| unsafe { w.bits(0) });

        tim.ccmr1_output().modify(|_, w| unsafe { w.bits(OC1M_PWM1 | OC1PE) });

        // Active high, output gated off until `enable`
        tim.ccer.modify(|_, w| w.cc1p().clear_bit().cc1e().clear_bit());

        // Advanced timer: main output enable
        tim.bdtr.modify(|_, w| w.moe().set_bit());

        // Latch PSC/ARR and start counting
        tim.cr1.modify(|_, w| w.arpe().set_bit());
        tim.egr.write(|w| w.ug().set_bit());
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self {
            tim,
            _pin: pin,
            period,
        }
    }
}

impl PwmChannel for Tim1Ch1 {
    #[inline]
    fn get_max_duty(&self) -> u16 {
        self.period
    }

    #[inline]
    fn set_duty(&mut self, duty: u16) {
        self.tim.ccr1.write(|w| unsafe { w.bits(duty as u32) });
    }

    #[inline]
    fn enable(&mut self) {
        self.tim.ccer.modify(|_, w| w.cc1e().set_bit());
    }

    #[inline]
    fn disable(&mut self) {
        self.tim.ccer.modify(|_, w| w.cc1e().clear_bit());
    }
}
