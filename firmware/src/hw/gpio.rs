// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! embedded-hal 1.0 adapters over the HAL's GPIO pins and the SysTick delay.

use core::convert::Infallible;

use cortex_m::delay::Delay;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use stm32f7xx_hal::gpio::{self, Output, PushPull};

/// Push-pull direction line.
pub struct DirLine<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> DirLine<P, N> {
    /// Wrap the pin and drive it low.
    pub fn new(mut pin: gpio::Pin<P, N, Output<PushPull>>) -> Self {
        pin.set_low();
        Self { pin }
    }
}

impl<const P: char, const N: u8> ErrorType for DirLine<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> OutputPin for DirLine<P, N> {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low();
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high();
        Ok(())
    }
}

/// Busy-wait delay on SysTick. Works with interrupts masked.
pub struct SysDelay {
    delay: Delay,
}

impl SysDelay {
    pub fn new(delay: Delay) -> Self {
        Self { delay }
    }
}

impl DelayNs for SysDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
