// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F767ZI devboard driving one DC motor bridge.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, gpiof, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```rust
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOF);
/// ```
pub struct BoardPins {
    pub usart3: Usart3Pins,
    pub motor: MotorPins,
}

/// ST-LINK virtual COM port
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// Motor bridge control pins
pub struct MotorPins {
    pub pwm: gpioa::PA8<Alternate<1>>, // TIM1_CH1
    pub in1: gpiof::PF2<Output<PushPull>>,
    pub in2: gpiof::PF4<Output<PushPull>>,
}

impl BoardPins {
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD, gpiof: pac::GPIOF) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();
        let gpiof = gpiof.split();

        Self {
            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            motor: MotorPins {
                pwm: gpioa.pa8.into_alternate::<1>(),
                in1: gpiof.pf2.into_push_pull_output(),
                in2: gpiof.pf4.into_push_pull_output(),
            },
        }
    }
}
