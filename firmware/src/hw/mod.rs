// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! STM32F7 implementations of the `dcdrive::hw` traits.

pub mod gpio;
pub mod pins;
pub mod pwm;
pub mod tick;
pub mod usart;

pub use gpio::{DirLine, SysDelay};
pub use pins::BoardPins;
pub use pwm::Tim1Ch1;
pub use tick::Tim7Tick;
pub use usart::Console;
