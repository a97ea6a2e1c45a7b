// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Seams
//!
//! Traits the motor core is written against. Board crates implement them on top of their HAL.
//!
//! Direction lines use [`OutputPin`] and blocking waits use [`DelayNs`] straight from
//! embedded-hal. The PWM channel and the tick timer need operations embedded-hal does not model
//! (output gating, interrupt arming), so they get local traits.

pub mod pwm;
pub mod tick;

pub use embedded_hal::delay::DelayNs;
pub use embedded_hal::digital::OutputPin;
pub use pwm::PwmChannel;
pub use tick::TickSource;
