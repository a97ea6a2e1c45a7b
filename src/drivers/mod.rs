// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device Drivers
//!
//! Device-level drivers that sit on the `hw` seams and below the control layer.
//!
//! ## Existing drivers
//!
//! - [`dc_motor`] – brushed DC motor on two direction lines and one PWM enable

pub mod dc_motor;

pub use dc_motor::{Direction, MotorDriver};
