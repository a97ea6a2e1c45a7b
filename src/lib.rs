// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # dcdrive
//!
//! Board-independent core of the DC motor console firmware: direction and brake handling, PWM
//! duty mapping, interrupt-driven timed runs, and a trapezoidal motion profile. Board crates
//! (see `firmware/`) implement the [`hw`] traits and wire the tick interrupt.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Hardware seams: direction pins, PWM channel, tick timer, delay |
//! | [`drivers`] | Device-level drivers (brushed DC motor on a direction bridge) |
//! | [`control`] | Timed run, motion profile, command execution |
//! | [`protocol`] | Console line buffer and command parser |
//! | [`shared`] | Critical-section cell shared with interrupt handlers |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cd firmware && cargo run --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod hw;
pub mod protocol;
pub mod shared;

#[cfg(test)]
mod mock;

pub use config::{MotorConfig, ProfileConfig};
pub use error::CommandError;
