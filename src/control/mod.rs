// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! This module provides the open-loop building blocks layered on top of [`crate::drivers`].
//!
//! ## Modules
//!
//! - [`timed_run`] - Run for a number of ticks, stop from the tick interrupt.
//! - [`motion_profile`] - Fixed trapezoidal acceleration / cruise / deceleration ramp.
//! - [`motor_control`] - Maps console commands onto the two above.

pub mod motion_profile;
pub mod motor_control;
pub mod timed_run;

pub use motion_profile::{MotionProfile, Phase, ProfileStep};
pub use motor_control::MotorControl;
pub use timed_run::{RunState, TimedRunController};
