// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Single PWM compare channel.

/// One timer compare channel driving the motor's power stage.
///
/// The duty value is a raw compare-register count against the timer period, so
/// `get_max_duty()` is the period and `set_duty(get_max_duty())` is full drive.
pub trait PwmChannel {
    /// Counter period, i.e. the largest meaningful compare value.
    fn get_max_duty(&self) -> u16;

    /// Write the compare register. Takes effect whether or not the output is enabled.
    fn set_duty(&mut self, duty: u16);

    /// Start emitting the waveform on the output pin.
    fn enable(&mut self);

    /// Stop emitting; the pin idles inactive.
    fn disable(&mut self);
}
