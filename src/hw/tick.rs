// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Periodic tick timer used for timed-run countdowns.

/// A free-running timer that raises one interrupt per tick period while armed.
///
/// Implementations only touch their own timer registers; the interrupt handler itself is wired
/// up by the board crate.
pub trait TickSource {
    /// Restart the counter and enable the update interrupt.
    ///
    /// A tick request still pending from before the last [`stop`](Self::stop) must be dropped
    /// here, or the new countdown sees it as its first tick.
    fn start(&mut self);

    /// Disable the update interrupt and halt the counter.
    fn stop(&mut self);

    /// Clear a pending update flag. Called from the interrupt handler on every tick.
    fn acknowledge(&mut self);
}
