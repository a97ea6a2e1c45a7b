// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interrupt-safe home for state reached from both `main` and an interrupt handler.
//!
//! Usage:
//!
//! ```ignore
//! static CONTROL: Shared<Control> = Shared::new();
//!
//! CONTROL.install(control);
//! CONTROL.with(|c| c.execute(cmd));
//! ```

use core::cell::RefCell;

use critical_section::Mutex;

/// `Option<T>` behind a critical-section mutex, filled once at startup.
pub struct Shared<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> Shared<T> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Store the value, replacing (and returning) any previous one.
    pub fn install(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(value)))
    }

    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_some())
    }

    /// Run `f` with interrupts masked. Returns `None` if nothing is installed yet.
    ///
    /// `f` must not call back into the same `Shared`; the inner `RefCell` would panic.
    pub fn with<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().as_mut().map(f))
    }
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self::new()
    }
}
