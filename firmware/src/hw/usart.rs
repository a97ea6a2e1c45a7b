// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interactive serial console.
//!
//! Reads command bytes with echo and prints replies to an attached terminal. Lines end in CRLF.
//!
//! To access the terminal on the host machine, connect to the ST-LINK USB port and use
//! ```
//! $ screen /dev/tty.usbmodem* 115200
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Rx, Serial, Tx},
};

const PROMPT: &str = "> ";

pub struct Console<U: Instance> {
    tx: Tx<U>,
    rx: Rx<U>,
}

impl<U: Instance> Console<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, rx) = serial.split();
        Self { tx, rx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    #[inline]
    pub fn prompt(&mut self) {
        self.write_str(PROMPT);
    }

    /// Block until a byte arrives. Framing and overrun errors drop the byte.
    pub fn read_byte(&mut self) -> Option<u8> {
        block!(self.rx.read()).ok()
    }

    /// Echo a received byte the way a terminal expects to see it.
    pub fn echo(&mut self, b: u8) {
        match b {
            b'\r' | b'\n' => self.write_str("\r\n"),
            0x08 | 0x7F => self.write_str("\x08 \x08"),
            _ => self.write_byte(b),
        }
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Console`.
impl<U: Instance> fmt::Write for Console<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Console::write_str(self, s);
        Ok(())
    }
}
