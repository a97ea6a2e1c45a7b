// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Console command errors.
//!
//! Motor hardware writes cannot fail, so every error here comes from reading a command line.
//! None of them are fatal: the command is dropped and the console keeps running.

use core::fmt;

/// Which positional argument a command was missing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Argument {
    Direction,
    DutyCycle,
    Duration,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// A required argument was absent or not a number.
    MissingArgument(Argument),
    /// First word of the line is not a known command.
    UnknownCommand,
    /// Input line overflowed the receive buffer.
    LineTooLong,
    /// A motor command arrived before `dcinit`.
    NotInitialized,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Direction => f.write_str("Direction"),
            Argument::DutyCycle => f.write_str("value for duty cycle"),
            Argument::Duration => f.write_str("motor run time"),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingArgument(arg) => write!(f, "Missing {}", arg),
            CommandError::UnknownCommand => f.write_str("Command not found"),
            CommandError::LineTooLong => f.write_str("Line too long"),
            CommandError::NotInitialized => f.write_str("Motor not initialized, run dcinit"),
        }
    }
}
