// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line parser for the motor console.
//!
//! Bytes arrive one at a time from the serial port and are collected into a line buffer; a CR or
//! LF ends the line, which is then split on whitespace into a command name and numeric
//! arguments.

use heapless::Vec;

use crate::error::{Argument, CommandError};
use crate::protocol::messages::*;

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// Fixed-capacity line assembler.
pub struct LineBuffer<const N: usize> {
    buf: Vec<u8, N>,
    overflow: bool,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            overflow: false,
        }
    }

    /// Process a single incoming byte. Returns `Some` once a non-empty line is complete.
    pub fn push(&mut self, byte: u8) -> Option<Result<Command, CommandError>> {
        match byte {
            b'\r' | b'\n' => {
                let result = if self.overflow {
                    Some(Err(CommandError::LineTooLong))
                } else if self.buf.iter().all(|b| b.is_ascii_whitespace()) {
                    None
                } else {
                    Some(
                        core::str::from_utf8(&self.buf)
                            .map_err(|_| CommandError::UnknownCommand)
                            .and_then(parse_command),
                    )
                };
                self.buf.clear();
                self.overflow = false;
                result
            }
            BACKSPACE | DELETE => {
                self.buf.pop();
                None
            }
            _ => {
                if self.buf.push(byte).is_err() {
                    self.overflow = true;
                }
                None
            }
        }
    }

    /// Bytes collected for the line in progress.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one command line.
///
/// Arguments are read strictly left to right; the first one that is absent or not a number is
/// reported as missing. Extra trailing words are ignored.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_ascii_whitespace();
    let name = words.next().ok_or(CommandError::UnknownCommand)?;

    match name {
        CMD_INIT => Ok(Command::Init),
        CMD_RUN => {
            let direction = fetch_u32(&mut words, Argument::Direction)?;
            // brake takes no duty
            let duty = if direction == 0 {
                0
            } else {
                fetch_u32(&mut words, Argument::DutyCycle)?
            };
            Ok(Command::Run { direction, duty })
        }
        CMD_RUN_TIMED => {
            let direction = fetch_u32(&mut words, Argument::Direction)?;
            let duty = fetch_u32(&mut words, Argument::DutyCycle)?;
            let ticks = fetch_u32(&mut words, Argument::Duration)?;
            Ok(Command::RunTimed {
                direction,
                duty,
                ticks,
            })
        }
        CMD_PROFILE => Ok(Command::RunProfile),
        CMD_HELP => Ok(Command::Help),
        _ => Err(CommandError::UnknownCommand),
    }
}

fn fetch_u32<'a, I>(words: &mut I, arg: Argument) -> Result<u32, CommandError>
where
    I: Iterator<Item = &'a str>,
{
    words
        .next()
        .and_then(parse_u32)
        .ok_or(CommandError::MissingArgument(arg))
}

/// Decimal, or hex with a `0x` prefix.
fn parse_u32(word: &str) -> Option<u32> {
    match word.strip_prefix("0x").or_else(|| word.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => word.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<const N: usize>(
        lb: &mut LineBuffer<N>,
        s: &str,
    ) -> Option<Result<Command, CommandError>> {
        let mut out = None;
        for &b in s.as_bytes() {
            if let Some(r) = lb.push(b) {
                out = Some(r);
            }
        }
        out
    }

    #[test]
    fn test_parse_run() {
        assert_eq!(
            parse_command("dc 1 750"),
            Ok(Command::Run {
                direction: 1,
                duty: 750
            })
        );
    }

    #[test]
    fn test_brake_needs_no_duty() {
        assert_eq!(
            parse_command("dc 0"),
            Ok(Command::Run {
                direction: 0,
                duty: 0
            })
        );
    }

    #[test]
    fn test_missing_direction() {
        assert_eq!(
            parse_command("dc"),
            Err(CommandError::MissingArgument(Argument::Direction))
        );
        assert_eq!(
            parse_command("dc fwd 10"),
            Err(CommandError::MissingArgument(Argument::Direction))
        );
    }

    #[test]
    fn test_missing_duty_when_driving() {
        assert_eq!(
            parse_command("dc 2"),
            Err(CommandError::MissingArgument(Argument::DutyCycle))
        );
    }

    #[test]
    fn test_parse_timed_requires_all_arguments() {
        assert_eq!(
            parse_command("dcinter 1 500 0x3e8"),
            Ok(Command::RunTimed {
                direction: 1,
                duty: 500,
                ticks: 1000
            })
        );
        assert_eq!(
            parse_command("dcinter 1 500"),
            Err(CommandError::MissingArgument(Argument::Duration))
        );
    }

    #[test]
    fn test_unknown_direction_code_passes_through() {
        assert_eq!(
            parse_command("dc 9 100"),
            Ok(Command::Run {
                direction: 9,
                duty: 100
            })
        );
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_command("dcinit"), Ok(Command::Init));
        assert_eq!(parse_command("  dcmotion  "), Ok(Command::RunProfile));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("dcx"), Err(CommandError::UnknownCommand));
    }

    #[test]
    fn test_line_buffer_crlf_and_backspace() {
        let mut lb: LineBuffer<32> = LineBuffer::new();
        assert_eq!(
            feed(&mut lb, "dc 1 5x\x0800\r\n"),
            Some(Ok(Command::Run {
                direction: 1,
                duty: 500
            }))
        );
        assert!(lb.pending().is_empty());
        // the LF after CR is an empty line
        assert_eq!(feed(&mut lb, "\n"), None);
    }

    #[test]
    fn test_line_buffer_overflow_reports_once_and_recovers() {
        let mut lb: LineBuffer<8> = LineBuffer::new();
        assert_eq!(
            feed(&mut lb, "dcinter 1 500 1000\r"),
            Some(Err(CommandError::LineTooLong))
        );
        assert_eq!(feed(&mut lb, "dcinit\r"), Some(Ok(Command::Init)));
    }
}
