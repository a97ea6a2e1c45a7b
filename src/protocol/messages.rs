// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Console command set for the DC motor.

// Command names as typed on the console.
pub const CMD_INIT: &str = "dcinit";
pub const CMD_RUN: &str = "dc";
pub const CMD_RUN_TIMED: &str = "dcinter";
pub const CMD_PROFILE: &str = "dcmotion";
pub const CMD_HELP: &str = "help";

/// A fully parsed console command.
///
/// Direction values are raw console codes (0 brake, 1 forward, 2 reverse); anything else is
/// passed through and handled by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Init,
    /// `duty` is 0 when the direction is brake and no duty was given.
    Run { direction: u32, duty: u32 },
    RunTimed { direction: u32, duty: u32, ticks: u32 },
    RunProfile,
    Help,
}

/// Help table entry.
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: CMD_INIT,
        usage: "",
        help: "Initializes PWM channels",
    },
    CommandInfo {
        name: CMD_RUN,
        usage: "<direction> <duty>",
        help: "DC motor (direction 0 brakes, duty omitted)",
    },
    CommandInfo {
        name: CMD_RUN_TIMED,
        usage: "<direction> <duty> <ticks>",
        help: "DC motor with interrupt stop after <ticks>",
    },
    CommandInfo {
        name: CMD_PROFILE,
        usage: "",
        help: "Motion profile in DC motor",
    },
    CommandInfo {
        name: CMD_HELP,
        usage: "",
        help: "List commands",
    },
];
