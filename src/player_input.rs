/*
player_input.rs

Copyright 2025 Hervé Quatremain

This file is part of Diskshift.

Diskshift is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Diskshift is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Diskshift. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Parse the player's commands.
//!
//! The player types one command per line. Peg letters select a peg (`a`) or move a disk (`ac`,
//! `a c`, or `a > c`); the other commands are words or their first letter.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::pegs::PegId;

/// Command summary displayed by the `help` command.
pub const HELP: &str = "\
Move all the disks to the target peg (marked with *). A disk can only be placed on an
empty peg or on a larger disk.

  a, b, c        select a peg, then select the destination peg
  ac, a c, a>c   move the top disk of A onto C
  u, undo        undo the last move
  s, solve       solve the level automatically
  r, restart     restart the level
  n, next        go to the next level
  l, level <n>   go to level <n>
  p, pause       pause or resume the game
  h, scores      show the high scores of the level
  ?, help        show this help
  q, quit        save and quit";

/// Player command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a peg (two-step move).
    Select(PegId),

    /// Move the top disk of the first peg onto the second peg.
    Move(PegId, PegId),

    Undo,
    AutoSolve,
    Restart,
    NextLevel,

    /// Go to the given level.
    Level(u32),

    /// Pause or resume.
    Pause,

    Scores,
    Help,
    Quit,
}

/// Errors when parsing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    /// Blank line.
    Empty,

    /// The command is not known.
    Unknown(String),

    /// The level number is not a number.
    InvalidLevel(String),
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseCommandError::Empty => write!(f, "empty command"),
            ParseCommandError::Unknown(cmd) => write!(f, "unknown command `{cmd}`"),
            ParseCommandError::InvalidLevel(level) => write!(f, "invalid level `{level}`"),
        }
    }
}

impl Error for ParseCommandError {}

/// Parse a sequence of peg letters, optionally separated by `>` or `-`.
fn parse_pegs(word: &str) -> Option<Command> {
    let pegs: Vec<PegId> = word
        .chars()
        .filter(|c| !matches!(c, '>' | '-'))
        .map(PegId::from_char)
        .collect::<Option<Vec<PegId>>>()?;
    match pegs.as_slice() {
        [peg] => Some(Command::Select(*peg)),
        [from, to] => Some(Command::Move(*from, *to)),
        _ => None,
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line: String = s.trim().to_lowercase();
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => Err(ParseCommandError::Empty),
            ["u" | "undo"] => Ok(Command::Undo),
            ["s" | "solve"] => Ok(Command::AutoSolve),
            ["r" | "restart"] => Ok(Command::Restart),
            ["n" | "next"] => Ok(Command::NextLevel),
            ["p" | "pause" | "resume"] => Ok(Command::Pause),
            ["h" | "scores"] => Ok(Command::Scores),
            ["?" | "help"] => Ok(Command::Help),
            ["q" | "quit" | "exit"] => Ok(Command::Quit),
            ["l" | "level", number] => number
                .parse::<u32>()
                .map(Command::Level)
                .map_err(|_| ParseCommandError::InvalidLevel(number.to_string())),
            _ => parse_pegs(&words.concat())
                .ok_or_else(|| ParseCommandError::Unknown(s.trim().to_string())),
        }
    }
}
