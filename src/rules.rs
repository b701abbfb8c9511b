/*
rules.rs

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

//! Puzzle rules: move legality and win detection.
//!
//! A disk may only be placed on an empty peg or on top of a strictly larger disk.

use std::error::Error;
use std::fmt;

use crate::pegs::{Disk, PegId, PegState};

/// Reasons for refusing a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source and destination pegs are the same.
    SamePeg,

    /// There is no disk on the source peg.
    EmptySource,

    /// The moved disk is larger than the disk on top of the destination peg.
    LargerOnSmaller { disk: Disk, onto: Disk },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::SamePeg => write!(f, "source and destination are the same peg"),
            MoveError::EmptySource => write!(f, "no disk on the source peg"),
            MoveError::LargerOnSmaller { disk, onto } => {
                write!(f, "disk {disk} cannot be placed on disk {onto}")
            }
        }
    }
}

impl Error for MoveError {}

/// Verify that the top disk of `from` can be moved onto `to`.
pub fn check_move(state: &PegState, from: PegId, to: PegId) -> Result<(), MoveError> {
    if from == to {
        return Err(MoveError::SamePeg);
    }
    let disk: Disk = state.top(from).ok_or(MoveError::EmptySource)?;
    match state.top(to) {
        Some(onto) if disk >= onto => Err(MoveError::LargerOnSmaller { disk, onto }),
        _ => Ok(()),
    }
}

/// Whether the top disk of `from` can be moved onto `to`.
pub fn is_legal_move(state: &PegState, from: PegId, to: PegId) -> bool {
    check_move(state, from, to).is_ok()
}

/// Move the top disk of `from` onto `to` and return that disk.
///
/// The move is verified first. When it is illegal, the state is not modified and the reason is
/// returned.
pub fn apply_move(state: &mut PegState, from: PegId, to: PegId) -> Result<Disk, MoveError> {
    check_move(state, from, to)?;
    let disk: Disk = state.pop(from).ok_or(MoveError::EmptySource)?;
    state.push(to, disk);
    Ok(disk)
}

/// Whether all the disks of the puzzle are on the target peg.
///
/// The ordering invariant guarantees that the disks are then correctly stacked.
pub fn is_won(state: &PegState, total_disks: u8, target: PegId) -> bool {
    state.len(target) == total_disks as usize
}
