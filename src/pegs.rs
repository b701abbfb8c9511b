/*
pegs.rs

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

//! Pegs, disks, and moves.
//!
//! A disk is identified by its size, from 1 (the smallest disk) to the number of disks in the
//! puzzle.
//! The [`PegState`] object stores the three stacks of disks. Each stack is ordered from the bottom
//! disk to the top disk, so the last element of a stack is the disk that can be moved.
//!
//! In a settled [`PegState`] the disk sizes of each stack are strictly decreasing from bottom to
//! top. The [`crate::rules`] module enforces that invariant on every move.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, FromRepr};

/// Size of a disk. The smallest disk is 1.
pub type Disk = u8;

/// Number of pegs. Diskshift only supports the three-peg puzzle.
pub const NUM_PEGS: usize = 3;

/// Peg identifier.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display, FromRepr)]
#[repr(u8)]
pub enum PegId {
    A,
    B,
    C,
}

impl PegId {
    /// All the pegs, from left to right.
    pub const ALL: [PegId; NUM_PEGS] = [PegId::A, PegId::B, PegId::C];

    /// Position of the peg, from 0 (left) to 2 (right).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Return the peg that is neither `first` nor `second`.
    ///
    /// Return None when `first` and `second` are the same peg, because two pegs then remain.
    pub fn third(first: PegId, second: PegId) -> Option<PegId> {
        if first == second {
            return None;
        }
        PegId::ALL
            .into_iter()
            .find(|peg| *peg != first && *peg != second)
    }

    /// Parse a peg letter (`a`, `b`, `c`, case insensitive).
    pub fn from_char(c: char) -> Option<PegId> {
        if !c.is_ascii() {
            return None;
        }
        (c.to_ascii_uppercase() as u8)
            .checked_sub(b'A')
            .and_then(PegId::from_repr)
    }
}

/// Relocation of the top disk of the [`Move::from`] peg onto the [`Move::to`] peg.
///
/// A move does not reference the disk: the moved disk is whichever disk is on top of the source
/// peg when the move is played.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Source peg.
    pub from: PegId,

    /// Destination peg.
    pub to: PegId,
}

impl Move {
    /// Create a [`Move`] object.
    pub fn new(from: PegId, to: PegId) -> Self {
        Self { from, to }
    }

    /// Return the move that brings the disk back.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Serialized form of [`PegState`]: one list of disks per peg name.
#[derive(Serialize, Deserialize)]
struct PegStateRepr {
    #[serde(rename = "A")]
    a: Vec<Disk>,
    #[serde(rename = "B")]
    b: Vec<Disk>,
    #[serde(rename = "C")]
    c: Vec<Disk>,
}

impl From<PegStateRepr> for PegState {
    fn from(repr: PegStateRepr) -> Self {
        Self {
            stacks: [repr.a, repr.b, repr.c],
        }
    }
}

impl From<PegState> for PegStateRepr {
    fn from(state: PegState) -> Self {
        let [a, b, c] = state.stacks;
        Self { a, b, c }
    }
}

/// Disks on the three pegs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(from = "PegStateRepr", into = "PegStateRepr")]
pub struct PegState {
    /// One stack per peg, indexed by [`PegId::index`]. Bottom disk first.
    stacks: [Vec<Disk>; NUM_PEGS],
}

impl PegState {
    /// Create a [`PegState`] object with no disk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the starting position of a puzzle: all the disks on the `start` peg, the largest
    /// at the bottom.
    pub fn initial(disk_count: u8, start: PegId) -> Self {
        let mut state: PegState = Self::new();
        state.stacks[start.index()] = (1..=disk_count).rev().collect();
        state
    }

    /// Create a [`PegState`] object from raw stacks (bottom disk first).
    ///
    /// The stacks are not verified. Use [`PegState::is_arrangement_of`] when the stacks come
    /// from an untrusted source.
    pub fn from_stacks(stacks: [Vec<Disk>; NUM_PEGS]) -> Self {
        Self { stacks }
    }

    /// Return the disks of the given peg, bottom disk first.
    pub fn peg(&self, peg: PegId) -> &[Disk] {
        &self.stacks[peg.index()]
    }

    /// Return the disk on top of the given peg, or None if the peg is empty.
    pub fn top(&self, peg: PegId) -> Option<Disk> {
        self.stacks[peg.index()].last().copied()
    }

    /// Return the number of disks on the given peg.
    pub fn len(&self, peg: PegId) -> usize {
        self.stacks[peg.index()].len()
    }

    /// Whether the given peg has no disk.
    pub fn is_empty(&self, peg: PegId) -> bool {
        self.stacks[peg.index()].is_empty()
    }

    /// Return the number of disks on all the pegs.
    pub fn total_disks(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Remove the top disk of the given peg.
    pub(crate) fn pop(&mut self, peg: PegId) -> Option<Disk> {
        self.stacks[peg.index()].pop()
    }

    /// Put a disk on top of the given peg.
    pub(crate) fn push(&mut self, peg: PegId, disk: Disk) {
        self.stacks[peg.index()].push(disk);
    }

    /// Whether the disk sizes of every peg are strictly decreasing from bottom to top.
    pub fn is_well_ordered(&self) -> bool {
        self.stacks
            .iter()
            .all(|stack| stack.windows(2).all(|pair| pair[0] > pair[1]))
    }

    /// Whether the pegs hold exactly the disks 1 to `disk_count`, each one once, in a valid
    /// order.
    pub fn is_arrangement_of(&self, disk_count: u8) -> bool {
        if self.total_disks() != disk_count as usize || !self.is_well_ordered() {
            return false;
        }
        let mut disks: Vec<Disk> = self.stacks.iter().flatten().copied().collect();
        disks.sort_unstable();
        disks.iter().copied().eq(1..=disk_count)
    }
}
