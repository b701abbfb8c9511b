/*
solver.rs

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

//! Optimal solution of the puzzle.
//!
//! The classic recursion moves the `n - 1` smaller disks out of the way, moves the largest disk,
//! and then moves the `n - 1` smaller disks back on top of it.
//! The resulting sequence has `2^n - 1` moves, which is the minimum.

use crate::pegs::{Move, PegId};

/// Return the minimum number of moves for a puzzle with `disk_count` disks.
///
/// The count saturates at [`u64::MAX`] past 64 disks.
pub fn optimal_move_count(disk_count: u8) -> u64 {
    1u64.checked_shl(disk_count as u32).map_or(u64::MAX, |v| v - 1)
}

/// Compute the moves that transfer `disk_count` disks from `source` to `target`.
///
/// The sequence assumes that all the disks are stacked on `source` and ignores the current
/// board. `auxiliary` must be the third peg.
pub fn compute_optimal_moves(
    disk_count: u8,
    source: PegId,
    target: PegId,
    auxiliary: PegId,
) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::with_capacity(optimal_move_count(disk_count) as usize);
    solve(disk_count, source, target, auxiliary, &mut moves);
    moves
}

fn solve(count: u8, source: PegId, target: PegId, auxiliary: PegId, moves: &mut Vec<Move>) {
    if count == 0 {
        return;
    }
    solve(count - 1, source, auxiliary, target, moves);
    moves.push(Move::new(source, target));
    solve(count - 1, auxiliary, target, source, moves);
}
