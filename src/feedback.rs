/*
feedback.rs

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

//! Player feedback cues.
//!
//! The [`crate::game::Game`] object calls a [`Feedback`] implementation when something that the
//! player should notice happens: a peg is selected, a disk lands, a move is refused, and so on.
//! The front end decides what to do with these cues (sound, bell, animation).

use log::debug;

use crate::pegs::{Disk, PegId};

/// Receiver of the feedback cues. All the methods do nothing by default.
pub trait Feedback {
    /// The player selected a peg.
    fn select(&mut self, _peg: PegId) {}

    /// A disk landed on a peg.
    fn drop_disk(&mut self, _peg: PegId, _disk: Disk) {}

    /// The player tried an illegal move.
    fn illegal_move(&mut self, _from: PegId, _to: PegId) {}

    /// The last move was undone.
    fn undo(&mut self) {}

    /// The level is completed.
    fn win(&mut self, _level: u32) {}

    /// A level starts or restarts.
    fn level_start(&mut self, _level: u32) {}
}

/// Feedback that ignores every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl Feedback for NoFeedback {}

/// Feedback that only logs the cues.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFeedback;

impl Feedback for LogFeedback {
    fn select(&mut self, peg: PegId) {
        debug!("Cue: select {peg}");
    }

    fn drop_disk(&mut self, peg: PegId, disk: Disk) {
        debug!("Cue: disk {disk} dropped on {peg}");
    }

    fn illegal_move(&mut self, from: PegId, to: PegId) {
        debug!("Cue: illegal move {from} -> {to}");
    }

    fn undo(&mut self) {
        debug!("Cue: undo");
    }

    fn win(&mut self, level: u32) {
        debug!("Cue: level {level} completed");
    }

    fn level_start(&mut self, level: u32) {
        debug!("Cue: level {level} starts");
    }
}
