/*
saver/game.rs

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

//! Save and restore the game in progress when quitting or starting Diskshift.
//!
//! When a level is in progress and the user quits Diskshift, the session is saved in the
//! `savegame.json` file.
//! When Diskshift is restarted, the saved game is loaded, and the user can continue the level.
//!
//! The saved object is a [`SavedGame`] serialized in JSON format by using [`serde`]:
//!
//! ```json
//! {
//!   "level": 7,
//!   "pegs": { "A": [4, 3], "B": [1], "C": [2] },
//!   "move_count": 3,
//!   "elapsed_secs": 12,
//!   "history_depth": 3,
//!   "history": [ ... ],
//!   "illegal_moves": 0
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::config::SAVE_GAME_FILE;
use crate::levels::{self, LevelConfig};
use crate::pegs::{PegId, PegState};
use crate::rules;
use crate::saver::JsonFile;

/// Reasons for refusing a saved game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RestoreError {
    /// The disks do not form a valid board for the level.
    InvalidPegs,

    /// All the disks are already on the target peg.
    Completed,

    /// The move counter, the history depth, and the history do not agree.
    HistoryMismatch,

    /// A board in the history is not a valid board for the level.
    InvalidHistory,
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RestoreError::InvalidPegs => write!(f, "the disks do not match the level"),
            RestoreError::Completed => write!(f, "the level is already completed"),
            RestoreError::HistoryMismatch => write!(f, "inconsistent move history"),
            RestoreError::InvalidHistory => write!(f, "invalid board in the move history"),
        }
    }
}

impl Error for RestoreError {}

/// Saved session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    /// Level number.
    pub level: u32,

    /// Disks on the pegs.
    pub pegs: PegState,

    /// Number of moves played.
    pub move_count: u32,

    /// Played time, in seconds.
    pub elapsed_secs: u64,

    /// Number of moves that can be undone.
    pub history_depth: usize,

    /// Boards to restore for undoing the moves. Older save files might not have this field, in
    /// which case the undo history starts empty.
    #[serde(default)]
    pub history: Vec<PegState>,

    /// Number of illegal moves attempted.
    #[serde(default)]
    pub illegal_moves: u32,
}

/// Whether a single legal move turns the `before` board into the `after` board.
fn one_move_apart(before: &PegState, after: &PegState) -> bool {
    PegId::ALL.iter().any(|from| {
        PegId::ALL.iter().any(|to| {
            let mut board: PegState = before.clone();
            rules::apply_move(&mut board, *from, *to).is_ok() && board == *after
        })
    })
}

impl SavedGame {
    /// Verify the saved session and return the configuration of its level.
    ///
    /// An out of range level is clamped.
    pub fn validate(&self) -> Result<LevelConfig, RestoreError> {
        let config: LevelConfig = levels::derive_configuration(levels::clamp_level(self.level));
        let initial: PegState = config.initial_state();

        if !self.pegs.is_arrangement_of(config.disk_count) {
            return Err(RestoreError::InvalidPegs);
        }
        if self.move_count == 0 && self.pegs != initial {
            return Err(RestoreError::InvalidPegs);
        }
        if rules::is_won(&self.pegs, config.disk_count, config.target) {
            return Err(RestoreError::Completed);
        }
        if self.history_depth > self.move_count as usize
            || (!self.history.is_empty() && self.history.len() != self.history_depth)
        {
            return Err(RestoreError::HistoryMismatch);
        }
        if !self
            .history
            .iter()
            .all(|board| board.is_arrangement_of(config.disk_count))
        {
            return Err(RestoreError::InvalidHistory);
        }
        if self.history.is_empty() {
            return Ok(config);
        }

        // Each board is one move away from the next one, the last one from the current board
        let boards: Vec<&PegState> = self.history.iter().chain([&self.pegs]).collect();
        let chained: bool = boards
            .windows(2)
            .all(|pair| one_move_apart(pair[0], pair[1]));
        let full_history: bool = self.history.len() == self.move_count as usize;
        if !chained || (full_history && self.history[0] != initial) {
            return Err(RestoreError::InvalidHistory);
        }
        Ok(config)
    }
}

/// Object to save and restore a game in progress.
pub struct SaverGame {
    file: JsonFile<SavedGame>,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the game must be saved.
    pub fn new(data_dir: PathBuf) -> Self {
        SaverGame {
            file: JsonFile::new(data_dir, SAVE_GAME_FILE),
        }
    }

    /// Retrieve the [`SavedGame`] object.
    ///
    /// Return the [`SavedGame`] object or None if there is no saved game.
    pub fn get_game(&self) -> Result<Option<SavedGame>, Box<dyn Error>> {
        self.file.load()
    }

    /// Save the provided [`SavedGame`] object.
    pub fn save_game(&self, game: &SavedGame) -> Result<(), Box<dyn Error>> {
        self.file.save(game)
    }

    /// Delete the saved game.
    pub fn delete_save(&self) {
        self.file.delete();
    }
}
