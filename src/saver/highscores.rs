/*
saver/highscores.rs

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

//! Save and restore the high scores for the levels.
//!
//! The saved object is a serialization of the [`HighScores`] object in JSON format by
//! using [`serde`].

use std::error::Error;
use std::path::PathBuf;

use crate::config::HIGHSCORES_FILE;
use crate::highscores::HighScores;
use crate::saver::JsonFile;

/// Object to save and restore the high scores.
pub struct SaverHighScores {
    file: JsonFile<HighScores>,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the high scores must be saved.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            file: JsonFile::new(data_dir, HIGHSCORES_FILE),
        }
    }

    /// Retrieve the [`HighScores`] object, or None if the high scores file does not exist.
    pub fn get_highscores(&self) -> Result<Option<HighScores>, Box<dyn Error>> {
        self.file.load()
    }

    /// Save the provided [`HighScores`] object.
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
        self.file.save(highscores)
    }

    /// Delete the high scores file.
    pub fn delete_save(&self) {
        self.file.delete();
    }
}
