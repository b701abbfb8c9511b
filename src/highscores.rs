/*
highscores.rs

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

//! Manage high scores for the levels.
//!
//! The main object, [`HighScores`], maintains a list of high scores for each level.
//! This object is saved when the user completes a level and makes it to the scoreboard, and
//! is restored when Diskshift starts.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Highest rating.
pub const MAX_STARS: u8 = 5;

/// Rate a completed level from 1 to 5 stars, depending on the extra moves compared to the
/// optimal solution.
pub fn star_rating(moves: u64, optimal: u64) -> u8 {
    let extra: u64 = moves.saturating_sub(optimal);
    if extra == 0 {
        MAX_STARS
    } else if extra * 10 <= optimal {
        4
    } else if extra * 10 <= optimal * 3 {
        3
    } else if extra * 2 <= optimal {
        2
    } else {
        1
    }
}

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Number of moves to complete the level.
    pub moves: u32,

    /// How long did it take for completing the level.
    pub time: Duration,

    /// Rating, from 1 to [`MAX_STARS`].
    pub stars: u8,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

impl Score {
    /// Whether the score is strictly better than the other score: fewer moves, or the same
    /// number of moves in less time.
    fn beats(&self, other: &Score) -> bool {
        (self.moves, self.time) < (other.moves, other.time)
    }
}

/// Sorted list of the top scores for a level.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct LevelHighScoreBoard {
    /// Sorted list of the top scores.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl LevelHighScoreBoard {
    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    fn add_score(&mut self, score: Score) -> Option<usize> {
        let position: usize = self
            .top
            .iter()
            .position(|s| score.beats(s))
            .unwrap_or(self.top.len());
        if position >= BOARD_SIZE {
            return None;
        }
        self.top.insert(position, score);
        self.top.truncate(BOARD_SIZE);
        Some(position + 1)
    }
}

/// List of the scoreboards for the levels.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Map of the [`LevelHighScoreBoard`] scoreboards indexed by the level number.
    board: BTreeMap<u32, LevelHighScoreBoard>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a score to the scoreboard of the provided level and return the position in the
    /// scoreboard, or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(
        &mut self,
        level: u32,
        moves: u32,
        time: Duration,
        optimal: u64,
    ) -> Option<usize> {
        let score = Score {
            moves,
            time,
            stars: star_rating(moves as u64, optimal),
            when: SystemTime::now(),
        };
        self.board.entry(level).or_default().add_score(score)
    }

    /// Return the list of [`Score`] for the given level.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_score(&self, level: u32) -> Option<&[Score]> {
        self.board
            .get(&level)
            .map(|b| b.top.as_slice())
            .filter(|top| !top.is_empty())
    }

    /// Return the levels that have a scoreboard, in increasing order.
    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.board.keys().copied()
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any level)
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }
}
