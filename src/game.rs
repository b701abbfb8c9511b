/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the session of one level: the disks on the pegs, the undo history, the
//! move counter, and the session [`Status`].
//!
//! ```text
//!          select / move            auto-solve            last playback move
//!   Idle ─────────────────► Playing ──────────► Solving ─────────────────────► Won
//!     │                        │  ▲                                             ▲
//!     │                        └──┘ move, undo                                  │
//!     └──────────────────────────┴─────────────── winning move ─────────────────┘
//! ```
//!
//! Restarting the level or starting another level always returns to [`Status::Idle`].
//!
//! The object does not run any timer. The front end calls [`Game::tick_clock`] every second
//! while [`Game::clock_running`] is true, and [`Game::step_playback`] at the solving speed while
//! the status is [`Status::Solving`].

use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use strum_macros::Display;

use crate::config::MIN_LEVEL;
use crate::feedback::{Feedback, NoFeedback};
use crate::levels::{self, LevelConfig};
use crate::pegs::{Disk, Move, PegId, PegState};
use crate::rules::{self, MoveError};
use crate::saver::game::{RestoreError, SavedGame};
use crate::solver;

/// Status of the session.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Status {
    /// The level is ready but the player has not interacted yet.
    Idle,

    /// The player is moving disks.
    Playing,

    /// The solution is being played automatically. Player moves are refused.
    Solving,

    /// All the disks are on the target peg.
    Won,
}

/// Requests that the session refuses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move breaks the rules.
    InvalidMove {
        from: PegId,
        to: PegId,
        reason: MoveError,
    },

    /// There is no move to undo.
    EmptyHistory,

    /// The puzzle is being solved automatically.
    Locked,

    /// The level is already completed.
    Finished,

    /// The game is paused.
    Paused,

    /// The player has not started playing yet.
    NotStarted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::InvalidMove { from, to, reason } => {
                write!(f, "illegal move {from} -> {to}: {reason}")
            }
            GameError::EmptyHistory => write!(f, "nothing to undo"),
            GameError::Locked => write!(f, "the puzzle is being solved automatically"),
            GameError::Finished => write!(f, "the level is completed"),
            GameError::Paused => write!(f, "the game is paused"),
            GameError::NotStarted => write!(f, "the game has not started"),
        }
    }
}

impl Error for GameError {}

/// Result of an accepted move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The disk has been moved.
    Moved { disk: Disk },

    /// The disk has been moved and the level is completed.
    Won { disk: Disk },
}

/// Result of a peg selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The peg is now selected.
    Selected(PegId),

    /// The player selected the already selected peg, which clears the selection.
    Cleared,

    /// The player selected an empty peg while no peg was selected.
    Ignored,

    /// A peg was already selected, so its top disk has been moved to the new peg.
    Moved(MoveOutcome),
}

/// Automatic solution being played.
#[derive(Debug, Clone)]
struct Playback {
    /// Precomputed solution.
    moves: Vec<Move>,

    /// Index of the next move to play.
    next: usize,
}

/// Manage the status of the game in progress.
pub struct Game {
    /// Level parameters.
    config: LevelConfig,

    /// Disks on the pegs.
    pegs: PegState,

    /// Number of moves since the beginning of the level.
    move_count: u32,

    /// Board before each player move, for undo.
    history: Vec<PegState>,

    /// Session status.
    status: Status,

    /// Played time, in seconds.
    elapsed_secs: u64,

    /// Whether the player paused the game.
    paused: bool,

    /// Peg selected by the player for the next move.
    selected: Option<PegId>,

    /// Whether the last move request was refused.
    last_rejected: bool,

    /// Peg that received the last moved disk.
    last_target: Option<PegId>,

    /// Number of illegal moves attempted during the level.
    illegal_moves: u32,

    /// Whether the player asked for the automatic solution. In this case the level does not make
    /// it to the high scores.
    auto_solved: bool,

    /// Automatic solution in progress.
    playback: Option<Playback>,

    /// Receiver of the feedback cues.
    feedback: Box<dyn Feedback>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Game")
            .field("level", &self.config.level)
            .field("pegs", &self.pegs)
            .field("move_count", &self.move_count)
            .field("history_depth", &self.history.len())
            .field("status", &self.status)
            .field("elapsed_secs", &self.elapsed_secs)
            .field("paused", &self.paused)
            .finish_non_exhaustive()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(MIN_LEVEL, Box::new(NoFeedback))
    }
}

impl Game {
    /// Create a [`Game`] object for the given level.
    ///
    /// The level is clamped to the playable range.
    pub fn new(level: u32, feedback: Box<dyn Feedback>) -> Self {
        let config: LevelConfig = levels::derive_configuration(levels::clamp_level(level));
        let mut game = Self {
            config,
            pegs: config.initial_state(),
            move_count: 0,
            history: Vec::new(),
            status: Status::Idle,
            elapsed_secs: 0,
            paused: false,
            selected: None,
            last_rejected: false,
            last_target: None,
            illegal_moves: 0,
            auto_solved: false,
            playback: None,
            feedback,
        };
        debug!(
            "Level {}: {} disks from {} to {}",
            config.level, config.disk_count, config.start, config.target
        );
        game.feedback.level_start(config.level);
        game
    }

    /// Restore a saved game.
    pub fn from_saved(saved: SavedGame, feedback: Box<dyn Feedback>) -> Result<Self, RestoreError> {
        let config: LevelConfig = saved.validate()?;
        Ok(Self::restored(saved, config, feedback))
    }

    /// Restore the saved game if there is a valid one, or start a new game at the first level.
    pub fn restore_or_new(saved: Option<SavedGame>, feedback: Box<dyn Feedback>) -> Self {
        if let Some(saved) = saved {
            match saved.validate() {
                Ok(config) => return Self::restored(saved, config, feedback),
                Err(error) => info!("Ignoring the saved game: {error}"),
            }
        }
        Self::new(MIN_LEVEL, feedback)
    }

    fn restored(saved: SavedGame, config: LevelConfig, feedback: Box<dyn Feedback>) -> Self {
        debug!(
            "Restoring level {} after {} moves",
            config.level, saved.move_count
        );
        Self {
            config,
            pegs: saved.pegs,
            move_count: saved.move_count,
            history: saved.history,
            status: if saved.move_count > 0 {
                Status::Playing
            } else {
                Status::Idle
            },
            elapsed_secs: saved.elapsed_secs,
            paused: false,
            selected: None,
            last_rejected: false,
            last_target: None,
            illegal_moves: saved.illegal_moves,
            auto_solved: false,
            playback: None,
            feedback,
        }
    }

    /// Return the object to save for continuing the game later.
    ///
    /// Return None when there is nothing worth saving: the level is completed or being solved
    /// automatically.
    pub fn snapshot(&self) -> Option<SavedGame> {
        match self.status {
            Status::Solving | Status::Won => None,
            Status::Idle | Status::Playing => Some(SavedGame {
                level: self.config.level,
                pegs: self.pegs.clone(),
                move_count: self.move_count,
                elapsed_secs: self.elapsed_secs,
                history_depth: self.history.len(),
                history: self.history.clone(),
                illegal_moves: self.illegal_moves,
            }),
        }
    }

    /// Put the disks back on the start peg and forget the moves.
    fn reset_board(&mut self) {
        self.pegs = self.config.initial_state();
        self.move_count = 0;
        self.history.clear();
        self.status = Status::Idle;
        self.paused = false;
        self.selected = None;
        self.last_rejected = false;
        self.last_target = None;
        // Cancel the automatic solution, if any
        self.playback = None;
    }

    /// Start the given level. The level is clamped to the playable range.
    pub fn start_level(&mut self, level: u32) {
        self.config = levels::derive_configuration(levels::clamp_level(level));
        self.reset_board();
        self.elapsed_secs = 0;
        self.illegal_moves = 0;
        self.auto_solved = false;
        debug!(
            "Level {}: {} disks from {} to {}",
            self.config.level, self.config.disk_count, self.config.start, self.config.target
        );
        self.feedback.level_start(self.config.level);
    }

    /// Restart the current level.
    pub fn restart(&mut self) {
        info!("Restarting level {}", self.config.level);
        self.start_level(self.config.level);
    }

    /// Start the level after the current one.
    pub fn next_level(&mut self) {
        self.start_level(self.config.level.saturating_add(1));
    }

    /// Verify that the player can act on the board.
    fn ensure_manual_input(&self) -> Result<(), GameError> {
        match self.status {
            Status::Solving => Err(GameError::Locked),
            Status::Won => Err(GameError::Finished),
            Status::Idle | Status::Playing if self.paused => Err(GameError::Paused),
            Status::Idle | Status::Playing => Ok(()),
        }
    }

    /// The first interaction starts the game (and the clock).
    fn begin_play(&mut self) {
        if self.status == Status::Idle {
            debug!("Level {}: playing", self.config.level);
            self.status = Status::Playing;
        }
    }

    /// Select a peg.
    ///
    /// The first selection picks the peg to move a disk from, the second selection the peg to
    /// move it to.
    pub fn select(&mut self, peg: PegId) -> Result<Selection, GameError> {
        self.ensure_manual_input()?;
        match self.selected {
            None => {
                if self.pegs.is_empty(peg) {
                    return Ok(Selection::Ignored);
                }
                self.selected = Some(peg);
                self.last_rejected = false;
                self.begin_play();
                self.feedback.select(peg);
                Ok(Selection::Selected(peg))
            }
            Some(selected) if selected == peg => {
                self.selected = None;
                self.last_rejected = false;
                Ok(Selection::Cleared)
            }
            Some(selected) => self.request_move(selected, peg).map(Selection::Moved),
        }
    }

    /// Move the top disk of `from` onto `to`.
    ///
    /// An illegal move does not change the board, the history, or the move counter. It raises
    /// the [`Game::last_move_rejected`] flag instead.
    pub fn request_move(&mut self, from: PegId, to: PegId) -> Result<MoveOutcome, GameError> {
        self.ensure_manual_input()?;
        self.selected = None;

        if let Err(reason) = rules::check_move(&self.pegs, from, to) {
            debug!("Level {}: refused {from} -> {to}: {reason}", self.config.level);
            self.last_rejected = true;
            self.illegal_moves += 1;
            self.feedback.illegal_move(from, to);
            return Err(GameError::InvalidMove { from, to, reason });
        }

        let before: PegState = self.pegs.clone();
        let disk: Disk = rules::apply_move(&mut self.pegs, from, to)
            .map_err(|reason| GameError::InvalidMove { from, to, reason })?;
        self.history.push(before);
        self.move_count += 1;
        self.last_target = Some(to);
        self.last_rejected = false;
        self.begin_play();
        self.feedback.drop_disk(to, disk);

        if rules::is_won(&self.pegs, self.config.disk_count, self.config.target) {
            info!(
                "Level {} completed in {} moves",
                self.config.level, self.move_count
            );
            self.status = Status::Won;
            self.feedback.win(self.config.level);
            return Ok(MoveOutcome::Won { disk });
        }
        Ok(MoveOutcome::Moved { disk })
    }

    /// Revert the last move.
    pub fn undo(&mut self) -> Result<(), GameError> {
        self.ensure_manual_input()?;
        let previous: PegState = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.pegs = previous;
        self.move_count = self.move_count.saturating_sub(1);
        self.selected = None;
        self.last_target = None;
        self.last_rejected = false;
        self.feedback.undo();
        Ok(())
    }

    /// Start solving the puzzle automatically.
    ///
    /// The board goes back to its initial state and the undo history is dropped.
    /// Return the number of moves of the solution, which [`Game::step_playback`] plays one by
    /// one.
    pub fn auto_solve(&mut self) -> Result<usize, GameError> {
        self.ensure_manual_input()?;

        let config: LevelConfig = self.config;
        let moves: Vec<Move> = solver::compute_optimal_moves(
            config.disk_count,
            config.start,
            config.target,
            config.auxiliary,
        );
        let count: usize = moves.len();

        self.pegs = config.initial_state();
        self.move_count = 0;
        self.history.clear();
        self.selected = None;
        self.last_rejected = false;
        self.last_target = None;
        self.auto_solved = true;
        self.status = Status::Solving;
        self.playback = Some(Playback { moves, next: 0 });
        info!("Level {}: solving in {count} moves", config.level);
        Ok(count)
    }

    /// Play the next move of the automatic solution and return it.
    ///
    /// The level is completed once the last move is played.
    /// Return None when no automatic solution is in progress.
    pub fn step_playback(&mut self) -> Option<Move> {
        if self.status != Status::Solving {
            return None;
        }
        let Some(playback) = self.playback.as_mut() else {
            self.finish_playback();
            return None;
        };
        let Some(next) = playback.moves.get(playback.next).copied() else {
            self.finish_playback();
            return None;
        };
        playback.next += 1;
        let exhausted: bool = playback.next >= playback.moves.len();

        // A refused move is skipped. The playback still completes the level.
        match rules::apply_move(&mut self.pegs, next.from, next.to) {
            Ok(disk) => {
                self.move_count += 1;
                self.last_target = Some(next.to);
                self.feedback.drop_disk(next.to, disk);
            }
            Err(reason) => error!("Automatic move {next} refused: {reason}"),
        }
        if exhausted {
            self.finish_playback();
        }
        Some(next)
    }

    fn finish_playback(&mut self) {
        info!("Level {} solved automatically", self.config.level);
        self.playback = None;
        self.status = Status::Won;
        self.feedback.win(self.config.level);
    }

    /// Pause the game. Only a game being played can be paused.
    pub fn pause(&mut self) -> Result<(), GameError> {
        match self.status {
            Status::Idle => Err(GameError::NotStarted),
            Status::Solving => Err(GameError::Locked),
            Status::Won => Err(GameError::Finished),
            Status::Playing => {
                self.paused = true;
                self.selected = None;
                Ok(())
            }
        }
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Pause or resume the game, and return whether the game is now paused.
    pub fn toggle_pause(&mut self) -> Result<bool, GameError> {
        if self.paused {
            self.resume();
        } else {
            self.pause()?;
        }
        Ok(self.paused)
    }

    /// Whether the game clock must run.
    pub fn clock_running(&self) -> bool {
        matches!(self.status, Status::Playing | Status::Solving) && !self.paused
    }

    /// Add one second to the played time, if the clock is running.
    pub fn tick_clock(&mut self) -> bool {
        if self.clock_running() {
            self.elapsed_secs += 1;
            true
        } else {
            false
        }
    }

    /// Clear the one-shot indicators ([`Game::last_move_rejected`] and [`Game::last_target`])
    /// once the front end has reacted to them.
    pub fn clear_indicators(&mut self) {
        self.last_rejected = false;
        self.last_target = None;
    }

    /// Level number.
    pub fn level(&self) -> u32 {
        self.config.level
    }

    /// Level parameters.
    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Disks on the pegs.
    pub fn pegs(&self) -> &PegState {
        &self.pegs
    }

    /// Number of moves since the beginning of the level.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Minimum number of moves for the level.
    pub fn optimal_moves(&self) -> u64 {
        self.config.optimal_moves()
    }

    /// Number of moves that can be undone.
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Whether [`Game::undo`] would succeed.
    pub fn can_undo(&self) -> bool {
        self.ensure_manual_input().is_ok() && !self.history.is_empty()
    }

    /// Session status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Played time, in seconds.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Whether the game is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Peg selected for the next move.
    pub fn selected(&self) -> Option<PegId> {
        self.selected
    }

    /// Whether the last move request was refused.
    pub fn last_move_rejected(&self) -> bool {
        self.last_rejected
    }

    /// Peg that received the last moved disk.
    pub fn last_target(&self) -> Option<PegId> {
        self.last_target
    }

    /// Number of illegal moves attempted during the level.
    pub fn illegal_moves(&self) -> u32 {
        self.illegal_moves
    }

    /// Whether the automatic solution has been requested for the level.
    pub fn auto_solved(&self) -> bool {
        self.auto_solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_LEVEL;
    use std::cell::RefCell;
    use std::rc::Rc;

    use PegId::{A, B, C};

    #[derive(Debug, Clone, PartialEq)]
    enum Cue {
        Select(PegId),
        Drop(PegId, Disk),
        Illegal(PegId, PegId),
        Undo,
        Win(u32),
        LevelStart(u32),
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Cue>>>);

    impl Recorder {
        fn take(&self) -> Vec<Cue> {
            self.0.borrow_mut().drain(..).collect()
        }
    }

    impl Feedback for Recorder {
        fn select(&mut self, peg: PegId) {
            self.0.borrow_mut().push(Cue::Select(peg));
        }
        fn drop_disk(&mut self, peg: PegId, disk: Disk) {
            self.0.borrow_mut().push(Cue::Drop(peg, disk));
        }
        fn illegal_move(&mut self, from: PegId, to: PegId) {
            self.0.borrow_mut().push(Cue::Illegal(from, to));
        }
        fn undo(&mut self) {
            self.0.borrow_mut().push(Cue::Undo);
        }
        fn win(&mut self, level: u32) {
            self.0.borrow_mut().push(Cue::Win(level));
        }
        fn level_start(&mut self, level: u32) {
            self.0.borrow_mut().push(Cue::LevelStart(level));
        }
    }

    /// Level 5 has three disks that go from A to C.
    fn level_five() -> (Game, Recorder) {
        let recorder = Recorder::default();
        let game = Game::new(5, Box::new(recorder.clone()));
        assert_eq!(recorder.take(), vec![Cue::LevelStart(5)]);
        (game, recorder)
    }

    const SOLUTION: [(PegId, PegId); 7] =
        [(A, C), (A, B), (C, B), (A, C), (B, A), (B, C), (A, C)];

    #[test]
    fn new_game_is_idle_on_start_peg() {
        let (game, _) = level_five();
        assert_eq!(game.status(), Status::Idle);
        assert_eq!(game.pegs(), &PegState::initial(3, A));
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.history_depth(), 0);
        assert_eq!(game.optimal_moves(), 7);
        assert!(!game.clock_running());
    }

    #[test]
    fn first_move_starts_playing() {
        let (mut game, recorder) = level_five();
        assert_eq!(game.request_move(A, C), Ok(MoveOutcome::Moved { disk: 1 }));
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.history_depth(), 1);
        assert_eq!(game.last_target(), Some(C));
        assert_eq!(recorder.take(), vec![Cue::Drop(C, 1)]);
    }

    #[test]
    fn illegal_move_changes_nothing() {
        let (mut game, recorder) = level_five();
        game.request_move(A, C).unwrap();
        recorder.take();
        let pegs = game.pegs().clone();

        let ret = game.request_move(A, C);
        assert_eq!(
            ret,
            Err(GameError::InvalidMove {
                from: A,
                to: C,
                reason: MoveError::LargerOnSmaller { disk: 2, onto: 1 }
            })
        );
        assert_eq!(game.pegs(), &pegs);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.history_depth(), 1);
        assert_eq!(game.status(), Status::Playing);
        assert!(game.last_move_rejected());
        assert_eq!(game.illegal_moves(), 1);
        assert_eq!(recorder.take(), vec![Cue::Illegal(A, C)]);

        game.request_move(A, B).unwrap();
        assert!(!game.last_move_rejected());
    }

    #[test]
    fn same_peg_and_empty_source_are_rejected() {
        let (mut game, _) = level_five();
        assert!(matches!(
            game.request_move(A, A),
            Err(GameError::InvalidMove {
                reason: MoveError::SamePeg,
                ..
            })
        ));
        assert!(matches!(
            game.request_move(B, C),
            Err(GameError::InvalidMove {
                reason: MoveError::EmptySource,
                ..
            })
        ));
        assert_eq!(game.status(), Status::Idle);
    }

    #[test]
    fn undo_restores_previous_board() {
        let (mut game, recorder) = level_five();
        let start = game.pegs().clone();
        game.request_move(A, B).unwrap();
        let after_first = game.pegs().clone();
        game.request_move(A, C).unwrap();
        recorder.take();

        assert_eq!(game.undo(), Ok(()));
        assert_eq!(game.pegs(), &after_first);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.last_target(), None);
        assert_eq!(game.undo(), Ok(()));
        assert_eq!(game.pegs(), &start);
        assert_eq!(game.move_count(), 0);
        assert_eq!(recorder.take(), vec![Cue::Undo, Cue::Undo]);

        assert_eq!(game.undo(), Err(GameError::EmptyHistory));
        assert_eq!(game.pegs(), &start);
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn winning_move_ends_the_level() {
        let (mut game, recorder) = level_five();
        for (i, (from, to)) in SOLUTION.iter().enumerate() {
            let ret = game.request_move(*from, *to).unwrap();
            if i + 1 < SOLUTION.len() {
                assert!(matches!(ret, MoveOutcome::Moved { .. }));
            } else {
                assert_eq!(ret, MoveOutcome::Won { disk: 1 });
            }
        }
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.move_count(), 7);
        assert_eq!(recorder.take().last(), Some(&Cue::Win(5)));

        assert_eq!(game.request_move(C, A), Err(GameError::Finished));
        assert_eq!(game.undo(), Err(GameError::Finished));
        assert_eq!(game.auto_solve(), Err(GameError::Finished));
        assert!(!game.can_undo());
        assert!(game.snapshot().is_none());
        assert!(!game.auto_solved());
    }

    #[test]
    fn select_then_drop() {
        let (mut game, recorder) = level_five();
        assert_eq!(game.select(B), Ok(Selection::Ignored));
        assert_eq!(game.status(), Status::Idle);

        assert_eq!(game.select(A), Ok(Selection::Selected(A)));
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.selected(), Some(A));
        assert_eq!(game.select(A), Ok(Selection::Cleared));
        assert_eq!(game.selected(), None);

        game.select(A).unwrap();
        assert_eq!(
            game.select(C),
            Ok(Selection::Moved(MoveOutcome::Moved { disk: 1 }))
        );
        assert_eq!(game.selected(), None);
        assert_eq!(
            recorder.take(),
            vec![Cue::Select(A), Cue::Select(A), Cue::Drop(C, 1)]
        );
    }

    #[test]
    fn auto_solve_resets_and_plays_solution() {
        let (mut game, recorder) = level_five();
        game.request_move(A, B).unwrap();
        game.request_move(A, C).unwrap();
        recorder.take();

        assert_eq!(game.auto_solve(), Ok(7));
        assert_eq!(game.status(), Status::Solving);
        assert_eq!(game.pegs(), &PegState::initial(3, A));
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.history_depth(), 0);
        assert!(game.auto_solved());
        assert!(game.clock_running());

        assert_eq!(game.request_move(A, C), Err(GameError::Locked));
        assert_eq!(game.undo(), Err(GameError::Locked));
        assert_eq!(game.select(A), Err(GameError::Locked));
        assert_eq!(game.auto_solve(), Err(GameError::Locked));
        assert_eq!(game.pause(), Err(GameError::Locked));
        assert!(game.snapshot().is_none());

        let mut played: Vec<(PegId, PegId)> = Vec::new();
        while let Some(m) = game.step_playback() {
            played.push((m.from, m.to));
        }
        assert_eq!(played, SOLUTION.to_vec());
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.move_count(), 7);
        assert_eq!(game.history_depth(), 0);
        assert_eq!(game.pegs(), &PegState::initial(3, C));
        assert_eq!(game.step_playback(), None);

        let cues = recorder.take();
        assert_eq!(cues.len(), 8);
        assert_eq!(cues.last(), Some(&Cue::Win(5)));
    }

    #[test]
    fn restart_cancels_auto_solve() {
        let (mut game, recorder) = level_five();
        game.auto_solve().unwrap();
        game.step_playback().unwrap();
        game.step_playback().unwrap();
        game.tick_clock();
        recorder.take();

        game.restart();
        assert_eq!(game.status(), Status::Idle);
        assert_eq!(game.pegs(), &PegState::initial(3, A));
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.elapsed_secs(), 0);
        assert!(!game.auto_solved());
        assert_eq!(game.step_playback(), None);
        assert_eq!(game.pegs(), &PegState::initial(3, A));
        assert_eq!(recorder.take(), vec![Cue::LevelStart(5)]);
    }

    #[test]
    fn clock_runs_only_while_playing_or_solving() {
        let (mut game, _) = level_five();
        assert!(!game.tick_clock());
        game.request_move(A, C).unwrap();
        assert!(game.tick_clock());
        assert!(game.tick_clock());
        assert_eq!(game.elapsed_secs(), 2);

        assert_eq!(game.toggle_pause(), Ok(true));
        assert!(!game.tick_clock());
        assert_eq!(game.request_move(A, B), Err(GameError::Paused));
        assert_eq!(game.undo(), Err(GameError::Paused));
        assert_eq!(game.toggle_pause(), Ok(false));
        assert!(game.tick_clock());
        assert_eq!(game.elapsed_secs(), 3);
    }

    #[test]
    fn pause_requires_a_started_game() {
        let (mut game, _) = level_five();
        assert_eq!(game.pause(), Err(GameError::NotStarted));
        assert!(!game.is_paused());
    }

    #[test]
    fn level_changes_are_clamped() {
        let (mut game, recorder) = level_five();
        game.start_level(0);
        assert_eq!(game.level(), MIN_LEVEL);
        game.start_level(MAX_LEVEL);
        game.next_level();
        assert_eq!(game.level(), MAX_LEVEL);
        assert_eq!(game.config().disk_count, 10);
        game.start_level(6);
        assert_eq!(game.pegs().total_disks(), 4);
        assert_eq!(
            recorder.take(),
            vec![
                Cue::LevelStart(1),
                Cue::LevelStart(MAX_LEVEL),
                Cue::LevelStart(MAX_LEVEL),
                Cue::LevelStart(6)
            ]
        );
    }

    #[test]
    fn playback_always_ends_won() {
        let (mut game, recorder) = level_five();
        game.auto_solve().unwrap();
        // Some of the solution moves are illegal on this board
        game.pegs = PegState::from_stacks([vec![3, 2], vec![1], vec![]]);
        recorder.take();

        let mut steps: usize = 0;
        while game.step_playback().is_some() {
            steps += 1;
            assert!(game.pegs().is_well_ordered());
        }
        assert_eq!(steps, SOLUTION.len());
        assert_eq!(game.status(), Status::Won);
        assert!(game.move_count() < SOLUTION.len() as u32);
        assert_eq!(recorder.take().last(), Some(&Cue::Win(5)));
        assert_eq!(game.step_playback(), None);
    }

    #[test]
    fn snapshot_round_trip_keeps_undo() {
        let (mut game, _) = level_five();
        game.request_move(A, C).unwrap();
        game.request_move(A, B).unwrap();
        game.tick_clock();
        let _ = game.request_move(A, C);

        let saved = game.snapshot().unwrap();
        assert_eq!(saved.history_depth, 2);
        assert_eq!(saved.elapsed_secs, 1);

        let mut restored = Game::from_saved(saved, Box::new(NoFeedback)).unwrap();
        assert_eq!(restored.status(), Status::Playing);
        assert_eq!(restored.pegs(), game.pegs());
        assert_eq!(restored.move_count(), 2);
        assert_eq!(restored.illegal_moves(), 1);
        restored.undo().unwrap();
        assert_eq!(restored.move_count(), 1);
    }

    #[test]
    fn malformed_save_falls_back_to_first_level() {
        let (game, _) = level_five();
        let mut saved = game.snapshot().unwrap();
        saved.pegs = PegState::from_stacks([vec![1, 2, 3], vec![], vec![]]);
        assert!(Game::from_saved(saved.clone(), Box::new(NoFeedback)).is_err());

        let fallback = Game::restore_or_new(Some(saved), Box::new(NoFeedback));
        assert_eq!(fallback.level(), MIN_LEVEL);
        assert_eq!(fallback.status(), Status::Idle);

        let fresh = Game::restore_or_new(None, Box::new(NoFeedback));
        assert_eq!(fresh.level(), MIN_LEVEL);
    }
}
