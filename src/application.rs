/*
application.rs

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


//! Terminal front end.
//!
//! The [`Application`] object runs the event loop. Events come from three sources, all feeding
//! the same channel: a thread that reads the player commands from the standard input, the game
//! clock, and the automatic solution playback timer.
//! After each event, the application restarts or stops the timers so that they follow the
//! status of the game.

use async_channel::{Receiver, Sender};
use log::{debug, info};
use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use crate::cli_options::Options;
use crate::config::{CLOCK_INTERVAL, MIN_LEVEL};
use crate::draw;
use crate::feedback::{Feedback, LogFeedback};
use crate::game::{Game, GameError, MoveOutcome, Selection, Status};
use crate::highscores::HighScores;
use crate::pegs::{Disk, PegId};
use crate::player_input::{Command, HELP, ParseCommandError};
use crate::saver::game::{SavedGame, SaverGame};
use crate::saver::highscores::SaverHighScores;
use crate::ticker::{Tick, Ticker, TimerKind};

/// Event processed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The player typed a command.
    Input(Command),

    /// The player typed something that is not a command.
    InputError(ParseCommandError),

    /// The standard input is closed.
    InputClosed,

    /// A timer expired.
    Tick(Tick),
}

impl From<Tick> for Event {
    fn from(tick: Tick) -> Self {
        Event::Tick(tick)
    }
}

/// Feedback cues for the terminal: the bell rings on illegal moves and on completed levels.
struct TerminalFeedback;

impl TerminalFeedback {
    fn ring(&self) {
        print!("\x07");
        let _ = io::stdout().flush();
    }
}

impl Feedback for TerminalFeedback {
    fn drop_disk(&mut self, peg: PegId, disk: Disk) {
        debug!("Disk {disk} dropped on {peg}");
    }

    fn illegal_move(&mut self, from: PegId, to: PegId) {
        debug!("Illegal move {from} -> {to}");
        self.ring();
    }

    fn win(&mut self, level: u32) {
        debug!("Level {level} completed");
        self.ring();
    }
}

/// Read the player commands and forward them to the event loop.
fn spawn_input_reader(sender: Sender<Event>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line: String = match line {
                Ok(l) => l,
                Err(error) => {
                    debug!("Error reading the standard input: {error}");
                    break;
                }
            };
            let event: Event = match line.parse::<Command>() {
                Ok(command) => Event::Input(command),
                Err(ParseCommandError::Empty) => continue,
                Err(error) => Event::InputError(error),
            };
            // The event loop is gone
            if sender.send_blocking(event).is_err() {
                return;
            }
        }
        let _ = sender.send_blocking(Event::InputClosed);
    });
}

/// Load the high scores. A corrupted file is deleted.
fn load_highscores(saver: &SaverHighScores) -> HighScores {
    match saver.get_highscores() {
        Ok(Some(h)) => h,
        Ok(None) => HighScores::new(),
        Err(error) => {
            debug!("Error getting the high scores: {error}");
            // Delete the file in error for trying to resolve the issue for the next start
            saver.delete_save();
            HighScores::new()
        }
    }
}

/// Terminal game session.
pub struct Application {
    game: Game,
    highscores: HighScores,
    saver_game: SaverGame,
    saver_highscores: SaverHighScores,

    /// Game clock.
    clock: Ticker<Event>,

    /// Timer that plays the automatic solution.
    playback: Ticker<Event>,

    receiver: Receiver<Event>,
    sender: Sender<Event>,

    /// Message displayed under the board at the next redraw.
    message: Option<String>,

    /// Whether the screen is cleared before each redraw.
    clear_screen: bool,
}

impl Application {
    /// Create an [`Application`] object and restore the saved game.
    pub fn new(options: &Options) -> Self {
        let (sender, receiver) = async_channel::unbounded::<Event>();
        let feedback: Box<dyn Feedback> = if options.quiet {
            Box::new(LogFeedback)
        } else {
            Box::new(TerminalFeedback)
        };

        let saver_game: SaverGame = SaverGame::new(options.data_dir.clone());
        let saver_highscores: SaverHighScores = SaverHighScores::new(options.data_dir.clone());

        let game: Game = if options.new_game || options.level.is_some() {
            debug!("Discarding the saved game");
            saver_game.delete_save();
            Game::new(options.level.unwrap_or(MIN_LEVEL), feedback)
        } else {
            debug!("Getting the saved game");
            let saved: Option<SavedGame> = match saver_game.get_game() {
                Ok(Some(g)) => {
                    debug!("Game value = {g:?}");
                    Some(g)
                }
                Ok(None) => {
                    debug!("No saved game");
                    None
                }
                Err(error) => {
                    debug!("Error getting the saved game: {error}");
                    // Delete the file in error for trying to resolve the issue for the next start
                    saver_game.delete_save();
                    None
                }
            };
            Game::restore_or_new(saved, feedback)
        };

        Self {
            game,
            highscores: load_highscores(&saver_highscores),
            saver_game,
            saver_highscores,
            clock: Ticker::new(TimerKind::Clock, CLOCK_INTERVAL, sender.clone()),
            playback: Ticker::new(TimerKind::Playback, options.solve_speed, sender.clone()),
            receiver,
            sender,
            message: None,
            clear_screen: io::stdout().is_terminal(),
        }
    }

    /// Run the event loop until the player quits or closes the standard input.
    pub fn run(mut self) -> u8 {
        info!("Starting level {}", self.game.level());
        spawn_input_reader(self.sender.clone());
        self.sync_timers();
        self.redraw();

        while let Ok(event) = self.receiver.recv_blocking() {
            let running: bool = self.handle_event(event);
            self.sync_timers();
            if !running {
                break;
            }
        }
        self.shutdown();
        0
    }

    /// Process an event and return whether the event loop must continue.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Tick(tick) => {
                match tick.kind {
                    TimerKind::Clock => {
                        if self.clock.accepts(&tick) {
                            self.game.tick_clock();
                        }
                    }
                    TimerKind::Playback => {
                        if self.playback.accepts(&tick) && self.game.step_playback().is_some() {
                            self.redraw();
                            if self.game.status() == Status::Won {
                                self.save_game();
                            }
                        }
                    }
                }
                true
            }
            Event::InputError(error) => {
                self.message = Some(format!("{error}. Type `?` for help."));
                self.redraw();
                true
            }
            Event::InputClosed => {
                debug!("Standard input closed");
                false
            }
            Event::Input(Command::Quit) => false,
            Event::Input(command) => {
                self.handle_command(command);
                self.save_game();
                self.redraw();
                true
            }
        }
    }

    /// Apply a player command to the game.
    fn handle_command(&mut self, command: Command) {
        debug!("Command: {command:?}");
        let result: Result<(), GameError> = match command {
            Command::Select(peg) => self.game.select(peg).map(|selection| {
                if let Selection::Moved(outcome) = selection {
                    self.moved(outcome);
                }
            }),
            Command::Move(from, to) => self
                .game
                .request_move(from, to)
                .map(|outcome| self.moved(outcome)),
            Command::Undo => self.game.undo(),
            Command::AutoSolve => self.game.auto_solve().map(|count| {
                self.message = Some(format!("Solving in {count} moves..."));
            }),
            Command::Restart => {
                self.game.restart();
                Ok(())
            }
            Command::NextLevel => {
                self.game.next_level();
                Ok(())
            }
            Command::Level(level) => {
                self.game.start_level(level);
                Ok(())
            }
            Command::Pause => self.game.toggle_pause().map(|_| ()),
            Command::Scores => {
                let level: u32 = self.game.level();
                self.message = Some(draw::scoreboard(
                    level,
                    self.highscores.get_score(level),
                    None,
                ));
                Ok(())
            }
            Command::Help => {
                self.message = Some(HELP.to_string());
                Ok(())
            }
            Command::Quit => Ok(()),
        };

        if let Err(error) = result {
            self.message = Some(error.to_string());
        }
    }

    /// Record the score when the move completes the level.
    fn moved(&mut self, outcome: MoveOutcome) {
        if let MoveOutcome::Won { .. } = outcome {
            self.level_completed();
        }
    }

    /// Add the score of the completed level to the scoreboard.
    fn level_completed(&mut self) {
        if self.game.auto_solved() {
            return;
        }
        let level: u32 = self.game.level();
        let position: Option<usize> = self.highscores.add_score(
            level,
            self.game.move_count(),
            Duration::from_secs(self.game.elapsed_secs()),
            self.game.optimal_moves(),
        );
        if position.is_some() {
            if let Err(error) = self.saver_highscores.save_highscores(&self.highscores) {
                debug!("Error saving the high scores: {error}");
            }
        }
        self.message = Some(draw::scoreboard(
            level,
            self.highscores.get_score(level),
            position,
        ));
    }

    /// Start or stop the timers according to the game status.
    fn sync_timers(&mut self) {
        self.clock.set_running(self.game.clock_running());
        self.playback.set_running(self.game.status() == Status::Solving);
    }

    /// Save the game in progress, or delete the save when there is nothing to resume.
    fn save_game(&self) {
        match self.game.snapshot() {
            Some(saved) => {
                if let Err(error) = self.saver_game.save_game(&saved) {
                    debug!("Error saving the game: {error}");
                }
            }
            None => self.saver_game.delete_save(),
        }
    }

    /// Display the game and the pending message.
    fn redraw(&mut self) {
        let mut stdout = io::stdout().lock();
        if self.clear_screen {
            let _ = write!(stdout, "\x1b[2J\x1b[H");
        }
        let _ = writeln!(stdout, "{}", draw::render(&self.game));
        if let Some(message) = self.message.take() {
            let _ = writeln!(stdout, "\n{message}");
        }
        let _ = write!(stdout, "> ");
        let _ = stdout.flush();
        self.game.clear_indicators();
    }

    fn shutdown(&mut self) {
        self.clock.stop();
        self.playback.stop();
        self.save_game();
        info!("Leaving at level {}", self.game.level());
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn application(dir: &Path, level: Option<u32>) -> Application {
        Application::new(&Options {
            level,
            new_game: false,
            data_dir: dir.to_path_buf(),
            solve_speed: Duration::from_millis(50),
            quiet: true,
        })
    }

    fn play(app: &mut Application, from: PegId, to: PegId) {
        assert!(app.handle_event(Event::Input(Command::Move(from, to))));
    }

    #[test]
    fn completed_level_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut app: Application = application(dir.path(), Some(5));
        for (from, to) in [
            (PegId::A, PegId::C),
            (PegId::A, PegId::B),
            (PegId::C, PegId::B),
            (PegId::A, PegId::C),
            (PegId::B, PegId::A),
            (PegId::B, PegId::C),
            (PegId::A, PegId::C),
        ] {
            play(&mut app, from, to);
        }
        assert_eq!(app.game.status(), Status::Won);

        let saver = SaverHighScores::new(dir.path().to_path_buf());
        let scores: HighScores = saver.get_highscores().unwrap().unwrap();
        assert_eq!(scores.get_score(5).map(|s| s[0].moves), Some(7));
        let saver = SaverGame::new(dir.path().to_path_buf());
        assert!(saver.get_game().unwrap().is_none());
    }

    #[test]
    fn game_in_progress_is_restored() {
        let dir = tempfile::tempdir().unwrap();
        let mut app: Application = application(dir.path(), Some(5));
        play(&mut app, PegId::A, PegId::C);
        play(&mut app, PegId::A, PegId::C);
        drop(app);

        let app: Application = application(dir.path(), None);
        assert_eq!(app.game.level(), 5);
        assert_eq!(app.game.move_count(), 1);
        assert_eq!(app.game.illegal_moves(), 1);
        assert_eq!(app.game.pegs().top(PegId::C), Some(1));
    }

    #[test]
    fn timers_follow_the_game() {
        let dir = tempfile::tempdir().unwrap();
        let mut app: Application = application(dir.path(), Some(5));
        app.sync_timers();
        assert!(!app.clock.is_running());

        assert!(app.handle_event(Event::Input(Command::AutoSolve)));
        app.sync_timers();
        assert!(app.clock.is_running());
        assert!(app.playback.is_running());

        let stale = Tick {
            kind: TimerKind::Playback,
            generation: 0,
        };
        assert!(app.handle_event(Event::Tick(stale)));
        assert_eq!(app.game.move_count(), 0);

        assert!(app.handle_event(Event::Input(Command::Restart)));
        app.sync_timers();
        assert!(!app.playback.is_running());
        assert!(!app.clock.is_running());
        assert_eq!(app.game.status(), Status::Idle);

        assert!(!app.handle_event(Event::Input(Command::Quit)));
        assert!(!app.handle_event(Event::InputClosed));
    }
}
