/*
cli_options.rs

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


//! Process command-line options.
//!
//! Without options, Diskshift restores the saved game, or starts at the first level.
//! Two options print information and exit without starting a game.
//!
//! # Examples
//!
//! List the configuration of the first levels:
//!
//! ```text
//! $ diskshift --ls 1 4
//! LEVEL  DISKS  PEGS    OPTIMAL  TIER         PHASE
//!     1      3  B->C          7  NOVICE       GENESIS
//!     2      3  B->A          7  NOVICE       GENESIS
//!     3      3  C->B          7  NOVICE       GENESIS
//!     4      3  C->A          7  NOVICE       GENESIS
//! ```
//!
//! Start a new game at a random level, with a faster automatic solution:
//!
//! ```text
//! $ diskshift --random --solve-speed 100
//! ```

use clap::Parser;
use log::{debug, warn};
use rand::Rng;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{self, COPYRIGHT_NOTICE, MAX_LEVEL, MIN_LEVEL, SOLVE_SPEED};
use crate::draw;
use crate::highscores::HighScores;
use crate::levels;
use crate::saver::highscores::SaverHighScores;

/// Move the disk towers from peg to peg.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Start a new game at the given level
    #[arg(short, long, value_name = "N", conflicts_with = "random")]
    level: Option<u32>,

    /// Start a new game at a random level
    #[arg(short, long, default_value_t = false)]
    random: bool,

    /// Discard the saved game
    #[arg(short, long, default_value_t = false)]
    new: bool,

    /// Directory for the saved game and the high scores
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Delay between two moves of the automatic solution, in milliseconds
    #[arg(
        short,
        long,
        value_name = "MS",
        default_value_t = SOLVE_SPEED.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    solve_speed: u64,

    /// Do not ring the terminal bell
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// List the configuration of the levels FROM to TO
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    ls: Option<Vec<u32>>,

    /// Print the high scores
    #[arg(long, default_value_t = false)]
    scores: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Options for the game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Level requested on the command line. None to restore the saved game.
    pub level: Option<u32>,

    /// Whether the saved game must be discarded.
    pub new_game: bool,

    /// Directory for the saved game and the high scores.
    pub data_dir: PathBuf,

    /// Delay between two moves of the automatic solution.
    pub solve_speed: Duration,

    /// Whether the terminal bell is disabled.
    pub quiet: bool,
}

/// What to do after processing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Startup {
    /// Start the game with the given options.
    Play(Options),

    /// Exit with the given status code.
    Exit(u8),
}

impl From<&Args> for Options {
    fn from(args: &Args) -> Self {
        let level: Option<u32> = if args.random {
            let level: u32 = rand::rng().random_range(MIN_LEVEL..=MAX_LEVEL);
            debug!("Random level: {level}");
            Some(level)
        } else {
            args.level
        };
        Self {
            level,
            new_game: args.new,
            data_dir: data_dir(args),
            solve_speed: Duration::from_millis(args.solve_speed),
            quiet: args.quiet,
        }
    }
}

/// Directory for the save files: the `--data-dir` option, or the user data directory.
fn data_dir(args: &Args) -> PathBuf {
    if let Some(dir) = &args.data_dir {
        return dir.clone();
    }
    match config::user_data_dir() {
        Some(dir) => dir,
        None => {
            warn!("No user data directory, saving in the current directory");
            PathBuf::from(".")
        }
    }
}

/// Return the level range to list, clamped to the playable levels and in increasing order.
fn level_range(bounds: &[u32]) -> (u32, u32) {
    let from: u32 = levels::clamp_level(bounds.first().copied().unwrap_or(MIN_LEVEL));
    let to: u32 = levels::clamp_level(bounds.get(1).copied().unwrap_or(from));
    (from.min(to), from.max(to))
}

/// Print all the scoreboards.
fn print_highscores(data_dir: PathBuf) -> u8 {
    let saver: SaverHighScores = SaverHighScores::new(data_dir);
    let highscores: HighScores = match saver.get_highscores() {
        Ok(Some(h)) => h,
        Ok(None) => HighScores::new(),
        Err(error) => {
            eprintln!("Cannot read the high scores: {error}");
            return 1;
        }
    };
    if highscores.is_empty() {
        println!("No high score yet");
        return 0;
    }
    let boards: Vec<String> = highscores
        .levels()
        .map(|level| draw::scoreboard(level, highscores.get_score(level), None))
        .collect();
    println!("{}", boards.join("\n\n"));
    0
}

/// Parse and process command-line options.
pub fn parse() -> Startup {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the levels
    //
    if let Some(bounds) = &args.ls {
        let (from, to) = level_range(bounds);
        println!("{}", draw::level_table(from, to));
        return Startup::Exit(0);
    }

    let options: Options = Options::from(&args);
    debug!("Options: {options:?}");

    //
    // Print the high scores
    //
    if args.scores {
        return Startup::Exit(print_highscores(options.data_dir));
    }

    Startup::Play(options)
}
