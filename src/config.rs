/*
config.rs

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

//! Application constants.

use std::path::PathBuf;
use std::time::Duration;

pub const APP_NAME: &str = "diskshift";
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>"
);

/// First playable level.
pub const MIN_LEVEL: u32 = 1;

/// Last playable level.
pub const MAX_LEVEL: u32 = 1200;

/// Delay between two moves when the puzzle is solved automatically.
pub const SOLVE_SPEED: Duration = Duration::from_millis(300);

/// Interval of the game clock.
pub const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

/// Name of the file that stores the game in progress.
pub const SAVE_GAME_FILE: &str = "savegame.json";

/// Name of the file that stores the high scores.
pub const HIGHSCORES_FILE: &str = "highscores.json";

/// Directory where the game and the high scores are saved: `diskshift` under the platform data
/// directory (`$XDG_DATA_HOME`, or `~/.local/share` on Linux).
///
/// Return None when the platform has no data directory.
pub fn user_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn data_dir_is_absolute() {
        if let Some(dir) = user_data_dir() {
            assert!(dir.is_absolute());
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn relative_xdg_data_home_is_ignored() {
        let previous = env::var_os("XDG_DATA_HOME");
        unsafe {
            env::set_var("XDG_DATA_HOME", "relative/dir");
        }
        let dir: Option<PathBuf> = user_data_dir();
        unsafe {
            match previous {
                Some(value) => env::set_var("XDG_DATA_HOME", value),
                None => env::remove_var("XDG_DATA_HOME"),
            }
        }
        if let Some(dir) = dir {
            assert!(dir.is_absolute());
            assert!(!dir.starts_with("relative"));
        }
    }
}
