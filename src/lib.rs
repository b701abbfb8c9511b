/*
lib.rs

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


//! Diskshift, a Tower of Hanoi puzzle with a level progression.
//!
//! The rules ([`rules`]), the solver ([`solver`]), and the level configuration ([`levels`]) are
//! pure functions over a [`pegs::PegState`] board. The [`game::Game`] object is the session
//! state machine. The remaining modules form the terminal front end.

pub mod application;
pub mod cli_options;
pub mod config;
pub mod draw;
pub mod feedback;
pub mod game;
pub mod highscores;
pub mod levels;
pub mod pegs;
pub mod player_input;
pub mod rules;
pub mod saver;
pub mod solver;
pub mod ticker;
