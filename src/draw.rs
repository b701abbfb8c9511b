/*
draw.rs

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


//! Render the game as text.
//!
//! Disks are drawn as `<===>` bars centered on their peg. The target peg is marked with `*`
//! and the selected peg with brackets.

use chrono::{DateTime, Local};

use crate::game::{Game, Status};
use crate::highscores::{self, MAX_STARS, Score};
use crate::levels::{self, LevelConfig};
use crate::pegs::{Disk, PegId, PegState};

/// Space between two pegs.
const PEG_GAP: &str = "  ";

/// Format a duration in seconds as `mm:ss`, or `hh:mm:ss` past one hour.
pub fn format_clock(secs: u64) -> String {
    let hour: u64 = secs / 3600;
    let minute: u64 = (secs % 3600) / 60;
    let second: u64 = secs % 60;
    if hour > 0 {
        format!("{hour:02}:{minute:02}:{second:02}")
    } else {
        format!("{minute:02}:{second:02}")
    }
}

/// Draw a star rating, such as `***..` for three stars.
pub fn stars(count: u8) -> String {
    let count: u8 = count.min(MAX_STARS);
    format!(
        "{}{}",
        "*".repeat(count as usize),
        ".".repeat((MAX_STARS - count) as usize)
    )
}

/// Draw one row of a peg: a disk, or the bare peg.
fn cell(disk: Option<Disk>, radius: usize) -> String {
    match disk {
        Some(d) => {
            let d: usize = (d as usize).clamp(1, radius);
            let pad: String = " ".repeat(radius - d);
            format!("{pad}<{}>{pad}", "=".repeat(2 * d - 1))
        }
        None => {
            let pad: String = " ".repeat(radius);
            format!("{pad}|{pad}")
        }
    }
}

/// Draw the three pegs and their disks.
///
/// `last_target` adds a `v` marker above the peg that received the last disk.
pub fn board(
    pegs: &PegState,
    disk_count: u8,
    target: PegId,
    selected: Option<PegId>,
    last_target: Option<PegId>,
) -> String {
    let largest: Disk = PegId::ALL
        .iter()
        .flat_map(|p| pegs.peg(*p).iter().copied())
        .max()
        .unwrap_or(0);
    let radius: usize = disk_count.max(largest).max(2) as usize;
    let width: usize = 2 * radius + 1;
    let height: usize = PegId::ALL
        .iter()
        .map(|p| pegs.len(*p))
        .max()
        .unwrap_or(0)
        .max(disk_count as usize);

    let mut lines: Vec<String> = Vec::new();

    if let Some(peg) = last_target {
        let marker: Vec<String> = PegId::ALL
            .iter()
            .map(|p| {
                let mark: &str = if *p == peg { "v" } else { "" };
                format!("{mark:^width$}")
            })
            .collect();
        lines.push(marker.join(PEG_GAP));
    }

    for row in (0..height).rev() {
        let cells: Vec<String> = PegId::ALL
            .iter()
            .map(|p| cell(pegs.peg(*p).get(row).copied(), radius))
            .collect();
        lines.push(cells.join(PEG_GAP));
    }

    let base: Vec<String> = PegId::ALL.iter().map(|_| "-".repeat(width)).collect();
    lines.push(base.join(PEG_GAP));

    let labels: Vec<String> = PegId::ALL
        .iter()
        .map(|p| {
            let mut label: String = if selected == Some(*p) {
                format!("[{p}]")
            } else {
                p.to_string()
            };
            if *p == target {
                label.push('*');
            }
            format!("{label:^width$}")
        })
        .collect();
    lines.push(labels.join(PEG_GAP));

    lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Title line of a level: phase, tier, and level number.
pub fn header(config: &LevelConfig) -> String {
    format!(
        "PHASE {} | {} | LEVEL {}",
        config.phase, config.tier, config.level
    )
}

/// Render the whole game screen.
pub fn render(game: &Game) -> String {
    let config: &LevelConfig = game.config();
    let mut screen: Vec<String> = vec![
        header(config),
        format!(
            "{} disks from {} to {}",
            config.disk_count, config.start, config.target
        ),
        format!(
            "Moves: {}/{}   Time: {}   Illegal: {}",
            game.move_count(),
            game.optimal_moves(),
            format_clock(game.elapsed_secs()),
            game.illegal_moves()
        ),
        String::new(),
        board(
            game.pegs(),
            config.disk_count,
            config.target,
            game.selected(),
            game.last_target(),
        ),
        String::new(),
    ];

    let status: String = match game.status() {
        Status::Idle => "Type a peg letter to start, or `?` for help.".to_string(),
        Status::Playing if game.is_paused() => "PAUSED. Type `p` to resume.".to_string(),
        Status::Playing => match game.selected() {
            Some(peg) => format!("Peg {peg} selected. Pick the destination peg."),
            None => String::new(),
        },
        Status::Solving => "Solving...".to_string(),
        Status::Won if game.auto_solved() => {
            "Solved automatically. Type `n` for the next level.".to_string()
        }
        Status::Won => format!(
            "Level complete in {} moves [{}]. Type `n` for the next level.",
            game.move_count(),
            stars(highscores::star_rating(
                game.move_count() as u64,
                game.optimal_moves()
            ))
        ),
    };
    if game.last_move_rejected() {
        screen.push("Illegal move!".to_string());
    }
    if !status.is_empty() {
        screen.push(status);
    }
    screen.join("\n")
}

/// Render the scoreboard of a level.
///
/// `highlight` is the position (starting at 1) of the score to mark, usually the score that
/// the player just made.
pub fn scoreboard(level: u32, scores: Option<&[Score]>, highlight: Option<usize>) -> String {
    let Some(scores) = scores else {
        return format!("No score yet for level {level}");
    };
    let mut lines: Vec<String> = vec![format!("High scores for level {level}")];
    for (i, score) in scores.iter().enumerate() {
        let dt: DateTime<Local> = DateTime::from(score.when);
        let mark: char = if highlight == Some(i + 1) { '>' } else { ' ' };
        lines.push(format!(
            "{mark}{:>3}. {:>5} moves  {:>8}  {}  {}",
            i + 1,
            score.moves,
            format_clock(score.time.as_secs()),
            stars(score.stars),
            dt.format("%c")
        ));
    }
    lines.join("\n")
}

/// Render the configuration of the levels `from` to `to`, both included.
pub fn level_table(from: u32, to: u32) -> String {
    let mut lines: Vec<String> = vec![format!(
        "{:>5}  {:>5}  {:<6}  {:>7}  {:<11}  {}",
        "LEVEL", "DISKS", "PEGS", "OPTIMAL", "TIER", "PHASE"
    )];
    for level in from..=to {
        let config: LevelConfig = levels::derive_configuration(level);
        lines.push(format!(
            "{:>5}  {:>5}  {:<6}  {:>7}  {:<11}  {}",
            config.level,
            config.disk_count,
            format!("{}->{}", config.start, config.target),
            config.optimal_moves(),
            config.tier.to_string(),
            config.phase
        ));
    }
    lines.join("\n")
}
