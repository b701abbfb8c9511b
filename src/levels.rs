/*
levels.rs

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

//! Level configuration.
//!
//! Each level number maps to a fixed puzzle: the number of disks, the peg where the disks start,
//! and the peg where they must end.
//! The mapping is deterministic so that a level is the same puzzle every time it is played.
//!
//! Levels are also grouped into phases (20 levels each) and tiers (150 levels each). Phases and
//! tiers are labels for the player and have no effect on the rules.

use strum_macros::{Display, FromRepr};

use crate::config::{MAX_LEVEL, MIN_LEVEL};
use crate::pegs::{PegId, PegState};
use crate::solver;

/// Number of levels per phase.
const LEVELS_PER_PHASE: u32 = 20;

/// Number of levels per tier.
const LEVELS_PER_TIER: u32 = 150;

/// A level gets one more disk every `LEVELS_PER_DISK` levels.
const LEVELS_PER_DISK: u32 = 5;

/// Number of disks of the first levels.
const MIN_DISKS: u32 = 3;

/// The number of moves doubles with each disk, so the progression stops at 10 disks (1023 moves).
pub const MAX_DISKS: u8 = 10;

/// Phase names, in order. The list wraps around after the last phase.
const PHASE_NAMES: [&str; 30] = [
    "GENESIS", "NEURAL", "SYNAPSE", "QUANTUM", "KINETIC", "OSMOSIS", "VECTOR", "MANTRA", "AETHER",
    "OMEGA", "INFINITY", "ZENITH", "PARADOX", "FLUX", "CORE", "SHELL", "NODE", "GRID", "LOGIC",
    "PULSE", "CYBER", "BIO", "DATA", "VOID", "PRISM", "ARC", "GATE", "ROOT", "LINK", "PATH",
];

/// Start, target, and auxiliary pegs. The level number selects one of these entries.
const PEG_LAYOUTS: [(PegId, PegId, PegId); 6] = [
    (PegId::A, PegId::C, PegId::B),
    (PegId::A, PegId::B, PegId::C),
    (PegId::B, PegId::C, PegId::A),
    (PegId::B, PegId::A, PegId::C),
    (PegId::C, PegId::B, PegId::A),
    (PegId::C, PegId::A, PegId::B),
];

/// Player rank, given by the level depth.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, FromRepr)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum Tier {
    Novice,
    Apprentice,
    Adept,
    Expert,
    Master,
    Elite,
    Legend,
    Singularity,
}

impl Tier {
    /// Return the tier of the given level. Levels past the last tier stay in that tier.
    pub fn for_level(level: u32) -> Tier {
        let index: u32 = level.saturating_sub(1) / LEVELS_PER_TIER;
        u8::try_from(index)
            .ok()
            .and_then(Tier::from_repr)
            .unwrap_or(Tier::Singularity)
    }

    /// Color theme associated with the tier.
    pub fn theme(self) -> &'static str {
        match self {
            Tier::Novice => "emerald",
            Tier::Apprentice => "teal",
            Tier::Adept => "sky",
            Tier::Expert => "blue",
            Tier::Master => "indigo",
            Tier::Elite => "violet",
            Tier::Legend => "fuchsia",
            Tier::Singularity => "slate",
        }
    }
}

/// Puzzle parameters for a level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LevelConfig {
    /// Level number.
    pub level: u32,

    /// Number of disks.
    pub disk_count: u8,

    /// Peg where the disks are stacked at the beginning.
    pub start: PegId,

    /// Peg where the disks must be moved.
    pub target: PegId,

    /// Peg that is neither the start nor the target peg.
    pub auxiliary: PegId,

    /// Phase label.
    pub phase: &'static str,

    /// Tier.
    pub tier: Tier,
}

impl LevelConfig {
    /// Minimum number of moves to complete the level.
    pub fn optimal_moves(&self) -> u64 {
        solver::optimal_move_count(self.disk_count)
    }

    /// Board at the beginning of the level.
    pub fn initial_state(&self) -> PegState {
        PegState::initial(self.disk_count, self.start)
    }
}

/// Bring the level number into the playable range.
pub fn clamp_level(level: u32) -> u32 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Number of disks for the given level.
pub fn disk_count(level: u32) -> u8 {
    let disks: u32 = MIN_DISKS + level.saturating_sub(1) / LEVELS_PER_DISK;
    disks.min(MAX_DISKS as u32) as u8
}

/// Phase label for the given level.
pub fn phase_name(level: u32) -> &'static str {
    let index: usize = (level.saturating_sub(1) / LEVELS_PER_PHASE) as usize % PHASE_NAMES.len();
    PHASE_NAMES[index]
}

/// Build the puzzle configuration of a level.
///
/// The function accepts any level number, including numbers past [`MAX_LEVEL`]. Callers clamp
/// the level with [`clamp_level`] first when they need a playable level.
pub fn derive_configuration(level: u32) -> LevelConfig {
    // Salted index so that consecutive levels do not repeat an obvious pattern
    let index: usize = ((level as u64 * 13 + 7) % PEG_LAYOUTS.len() as u64) as usize;
    let (start, target, auxiliary) = PEG_LAYOUTS[index];

    LevelConfig {
        level,
        disk_count: disk_count(level),
        start,
        target,
        auxiliary,
        phase: phase_name(level),
        tier: Tier::for_level(level),
    }
}
