/*
engine_properties.rs

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


//! Properties of the rules, the solver, and the game session over random boards.

use diskshift::feedback::NoFeedback;
use diskshift::game::{Game, GameError, Status};
use diskshift::levels;
use diskshift::pegs::{Disk, Move, PegId, PegState};
use diskshift::rules;
use diskshift::solver;
use proptest::prelude::*;
use rand::Rng;

/// Strategy for a list of peg pairs, given as indexes in [`PegId::ALL`].
fn peg_pairs(max_len: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0_usize..3, 0_usize..3), 0..max_len)
}

fn peg(index: usize) -> PegId {
    PegId::ALL[index]
}

/// Play the legal moves of the list on a fresh board and return the board.
fn walk(disk_count: u8, start: PegId, pairs: &[(usize, usize)]) -> PegState {
    let mut state = PegState::initial(disk_count, start);
    for (from, to) in pairs {
        let _ = rules::apply_move(&mut state, peg(*from), peg(*to));
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A move is legal when the source has a disk that is smaller than the top of the
    /// destination, or the destination is empty.
    #[test]
    fn prop_legality_matches_top_disks(
        disk_count in 0_u8..=6,
        pairs in peg_pairs(60),
        from in 0_usize..3,
        to in 0_usize..3,
    ) {
        let state = walk(disk_count, PegId::A, &pairs);
        let (from, to) = (peg(from), peg(to));
        let expected: bool = match (state.top(from), state.top(to)) {
            _ if from == to => false,
            (None, _) => false,
            (Some(_), None) => true,
            (Some(moving), Some(below)) => moving < below,
        };
        prop_assert_eq!(rules::is_legal_move(&state, from, to), expected);
    }

    /// Random walks never break the disk ordering and never lose a disk.
    #[test]
    fn prop_walks_keep_the_arrangement(disk_count in 0_u8..=8, pairs in peg_pairs(200)) {
        let state = walk(disk_count, PegId::B, &pairs);
        prop_assert!(state.is_arrangement_of(disk_count));
    }

    /// Moving a disk and moving it back restores the board.
    #[test]
    fn prop_reverse_move_restores_the_board(
        disk_count in 1_u8..=6,
        pairs in peg_pairs(60),
        from in 0_usize..3,
        to in 0_usize..3,
    ) {
        let before = walk(disk_count, PegId::C, &pairs);
        let mut state = before.clone();
        let m = Move::new(peg(from), peg(to));
        if rules::apply_move(&mut state, m.from, m.to).is_ok() {
            let back: Move = m.reversed();
            prop_assert!(rules::apply_move(&mut state, back.from, back.to).is_ok());
        }
        prop_assert_eq!(state, before);
    }

    /// The level is not won while a disk is missing from the target peg.
    #[test]
    fn prop_partial_tower_is_not_won(disk_count in 1_u8..=10, on_target in 0_u8..10) {
        let on_target: u8 = on_target % disk_count;
        let elsewhere: Vec<Disk> = (on_target + 1..=disk_count).rev().collect();
        let target: Vec<Disk> = (1..=on_target).rev().collect();
        let state = PegState::from_stacks([elsewhere, Vec::new(), target]);
        prop_assert!(state.is_arrangement_of(disk_count));
        prop_assert!(!rules::is_won(&state, disk_count, PegId::C));
    }

    /// The solution has 2^n - 1 legal moves and ends with the tower on the target peg.
    #[test]
    fn prop_solution_completes_the_tower(disk_count in 0_u8..=10, layout in 0_usize..6) {
        let start: PegId = peg(layout / 2);
        let target: PegId = peg((layout / 2 + 1 + layout % 2) % 3);
        let auxiliary: PegId = PegId::third(start, target).unwrap();

        let moves = solver::compute_optimal_moves(disk_count, start, target, auxiliary);
        prop_assert_eq!(moves.len() as u64, (1_u64 << disk_count) - 1);

        let mut state = PegState::initial(disk_count, start);
        for m in &moves {
            prop_assert!(rules::apply_move(&mut state, m.from, m.to).is_ok());
            prop_assert!(state.is_well_ordered());
        }
        prop_assert!(rules::is_won(&state, disk_count, target));
    }

    /// Illegal requests do not change the session and raise one rejection each; undoing
    /// every accepted move brings the board back to the start.
    #[test]
    fn prop_session_moves_and_undo(level in 1_u32..=40, pairs in peg_pairs(80)) {
        let mut game = Game::new(level, Box::new(NoFeedback));
        let initial: PegState = game.pegs().clone();
        let mut accepted: u32 = 0;

        for (from, to) in pairs {
            if game.status() == Status::Won {
                break;
            }
            let before: PegState = game.pegs().clone();
            let illegal_before: u32 = game.illegal_moves();
            match game.request_move(peg(from), peg(to)) {
                Ok(_) => {
                    accepted += 1;
                    prop_assert!(!game.last_move_rejected());
                }
                Err(GameError::InvalidMove { .. }) => {
                    prop_assert_eq!(game.pegs(), &before);
                    prop_assert_eq!(game.illegal_moves(), illegal_before + 1);
                    prop_assert!(game.last_move_rejected());
                }
                Err(error) => prop_assert!(false, "unexpected error: {}", error),
            }
            prop_assert_eq!(game.move_count(), accepted);
        }

        if game.status() != Status::Won {
            for _ in 0..accepted {
                prop_assert!(game.undo().is_ok());
            }
            prop_assert_eq!(game.pegs(), &initial);
            prop_assert_eq!(game.move_count(), 0);
            prop_assert_eq!(game.undo(), Err(GameError::EmptyHistory));
        }
    }
}

#[test]
fn random_legal_walk_on_the_largest_tower() {
    let level: u32 = 36;
    assert_eq!(levels::disk_count(level), 10);

    let mut game = Game::new(level, Box::new(NoFeedback));
    let initial: PegState = game.pegs().clone();
    let mut rng = rand::rng();
    let mut played: u32 = 0;

    while played < 500 && game.status() != Status::Won {
        let from: PegId = peg(rng.random_range(0..3));
        let to: PegId = peg(rng.random_range(0..3));
        if !rules::is_legal_move(game.pegs(), from, to) {
            continue;
        }
        assert!(game.request_move(from, to).is_ok());
        played += 1;
        assert!(game.pegs().is_arrangement_of(10));
        assert_eq!(game.history_depth(), played as usize);
    }

    if game.status() != Status::Won {
        while game.can_undo() {
            assert!(game.undo().is_ok());
        }
        assert_eq!(game.pegs(), &initial);
        assert_eq!(game.move_count(), 0);
    }
}
