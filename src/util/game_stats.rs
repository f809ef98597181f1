//! Utilities for collecting game statistics, mostly useful to test the board implementation.
use internal_iterator::InternalIterator;

use crate::board::{Board, Player};
use crate::state::GameState;

/// The number of move sequences of length `depth` playable from `board` with `player` to move,
/// counting transpositions every time they are reached.
/// See <https://www.chessprogramming.org/Perft>.
pub fn perft(board: &Board, player: Player, depth: u32) -> u64 {
    perft_recurse(&GameState::new(board.clone(), player), depth)
}

fn perft_recurse(state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if state.is_terminal() {
        return 0;
    }

    let mut p = 0;
    // SAFETY: unwrap is safe because the state was just checked to be non-terminal.
    state.children().unwrap().for_each(|(_, child)| {
        p += perft_recurse(&child, depth - 1);
    });
    p
}
