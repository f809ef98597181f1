//! Utilities to build a [`Board`] in a known or random state.
use rand::Rng;

use crate::board::{Board, Player};
use crate::state::GameState;

/// Play the given columns, starting from `start` with `first` to move and alternating turns.
/// Panics if a move is illegal or the game ends before the moves run out.
pub fn board_with_moves(start: Board, first: Player, moves: &[usize]) -> Board {
    let mut state = GameState::new(start, first);
    for &col in moves {
        state = state
            .play(col)
            .unwrap_or_else(|e| panic!("playing {} on\n{}{}", col, state, e));
    }
    state.board().clone()
}

/// A uniformly random legal column, `None` if every column is full.
pub fn random_legal_column(board: &Board, rng: &mut impl Rng) -> Option<usize> {
    let count = board.legal_columns().count();
    if count == 0 {
        return None;
    }
    let index = rng.gen_range(0..count);
    board.legal_columns().nth(index)
}

/// Generate a board by playing `n` random moves on `start`.
/// Simulations that end before `n` moves are thrown away and restarted.
pub fn random_board_with_moves(start: &Board, first: Player, n: u32, rng: &mut impl Rng) -> Board {
    'new_try: loop {
        let mut state = GameState::new(start.clone(), first);
        for _ in 0..n {
            if state.is_terminal() {
                continue 'new_try;
            }
            // SAFETY: unwrap is safe because a non-terminal board has a legal column.
            let col = random_legal_column(state.board(), rng).unwrap();
            state = state.play(col).unwrap();
        }
        return state.board().clone();
    }
}
