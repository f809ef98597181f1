//! A simple baseline bot.
use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::Bot;
use crate::board::{Board, Player};
use crate::state::GameOver;
use crate::util::board_gen::random_legal_column;

/// Bot that chooses uniformly among the legal columns.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize, GameOver> {
        if board.is_terminal() {
            return Err(GameOver);
        }

        // SAFETY: unwrap is safe because a non-terminal board has at least one legal column.
        Ok(random_legal_column(board, &mut self.rng).unwrap())
    }
}
