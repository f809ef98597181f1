use std::fmt::{Display, Formatter};
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;
use thiserror::Error;

use crate::board::{Board, InvalidColumn, Player};
use crate::heuristic::{Heuristic, Value, LOSS, WIN};
use crate::wdl::OutcomeWDL;

/// Error returned when an operation needs an undecided game but the board is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[error("the game is already over")]
pub struct GameOver;

/// Error returned by [`GameState::play`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum PlayError {
    #[error(transparent)]
    GameOver(#[from] GameOver),
    #[error(transparent)]
    InvalidColumn(#[from] InvalidColumn),
}

/// A node in the game tree: a board together with the player to move on it.
///
/// States are immutable values like boards are, [`GameState::play`] builds the successor.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct GameState {
    board: Board,
    next_player: Player,
}

impl GameState {
    pub fn new(board: Board, next_player: Player) -> GameState {
        GameState { board, next_player }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn check_active(&self) -> Result<(), GameOver> {
        if self.is_terminal() {
            Err(GameOver)
        } else {
            Ok(())
        }
    }

    /// The successor state where `next_player` played `col` and the turn moved on.
    pub fn play(&self, col: usize) -> Result<GameState, PlayError> {
        self.check_active()?;
        let board = self.board.drop_marker(self.next_player, col)?;
        Ok(GameState {
            board,
            next_player: self.next_player.other(),
        })
    }

    /// Iterator over the `(column, successor)` pairs of this state, in ascending column order.
    /// The order is part of the contract: it decides move tie-breaking in the search.
    pub fn children(&self) -> Result<Children, GameOver> {
        self.check_active()?;
        Ok(Children { state: self })
    }

    /// The exact value of a terminal board (win/loss sentinel, 0 for a draw) from `player`'s
    /// POV, or the heuristic estimate while the game is still open.
    pub fn value_for(&self, player: Player, heuristic: &impl Heuristic) -> Value {
        match self.board.outcome() {
            Some(outcome) => match outcome.pov(player) {
                OutcomeWDL::Win => WIN,
                OutcomeWDL::Draw => 0,
                OutcomeWDL::Loss => LOSS,
            },
            None => heuristic.value(&self.board, player),
        }
    }
}

/// See [`GameState::children`].
#[derive(Debug)]
pub struct Children<'a> {
    state: &'a GameState,
}

impl InternalIterator for Children<'_> {
    type Item = (usize, GameState);

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        for col in self.state.board.legal_columns() {
            // SAFETY: unwrap is safe because `col` is legal and the state was checked to be
            // non-terminal when this iterator was created.
            let child = self.state.play(col).unwrap();
            if let ControlFlow::Break(r) = f((col, child)) {
                return ControlFlow::Break(r);
            }
        }
        ControlFlow::Continue(())
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "next: {}", self.next_player.to_char())
    }
}
