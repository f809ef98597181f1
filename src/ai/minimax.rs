use std::cmp::max;
use std::fmt::{Debug, Formatter};
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use crate::ai::Bot;
use crate::board::{Board, Player};
use crate::heuristic::{Heuristic, Value, LOSS, WIN};
use crate::state::{GameOver, GameState};

/// The result of a [`minimax`] search.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MinimaxResult {
    /// The value of the root board from the searching player's POV.
    pub value: Value,

    /// The best column to play, `None` if the search depth was 0.
    pub best_move: Option<usize>,

    /// The number of states visited, the root included.
    pub nodes: u64,
}

/// Evaluate `board` for `player` using depth-limited minimax with alpha-beta pruning, and
/// return the value together with the column that achieves it.
///
/// The root expands its own children and keeps the chosen column next to the running value,
/// so nothing about the search lives on the states themselves. Children are visited in
/// ascending column order and ties keep the first column that achieved the best value, which
/// makes the result deterministic. Pruning never changes the returned value or column, only
/// the node count.
///
/// Fails with [`GameOver`] if the board is terminal.
pub fn minimax<H: Heuristic>(
    board: &Board,
    player: Player,
    depth: u32,
    heuristic: &H,
) -> Result<MinimaxResult, GameOver> {
    let root = GameState::new(board.clone(), player);
    root.check_active()?;

    let mut nodes = 1;

    if depth == 0 {
        // no column gets chosen, but the value is still exact for decided boards
        return Ok(MinimaxResult {
            value: root.value_for(player, heuristic),
            best_move: None,
            nodes,
        });
    }

    let mut best: Option<(Value, usize)> = None;
    let mut alpha = LOSS;

    // SAFETY: unwrap is safe because the root was checked to be non-terminal.
    let _ = root
        .children()
        .unwrap()
        .try_for_each(|(col, child)| -> ControlFlow<()> {
            let value = -negamax(&child, depth - 1, -WIN, -alpha, heuristic, &mut nodes);

            if best.map_or(true, |(best_value, _)| value > best_value) {
                best = Some((value, col));
            }
            alpha = max(alpha, value);

            if alpha >= WIN {
                // a certain win cannot be improved on
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

    // SAFETY: unwrap is safe because a non-terminal board has at least one legal column.
    let (value, best_move) = best.unwrap();
    Ok(MinimaxResult {
        value,
        best_move: Some(best_move),
        nodes,
    })
}

/// The value of `state` from the POV of `state.next_player`, searching `depth` plies deeper
/// within the pruning window `(alpha, beta)`.
///
/// The window travels down by value: each child call sees the bounds its earlier siblings
/// produced, and nothing is ever written back into state shared across branches.
fn negamax<H: Heuristic>(
    state: &GameState,
    depth: u32,
    mut alpha: Value,
    beta: Value,
    heuristic: &H,
    nodes: &mut u64,
) -> Value {
    *nodes += 1;

    if depth == 0 || state.is_terminal() {
        return state.value_for(state.next_player(), heuristic);
    }

    let mut best: Option<Value> = None;

    // SAFETY: unwrap is safe because the state was just checked to be non-terminal.
    let _ = state
        .children()
        .unwrap()
        .try_for_each(|(_, child)| -> ControlFlow<()> {
            let value = -negamax(&child, depth - 1, -beta, -alpha, heuristic, nodes);

            best = Some(best.map_or(value, |best| max(best, value)));
            alpha = max(alpha, value);

            if alpha >= beta {
                // the opponent already has a better option at an ancestor, stop expanding siblings
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

    // SAFETY: unwrap is safe because a non-terminal state has at least one child.
    best.unwrap()
}

/// Pick the column for `player` to play on `board`, looking `depth` plies ahead.
///
/// A board with a single legal column returns it without searching. With `depth == 0` the
/// search chooses no column and the first legal column is returned instead, a deterministic
/// fallback rather than anything random.
///
/// Fails with [`GameOver`] if the board is terminal.
pub fn choose_move<H: Heuristic>(
    board: &Board,
    player: Player,
    depth: u32,
    heuristic: &H,
) -> Result<usize, GameOver> {
    if board.is_terminal() {
        return Err(GameOver);
    }

    let mut legal = board.legal_columns();
    // SAFETY: unwrap is safe because a non-terminal board has at least one legal column.
    let first = legal.next().unwrap();
    if legal.next().is_none() {
        return Ok(first);
    }

    let result = minimax(board, player, depth, heuristic)?;
    Ok(result.best_move.unwrap_or(first))
}

/// [`Bot`] that plays the column chosen by [`minimax`] at a fixed depth.
pub struct MiniMaxBot<H: Heuristic> {
    depth: u32,
    heuristic: H,
    nodes: u64,
}

impl<H: Heuristic> MiniMaxBot<H> {
    pub fn new(depth: u32, heuristic: H) -> Self {
        assert!(depth > 0, "requires depth > 0 to find the best move");
        MiniMaxBot {
            depth,
            heuristic,
            nodes: 0,
        }
    }

    /// The total number of states visited by all searches this bot ran so far.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }
}

impl<H: Heuristic + Debug> Debug for MiniMaxBot<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MiniMaxBot {{ depth: {}, heuristic: {:?} }}",
            self.depth, self.heuristic
        )
    }
}

impl<H: Heuristic + Debug> Bot for MiniMaxBot<H> {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameOver> {
        let result = minimax(board, player, self.depth, &self.heuristic)?;
        self.nodes += result.nodes;

        // SAFETY: unwrap is safe because depth > 0 (see [`MiniMaxBot::new`]) and the board is
        // not terminal (minimax would have failed), so a move was always chosen.
        Ok(result.best_move.unwrap())
    }
}
