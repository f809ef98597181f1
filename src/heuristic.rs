use crate::board::{Board, Player};

/// The value of a board from one player's POV: a bounded heuristic estimate,
/// or one of the extremal sentinels once the game is decided.
pub type Value = i64;

/// Value of a board that is a certain win for the evaluating player.
pub const WIN: Value = i64::MAX;

/// Value of a certain loss. `-WIN` rather than `i64::MIN`, so that flipping the POV
/// is a plain negation.
pub const LOSS: Value = -WIN;

/// Board evaluation from one player's POV.
///
/// Implementations must be zero-sum, `value(board, player) == -value(board, player.other())`,
/// which is what allows the search to negate child values instead of evaluating both sides.
/// Returned values must lie strictly between [`LOSS`] and [`WIN`].
pub trait Heuristic {
    fn value(&self, board: &Board, player: Player) -> Value;
}

/// Heuristic that counts exploitable line potential.
///
/// Every window that contains no opposing marker scores by how many own markers already
/// occupy it, and the opponent's windows count against symmetrically. Stacking markers
/// into the same open windows builds toward multiple simultaneous threats, which is what
/// this rewards.
#[derive(Debug)]
pub struct LineHeuristic;

fn window_potential(markers: usize) -> Value {
    match markers {
        1 => 1,
        2 => 10,
        3 => 50,
        // empty windows score nothing, completed lines are valued through the sentinels
        _ => 0,
    }
}

impl Heuristic for LineHeuristic {
    fn value(&self, board: &Board, player: Player) -> Value {
        let mut total = 0;

        for window in board.windows() {
            let mut own = 0;
            let mut opp = 0;
            for &tile in &window {
                if tile == Some(player) {
                    own += 1;
                } else if tile.is_some() {
                    opp += 1;
                }
            }

            if opp == 0 {
                total += window_potential(own);
            }
            if own == 0 {
                total -= window_potential(opp);
            }
        }

        total
    }
}
