#![warn(missing_debug_implementations)]

//! A [Connect Four](https://en.wikipedia.org/wiki/Connect_Four) engine built around an
//! immutable [Board](crate::board::Board) value, for boards of any size played with the
//! usual "drop into a column, connect 4 in a line" rules.
//!
//! # Features
//!
//! * [Board](crate::board::Board): the playing grid as an immutable snapshot, every move
//!     produces a new board.
//! * [GameState](crate::state::GameState): a board paired with the player to move,
//!     generating successor states in a fixed order.
//! * [LineHeuristic](crate::heuristic::LineHeuristic): scores the line potential of an
//!     undecided board, symmetrically for both players.
//! * Game-playing algorithms, specifically:
//!     * [RandomBot](crate::ai::simple::RandomBot),
//!         which simply picks a random legal column.
//!     * [MiniMaxBot](crate::ai::minimax::MiniMaxBot),
//!         which picks the best column at a fixed depth as evaluated by a customizable
//!         heuristic (implemented as alpha-beta negamax), with
//!         [choose_move](crate::ai::minimax::choose_move) as the plain-function entry point.
//! * Board generation functions, see [board_gen](crate::util::board_gen).
//! * A bot vs bot game runner to compare playing strength, see
//!     [bot_game](crate::util::bot_game).
//! * Simple game statistics ([perft](crate::util::game_stats::perft)) which can be used to
//!     test the board implementation.
//!
//! # Examples
//!
//! ## Play a game between two bots
//!
//! ```
//! # use connect_four::ai::minimax::MiniMaxBot;
//! # use connect_four::ai::simple::RandomBot;
//! # use connect_four::ai::Bot;
//! # use connect_four::board::{Board, Player};
//! # use connect_four::heuristic::LineHeuristic;
//! # use connect_four::util::tiny::consistent_rng;
//! let mut board = Board::empty(6, 7).unwrap();
//! let mut player = Player::A;
//!
//! let mut bot_a = MiniMaxBot::new(3, LineHeuristic);
//! let mut bot_b = RandomBot::new(consistent_rng());
//!
//! while board.outcome().is_none() {
//!     let col = match player {
//!         Player::A => bot_a.select_move(&board, player).unwrap(),
//!         Player::B => bot_b.select_move(&board, player).unwrap(),
//!     };
//!     board = board.drop_marker(player, col).unwrap();
//!     player = player.other();
//! }
//!
//! println!("{}", board);
//! println!("{:?}", board.outcome().unwrap());
//! ```

pub mod board;
pub mod state;

pub mod heuristic;
pub mod wdl;

pub mod ai;

pub mod util;
