use connect_four::board::Outcome::WonBy;
use connect_four::board::{Board, EmptyDimensions, InvalidColumn, Outcome, Player};
use connect_four::state::{GameOver, GameState, PlayError};
use connect_four::util::board_gen::{board_with_moves, random_board_with_moves};
use connect_four::util::game_stats::perft;
use connect_four::util::tiny::consistent_rng;

fn standard() -> Board {
    Board::empty(6, 7).unwrap()
}

#[test]
fn empty_board() {
    let board = standard();

    assert_eq!(board.rows(), 6);
    assert_eq!(board.cols(), 7);
    assert_eq!(board.markers(), 0);
    assert_eq!(board.legal_columns().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5, 6]);
    assert!(!board.is_full());
    assert!(!board.is_terminal());
    assert_eq!(board.outcome(), None);
}

#[test]
fn empty_dimensions() {
    assert_eq!(Board::empty(0, 7).unwrap_err(), EmptyDimensions { rows: 0, cols: 7 });
    assert_eq!(Board::empty(6, 0).unwrap_err(), EmptyDimensions { rows: 6, cols: 0 });
    assert!(Board::empty(1, 1).is_ok());
}

#[test]
fn drop_lands_in_lowest_empty_cell() {
    let board = standard();

    let board = board.drop_marker(Player::A, 3).unwrap();
    assert_eq!(board.tile(0, 3), Some(Player::A));

    let board = board.drop_marker(Player::B, 3).unwrap();
    assert_eq!(board.tile(0, 3), Some(Player::A));
    assert_eq!(board.tile(1, 3), Some(Player::B));
    assert_eq!(board.markers(), 2);
}

#[test]
fn drop_leaves_original_untouched() {
    let board = standard();
    let _child = board.drop_marker(Player::A, 0).unwrap();

    assert_eq!(board.markers(), 0);
    assert_eq!(board.tile(0, 0), None);
}

#[test]
fn drop_column_out_of_range() {
    let board = standard();
    assert_eq!(
        board.drop_marker(Player::A, 7).unwrap_err(),
        InvalidColumn::OutOfRange { col: 7, cols: 7 }
    );
}

#[test]
fn drop_column_full() {
    let mut board = standard();
    let mut player = Player::A;
    for _ in 0..6 {
        board = board.drop_marker(player, 2).unwrap();
        player = player.other();
    }

    assert_eq!(
        board.drop_marker(player, 2).unwrap_err(),
        InvalidColumn::Full { col: 2 }
    );
    // only the column that just became full disappeared from the legal set
    assert_eq!(board.legal_columns().collect::<Vec<_>>(), vec![0, 1, 3, 4, 5, 6]);
}

#[test]
fn gravity_after_random_moves() {
    let mut rng = consistent_rng();

    for n in [0u32, 5, 10, 20, 30] {
        let board = random_board_with_moves(&standard(), Player::A, n, &mut rng);
        assert_eq!(board.markers(), n as usize);

        for col in 0..board.cols() {
            for row in 1..board.rows() {
                if board.tile(row, col).is_some() {
                    assert!(
                        board.tile(row - 1, col).is_some(),
                        "marker floats at ({}, {}) on\n{}",
                        row,
                        col,
                        board
                    );
                }
            }
        }
    }
}

#[test]
fn wins_by_move_sequence() {
    // horizontal, vertical, both diagonal orientations
    check_outcome(&[1, 1, 2, 2, 3, 3, 4], Some(WonBy(Player::A)));
    check_outcome(&[1, 2, 1, 2, 1, 2, 1], Some(WonBy(Player::A)));
    check_outcome(&[1, 2, 2, 3, 6, 3, 3, 4, 6, 4, 6, 4, 4], Some(WonBy(Player::A)));
    check_outcome(&[4, 3, 3, 2, 6, 2, 2, 1, 6, 1, 6, 1, 1], Some(WonBy(Player::A)));
}

#[test]
fn three_in_line_is_not_a_win() {
    check_outcome(&[1, 1, 2, 2, 3], None);
    check_outcome(&[1, 2, 1, 2, 1], None);
}

#[test]
fn draw() {
    let moves = vec![
        1, 0, 3, 0, 5, 4, 4, 4, 0, 6, 2, 0, 3, 0, 2, 6, 4, 1, 0, 3, 6, 5, 3, 1, 1, 6, 3, 5, 6, 3, 1, 4, 5, 4, 5, 1, 2,
        2, 5, 2, 2, 6,
    ];

    check_outcome(&moves, Some(Outcome::Draw));
}

fn check_outcome(moves: &[usize], outcome: Option<Outcome>) {
    let board = board_with_moves(standard(), Player::A, moves);
    println!("moves: {:?}", moves);
    println!("{}", board);

    assert_eq!(board.outcome(), outcome);
    assert_eq!(board.is_terminal(), outcome.is_some());

    match outcome {
        Some(WonBy(winner)) => {
            assert!(board.has_four_in_line(winner));
            assert!(!board.has_four_in_line(winner.other()));
        }
        Some(Outcome::Draw) => {
            assert!(board.is_full());
            assert!(!board.has_four_in_line(Player::A));
            assert!(!board.has_four_in_line(Player::B));
        }
        None => {
            assert!(!board.has_four_in_line(Player::A));
            assert!(!board.has_four_in_line(Player::B));
        }
    }
}

#[test]
fn win_on_offset_diagonal() {
    // the anti-diagonal hugging the lower-left edge, well away from the center diagonals
    let board = Board::from_rows(&[
        "OOOX   ",
        "OOX    ",
        "OX     ",
        "X      ",
        "       ",
        "       ",
    ]);

    assert!(board.has_four_in_line(Player::A));
    assert!(!board.has_four_in_line(Player::B));
    assert_eq!(board.outcome(), Some(WonBy(Player::A)));
}

#[test]
fn window_count_covers_every_orientation() {
    // 6x7: 6*4 horizontal, 3*7 vertical and 3*4 per diagonal orientation
    assert_eq!(standard().windows().count(), 24 + 21 + 12 + 12);

    // a board shorter than a line still has its horizontal windows, nothing else
    let flat = Board::empty(1, 4).unwrap();
    assert_eq!(flat.windows().count(), 1);
}

#[test]
fn row_serialization_round_trips() {
    let board = board_with_moves(standard(), Player::A, &[3, 3, 4, 2, 0]);

    let rows = board.to_rows();
    assert_eq!(rows[0], "X OXX  ");
    assert_eq!(rows[1], "   O   ");
    assert!(rows[2..].iter().all(|row| row == "       "));

    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    assert_eq!(Board::from_rows(&rows), board);
}

#[test]
#[should_panic]
fn from_rows_rejects_floating_markers() {
    Board::from_rows(&["   X   ", " X     "]);
}

#[test]
fn state_play_alternates_turns() {
    let state = GameState::new(standard(), Player::A);
    assert_eq!(state.next_player(), Player::A);

    let state = state.play(3).unwrap();
    assert_eq!(state.next_player(), Player::B);
    assert_eq!(state.board().tile(0, 3), Some(Player::A));

    let state = state.play(3).unwrap();
    assert_eq!(state.next_player(), Player::A);
    assert_eq!(state.board().tile(1, 3), Some(Player::B));
}

#[test]
fn state_children_ascending() {
    use internal_iterator::InternalIterator;

    let board = board_with_moves(standard(), Player::A, &[1, 1, 1, 1, 1, 1]);
    let state = GameState::new(board, Player::A);

    let children: Vec<(usize, GameState)> = state.children().unwrap().collect();
    let cols: Vec<usize> = children.iter().map(|&(col, _)| col).collect();
    assert_eq!(cols, vec![0, 2, 3, 4, 5, 6]);

    for (col, child) in children {
        assert_eq!(child.next_player(), Player::B);
        assert_eq!(child.board().markers(), 7);
        assert!(child.board().legal_columns().count() >= 5, "column {} broke the board", col);
    }
}

#[test]
fn terminal_state_errors() {
    let won = board_with_moves(standard(), Player::A, &[1, 1, 2, 2, 3, 3, 4]);
    let state = GameState::new(won, Player::B);

    assert!(state.is_terminal());
    assert_eq!(state.check_active(), Err(GameOver));
    assert!(state.children().is_err());
    assert_eq!(state.play(0).unwrap_err(), PlayError::GameOver(GameOver));
}

#[test]
fn play_invalid_column_errors() {
    let mut state = GameState::new(standard(), Player::A);
    for _ in 0..6 {
        state = state.play(0).unwrap();
    }

    assert_eq!(
        state.play(0).unwrap_err(),
        PlayError::InvalidColumn(InvalidColumn::Full { col: 0 })
    );
    assert_eq!(
        state.play(9).unwrap_err(),
        PlayError::InvalidColumn(InvalidColumn::OutOfRange { col: 9, cols: 7 })
    );
}

#[test]
fn perft_empty_board() {
    let board = standard();

    assert_eq!(perft(&board, Player::A, 0), 1);
    assert_eq!(perft(&board, Player::A, 1), 7);
    assert_eq!(perft(&board, Player::A, 2), 49);
    assert_eq!(perft(&board, Player::A, 3), 343);
    assert_eq!(perft(&board, Player::B, 2), 49);
}

#[test]
fn perft_stops_at_terminal_boards() {
    // A can complete the row at either open end, after a win nothing is playable
    let board = board_with_moves(standard(), Player::A, &[1, 1, 2, 2, 3, 3]);

    assert_eq!(perft(&board, Player::A, 1), 7);
    // the wins in columns 0 and 4 end the game, the 5 other lines continue
    assert_eq!(perft(&board, Player::A, 2), 5 * 7);
}
