use std::fmt::{Debug, Display, Formatter};

use itertools::iproduct;
use thiserror::Error;

/// One of the two players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    A,
    B,
}

/// The absolute outcome for a finished game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// The marker used for this player in rendered and serialized grids.
    pub fn to_char(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }
}

/// The number of markers that have to line up to win the game.
pub const LINE_LEN: usize = 4;

/// Error returned by [`Board::empty`] when either dimension is zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[error("board dimensions must be nonzero, got {rows}x{cols}")]
pub struct EmptyDimensions {
    pub rows: usize,
    pub cols: usize,
}

/// Error returned by [`Board::drop_marker`] for a column that cannot take a marker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidColumn {
    #[error("column {col} is outside of 0..{cols}")]
    OutOfRange { col: usize, cols: usize },
    #[error("column {col} is already full")]
    Full { col: usize },
}

/// A snapshot of the playing grid, with row 0 at the bottom.
///
/// A board is an immutable value: [`Board::drop_marker`] builds the successor board and leaves
/// `self` untouched, so a search can branch from the same ancestor as often as it wants.
/// Markers only enter through `drop_marker`, which keeps every column gravity-packed.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major, `row * cols + col`.
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Create a board with all cells empty.
    pub fn empty(rows: usize, cols: usize) -> Result<Board, EmptyDimensions> {
        if rows == 0 || cols == 0 {
            return Err(EmptyDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The marker at the given cell. Panics if the cell is outside of the grid.
    pub fn tile(&self, row: usize, col: usize) -> Option<Player> {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) outside of {:?}",
            row,
            col,
            self
        );
        self.cells[row * self.cols + col]
    }

    /// The number of markers on the board.
    pub fn markers(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Return a new board with `player`'s marker in the lowest empty cell of `col`.
    pub fn drop_marker(&self, player: Player, col: usize) -> Result<Board, InvalidColumn> {
        if col >= self.cols {
            return Err(InvalidColumn::OutOfRange { col, cols: self.cols });
        }
        let row = (0..self.rows)
            .find(|&row| self.tile(row, col).is_none())
            .ok_or(InvalidColumn::Full { col })?;

        let mut next = self.clone();
        next.cells[row * self.cols + col] = Some(player);
        Ok(next)
    }

    /// The columns that can still take a marker, in ascending order.
    /// Empty exactly when the board is full.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        // a column is full iff its top cell is occupied
        (0..self.cols).filter(move |&col| self.tile(self.rows - 1, col).is_none())
    }

    pub fn is_full(&self) -> bool {
        self.legal_columns().next().is_none()
    }

    /// Iterator over every line of [`LINE_LEN`] consecutive cells: all horizontal, vertical and
    /// diagonal runs in both diagonal orientations. Shared between win detection and the
    /// heuristic, so both agree on what counts as a line.
    pub fn windows(&self) -> impl Iterator<Item = [Option<Player>; LINE_LEN]> + '_ {
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        let span = (LINE_LEN - 1) as isize;

        DIRECTIONS.iter().flat_map(move |&(dr, dc)| {
            iproduct!(0..self.rows as isize, 0..self.cols as isize).filter_map(move |(r, c)| {
                if !self.in_bounds(r + span * dr, c + span * dc) {
                    return None;
                }
                let mut window = [None; LINE_LEN];
                for (i, cell) in window.iter_mut().enumerate() {
                    let i = i as isize;
                    *cell = self.tile((r + i * dr) as usize, (c + i * dc) as usize);
                }
                Some(window)
            })
        })
    }

    /// Whether `player` has [`LINE_LEN`] markers in a row anywhere on the board.
    pub fn has_four_in_line(&self, player: Player) -> bool {
        self.windows()
            .any(|window| window.iter().all(|&tile| tile == Some(player)))
    }

    /// Whether the game is over, either because someone won or because the board is full.
    pub fn is_terminal(&self) -> bool {
        self.is_full() || Player::BOTH.iter().any(|&player| self.has_four_in_line(player))
    }

    /// The outcome of this board, `None` while the game can still continue.
    pub fn outcome(&self) -> Option<Outcome> {
        for &player in &Player::BOTH {
            if self.has_four_in_line(player) {
                return Some(Outcome::WonBy(player));
            }
        }
        if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Serialize the board as one string per row, bottom row first, using the player markers
    /// and `' '` for empty cells. For logging and tests, not a stable format.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.tile(row, col).map_or(' ', Player::to_char))
                    .collect()
            })
            .collect()
    }

    /// Inverse of [`Board::to_rows`]: build a board from one string per row, bottom row first.
    ///
    /// Panics if the rows are empty or ragged, if a character is not a player marker or `' '`,
    /// or if a marker floats above an empty cell.
    pub fn from_rows(rows: &[&str]) -> Board {
        assert!(
            !rows.is_empty() && !rows[0].is_empty(),
            "board dimensions must be nonzero"
        );

        let mut board = Board::empty(rows.len(), rows[0].chars().count()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), board.cols, "ragged row {:?}", line);
            for (col, c) in line.chars().enumerate() {
                let tile = match c {
                    'X' => Some(Player::A),
                    'O' => Some(Player::B),
                    ' ' => None,
                    _ => panic!("unexpected cell character {:?}", c),
                };
                if tile.is_some() && row > 0 {
                    assert!(
                        board.tile(row - 1, col).is_some(),
                        "marker at ({}, {}) floats above an empty cell",
                        row,
                        col
                    );
                }
                board.cells[row * board.cols + col] = tile;
            }
        }
        board
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        (0..self.rows as isize).contains(&row) && (0..self.cols as isize).contains(&col)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({}x{}, markers: {})", self.rows, self.cols, self.markers())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                write!(f, "{}", self.tile(row, col).map_or('.', Player::to_char))?;
            }
            writeln!(f)?;
        }
        for col in 0..self.cols {
            write!(f, "{}", col % 10)?;
        }
        writeln!(f)
    }
}
