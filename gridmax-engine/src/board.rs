//! Board is a cell-centric, [mailbox](https://www.chessprogramming.org/Mailbox)
//! representation of the 8x8 playing grid.
//!
//! Cells are stored row-major with row 0 holding rank 8 and row 7 holding rank 1,
//! so the index of (file, row) is `row * 8 + file`.

use std::convert::TryFrom;
use std::fmt::{self, Display};
use std::ops::{Deref, DerefMut, Index};
use std::str::FromStr;

use crate::coretypes::{Cell, Move, Piece, NUM_CELLS, NUM_FILES, NUM_ROWS};
use crate::error::{self, ErrorKind};

/// Starting layout, rank 8 first. Lowercase pieces belong to the Second side.
pub const START_LAYOUT: &str = "\
    rnbqkbnr\
    pppppppp\
    ........\
    ........\
    ........\
    ........\
    PPPPPPPP\
    RNBQKBNR";

/// Fixed size 8x8 grid of cells.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Cell; Self::SIZE],
}

impl Board {
    pub const FILES: usize = NUM_FILES;
    pub const ROWS: usize = NUM_ROWS;
    pub const SIZE: usize = NUM_CELLS;

    /// Creates an empty Board, where all cells are None.
    pub fn empty() -> Self {
        Board {
            cells: [None; Self::SIZE],
        }
    }

    /// Create Board with pieces arranged in the standard starting layout.
    pub fn start_position() -> Self {
        Self::from_layout(START_LAYOUT).expect("START_LAYOUT is well formed")
    }

    /// Parse a layout of 64 cell characters in row-major order, rank 8 first.
    /// `.` is an empty cell and ASCII whitespace is ignored.
    pub fn from_layout(layout: &str) -> error::Result<Self> {
        let mut board = Self::empty();
        let mut count = 0;

        for ch in layout.chars().filter(|ch| !ch.is_ascii_whitespace()) {
            if count == Self::SIZE {
                return Err((ErrorKind::BoardMalformed, "more than 64 cells").into());
            }
            board.cells[count] = match ch {
                '.' => None,
                _ => Some(Piece::try_from(ch)?),
            };
            count += 1;
        }

        if count != Self::SIZE {
            return Err((ErrorKind::BoardMalformed, format!("{count} cells, expected 64")).into());
        }
        Ok(board)
    }

    /// Read the content of a cell.
    ///
    /// # Panics
    /// If `file` or `row` is not in `0..8`. Validate coordinates upstream.
    pub fn piece_at(&self, file: usize, row: usize) -> Cell {
        assert!(file < Self::FILES && row < Self::ROWS, "({file}, {row}) is off the board");
        self.cells[row * Self::FILES + file]
    }

    /// Iterate over every occupied cell as (file, row, piece), in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|piece| (idx % Self::FILES, idx / Self::FILES, piece))
        })
    }

    /// The legality gate.
    /// A move passes if all of its coordinates are on the board and its origin is occupied.
    /// Piece movement patterns, turn ownership and destination occupancy are not considered.
    pub fn is_valid_move(&self, move_: &Move) -> bool {
        move_.in_bounds() && self[Self::from_idx(move_)].is_some()
    }

    /// Apply a move to self, in place.
    /// The origin cell's content overwrites the destination, and the origin is cleared.
    /// Whatever was on the destination is lost, so read it first if the move will be undone.
    ///
    /// # Panics
    /// If the move is not in bounds.
    pub fn apply_move(&mut self, move_: Move) {
        let (from, to) = (Self::from_idx(&move_), Self::to_idx(&move_));
        self.cells[to] = self.cells[from];
        self.cells[from] = None;
    }

    /// Reverse `apply_move`. `captured` must be the destination content from immediately
    /// before the move was applied, otherwise the board is left corrupted.
    pub fn undo_move(&mut self, move_: Move, captured: Cell) {
        let (from, to) = (Self::from_idx(&move_), Self::to_idx(&move_));
        self.cells[from] = self.cells[to];
        self.cells[to] = captured;
    }

    /// Apply a move and return a guard that undoes it when dropped.
    /// The guard dereferences to the board, so the moved-into position can be read and
    /// searched further while it is held.
    pub fn make_move(&mut self, move_: Move) -> MoveGuard<'_> {
        let captured = self[Self::to_idx(&move_)];
        self.apply_move(move_);
        MoveGuard {
            board: self,
            move_,
            captured,
        }
    }

    /// Returns pretty-printed representation of Self, with file letters above and
    /// below and rank numbers on either side of every row.
    pub fn pretty(&self) -> String {
        const FILE_LABELS: &str = "  a b c d e f g h\n";
        let mut pretty = String::with_capacity(FILE_LABELS.len() * 2 + Self::ROWS * 21);

        pretty.push_str(FILE_LABELS);
        for row in 0..Self::ROWS {
            let rank = (Self::ROWS - row).to_string();
            pretty.push_str(&rank);
            pretty.push(' ');
            for file in 0..Self::FILES {
                pretty.push(match self.piece_at(file, row) {
                    Some(piece) => char::from(piece),
                    None => '.',
                });
                pretty.push(' ');
            }
            pretty.push_str(&rank);
            pretty.push('\n');
        }
        pretty.push_str(FILE_LABELS);

        pretty
    }

    fn from_idx(move_: &Move) -> usize {
        Self::idx(move_.from_file, move_.from_row)
    }

    fn to_idx(move_: &Move) -> usize {
        Self::idx(move_.to_file, move_.to_row)
    }

    fn idx(file: i8, row: i8) -> usize {
        assert!(
            crate::coretypes::in_bounds(file) && crate::coretypes::in_bounds(row),
            "({file}, {row}) is off the board"
        );
        row as usize * Self::FILES + file as usize
    }
}

/// Be careful with accessing with usize, as usize value out of bounds will panic.
impl Index<usize> for Board {
    type Output = Cell;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.cells[idx]
    }
}

/// Default value is that of the starting layout.
impl Default for Board {
    fn default() -> Self {
        Board::start_position()
    }
}

impl FromStr for Board {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        Self::from_layout(s)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

/// A move applied to a borrowed board. Dropping the guard undoes the move,
/// restoring the captured destination content.
#[derive(Debug)]
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    move_: Move,
    captured: Cell,
}

impl MoveGuard<'_> {
    /// Destination content from before the move was applied.
    pub fn captured(&self) -> Cell {
        self.captured
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;
    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.move_, self.captured);
    }
}
