//! Game structure.
//!
//! Game holds the board of an in progress game and whose turn it is. It is the
//! boundary where text input is turned into moves and moves are validated, so
//! every failure here is recoverable: the board and the turn are left untouched.

use crate::board::Board;
use crate::coretypes::{Move, PlyKind, Side};
use crate::error::{self, ErrorKind};
use crate::eval::Evaluator;
use crate::movegen::MoveGenerator;
use crate::search::{SearchEngine, SearchResult};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
    to_move: Side,
}

impl Game {
    pub fn new(board: Board, to_move: Side) -> Self {
        Self { board, to_move }
    }

    /// Create a new game in the starting layout, with First to move.
    pub fn start_position() -> Self {
        Self::new(Board::start_position(), Side::First)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Parse a move in `e2e4` form and play it for the side to move.
    pub fn play(&mut self, text: &str) -> error::Result<Move> {
        let move_: Move = text.parse()?;
        self.play_move(move_)?;
        Ok(move_)
    }

    /// Play a move for the side to move if it passes the legality gate.
    /// On success the turn passes to the other side.
    pub fn play_move(&mut self, move_: Move) -> error::Result<()> {
        if !self.board.is_valid_move(&move_) {
            return Err((ErrorKind::IllegalMove, format!("{move_:?}")).into());
        }
        self.board.apply_move(move_);
        self.to_move = !self.to_move;
        Ok(())
    }

    /// Search for the side to move and play the best move found.
    /// If the search found no move, the board and turn are unchanged.
    pub fn play_engine<G, E>(&mut self, engine: &SearchEngine<G, E>, depth: PlyKind) -> SearchResult
    where
        G: MoveGenerator,
        E: Evaluator,
    {
        let result = engine.search(&mut self.board, depth, self.to_move);
        if let Some(best_move) = result.best_move {
            self.board.apply_move(best_move);
            self.to_move = !self.to_move;
        }
        result
    }
}

/// Convert a board to a Game with First to move.
impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Self::new(board, Side::First)
    }
}
