//! Candidate move generation.
//!
//! Search only ever sees moves through the `MoveGenerator` trait, so the policy
//! that decides which moves exist can be swapped without touching search.

use crate::board::Board;
use crate::coretypes::{in_bounds, Move, Side};
use crate::movelist::MoveList;

/// Produces every candidate move to consider from a board.
/// Candidates do not have to be legal; search applies them as given.
pub trait MoveGenerator {
    fn generate(&self, board: &Board, side: Side) -> MoveList;
}

/// Neighbor offsets as (file, row) deltas, scanned row delta first.
#[rustfmt::skip]
const NEIGHBORS: [(i8, i8); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Every occupied cell may move one step to any of its on-board neighbors.
///
/// Piece kind, ownership and destination occupancy are ignored, and so is the
/// side to move. A corner cell yields 3 moves, an edge cell 5 and any other cell 8.
#[derive(Debug, Copy, Clone, Default)]
pub struct NeighborhoodGenerator;

impl MoveGenerator for NeighborhoodGenerator {
    fn generate(&self, board: &Board, _side: Side) -> MoveList {
        let mut moves = MoveList::new();

        for (file, row, _) in board.occupied() {
            let (file, row) = (file as i8, row as i8);
            for (d_file, d_row) in NEIGHBORS {
                let (to_file, to_row) = (file + d_file, row + d_row);
                if in_bounds(to_file) && in_bounds(to_row) {
                    moves.push(Move::new(file, row, to_file, to_row));
                }
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Piece, PieceKind};

    fn moves_from(board: &Board, file: i8, row: i8) -> Vec<Move> {
        NeighborhoodGenerator
            .generate(board, Side::First)
            .into_iter()
            .filter(|m| m.from_file == file && m.from_row == row)
            .collect()
    }

    #[test]
    fn corner_edge_interior_counts() {
        let board = Board::start_position();
        assert_eq!(moves_from(&board, 0, 0).len(), 3); // a8
        assert_eq!(moves_from(&board, 7, 7).len(), 3); // h1
        assert_eq!(moves_from(&board, 3, 0).len(), 5); // d8
        assert_eq!(moves_from(&board, 0, 6).len(), 5); // a2
        assert_eq!(moves_from(&board, 4, 6).len(), 8); // e2
        assert!(moves_from(&board, 4, 4).is_empty()); // e4 is empty
    }

    #[test]
    fn neighbors_are_chebyshev_distance_one() {
        let board = Board::start_position();
        let moves = NeighborhoodGenerator.generate(&board, Side::Second);

        assert_eq!(moves.len(), 188);
        for m in &moves {
            assert!(m.in_bounds(), "{m:?}");
            let d_file = (m.to_file - m.from_file).abs();
            let d_row = (m.to_row - m.from_row).abs();
            assert_eq!(d_file.max(d_row), 1, "{m}");
        }
    }

    #[test]
    fn enumeration_order() {
        let board = Board::start_position();
        let moves = NeighborhoodGenerator.generate(&board, Side::First);
        let first: Vec<String> = moves.iter().take(4).map(Move::to_string).collect();
        assert_eq!(first, ["a8b8", "a8a7", "a8b7", "b8a8"]);
    }

    #[test]
    fn side_is_ignored() {
        let board = {
            let mut layout = ['.'; 64];
            layout[27] = 'N';
            layout[36] = 'p';
            Board::from_layout(&layout.iter().collect::<String>()).unwrap()
        };
        let first = NeighborhoodGenerator.generate(&board, Side::First);
        let second = NeighborhoodGenerator.generate(&board, Side::Second);

        assert_eq!(first, second);
        assert_eq!(first.len(), 16);
        assert_eq!(board.piece_at(3, 3), Some(Piece::new(Side::First, PieceKind::Knight)));
    }
}
