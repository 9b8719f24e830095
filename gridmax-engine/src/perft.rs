//! Performance Test
//!
//! [Perft](https://www.chessprogramming.org/Perft)
//!
//! A simple debugging and testing function used to count
//! the number of candidate move paths to a specific depth.

use std::ops::AddAssign;

use crate::board::Board;
use crate::coretypes::{PlyKind, Side};
use crate::movegen::MoveGenerator;

/// Debugging information about results of perft test.
/// nodes: Number of nodes at lowest depth of perft.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PerftInfo {
    pub nodes: u64,
}

impl PerftInfo {
    fn new(nodes: u64) -> Self {
        PerftInfo { nodes }
    }
}

impl AddAssign for PerftInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
    }
}

// Count the number of nodes at a certain depth.
// Boards with no candidates above that depth contribute nothing.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    mut board: Board,
    ply: PlyKind,
    side: Side,
) -> PerftInfo {
    perft_recurse(generator, &mut board, ply, side)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    board: &mut Board,
    ply: PlyKind,
    side: Side,
) -> PerftInfo {
    if ply == 0 {
        return PerftInfo::new(1);
    }

    let moves = generator.generate(board, side);
    if ply == 1 {
        return PerftInfo::new(moves.len() as u64);
    }

    let mut perft_info = PerftInfo::new(0);
    for move_ in moves {
        perft_info += perft_recurse(generator, &mut board.make_move(move_), ply - 1, !side);
    }
    perft_info
}
