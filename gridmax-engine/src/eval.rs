//! Static Evaluation Functions.
//!
//! An evaluator scores a board without looking at any further moves. Search calls
//! it at the bottom of the tree and treats larger values as better for the
//! maximizing side. Evaluators must be pure and total over every reachable board.

use crate::board::Board;
use crate::coretypes::PieceKind::*;
use crate::coretypes::{Cp, PieceKind, Side};

/// Scores a board at the floor of a search.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> Cp;
}

/// Any pure function of a board can be used as an evaluator.
impl<F> Evaluator for F
where
    F: Fn(&Board) -> Cp,
{
    fn evaluate(&self, board: &Board) -> Cp {
        self(board)
    }
}

/// Every board is worth nothing.
#[derive(Debug, Copy, Clone, Default)]
pub struct ZeroEvaluator;

impl Evaluator for ZeroEvaluator {
    fn evaluate(&self, _board: &Board) -> Cp {
        Cp(0)
    }
}

impl PieceKind {
    /// Default, independent value per piece.
    pub const fn centipawns(&self) -> Cp {
        Cp(match self {
            Pawn => 100,   // 100 Centipawn == 1 Pawn
            Knight => 305, // slightly prefer knight over 3 default pawns
            Bishop => 310, // slightly prefer bishop over 3 default pawns
            Rook => 510,
            Queen => 950,
            King => 10_000,
        })
    }
}

/// Material balance from the point of view of `perspective`.
/// Positive values mean `perspective` holds more piece value than its opponent.
#[derive(Debug, Copy, Clone)]
pub struct MaterialEvaluator {
    pub perspective: Side,
}

impl MaterialEvaluator {
    pub const fn new(perspective: Side) -> Self {
        Self { perspective }
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board) -> Cp {
        material(board) * sign(self.perspective)
    }
}

/// Returns piece value of First minus piece value of Second.
pub fn material(board: &Board) -> Cp {
    board
        .occupied()
        .map(|(_, _, piece)| piece.piece_kind().centipawns() * sign(piece.side()))
        .fold(Cp::default(), |acc, value| acc + value)
}

const fn sign(side: Side) -> i32 {
    match side {
        Side::First => 1,
        Side::Second => -1,
    }
}
