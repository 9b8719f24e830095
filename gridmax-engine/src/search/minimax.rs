//! Minimax implementation.
//!
//! Visits every node of the tree. Alpha-Beta must always agree with it on scores.

use std::cmp;

use crate::board::Board;
use crate::coretypes::{Cp, Move, PlyKind, Side};
use crate::eval::Evaluator;
use crate::movegen::MoveGenerator;

pub(crate) struct Minimax<'a, G, E> {
    generator: &'a G,
    evaluator: &'a E,
    pub(crate) nodes: u64,
}

impl<'a, G: MoveGenerator, E: Evaluator> Minimax<'a, G, E> {
    pub(crate) fn new(generator: &'a G, evaluator: &'a E) -> Self {
        Self {
            generator,
            evaluator,
            nodes: 0,
        }
    }

    /// Minimax root is almost the same as minimax node, except it links a score to its move.
    pub(crate) fn root(
        &mut self,
        board: &mut Board,
        ply: PlyKind,
        side: Side,
    ) -> (Option<Move>, Cp) {
        debug_assert_ne!(ply, 0);
        self.nodes += 1;

        let mut best: Option<(Move, Cp)> = None;
        for move_ in self.generator.generate(board, side) {
            let move_cp = self.node(&mut board.make_move(move_), ply - 1, !side, false);

            if best.map_or(true, |(_, best_cp)| move_cp > best_cp) {
                best = Some((move_, move_cp));
            }
        }

        match best {
            Some((best_move, best_cp)) => (Some(best_move), best_cp),
            None => (None, Cp::MIN),
        }
    }

    pub(crate) fn node(
        &mut self,
        board: &mut Board,
        ply: PlyKind,
        side: Side,
        maximizing: bool,
    ) -> Cp {
        self.nodes += 1;

        if ply == 0 {
            return self.evaluator.evaluate(board);
        }

        let moves = self.generator.generate(board, side);

        if maximizing {
            let mut best_cp = Cp::MIN;
            for move_ in moves {
                let move_cp = self.node(&mut board.make_move(move_), ply - 1, !side, false);
                best_cp = cmp::max(best_cp, move_cp);
            }
            best_cp
        } else {
            let mut best_cp = Cp::MAX;
            for move_ in moves {
                let move_cp = self.node(&mut board.make_move(move_), ply - 1, !side, true);
                best_cp = cmp::min(best_cp, move_cp);
            }
            best_cp
        }
    }
}
