//! Minimax with Alpha-Beta pruning implementation.

use std::cmp;

use crate::board::Board;
use crate::coretypes::{Cp, Move, PlyKind, Side};
use crate::eval::Evaluator;
use crate::movegen::MoveGenerator;

/// Properties of Alpha-Beta pruning.
/// * The maxing player can only update alpha from its children.
/// * The minning player can only update beta from its children.
/// * Alpha and Beta can only be inherited from their ancestors, and are otherwise Alpha=-Inf, Beta=Inf.
/// * Alpha is usually less than Beta. When they are equal or cross, a cut off occurs.
pub(crate) struct AlphaBeta<'a, G, E> {
    generator: &'a G,
    evaluator: &'a E,
    /// Every node entered, root and leaves included.
    pub(crate) nodes: u64,
    /// Nodes that stopped scanning their children early.
    pub(crate) cut_nodes: u64,
}

impl<'a, G: MoveGenerator, E: Evaluator> AlphaBeta<'a, G, E> {
    pub(crate) fn new(generator: &'a G, evaluator: &'a E) -> Self {
        Self {
            generator,
            evaluator,
            nodes: 0,
            cut_nodes: 0,
        }
    }

    /// Root is almost the same as a maximizing node, except it links a score to a move.
    ///
    /// Every root move is searched with its own full (-Inf, Inf) window, so nothing at the
    /// root itself is pruned, only inside each root move's subtree.
    /// The first move with the strictly greatest score wins, so ties keep generator order.
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
            let move_cp = {
                let mut child = board.make_move(move_);
                self.node(&mut child, ply - 1, Cp::MIN, Cp::MAX, !side, false)
            };
            log::trace!("root move {move_} scored {move_cp}");

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
        mut alpha: Cp,
        mut beta: Cp,
        side: Side,
        maximizing: bool,
    ) -> Cp {
        self.nodes += 1;

        // Depth is the only terminal condition.
        if ply == 0 {
            return self.evaluator.evaluate(board);
        }

        let moves = self.generator.generate(board, side);

        if maximizing {
            let mut best_cp = Cp::MIN;

            for move_ in moves {
                let mut child = board.make_move(move_);
                let move_cp = self.node(&mut child, ply - 1, alpha, beta, !side, false);

                best_cp = cmp::max(best_cp, move_cp);
                alpha = cmp::max(alpha, move_cp);
                if beta <= alpha {
                    // Beta cutoff
                    self.cut_nodes += 1;
                    break;
                }
            }
            best_cp
        } else {
            let mut best_cp = Cp::MAX;

            for move_ in moves {
                let mut child = board.make_move(move_);
                let move_cp = self.node(&mut child, ply - 1, alpha, beta, !side, true);

                best_cp = cmp::min(best_cp, move_cp);
                beta = cmp::min(beta, move_cp);
                if beta <= alpha {
                    // Alpha cutoff
                    self.cut_nodes += 1;
                    break;
                }
            }
            best_cp
        }
    }
}
