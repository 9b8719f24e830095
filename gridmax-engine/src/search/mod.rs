//! Search functions.

mod alpha_beta;
mod minimax;

use std::fmt::{self, Display};
use std::time::{Duration, Instant};

use crate::board::Board;
use crate::coretypes::{Cp, Move, PlyKind, Side};
use crate::eval::{Evaluator, ZeroEvaluator};
use crate::movegen::{MoveGenerator, NeighborhoodGenerator};

use alpha_beta::AlphaBeta;
use minimax::Minimax;

/// The results found from running a search on some root board.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move to make for the root, or None if the root had no candidates or depth was 0.
    pub best_move: Option<Move>,
    /// The score of making the best move, from the point of view of `side`.
    pub score: Cp,
    /// The side to move at the root, which is the maximizing side.
    pub side: Side,
    /// Depth in plies that was searched.
    pub depth: PlyKind,
    /// Total number of nodes visited, root and leaves included.
    pub nodes: u64,
    /// Number of nodes where a cutoff was performed.
    pub cut_nodes: u64,
    /// Total time elapsed from the start to the end of a search.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Get average nodes per second of search.
    pub fn nps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        match secs > 0.0 {
            true => (self.nodes as f64 / secs).round(),
            false => 0.0,
        }
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let best_move = self
            .best_move
            .map_or_else(|| "none".to_string(), |m| m.to_string());

        writeln!(f, "SearchResult {{")?;
        writeln!(f, "    best_move: {best_move}")?;
        writeln!(f, "    score    : {}", self.score)?;
        writeln!(f, "    side     : {}", self.side)?;
        writeln!(f, "    depth    : {}", self.depth)?;
        writeln!(f, "    nodes    : {}", self.nodes)?;
        writeln!(f, "    cut_nodes: {}", self.cut_nodes)?;
        writeln!(f, "    nps      : {}", self.nps())?;
        writeln!(
            f,
            "    elapsed  : {}.{:03}s",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        )?;
        writeln!(f, "}}")
    }
}

/// Depth-first, fixed depth game-tree search over a shared board.
///
/// Move generation and evaluation are injected, so a different candidate policy or
/// heuristic never requires touching the search itself. The board handed to any search
/// is mutated while searching and is always restored before the call returns.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine<G = NeighborhoodGenerator, E = ZeroEvaluator> {
    generator: G,
    evaluator: E,
}

impl SearchEngine {
    /// Neighborhood candidates with a constant zero evaluation.
    pub fn baseline() -> Self {
        Self::default()
    }
}

impl<G: MoveGenerator, E: Evaluator> SearchEngine<G, E> {
    pub fn new(generator: G, evaluator: E) -> Self {
        Self {
            generator,
            evaluator,
        }
    }

    /// Returns the best move for `side` to play, searching `depth` plies.
    /// Returns None if `depth` is 0 or `side` has no candidate moves.
    pub fn find_best_move(&self, board: &mut Board, depth: PlyKind, side: Side) -> Option<Move> {
        self.search(board, depth, side).best_move
    }

    /// Alpha-Beta search from the root, with `side` to move as the maximizing side.
    pub fn search(&self, board: &mut Board, depth: PlyKind, side: Side) -> SearchResult {
        let instant = Instant::now();

        if depth == 0 {
            return self.static_result(board, side, instant);
        }

        let mut alpha_beta = AlphaBeta::new(&self.generator, &self.evaluator);
        let (best_move, score) = alpha_beta.root(board, depth, side);

        let result = SearchResult {
            best_move,
            score,
            side,
            depth,
            nodes: alpha_beta.nodes,
            cut_nodes: alpha_beta.cut_nodes,
            elapsed: instant.elapsed(),
        };
        log::debug!(
            "alpha-beta depth {} side {}: best {:?} score {} nodes {} cut_nodes {} in {:?}",
            depth,
            side,
            result.best_move.map(|m| m.to_string()),
            result.score,
            result.nodes,
            result.cut_nodes,
            result.elapsed,
        );
        result
    }

    /// Same as `search`, but every node of the tree is visited.
    pub fn search_unpruned(&self, board: &mut Board, depth: PlyKind, side: Side) -> SearchResult {
        let instant = Instant::now();

        if depth == 0 {
            return self.static_result(board, side, instant);
        }

        let mut minimax = Minimax::new(&self.generator, &self.evaluator);
        let (best_move, score) = minimax.root(board, depth, side);

        let result = SearchResult {
            best_move,
            score,
            side,
            depth,
            nodes: minimax.nodes,
            cut_nodes: 0,
            elapsed: instant.elapsed(),
        };
        log::debug!(
            "minimax depth {} side {}: score {} nodes {} in {:?}",
            depth,
            side,
            result.score,
            result.nodes,
            result.elapsed,
        );
        result
    }

    /// Score of `board` with `side` to move, pruned within the window (`alpha`, `beta`).
    /// A node with no candidate moves above depth 0 scores as its own infinity.
    pub fn alpha_beta(
        &self,
        board: &mut Board,
        depth: PlyKind,
        alpha: Cp,
        beta: Cp,
        side: Side,
        maximizing: bool,
    ) -> Cp {
        let mut alpha_beta = AlphaBeta::new(&self.generator, &self.evaluator);
        alpha_beta.node(board, depth, alpha, beta, side, maximizing)
    }

    /// Score of `board` with `side` to move, without any pruning.
    pub fn minimax(&self, board: &mut Board, depth: PlyKind, side: Side, maximizing: bool) -> Cp {
        Minimax::new(&self.generator, &self.evaluator).node(board, depth, side, maximizing)
    }

    fn static_result(&self, board: &Board, side: Side, instant: Instant) -> SearchResult {
        SearchResult {
            best_move: None,
            score: self.evaluator.evaluate(board),
            side,
            depth: 0,
            nodes: 1,
            cut_nodes: 0,
            elapsed: instant.elapsed(),
        }
    }
}
