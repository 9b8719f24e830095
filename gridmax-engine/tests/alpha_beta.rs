//! Alpha-Beta agreement
//!
//! Pruning must never change a score. These tests search random sparse boards with
//! both the pruned and the unpruned search and require identical results.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gridmax_engine::coretypes::{Cp, PlyKind, Side};
use gridmax_engine::eval::{Evaluator, MaterialEvaluator, ZeroEvaluator};
use gridmax_engine::movegen::{MoveGenerator, NeighborhoodGenerator};
use gridmax_engine::perft::perft;
use gridmax_engine::*;

const PIECE_CHARS: &[u8] = b"KQRBNPkqrbnp";

/// A board with `2..=4` pieces on random cells.
fn random_board(rng: &mut StdRng) -> Board {
    let mut layout = [b'.'; 64];
    for _ in 0..rng.gen_range(2..=4) {
        let cell = rng.gen_range(0..64);
        layout[cell] = PIECE_CHARS[rng.gen_range(0..PIECE_CHARS.len())];
    }
    Board::from_layout(std::str::from_utf8(&layout).unwrap()).unwrap()
}

/// Deterministic, but otherwise arbitrary, score per board.
fn hashed(board: &Board) -> Cp {
    let mut hasher = DefaultHasher::new();
    board.hash(&mut hasher);
    Cp((hasher.finish() % 2001) as i32 - 1000)
}

fn assert_agreement<E: Evaluator>(engine: &SearchEngine<NeighborhoodGenerator, E>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = random_board(&mut rng);
    let before = board.clone();

    for depth in 1..=3 as PlyKind {
        for side in [Side::First, Side::Second] {
            let pruned = engine.search(&mut board, depth, side);
            let unpruned = engine.search_unpruned(&mut board, depth, side);

            assert_eq!(pruned.score, unpruned.score, "seed {seed} depth {depth}\n{before}");
            assert_eq!(pruned.best_move, unpruned.best_move, "seed {seed} depth {depth}");
            assert!(pruned.nodes <= unpruned.nodes);

            for maximizing in [true, false] {
                let ab = engine.alpha_beta(&mut board, depth, Cp::MIN, Cp::MAX, side, maximizing);
                let mm = engine.minimax(&mut board, depth, side, maximizing);
                assert_eq!(ab, mm, "seed {seed} depth {depth} maximizing {maximizing}");
            }
            assert_eq!(board, before);
        }
    }
}

#[test]
fn agrees_with_minimax_material() {
    let engine = SearchEngine::new(NeighborhoodGenerator, MaterialEvaluator::new(Side::First));
    for seed in 0..8 {
        assert_agreement(&engine, seed);
    }
}

#[test]
fn agrees_with_minimax_hashed() {
    let engine = SearchEngine::new(NeighborhoodGenerator, hashed);
    for seed in 100..108 {
        assert_agreement(&engine, seed);
    }
}

#[test]
fn agrees_with_minimax_zero() {
    let engine = SearchEngine::new(NeighborhoodGenerator, ZeroEvaluator);
    for seed in 200..206 {
        assert_agreement(&engine, seed);
    }
}

#[test]
fn first_candidate_at_depth_three() {
    let engine = SearchEngine::baseline();
    let mut board = Board::start_position();
    let first = NeighborhoodGenerator.generate(&board, Side::Second)[0];

    let result = engine.search(&mut board, 3, Side::Second);
    assert_eq!(result.best_move, Some(first));
    assert_eq!(result.score, Cp(0));
    assert_eq!(board, Board::start_position());
}

/// Each root move starts from (-Inf, Inf), so a constant evaluation never cuts at depth 2:
/// the root, its 188 children and every leaf below them are all visited.
#[test]
fn root_moves_get_full_window() {
    let engine = SearchEngine::baseline();
    let mut board = Board::start_position();
    let leaves = perft(&NeighborhoodGenerator, board.clone(), 2, Side::First).nodes;

    let result = engine.search(&mut board, 2, Side::First);
    assert_eq!(result.nodes, 1 + 188 + leaves);
    assert_eq!(result.cut_nodes, 0);
}

#[test]
fn pruning_skips_nodes() {
    let engine = SearchEngine::baseline();
    let mut board: Board = "\
        ....k...\
        ........\
        ..r.....\
        ........\
        ........\
        .....R..\
        ........\
        ....K..."
        .parse()
        .unwrap();

    let pruned = engine.search(&mut board, 3, Side::First);
    let unpruned = engine.search_unpruned(&mut board, 3, Side::First);

    assert_eq!(pruned.score, unpruned.score);
    assert_eq!(pruned.best_move, unpruned.best_move);
    assert!(pruned.cut_nodes > 0);
    assert!(pruned.nodes < unpruned.nodes);
}
