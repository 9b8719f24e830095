use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridmax_engine::coretypes::Side;
use gridmax_engine::eval::MaterialEvaluator;
use gridmax_engine::movegen::NeighborhoodGenerator;
use gridmax_engine::*;

pub fn criterion_search_benchmark(c: &mut Criterion) {
    // Setup
    let baseline = SearchEngine::baseline();
    let material = SearchEngine::new(NeighborhoodGenerator, MaterialEvaluator::new(Side::Second));
    let mut board = Board::start_position();

    // Benchmarks

    c.bench_function("start_position: alpha_beta(2) zero", |b| {
        b.iter(|| {
            let result = baseline.search(black_box(&mut board), black_box(2), Side::Second);
            assert!(result.best_move.is_some());
        })
    });
    c.bench_function("start_position: minimax(2) zero", |b| {
        b.iter(|| {
            let result = baseline.search_unpruned(black_box(&mut board), black_box(2), Side::Second);
            assert!(result.best_move.is_some());
        })
    });
    c.bench_function("start_position: alpha_beta(2) material", |b| {
        b.iter(|| {
            let result = material.search(black_box(&mut board), black_box(2), Side::Second);
            assert!(result.best_move.is_some());
        })
    });
    c.bench_function("start_position: alpha_beta(3) zero", |b| {
        b.iter(|| {
            let result = baseline.search(black_box(&mut board), black_box(3), Side::Second);
            assert!(result.best_move.is_some());
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().without_plots().sample_size(10);
    targets = criterion_search_benchmark
}
criterion_main!(benches);
