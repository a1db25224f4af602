//! Criterion benchmarks for tennis_core.
//!
//! - single best-of-3 match
//! - single best-of-5 match
//! - 500-match batch (the CLI default)

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tennis_core::{run_simulations, MatchEngine, MatchFormat, PlayerProfile};

fn players() -> (PlayerProfile, PlayerProfile) {
    (
        PlayerProfile::new("Bench A", 66.0, 4.0, 1.5).unwrap(),
        PlayerProfile::new("Bench B", 64.0, 5.0, -0.5).unwrap(),
    )
}

fn bench_single_match(c: &mut Criterion) {
    let (p1, p2) = players();
    let mut seed = 0u64;
    c.bench_function("match_best_of_three", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(MatchEngine::new(&p1, &p2, MatchFormat::best_of_three(), seed).simulate_match())
        })
    });
    c.bench_function("match_best_of_five", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(MatchEngine::new(&p1, &p2, MatchFormat::best_of_five(), seed).simulate_match())
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let (p1, p2) = players();
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);
    group.bench_function("batch_500_best_of_three", |b| {
        b.iter(|| black_box(run_simulations(&p1, &p2, MatchFormat::best_of_three(), 500).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_single_match, bench_batch);
criterion_main!(benches);
