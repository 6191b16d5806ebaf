use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use sokoban_search::config::{Config, Strategy};
use sokoban_search::{LoadLevel, Solve};

fn bench_two_boxes(c: &mut Criterion) {
    // both boxes start next to the same target
    bench_level(
        c,
        "levels/04-two-boxes.txt",
        &[Strategy::BreadthFirst, Strategy::AStar, Strategy::UniformCost, Strategy::Greedy],
        50,
    );
}

fn bench_xsb_dashes(c: &mut Criterion) {
    // small enough for iterative deepening
    bench_level(c, "levels/05-xsb-dashes.txt", &Strategy::ALL, 100);
}

fn bench_level(c: &mut Criterion, level_path: &str, strategies: &[Strategy], samples: usize) {
    let level = level_path.load_level().unwrap();

    let mut group = c.benchmark_group(level_path);
    group.sample_size(samples);
    for &strategy in strategies {
        let config = Config::new(strategy);
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy),
            &config,
            |b, config| b.iter(|| level.solve(criterion::black_box(config))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_two_boxes, bench_xsb_dashes);
criterion_main!(benches);
