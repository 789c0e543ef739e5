//! Benchmarks for the CFR trainer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kuhn_cfr::cfr::{CfrConfig, CfrSolver};

fn kuhn_iteration_benchmark(c: &mut Criterion) {
    let config = CfrConfig::default().with_seed(42).with_log_interval(0);
    let mut solver = CfrSolver::new(config);

    c.bench_function("kuhn_single_iteration", |b| {
        b.iter(|| black_box(solver.run_iteration()))
    });
}

fn kuhn_1000_iterations_benchmark(c: &mut Criterion) {
    c.bench_function("kuhn_1000_iterations", |b| {
        b.iter(|| {
            let config = CfrConfig::default().with_seed(42).with_log_interval(0);
            let mut solver = CfrSolver::new(config);
            solver.train(black_box(1000));
            black_box(solver.num_info_sets())
        })
    });
}

criterion_group!(benches, kuhn_iteration_benchmark, kuhn_1000_iterations_benchmark);
criterion_main!(benches);
