use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use chain_dp::{problems::matrix_chain::MatrixChainProblem, IntervalEngine};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_dims(rng: &mut StdRng, n: usize) -> Vec<u64> {
    (0..=n).map(|_| rng.gen_range(1..1_000)).collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid).map(|p| p.memory() / 1024))
        .unwrap_or(0)
}

fn bench_matrix_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_chain");
    group.sample_size(10);
    for &n in &[64usize, 128, 256, 512] {
        group.bench_function(format!("min_cost_n_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    MatrixChainProblem::from_dimensions(&random_dims(&mut rng, n))
                },
                |problem| {
                    let engine = IntervalEngine::new(problem);
                    criterion::black_box(engine.min_cost());
                },
                BatchSize::PerIteration,
            )
        });
        group.bench_function(format!("solve_with_splits_n_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    MatrixChainProblem::from_dimensions(&random_dims(&mut rng, n))
                },
                |problem| {
                    let before = rss_kib();
                    let engine = IntervalEngine::new(problem);
                    let (cost, splits) = engine.run();
                    let after = rss_kib();
                    criterion::black_box((cost, splits));
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS KiB delta (matrix_chain {n}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matrix_chain);
criterion_main!(benches);
