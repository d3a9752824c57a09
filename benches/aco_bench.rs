//! Criterion benchmarks for the Ant System engine.
//!
//! Uses random symmetric instances to measure generation-loop cost
//! across problem sizes and colony sizes.

use ant_system::aco::{construct_tour, AcoConfig, AcoRunner, PheromoneModel};
use ant_system::matrix::DistanceMatrix;
use ant_system::random::create_rng;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_run");
    group.sample_size(10);

    for (n, ants, generations) in [(10usize, 50usize, 50usize), (25, 50, 20), (50, 30, 10)] {
        let mut rng = create_rng(7);
        let matrix = DistanceMatrix::random(n, 100.0, &mut rng);
        let config = AcoConfig::default()
            .with_generations(generations)
            .with_ants_per_generation(ants)
            .with_evaporation_rate(0.9)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n{n}_ants{ants}_gen{generations}")),
            &(matrix, config),
            |b, (matrix, config)| {
                b.iter(|| {
                    let result = AcoRunner::run(black_box(matrix), black_box(config)).unwrap();
                    black_box(result.mean_cost_history)
                });
            },
        );
    }

    group.finish();
}

fn bench_construct_tour(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct_tour");

    for n in [10usize, 50, 100] {
        let mut rng = create_rng(7);
        let model = PheromoneModel::initialize(n, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &model, |b, model| {
            b.iter(|| black_box(construct_tour(model, &mut rng)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_run, bench_construct_tour);
criterion_main!(benches);
