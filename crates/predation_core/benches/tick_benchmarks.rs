use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use predation_core::config::AppConfig;
use predation_core::grid::SpatialGrid;
use predation_core::world::World;
use predation_data::{Cell, Neighborhood};

fn seeded(vegetation: bool) -> AppConfig {
    let mut config = AppConfig::default();
    config.world.seed = Some(42);
    config.vegetation.enabled = vegetation;
    config
}

/// Benchmark a single tick of the default scenario.
fn bench_tick_default(c: &mut Criterion) {
    c.bench_function("tick_default", |b| {
        b.iter_batched(
            || World::new(seeded(false)).unwrap(),
            |mut world| black_box(world.step().unwrap()),
            BatchSize::SmallInput,
        )
    });
}

/// Benchmark a single tick with grazing enabled.
fn bench_tick_vegetation(c: &mut Criterion) {
    c.bench_function("tick_vegetation", |b| {
        b.iter_batched(
            || World::new(seeded(true)).unwrap(),
            |mut world| black_box(world.step().unwrap()),
            BatchSize::SmallInput,
        )
    });
}

/// Benchmark the reference 200-tick run.
fn bench_run_200(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");
    group.sample_size(20);
    group.bench_function("run_200_vegetation", |b| {
        b.iter_batched(
            || World::new(seeded(true)).unwrap(),
            |mut world| {
                world.run(200).unwrap();
                black_box(world.sample())
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_neighborhood(c: &mut Criterion) {
    let grid = SpatialGrid::new(100, 100);
    c.bench_function("moore_neighborhood", |b| {
        b.iter(|| black_box(grid.neighborhood(black_box(Cell::new(0, 99)), Neighborhood::Moore, true)))
    });
}

criterion_group!(
    benches,
    bench_tick_default,
    bench_tick_vegetation,
    bench_run_200,
    bench_neighborhood
);
criterion_main!(benches);
