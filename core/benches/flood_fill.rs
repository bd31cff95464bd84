use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use flood_core::*;
use rand::{SeedableRng, rngs::SmallRng};

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    for size in [10, 100, 500] {
        let grid = Grid::from_fn(size, |_| Tile::new(Color::Red)).unwrap();
        group.bench_function(format!("uniform_{size}"), |b| {
            b.iter(|| flood_fill(ORIGIN, Color::Red, black_box(grid.clone())))
        });
    }

    group.finish();
}

fn bench_autoplay(c: &mut Criterion) {
    let mut group = c.benchmark_group("autoplay");

    for size in [10, 30] {
        let mut rng = SmallRng::seed_from_u64(1);
        let new_game = create_game(size, 6, &mut rng).unwrap();
        group.bench_function(format!("frontier_{size}"), |b| {
            b.iter(|| {
                let mut strategy = FrontierStrategy::new(SmallRng::seed_from_u64(2));
                autoplay(&new_game.initial, &new_game.palette, &mut strategy, 10_000)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flood_fill, bench_autoplay);
criterion_main!(benches);
