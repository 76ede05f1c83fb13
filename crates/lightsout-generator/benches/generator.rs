//! Benchmarks for solvable grid generation.
//!
//! Measures the complete generation process (scramble drawing and grid
//! construction) across grid sizes, using fixed seeds so runs are
//! reproducible.
//!
//! # Test Data
//!
//! Uses three fixed seeds to measure multiple cases while staying
//! reproducible; each seed draws a different scramble length.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use lightsout_generator::{GridGenerator, GridSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const SIZES: [usize; 3] = [5, 10, 25];

fn bench_generator(c: &mut Criterion) {
    for size in SIZES {
        let generator = GridGenerator::new(size).unwrap();
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = GridSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generator_{size}x{size}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(benches, bench_generator);
criterion_main!(benches);
