// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use std::collections::HashSet;

use aabb_world::World;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn populated_world(n: usize) -> World<u32> {
    let mut world = World::new(64.0).expect("positive cell size");
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for i in 0..n {
        let x = rng.next_f64() * 4000.0;
        let y = rng.next_f64() * 4000.0;
        world.add(i as u32, x, y, 10.0, 10.0).expect("unique item, positive dims");
    }
    world
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_move");
    for &n in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n{n}"), |b| {
            b.iter_batched(
                || populated_world(n),
                |mut world| {
                    let ignore = HashSet::new();
                    for i in 0..100u32.min(n as u32) {
                        let collisions = world
                            .move_item(&i, (i as f64) * 3.0, (i as f64) * 2.0, &ignore, None)
                            .expect("item i was just inserted");
                        black_box(collisions.len());
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_segment");
    for &n in &[100usize, 1_000, 10_000] {
        let world = populated_world(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| {
                let hits = world.query_segment(0.0, 0.0, 4000.0, 4000.0);
                black_box(hits.len());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_move, bench_query_segment);
criterion_main!(benches);
