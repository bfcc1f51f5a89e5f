// Copyright 2025 the Skyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use skyline_circle_pack::{CirclePackOptions, PackedCircle, pack as pack_circles};
use skyline_lca::{Hierarchy, LcaFinder};
use skyline_ptree::{PackOptions, pack};
use skyline_treemap::{Tile, squarified};

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

fn gen_sizes(count: usize) -> Vec<Size> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Size::new(1.0 + rng.next_f64() * 20.0, 1.0 + rng.next_f64() * 20.0))
        .collect()
}

fn gen_weights(count: usize) -> Vec<(usize, f64)> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count).map(|i| (i, 0.5 + rng.next_f64() * 100.0)).collect()
}

fn gen_circles(count: usize) -> Vec<PackedCircle<usize>> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|i| PackedCircle::seeded(i, 0.5 + rng.next_f64() * 5.0, i, count))
        .collect()
}

/// Random tree where every node hangs below one of the earlier nodes.
struct RandomTree {
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
}

impl RandomTree {
    fn new(count: usize) -> Self {
        let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
        let mut parents = vec![None];
        let mut children = vec![Vec::new(); count];
        for i in 1..count {
            let parent = (rng.next_u64() % i as u64) as usize;
            parents.push(Some(parent));
            children[parent].push(i);
        }
        Self { parents, children }
    }
}

impl Hierarchy for RandomTree {
    type Node = usize;

    fn parent_of(&self, node: &usize) -> Option<usize> {
        self.parents[*node]
    }

    fn children_of(&self, node: &usize) -> impl Iterator<Item = usize> {
        self.children[*node].iter().copied()
    }
}

fn bench_rectangle_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("rectangle_packing");
    for &n in &[16usize, 64, 256] {
        let sizes = gen_sizes(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("pack_n{}", n), |b| {
            b.iter(|| {
                let packing = pack(black_box(&sizes), &PackOptions::default()).unwrap();
                black_box(packing.covered);
            })
        });
    }
    group.finish();
}

fn bench_circle_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_packing");
    for &n in &[8usize, 32, 64] {
        let circles = gen_circles(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("pack_n{}", n), |b| {
            b.iter_batched(
                || circles.clone(),
                |mut circles| {
                    let radius = pack_circles(&mut circles, &CirclePackOptions::default()).unwrap();
                    black_box(radius);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_treemap(c: &mut Criterion) {
    let mut group = c.benchmark_group("treemap");
    for &n in &[16usize, 128, 1024] {
        let items = gen_weights(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("squarified_n{}", n), |b| {
            b.iter(|| {
                let tiles = squarified(black_box(&items), Tile::new(0.0, 0.0, 400.0, 300.0));
                black_box(tiles.len());
            })
        });
    }
    group.finish();
}

fn bench_lca(c: &mut Criterion) {
    let mut group = c.benchmark_group("lca");
    for &n in &[256usize, 4096] {
        let tree = RandomTree::new(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build_n{}", n), |b| {
            b.iter(|| {
                let finder = LcaFinder::from_root(&tree, 0).unwrap();
                black_box(finder.len());
            })
        });
        let finder = LcaFinder::from_root(&tree, 0).unwrap();
        let mut rng = Rng::new(0x0DDB_A115_F00D_CAFE);
        let pairs: Vec<(usize, usize)> = (0..1024)
            .map(|_| {
                (
                    (rng.next_u64() % n as u64) as usize,
                    (rng.next_u64() % n as u64) as usize,
                )
            })
            .collect();
        group.bench_function(format!("query_1024_n{}", n), |b| {
            b.iter(|| {
                for &(a, c) in &pairs {
                    black_box(finder.lca(a, c).unwrap());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_rectangle_packing,
    bench_circle_packing,
    bench_treemap,
    bench_lca,
);
criterion_main!(benches);
