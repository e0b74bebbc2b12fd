// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bintree and skip list workloads, with a linear scan as the baseline.

use airspace_benches::{queries, scan_hits, scattered};
use airspace_index::{Aabb3D, Bintree, SkipList};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

const WORLD: i64 = 1024;

fn bench_bintree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("bintree_build");
    for &n in &[256_usize, 1024, 4096] {
        let records = scattered(n, WORLD, 32, 7);
        group.bench_function(format!("insert_n{n}"), |b| {
            b.iter_batched(
                || records.clone(),
                |records| {
                    let mut tree = Bintree::new(Aabb3D::cube(WORLD));
                    for r in records {
                        tree.insert(r);
                    }
                    black_box(tree)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_bintree_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("bintree_query");
    for &n in &[1024_usize, 4096] {
        let records = scattered(n, WORLD, 32, 11);
        let mut tree = Bintree::new(Aabb3D::cube(WORLD));
        for r in &records {
            tree.insert(r.clone());
        }
        let probes = queries(64, WORLD, 96, 13);

        group.bench_function(format!("bintree_n{n}"), |b| {
            b.iter(|| {
                let mut total = 0;
                for q in &probes {
                    total += tree.query(q).hits().count();
                }
                black_box(total)
            });
        });
        group.bench_function(format!("linear_n{n}"), |b| {
            b.iter(|| {
                let mut total = 0;
                for q in &probes {
                    total += scan_hits(&records, q);
                }
                black_box(total)
            });
        });
    }
    group.finish();
}

fn bench_bintree_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("bintree_collisions");
    let records = scattered(2048, WORLD, 24, 17);
    let mut tree = Bintree::new(Aabb3D::cube(WORLD));
    for r in &records {
        tree.insert(r.clone());
    }
    group.bench_function("n2048", |b| {
        b.iter(|| black_box(tree.collisions().pairs().count()));
    });
    group.finish();
}

fn bench_skiplist(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist");
    for &n in &[1024_usize, 8192] {
        let records = scattered(n, WORLD, 8, 23);
        group.bench_function(format!("insert_n{n}"), |b| {
            b.iter_batched(
                || records.clone(),
                |records| {
                    let mut list = SkipList::new(StdRng::seed_from_u64(1));
                    for r in records {
                        list.insert(r);
                    }
                    black_box(list)
                },
                BatchSize::SmallInput,
            );
        });

        let mut list = SkipList::new(StdRng::seed_from_u64(1));
        for r in &records {
            list.insert(r.clone());
        }
        let names: Vec<String> = (0..n).step_by(7).map(|i| format!("blip{i:06}")).collect();
        group.bench_function(format!("search_n{n}"), |b| {
            b.iter(|| {
                let mut found = 0;
                for name in &names {
                    found += usize::from(list.search(name).is_some());
                }
                black_box(found)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_bintree_build,
    bench_bintree_query,
    bench_bintree_collisions,
    bench_skiplist
);
criterion_main!(benches);
