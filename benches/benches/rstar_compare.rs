// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bintree against an rstar R-tree on the same 3D boxes.

#![cfg(feature = "compare_rstar")]

use airspace_benches::{queries, scattered};
use airspace_index::{Aabb3D, Axis, Bintree};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

const WORLD: i64 = 1024;

// rstar envelopes are closed, so shrink the far corner by one to keep
// face-adjacent boxes apart as the bintree does.
fn closed(b: &Aabb3D) -> ([i64; 3], [i64; 3]) {
    let lo = b.origin();
    let hi = Axis::ALL.map(|axis| b.end(axis) - 1);
    (lo, hi)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare_build");
    for &n in &[1024_usize, 4096] {
        let records = scattered(n, WORLD, 32, 31);
        let rects: Vec<Rectangle<[i64; 3]>> = records
            .iter()
            .map(|r| {
                let (lo, hi) = closed(&airspace_index::Record::bounds(&**r));
                Rectangle::from_corners(lo, hi)
            })
            .collect();

        group.bench_function(format!("bintree_n{n}"), |b| {
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
        group.bench_function(format!("rstar_bulk_n{n}"), |b| {
            b.iter_batched(
                || rects.clone(),
                |rects| black_box(RTree::bulk_load(rects)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare_query");
    let records = scattered(4096, WORLD, 32, 37);
    let mut tree = Bintree::new(Aabb3D::cube(WORLD));
    for r in &records {
        tree.insert(r.clone());
    }
    let rtree = RTree::bulk_load(
        records
            .iter()
            .map(|r| {
                let (lo, hi) = closed(&airspace_index::Record::bounds(&**r));
                Rectangle::from_corners(lo, hi)
            })
            .collect(),
    );
    let probes = queries(64, WORLD, 96, 41);

    group.bench_function("bintree", |b| {
        b.iter(|| {
            let mut total = 0;
            for q in &probes {
                total += tree.query(q).hits().count();
            }
            black_box(total)
        });
    });
    group.bench_function("rstar", |b| {
        b.iter(|| {
            let mut total = 0;
            for q in &probes {
                let (lo, hi) = closed(q);
                let env = AABB::from_corners(lo, hi);
                total += rtree.locate_in_envelope_intersecting(&env).count();
            }
            black_box(total)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
