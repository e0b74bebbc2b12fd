// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared workloads for the airspace benchmarks.

use std::fmt;
use std::rc::Rc;

use airspace_index::{Aabb3D, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimal named box used by the benchmarks.
#[derive(Debug)]
pub struct Blip {
    name: String,
    bounds: Aabb3D,
}

impl Record for Blip {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn bounds(&self) -> Aabb3D {
        self.bounds
    }
}

impl fmt::Display for Blip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blip {} {}", self.name, self.bounds)
    }
}

/// `count` boxes with edges in `1..=max_edge`, scattered uniformly in a cube of side `world`.
pub fn scattered(count: usize, world: i64, max_edge: i64, seed: u64) -> Vec<Rc<Blip>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let mut origin = [0; 3];
            let mut extent = [0; 3];
            for axis in 0..3 {
                extent[axis] = rng.random_range(1..=max_edge);
                origin[axis] = rng.random_range(0..=world - extent[axis]);
            }
            Rc::new(Blip {
                name: format!("blip{i:06}"),
                bounds: Aabb3D::new(origin[0], origin[1], origin[2], extent[0], extent[1], extent[2]),
            })
        })
        .collect()
}

/// `count` query boxes of side `edge` placed uniformly in a cube of side `world`.
pub fn queries(count: usize, world: i64, edge: i64, seed: u64) -> Vec<Aabb3D> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..=world - edge);
            let y = rng.random_range(0..=world - edge);
            let z = rng.random_range(0..=world - edge);
            Aabb3D::new(x, y, z, edge, edge, edge)
        })
        .collect()
}

/// Linear-scan reference: how many records strictly overlap `query`.
pub fn scan_hits(records: &[Rc<Blip>], query: &Aabb3D) -> usize {
    records.iter().filter(|r| r.bounds.intersects(query)).count()
}
