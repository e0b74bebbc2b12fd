// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collisions and box queries.
//!
//! Fill a store with random drones, report every overlapping pair, then ask
//! what crosses a corridor through the middle of the world.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p airspace_demos --example collisions`

use airspace_demos::{AirObject, Kind, kind_admission};
use airspace_index::Aabb3D;
use airspace_store::{ObjectStore, StoreConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    env_logger::init();

    let config = StoreConfig::default().with_world_size(256).with_seed(3);
    let mut store = ObjectStore::new(config, StdRng::seed_from_u64(config.seed), kind_admission);
    let mut rng = StdRng::seed_from_u64(99);

    for i in 0..24 {
        let edge = rng.random_range(8..32);
        let x = rng.random_range(0..=256 - edge);
        let y = rng.random_range(0..=256 - edge);
        let z = rng.random_range(0..=256 - edge);
        let drone = AirObject::new(
            &format!("drone{i:02}"),
            Aabb3D::new(x, y, z, edge, edge, edge),
            Kind::Drone {
                brand: "Hover".into(),
                engines: rng.random_range(1..=8),
            },
        );
        store.add(drone);
    }
    log::info!("{} drones aloft", store.len());

    print!("{}", store.collisions());

    let corridor = Aabb3D::new(0, 112, 112, 256, 32, 32);
    match store.intersect(&corridor) {
        Some(report) => print!("{report}"),
        None => println!("corridor is not inside the world"),
    }

    let report = store.space().query(&corridor);
    println!("{} drones cross the corridor", report.hits().count());
}
