// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store basics.
//!
//! Add a fleet, look records up by name, list a name range, and delete one.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p airspace_demos --example store_basics`

use airspace_demos::{AirObject, Kind, fleet, kind_admission};
use airspace_index::Aabb3D;
use airspace_store::{ObjectStore, StoreConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    env_logger::init();

    let config = StoreConfig::default().with_seed(42);
    let mut store = ObjectStore::new(config, StdRng::seed_from_u64(config.seed), kind_admission);

    for obj in fleet() {
        if let Err(err) = store.try_add(obj.clone()) {
            println!("could not add {obj}: {err}");
        }
    }

    // Duplicate names and bad kind fields are refused.
    let twin = AirObject::new(
        "Air1",
        Aabb3D::new(5, 5, 5, 5, 5, 5),
        Kind::Balloon {
            style: "weather".into(),
            ascent_rate: 3,
        },
    );
    println!("second Air1 added: {}", store.add(twin));

    println!("{}", store.name_dump());
    println!("search B2: {:?}", store.search("B2"));

    match store.range_query("B", "Drone1") {
        Some(listing) => print!("{listing}"),
        None => println!("bad range"),
    }

    println!("deleted: {:?}", store.delete("pterodactyl"));
    println!("{} records left", store.len());
    print!("{}", store.spatial_dump());
}
