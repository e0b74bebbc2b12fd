// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Airspace Store: named objects in a bounded 3D world.
//!
//! [`ObjectStore`] keeps one set of records in two indices from `airspace_index`:
//!
//! - a skip list ordered by name, for lookup, deletion, and name range listings;
//! - a bintree over the world volume, for collision reports and box intersection.
//!
//! Additions pass an [`Admission`] check first, then the name index (which refuses
//! missing or duplicate names), and only then reach the bintree. Deletions run in the
//! same order, so the two indices never disagree about which records exist.
//!
//! The store knows nothing about concrete record kinds: anything implementing
//! [`Record`](airspace_index::Record) can be stored, and kind-specific validation goes
//! in the admission check.
//!
//! # Example
//!
//! ```rust
//! use std::fmt;
//! use std::rc::Rc;
//!
//! use airspace_index::{Aabb3D, Record};
//! use airspace_store::{ObjectStore, StoreConfig};
//!
//! struct Balloon {
//!     name: String,
//!     bounds: Aabb3D,
//! }
//!
//! impl Record for Balloon {
//!     fn name(&self) -> Option<&str> {
//!         Some(&self.name)
//!     }
//!     fn bounds(&self) -> Aabb3D {
//!         self.bounds
//!     }
//! }
//!
//! impl fmt::Display for Balloon {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "Balloon {} {}", self.name, self.bounds)
//!     }
//! }
//!
//! let mut store = ObjectStore::seeded(StoreConfig::default().with_seed(1));
//! let red = Rc::new(Balloon { name: "red".into(), bounds: Aabb3D::new(0, 0, 0, 10, 10, 10) });
//! assert!(store.add(red));
//! assert!(store.search("red").is_some());
//!
//! let report = store.intersect(&Aabb3D::new(5, 5, 5, 2, 2, 2)).unwrap();
//! assert!(report.contains("Balloon red"));
//! assert_eq!(store.delete("red").as_deref(), Some("Balloon red (0, 0, 0, 10, 10, 10)"));
//! ```

#![no_std]

extern crate alloc;

pub mod admission;
pub mod config;
pub mod error;
pub mod store;

#[cfg(test)]
mod testing;

pub use admission::{Admission, WorldBounds, is_valid_name};
pub use config::{DEFAULT_WORLD_SIZE, StoreConfig};
pub use error::StoreError;
pub use store::ObjectStore;
