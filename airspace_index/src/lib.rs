// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Airspace Index: the two indices behind an airspace object store.
//!
//! - [`SkipList`]: records ordered by name, with lookup, removal, and inclusive
//!   range traversal. Node heights are drawn from a caller-supplied random source.
//! - [`Bintree`]: a region-splitting tree over a fixed world box for collision
//!   reports and box intersection queries.
//!
//! Both indices hold records as `Rc<R>` where `R: Record`. The skip list identifies a
//! record by name; the bintree by the `Rc` itself, so the same record can be shared
//! by both and removed from each independently.
//!
//! Coordinates are integers. Boxes intersect only with a positive overlap volume:
//! boxes that share a face do not intersect.
//!
//! # Example
//!
//! ```rust
//! use std::fmt;
//! use std::rc::Rc;
//!
//! use airspace_index::{Aabb3D, Bintree, Record, SkipList};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! struct Kite {
//!     name: String,
//!     bounds: Aabb3D,
//! }
//!
//! impl Record for Kite {
//!     fn name(&self) -> Option<&str> {
//!         Some(&self.name)
//!     }
//!     fn bounds(&self) -> Aabb3D {
//!         self.bounds
//!     }
//! }
//!
//! impl fmt::Display for Kite {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "Kite {} {}", self.name, self.bounds)
//!     }
//! }
//!
//! let mut names = SkipList::new(StdRng::seed_from_u64(7));
//! let mut space = Bintree::new(Aabb3D::cube(1024));
//!
//! for (name, x) in [("red", 0), ("blue", 5)] {
//!     let kite = Rc::new(Kite { name: name.into(), bounds: Aabb3D::new(x, 0, 0, 10, 10, 10) });
//!     assert!(names.insert(Rc::clone(&kite)));
//!     space.insert(kite);
//! }
//!
//! let ordered: Vec<_> = names.iter().map(|k| k.name.as_str()).collect();
//! assert_eq!(ordered, ["blue", "red"]);
//! assert_eq!(space.collisions().pairs().count(), 1);
//! assert_eq!(space.query(&Aabb3D::new(12, 0, 0, 4, 4, 4)).hits().count(), 1);
//! ```

#![no_std]

extern crate alloc;

pub mod bintree;
pub mod record;
pub mod skiplist;
pub mod types;

#[cfg(test)]
mod testing;

pub use bintree::{Bintree, CollisionReport, IntersectReport, LEAF_CAPACITY, NodeKind};
pub use record::{Record, cmp_names};
pub use skiplist::{MAX_LEVEL, SkipList};
pub use types::{Aabb3D, Axis, Sides};
