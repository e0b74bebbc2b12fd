// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The object store: one record set behind a name index and a spatial index.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use airspace_index::{Aabb3D, Bintree, Record, SkipList};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::admission::{Admission, WorldBounds, is_valid_name};
use crate::config::StoreConfig;
use crate::error::StoreError;

/// Records indexed by name and by space.
///
/// Every mutation goes through the name index first. A record reaches the bintree
/// only after the skip list accepted its name, and leaves the bintree only after the
/// skip list handed it back, so both indices always hold the same records.
///
/// Name queries are answered by the skip list; spatial queries by the bintree.
pub struct ObjectStore<R, G = StdRng, A = WorldBounds> {
    config: StoreConfig,
    world: Aabb3D,
    names: SkipList<R, G>,
    space: Bintree<R>,
    admission: A,
}

impl<R, G, A> fmt::Debug for ObjectStore<R, G, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectStore")
            .field("config", &self.config)
            .field("names", &self.names)
            .field("space", &self.space)
            .finish_non_exhaustive()
    }
}

impl<R: Record> ObjectStore<R> {
    /// A store with [`WorldBounds`] admission and a `StdRng` seeded from `config.seed`.
    pub fn seeded(config: StoreConfig) -> Self {
        Self::new(config, StdRng::seed_from_u64(config.seed), WorldBounds)
    }
}

impl<R, G, A> ObjectStore<R, G, A> {
    /// A store over `config.world()` using `rng` for skip list heights.
    pub fn new(config: StoreConfig, rng: G, admission: A) -> Self {
        let world = config.world();
        Self {
            config,
            world,
            names: SkipList::new(rng),
            space: Bintree::new(world),
            admission,
        }
    }

    /// The configuration the store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The world volume.
    pub fn world(&self) -> Aabb3D {
        self.world
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no records are held.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The name index.
    pub fn names(&self) -> &SkipList<R, G> {
        &self.names
    }

    /// The spatial index.
    pub fn space(&self) -> &Bintree<R> {
        &self.space
    }

    /// Drop every record from both indices.
    pub fn clear(&mut self) {
        log::debug!("clearing store of {} records", self.names.len());
        self.names.clear();
        self.space.clear();
    }
}

impl<R: Record, G, A> ObjectStore<R, G, A> {
    /// Remove the record named `name` from both indices and return its rendering.
    pub fn delete(&mut self, name: &str) -> Option<String> {
        if !is_valid_name(name) {
            return None;
        }
        let record = self.names.remove(name)?;
        if !self.space.remove(&record) {
            log::warn!("{name:?} was in the name index but not in the bintree");
        }
        log::debug!("deleted {name:?}");
        Some(record.to_string())
    }

    /// The record named `name`.
    pub fn get(&self, name: &str) -> Option<&Rc<R>> {
        self.names.search(name)
    }

    /// Rendering of the record named `name`.
    pub fn search(&self, name: &str) -> Option<String> {
        if !is_valid_name(name) {
            return None;
        }
        self.get(name).map(ToString::to_string)
    }

    /// Records whose names fall in `[low, high]`, ascending.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidRange`] if a bound is blank or `low > high`.
    pub fn range(&self, low: &str, high: &str) -> Result<Vec<Rc<R>>, StoreError> {
        if !is_valid_name(low) || !is_valid_name(high) || low > high {
            return Err(StoreError::InvalidRange {
                low: low.into(),
                high: high.into(),
            });
        }
        Ok(self.names.range(low, high).cloned().collect())
    }

    /// Listing of the records in `[low, high]`, or `None` for a malformed range.
    pub fn range_query(&self, low: &str, high: &str) -> Option<String> {
        let records = self.range(low, high).ok()?;
        let mut out = format!("Found these records in the range {low} to {high}\n");
        for record in records {
            out.push_str(&record.to_string());
            out.push('\n');
        }
        Some(out)
    }

    /// Preorder dump of the bintree.
    pub fn spatial_dump(&self) -> String {
        self.space.print()
    }

    /// Dump of the skip list.
    pub fn name_dump(&self) -> String {
        self.names.dump()
    }

    /// Report of every pair of records whose boxes overlap.
    pub fn collisions(&self) -> String {
        self.space.collision_report()
    }

    /// Report of the records overlapping `query`.
    ///
    /// Returns `None` if `query` is not a solid box inside the world.
    pub fn intersect(&self, query: &Aabb3D) -> Option<String> {
        if !query.is_solid() || !self.world.contains(query) {
            return None;
        }
        Some(self.space.intersect(query))
    }
}

impl<R: Record, G: RngCore, A: Admission<R>> ObjectStore<R, G, A> {
    /// Admit `record` and add it to both indices.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Rejected`] if the admission check refuses it;
    /// - [`StoreError::MissingName`] if it has no name;
    /// - [`StoreError::DuplicateName`] if the name is taken.
    ///
    /// Neither index changes on error.
    pub fn try_add(&mut self, record: Rc<R>) -> Result<(), StoreError> {
        if !self.admission.admit(&record, &self.world) {
            log::debug!("admission refused {record}");
            return Err(StoreError::Rejected);
        }
        let Some(name) = record.name() else {
            return Err(StoreError::MissingName);
        };
        if !self.names.insert(Rc::clone(&record)) {
            log::debug!("name {name:?} already in use");
            return Err(StoreError::DuplicateName(name.into()));
        }
        log::debug!("added {name:?} at {}", record.bounds());
        self.space.insert(record);
        Ok(())
    }

    /// [`ObjectStore::try_add`] reduced to success or failure.
    pub fn add(&mut self, record: Rc<R>) -> bool {
        self.try_add(record).is_ok()
    }
}
