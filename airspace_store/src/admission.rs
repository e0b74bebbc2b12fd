// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Admission checks run before a record reaches either index.

use airspace_index::{Aabb3D, Record};

/// Decides whether a record may enter the store.
///
/// Called exactly once per [`ObjectStore::add`](crate::ObjectStore::add), before any
/// index is touched. Kind-specific field checks belong here; the store itself only
/// knows names and boxes.
///
/// Any `Fn(&R, &Aabb3D) -> bool` closure is an admission check.
pub trait Admission<R: ?Sized> {
    /// Return `true` to admit `record` into a store spanning `world`.
    fn admit(&self, record: &R, world: &Aabb3D) -> bool;
}

impl<R: ?Sized, F> Admission<R> for F
where
    F: Fn(&R, &Aabb3D) -> bool,
{
    fn admit(&self, record: &R, world: &Aabb3D) -> bool {
        self(record, world)
    }
}

/// Default admission: a non-blank name and a solid box inside the world.
#[derive(Copy, Clone, Debug, Default)]
pub struct WorldBounds;

impl<R: Record + ?Sized> Admission<R> for WorldBounds {
    fn admit(&self, record: &R, world: &Aabb3D) -> bool {
        let bounds = record.bounds();
        record.name().is_some_and(is_valid_name) && bounds.is_solid() && world.contains(&bounds)
    }
}

/// A name is valid when it has at least one non-whitespace character.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
