// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The record abstraction shared by both indices.

use core::cmp::Ordering;
use core::fmt::Display;

use crate::types::Aabb3D;

/// A named object occupying a box in the world.
///
/// The indices only need a name, a box, and a rendering ([`Display`]). Records are
/// shared between indices as `Rc<R>`; the name index identifies a record by its name,
/// the bintree by the `Rc` allocation itself.
///
/// A record must not change its name or bounds while it is held by an index.
pub trait Record: Display {
    /// The record's name. Records without a name are refused by the name index.
    fn name(&self) -> Option<&str>;

    /// The space occupied by the record.
    fn bounds(&self) -> Aabb3D;
}

/// Name order used by every index: lexicographic, with a missing name first.
pub fn cmp_names<R: Record + ?Sized>(a: &R, b: &R) -> Ordering {
    a.name().cmp(&b.name())
}
