// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::fmt;

/// One of the three world axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// All axes in split order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// The split axis used at a given tree depth (x, y, z, x, ...).
    pub const fn at_depth(depth: usize) -> Self {
        match depth % 3 {
            0 => Self::X,
            1 => Self::Y,
            _ => Self::Z,
        }
    }

    /// Position of this axis in `[x, y, z]` arrays.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Axis-aligned bounding box in 3D, stored as an origin corner and per-axis extent.
///
/// Boxes handed to the indices always have a positive extent on every axis.
/// Regions produced by [`Aabb3D::split`] may be flat (zero extent) along the split
/// axis when a width-1 region is halved; a flat box intersects nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Aabb3D {
    origin: [i64; 3],
    extent: [i64; 3],
}

impl Aabb3D {
    /// Create a box from its origin corner and widths.
    pub const fn new(x: i64, y: i64, z: i64, xw: i64, yw: i64, zw: i64) -> Self {
        Self {
            origin: [x, y, z],
            extent: [xw, yw, zw],
        }
    }

    /// A cube anchored at the origin.
    pub const fn cube(size: i64) -> Self {
        Self::new(0, 0, 0, size, size, size)
    }

    /// Origin corner `[x, y, z]`.
    pub const fn origin(&self) -> [i64; 3] {
        self.origin
    }

    /// Widths `[xw, yw, zw]`.
    pub const fn extent(&self) -> [i64; 3] {
        self.extent
    }

    /// Origin coordinate along `axis`.
    pub const fn start(&self, axis: Axis) -> i64 {
        self.origin[axis.index()]
    }

    /// Width along `axis`.
    pub const fn width(&self, axis: Axis) -> i64 {
        self.extent[axis.index()]
    }

    /// Exclusive upper bound along `axis`.
    pub const fn end(&self, axis: Axis) -> i64 {
        self.origin[axis.index()] + self.extent[axis.index()]
    }

    /// Whether every extent is strictly positive.
    pub fn is_solid(&self) -> bool {
        self.extent.iter().all(|&w| w > 0)
    }

    /// Strict overlap test: boxes that only share a face do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        Axis::ALL.iter().all(|&axis| {
            self.start(axis) < other.end(axis) && other.start(axis) < self.end(axis)
        })
    }

    /// The overlapping volume of two boxes, or `None` if they do not intersect.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        let mut origin = [0; 3];
        let mut extent = [0; 3];
        for axis in Axis::ALL {
            let i = axis.index();
            origin[i] = self.start(axis).max(other.start(axis));
            extent[i] = self.end(axis).min(other.end(axis)) - origin[i];
        }
        Some(Self { origin, extent })
    }

    /// Half-open point containment: `origin <= p < origin + extent` on every axis.
    pub fn contains_point(&self, point: [i64; 3]) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let p = point[axis.index()];
            self.start(axis) <= p && p < self.end(axis)
        })
    }

    /// Whether `other` lies entirely inside this box.
    pub fn contains(&self, other: &Self) -> bool {
        Axis::ALL.iter().all(|&axis| {
            self.start(axis) <= other.start(axis) && other.end(axis) <= self.end(axis)
        })
    }

    /// Halve this region along `axis`.
    ///
    /// The low half gets `max(1, width / 2)` and the high half the remainder, so a
    /// width-1 region splits into a unit low half and a flat high half.
    #[must_use]
    pub fn split(&self, axis: Axis) -> (Self, Self) {
        let i = axis.index();
        let width = self.extent[i];
        let half = (width / 2).max(1);
        let mut low = *self;
        let mut high = *self;
        low.extent[i] = half;
        high.origin[i] += half;
        high.extent[i] = width - half;
        (low, high)
    }
}

impl fmt::Display for Aabb3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.origin;
        let [xw, yw, zw] = self.extent;
        write!(f, "({x}, {y}, {z}, {xw}, {yw}, {zw})")
    }
}

bitflags::bitflags! {
    /// The halves of a split region that a box overlaps.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        /// The box overlaps the low half.
        const LOW  = 0b0000_0001;
        /// The box overlaps the high half.
        const HIGH = 0b0000_0010;
    }
}

impl Sides {
    /// Route `bounds` against the two halves of a split.
    pub fn route(low: &Aabb3D, high: &Aabb3D, bounds: &Aabb3D) -> Self {
        let mut sides = Self::empty();
        sides.set(Self::LOW, low.intersects(bounds));
        sides.set(Self::HIGH, high.intersects(bounds));
        sides
    }
}
