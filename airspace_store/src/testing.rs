// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for unit tests.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use airspace_index::{Aabb3D, Record};

#[derive(Debug)]
pub(crate) struct Flight {
    name: Option<String>,
    bounds: Aabb3D,
}

impl Flight {
    pub(crate) fn new(name: &str, x: i64, y: i64, z: i64, xw: i64, yw: i64, zw: i64) -> Rc<Self> {
        Rc::new(Self {
            name: Some(name.into()),
            bounds: Aabb3D::new(x, y, z, xw, yw, zw),
        })
    }

    pub(crate) fn unnamed() -> Rc<Self> {
        Rc::new(Self {
            name: None,
            bounds: Aabb3D::new(0, 0, 0, 1, 1, 1),
        })
    }
}

impl Record for Flight {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn bounds(&self) -> Aabb3D {
        self.bounds
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.bounds.origin();
        let [xw, yw, zw] = self.bounds.extent();
        let name = self.name.as_deref().unwrap_or("null");
        write!(f, "Flight {name} {x} {y} {z} {xw} {yw} {zw}")
    }
}
