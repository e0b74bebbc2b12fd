// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for unit tests.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand::RngCore;

use crate::record::Record;
use crate::types::Aabb3D;

#[derive(Debug)]
pub(crate) struct Probe {
    name: Option<String>,
    bounds: Aabb3D,
}

impl Probe {
    pub(crate) fn new(name: &str, bounds: Aabb3D) -> Rc<Self> {
        Rc::new(Self {
            name: Some(name.into()),
            bounds,
        })
    }

    pub(crate) fn named(name: &str) -> Rc<Self> {
        Self::new(name, Aabb3D::new(0, 0, 0, 1, 1, 1))
    }

    pub(crate) fn unnamed() -> Rc<Self> {
        Rc::new(Self {
            name: None,
            bounds: Aabb3D::new(0, 0, 0, 1, 1, 1),
        })
    }
}

impl Record for Probe {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn bounds(&self) -> Aabb3D {
        self.bounds
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("null");
        write!(f, "{name} {}", self.bounds)
    }
}

/// Scripted coin flips: `true` is heads. Tails once the script runs out.
pub(crate) struct Coins {
    flips: Vec<bool>,
    pos: usize,
}

impl Coins {
    pub(crate) fn new(flips: &[bool]) -> Self {
        Self {
            flips: flips.to_vec(),
            pos: 0,
        }
    }
}

impl RngCore for Coins {
    fn next_u32(&mut self) -> u32 {
        let heads = self.flips.get(self.pos).copied().unwrap_or(false);
        self.pos += 1;
        if heads { 0 } else { 1 }
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst {
            *byte = u8::from(self.next_u32() != 0);
        }
    }
}
