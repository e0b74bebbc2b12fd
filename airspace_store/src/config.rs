// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store configuration.

use airspace_index::Aabb3D;

/// World size used when none is configured.
pub const DEFAULT_WORLD_SIZE: i64 = 1024;

/// Settings for an [`ObjectStore`](crate::ObjectStore).
///
/// With the `serde` feature, missing fields fall back to their defaults when
/// deserializing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StoreConfig {
    /// Edge length of the cubic world anchored at the origin.
    pub world_size: i64,
    /// Seed for the name index's height generator (used by [`ObjectStore::seeded`](crate::ObjectStore::seeded)).
    pub seed: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            world_size: DEFAULT_WORLD_SIZE,
            seed: 0,
        }
    }
}

impl StoreConfig {
    /// Set the world edge length.
    #[must_use]
    pub const fn with_world_size(mut self, world_size: i64) -> Self {
        self.world_size = world_size;
        self
    }

    /// Set the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The world volume every record must lie within.
    pub const fn world(&self) -> Aabb3D {
        Aabb3D::cube(self.world_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = StoreConfig::default().with_world_size(64).with_seed(9);
        assert_eq!(config.world(), Aabb3D::new(0, 0, 0, 64, 64, 64));
        assert_eq!(config.seed, 9);
        assert_eq!(StoreConfig::default().world_size, DEFAULT_WORLD_SIZE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_toml_uses_defaults() {
        let config: StoreConfig = toml::from_str("seed = 42").unwrap();
        assert_eq!(config, StoreConfig::default().with_seed(42));

        let config: StoreConfig = toml::from_str("world_size = 256\nseed = 1").unwrap();
        assert_eq!(config.world_size, 256);
    }
}
