// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concrete air objects for the airspace demos.
//!
//! The store only sees names and boxes; the per-kind fields and their checks
//! live here, plugged in through [`kind_admission`].

use std::fmt;
use std::rc::Rc;

use airspace_index::{Aabb3D, Record};
use airspace_store::{Admission, WorldBounds, is_valid_name};

/// What kind of object is flying, with its kind-specific fields.
#[derive(Clone, Debug, PartialEq)]
pub enum Kind {
    /// A scheduled flight.
    Airplane {
        carrier: String,
        flight: i32,
        engines: i32,
    },
    /// A balloon climbing at `ascent_rate`.
    Balloon {
        style: String,
        ascent_rate: i32,
    },
    /// A flock of `count` birds.
    Bird {
        species: String,
        count: i32,
    },
    /// A multirotor drone.
    Drone {
        brand: String,
        engines: i32,
    },
    /// A rocket on a launch trajectory.
    Rocket {
        ascent_rate: i32,
        trajectory: f64,
    },
}

impl Kind {
    fn label(&self) -> &'static str {
        match self {
            Self::Airplane { .. } => "Airplane",
            Self::Balloon { .. } => "Balloon",
            Self::Bird { .. } => "Bird",
            Self::Drone { .. } => "Drone",
            Self::Rocket { .. } => "Rocket",
        }
    }

    /// True if the kind-specific fields are well formed.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Airplane {
                carrier,
                flight,
                engines,
            } => is_valid_name(carrier) && *flight > 0 && *engines > 0,
            Self::Balloon { style, ascent_rate } => is_valid_name(style) && *ascent_rate > 0,
            Self::Bird { species, count } => is_valid_name(species) && *count > 0,
            Self::Drone { brand, engines } => is_valid_name(brand) && *engines > 0,
            Self::Rocket {
                ascent_rate,
                trajectory,
            } => *ascent_rate > 0 && *trajectory >= 0.0,
        }
    }
}

/// A named object in the airspace.
#[derive(Clone, Debug, PartialEq)]
pub struct AirObject {
    name: String,
    bounds: Aabb3D,
    kind: Kind,
}

impl AirObject {
    /// A shared air object, ready for the store.
    pub fn new(name: &str, bounds: Aabb3D, kind: Kind) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            bounds,
            kind,
        })
    }

    /// The kind-specific fields.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }
}

impl Record for AirObject {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn bounds(&self) -> Aabb3D {
        self.bounds
    }
}

impl fmt::Display for AirObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.bounds.origin();
        let [xw, yw, zw] = self.bounds.extent();
        write!(
            f,
            "{} {} {x} {y} {z} {xw} {yw} {zw}",
            self.kind.label(),
            self.name
        )?;
        match &self.kind {
            Kind::Airplane {
                carrier,
                flight,
                engines,
            } => write!(f, " {carrier} {flight} {engines}"),
            Kind::Balloon { style, ascent_rate } => write!(f, " {style} {ascent_rate}"),
            Kind::Bird { species, count } => write!(f, " {species} {count}"),
            Kind::Drone { brand, engines } => write!(f, " {brand} {engines}"),
            Kind::Rocket {
                ascent_rate,
                trajectory,
            } => write!(f, " {ascent_rate} {trajectory:?}"),
        }
    }
}

/// World bounds plus the per-kind field checks.
pub fn kind_admission(record: &AirObject, world: &Aabb3D) -> bool {
    WorldBounds.admit(record, world) && record.kind.is_valid()
}

/// A small fleet used by several demos.
pub fn fleet() -> Vec<Rc<AirObject>> {
    vec![
        AirObject::new(
            "Air1",
            Aabb3D::new(0, 10, 1, 20, 2, 30),
            Kind::Airplane {
                carrier: "USAir".into(),
                flight: 717,
                engines: 4,
            },
        ),
        AirObject::new(
            "B2",
            Aabb3D::new(900, 1, 2, 10, 10, 10),
            Kind::Balloon {
                style: "hot_air".into(),
                ascent_rate: 15,
            },
        ),
        AirObject::new(
            "pterodactyl",
            Aabb3D::new(0, 100, 20, 10, 50, 50),
            Kind::Bird {
                species: "Dinosaur".into(),
                count: 1,
            },
        ),
        AirObject::new(
            "Enterprise",
            Aabb3D::new(0, 100, 20, 10, 50, 50),
            Kind::Rocket {
                ascent_rate: 5000,
                trajectory: 9.5,
            },
        ),
        AirObject::new(
            "Drone1",
            Aabb3D::new(100, 1010, 101, 924, 2, 900),
            Kind::Drone {
                brand: "Droners".into(),
                engines: 3,
            },
        ),
        AirObject::new(
            "Drone2",
            Aabb3D::new(100, 1000, 101, 924, 2, 900),
            Kind::Drone {
                brand: "Droners".into(),
                engines: 2,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_kind_fields_after_the_box() {
        let fleet = fleet();
        assert_eq!(fleet[0].to_string(), "Airplane Air1 0 10 1 20 2 30 USAir 717 4");
        assert_eq!(fleet[3].to_string(), "Rocket Enterprise 0 100 20 10 50 50 5000 9.5");
    }

    #[test]
    fn kind_admission_checks_fields() {
        let world = Aabb3D::cube(1024);
        for obj in fleet() {
            assert!(kind_admission(&obj, &world), "{obj}");
        }
        let grounded = AirObject::new(
            "Grounded",
            Aabb3D::new(0, 0, 0, 5, 5, 5),
            Kind::Airplane {
                carrier: "Acme".into(),
                flight: 1,
                engines: 0,
            },
        );
        assert!(!kind_admission(&grounded, &world));
        let nameless_flock = AirObject::new(
            "Flock",
            Aabb3D::new(0, 0, 0, 5, 5, 5),
            Kind::Bird {
                species: " ".into(),
                count: 30,
            },
        );
        assert!(!kind_admission(&nameless_flock, &world));
    }
}
