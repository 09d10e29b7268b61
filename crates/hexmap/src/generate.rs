//! Deterministic coordinate-to-attribute generation.
//!
//! A generator is bound to a world seed at construction and derives an
//! attribute for an arbitrary coordinate by mixing independent seeded
//! streams:
//! - one stream per coordinate axis, seeded with the axis value
//!   sign-extended to 64 bits (one axis is bit-reversed before seeding
//!   so that adjacent rows do not produce correlated streams),
//! - one stream seeded with the world seed alone.
//!
//! One 63-bit draw from each stream is combined with XOR and the result
//! seeds a final stream whose successive draws decide the attribute.
//! Generation is total over the full integer domain, has no side
//! effects, and is safe to call concurrently without synchronization.
use std::fmt::Debug;
use std::hash::Hash;

use rand::SeedableRng;

use crate::coord::{CubeCoord, HexCoord};
use crate::location::{CubeLocation, Location, Shape};
use crate::rng::SplitMix64;

/// Divisor tested against the first draw; hits classify as [`Shape::Circle`].
const CIRCLE_DIVISOR: i64 = 19;
/// Divisor tested against the second draw; hits classify as [`Shape::Triangle`].
const TRIANGLE_DIVISOR: i64 = 41;
/// Divisor tested against the third draw; hits classify as [`Shape::Square`].
const SQUARE_DIVISOR: i64 = 97;

/// Trait for deterministic location generation under a fixed world seed.
pub trait Generate {
    type Coord: Copy + Eq + Hash + Debug;
    type Location: Copy + Debug;

    /// Derives the location for a coordinate. Pure: the same coordinate
    /// always yields an identical location for the lifetime of the
    /// generator.
    fn generate(&self, coord: Self::Coord) -> Self::Location;
}

/// One 63-bit draw from a fresh stream seeded with the given value.
fn stream_draw(seed: u64) -> i64 {
    SplitMix64::seed_from_u64(seed).draw63()
}

/// Sign-extends a 32-bit axis value to the 64-bit seed width.
fn axis_seed(value: i32) -> u64 {
    value as i64 as u64
}

/// Seed for the decorrelated axis: sign-extend, then reverse the bits
/// over the full 64-bit width so small increments land far apart.
fn reversed_axis_seed(value: i32) -> u64 {
    axis_seed(value).reverse_bits()
}

/// Shape generator over axial coordinates.
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    seed: i64,
}

impl ShapeGenerator {
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// World seed this generator was constructed with.
    pub fn seed(&self) -> i64 {
        self.seed
    }
}

impl Generate for ShapeGenerator {
    type Coord = HexCoord;
    type Location = Location;

    fn generate(&self, coord: HexCoord) -> Location {
        let q = stream_draw(axis_seed(coord.q));
        let r = stream_draw(reversed_axis_seed(coord.r));
        let world = stream_draw(self.seed as u64);

        let mut rng = SplitMix64::seed_from_u64((q ^ r ^ world) as u64);
        let shape = if rng.draw63() % CIRCLE_DIVISOR == 0 {
            Shape::Circle
        } else if rng.draw63() % TRIANGLE_DIVISOR == 0 {
            Shape::Triangle
        } else if rng.draw63() % SQUARE_DIVISOR == 0 {
            Shape::Square
        } else {
            Shape::Empty
        };

        Location {
            q: coord.q,
            r: coord.r,
            shape,
        }
    }
}

/// Derived-seed generator over cubic coordinates.
///
/// Instead of a shape category, each cell receives an opaque 63-bit
/// seed mixed from all three axes and the world seed, suitable for
/// seeding further per-cell generation.
#[derive(Debug, Clone)]
pub struct CubeGenerator {
    seed: i64,
}

impl CubeGenerator {
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }
}

impl Generate for CubeGenerator {
    type Coord = CubeCoord;
    type Location = CubeLocation;

    fn generate(&self, coord: CubeCoord) -> CubeLocation {
        let x = stream_draw(axis_seed(coord.x));
        let y = stream_draw(reversed_axis_seed(coord.y));
        let z = stream_draw(axis_seed(coord.z));
        let world = stream_draw(self.seed as u64);

        CubeLocation {
            x: coord.x,
            y: coord.y,
            z: coord.z,
            seed: x ^ y ^ z ^ world,
        }
    }
}
