#![forbid(unsafe_code)]
//! hexmap: deterministic shape assignment for an infinite hexagonal grid.
//!
//! Modules:
//! - coord: axial and cubic grid coordinates
//! - location: generated records and the shape categories they carry
//! - rng: the fixed SplitMix64 stream used for all derivations
//! - generate: coordinate-to-attribute generators bound to a world seed
//! - store: memoizing lookup layer in front of a generator
//!
//! For a fixed world seed, generation is a pure function of the
//! coordinate: any number of calls, from any process, yields an
//! identical location. The store only avoids recomputation.
pub mod coord;
pub mod error;
pub mod generate;
pub mod location;
pub mod rng;
pub mod store;

/// Convenient re-exports for common types. Import with `use hexmap::prelude::*;`.
pub mod prelude {
    pub use crate::coord::{CubeCoord, HexCoord};
    pub use crate::error::{Error, Result};
    pub use crate::generate::{CubeGenerator, Generate, ShapeGenerator};
    pub use crate::location::{CubeLocation, Location, Shape};
    pub use crate::rng::SplitMix64;
    pub use crate::store::{CubeMap, GridStore, HexMap};
}
