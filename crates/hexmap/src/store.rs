//! Memoizing lookup layer in front of a generator.
//!
//! The store maps coordinates to generated locations. A miss delegates
//! to the bound generator and inserts the result, so every coordinate is
//! generated at most once per store. Entries are only ever added; there
//! is no eviction, and the map grows for the lifetime of the store.
//!
//! The cache is an optimization only. Generation is pure, so its
//! presence or absence never changes observable output.
use std::collections::HashMap;

use tracing::trace;

use crate::generate::{CubeGenerator, Generate, ShapeGenerator};

/// Associative cache over a [`Generate`] implementation.
#[derive(Debug)]
pub struct GridStore<G: Generate> {
    entries: HashMap<G::Coord, G::Location>,
    generator: G,
}

impl<G: Generate> GridStore<G> {
    /// Creates a store with an empty cache around the given generator.
    pub fn new(generator: G) -> Self {
        Self {
            entries: HashMap::new(),
            generator,
        }
    }

    /// Returns the location for a coordinate, generating and caching it
    /// on first access.
    pub fn get(&mut self, coord: G::Coord) -> G::Location {
        if let Some(loc) = self.entries.get(&coord) {
            return *loc;
        }
        trace!(?coord, "cache miss, generating location");
        let loc = self.generator.generate(coord);
        self.entries.insert(coord, loc);
        loc
    }

    /// Returns the cached location for a coordinate without generating.
    pub fn cached(&self, coord: G::Coord) -> Option<G::Location> {
        self.entries.get(&coord).copied()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The bound generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }
}

/// Memoizing map of axial coordinates to shape locations.
pub type HexMap = GridStore<ShapeGenerator>;

impl HexMap {
    /// Creates a shape map fixed to the given world seed.
    pub fn with_seed(seed: i64) -> Self {
        GridStore::new(ShapeGenerator::new(seed))
    }
}

/// Memoizing map of cubic coordinates to derived-seed locations.
pub type CubeMap = GridStore<CubeGenerator>;

impl CubeMap {
    /// Creates a derived-seed map fixed to the given world seed.
    pub fn with_seed(seed: i64) -> Self {
        GridStore::new(CubeGenerator::new(seed))
    }
}
