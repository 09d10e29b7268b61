//! Generated locations and the shape categories they carry.
use crate::coord::{CubeCoord, HexCoord};
use crate::error::Error;

/// Shape category assigned to a grid cell.
///
/// `Empty` is the background; the rare categories appear at marginal
/// rates of roughly 1/19, 1/41 and 1/97. The wire representation is the
/// integer tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "u8", try_from = "u8")
)]
pub enum Shape {
    Empty,
    Circle,
    Triangle,
    Square,
}

impl Shape {
    /// All categories, in tag order.
    pub const ALL: [Shape; 4] = [Shape::Empty, Shape::Circle, Shape::Triangle, Shape::Square];
}

impl From<Shape> for u8 {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Empty => 0,
            Shape::Circle => 1,
            Shape::Triangle => 2,
            Shape::Square => 3,
        }
    }
}

impl TryFrom<u8> for Shape {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Shape::Empty),
            1 => Ok(Shape::Circle),
            2 => Ok(Shape::Triangle),
            3 => Ok(Shape::Square),
            other => Err(Error::UnknownShape(other)),
        }
    }
}

/// Generated record for an axial coordinate: the coordinate itself plus
/// its derived shape. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub q: i32,
    pub r: i32,
    pub shape: Shape,
}

impl Location {
    pub fn coord(&self) -> HexCoord {
        HexCoord {
            q: self.q,
            r: self.r,
        }
    }
}

/// Cubic-variant record: the coordinate plus an opaque derived seed
/// instead of a shape category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeLocation {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub seed: i64,
}

impl CubeLocation {
    pub fn coord(&self) -> CubeCoord {
        CubeCoord {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}
