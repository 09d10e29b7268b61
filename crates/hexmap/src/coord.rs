//! Axial and cubic coordinates for cells of the hexagonal grid.
//!
//! Coordinates are plain signed-integer tuples with exact component-wise
//! equality, suitable as map keys. The cubic encoding is the alternate
//! form used by the derived-seed generator; conversions between the two
//! follow the usual `x = q`, `z = r`, `y = -q - r` convention.

/// Axial coordinate of a hexagonal grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Converts to the cubic encoding of the same cell.
    ///
    /// Saturates if `-q - r` overflows `i32`.
    pub fn to_cube(self) -> CubeCoord {
        let y = 0i64 - self.q as i64 - self.r as i64;
        CubeCoord {
            x: self.q,
            y: y.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            z: self.r,
        }
    }
}

impl From<(i32, i32)> for HexCoord {
    fn from((q, r): (i32, i32)) -> Self {
        Self { q, r }
    }
}

/// Cubic coordinate of a hexagonal grid cell.
///
/// A canonical cell satisfies `x + y + z == 0`, but the generators are
/// total over arbitrary triples and do not require it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CubeCoord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Converts to the axial encoding, dropping the redundant `y` axis.
    pub fn to_axial(self) -> HexCoord {
        HexCoord {
            q: self.x,
            r: self.z,
        }
    }
}

impl From<(i32, i32, i32)> for CubeCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}
