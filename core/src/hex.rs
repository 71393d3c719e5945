//! Axial hex coordinates and their projection onto the world plane.

use std::ops::Add;

use serde::{Deserialize, Serialize};

const SQRT_3: f32 = 1.732_050_8;

/// Axial offsets of the six neighbours surrounding a hex, in clockwise order
/// starting east.
pub const HEX_DIRECTIONS: [HexCoord; 6] = [
    HexCoord::new(1, 0),
    HexCoord::new(1, -1),
    HexCoord::new(0, -1),
    HexCoord::new(-1, 0),
    HexCoord::new(-1, 1),
    HexCoord::new(0, 1),
];

/// Location of a hex cell expressed in axial `(q, r)` coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexCoord {
    q: i32,
    r: i32,
}

impl HexCoord {
    /// The grid centre.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new axial coordinate.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Column axis of the coordinate.
    #[must_use]
    pub const fn q(&self) -> i32 {
        self.q
    }

    /// Diagonal row axis of the coordinate.
    #[must_use]
    pub const fn r(&self) -> i32 {
        self.r
    }

    /// Implicit third cube axis, `-q - r`.
    #[must_use]
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Number of hex steps separating two coordinates.
    #[must_use]
    pub fn hex_distance(self, other: HexCoord) -> u32 {
        let dq = self.q.abs_diff(other.q);
        let dr = self.r.abs_diff(other.r);
        let ds = self.s().abs_diff(other.s());
        dq.max(dr).max(ds)
    }

    /// Reports whether the coordinate lies inside a hexagonal grid of the given radius.
    ///
    /// A coordinate is inside when `|q| <= R`, `|r| <= R` and `|q + r| <= R`.
    #[must_use]
    pub fn within_radius(self, radius: i32) -> bool {
        self.q.abs() <= radius && self.r.abs() <= radius && (self.q + self.r).abs() <= radius
    }

    /// Iterator over the six axial neighbours of the coordinate.
    pub fn neighbors(self) -> impl Iterator<Item = HexCoord> {
        HEX_DIRECTIONS.into_iter().map(move |offset| self + offset)
    }

    /// Projects the coordinate onto the world plane for hexes of the given size.
    ///
    /// Uses the flat-topped axial layout:
    /// `x = size * 3/2 * q` and `z = size * (√3/2 * q + √3 * r)`.
    #[must_use]
    pub fn to_world(self, cell_size: f32) -> WorldPoint {
        let q = self.q as f32;
        let r = self.r as f32;
        WorldPoint::new(
            cell_size * 1.5 * q,
            cell_size * (SQRT_3 / 2.0 * q + SQRT_3 * r),
        )
    }
}

impl Add for HexCoord {
    type Output = HexCoord;

    fn add(self, rhs: HexCoord) -> Self::Output {
        HexCoord::new(self.q + rhs.q, self.r + rhs.r)
    }
}

/// Distance between the centres of two edge-sharing hexes of the given size.
#[must_use]
pub fn step_length(cell_size: f32) -> f32 {
    cell_size * SQRT_3
}

/// Point on the ground plane of the world, measured in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    /// Horizontal axis.
    pub x: f32,
    /// Depth axis.
    pub z: f32,
}

impl WorldPoint {
    /// Creates a new world point.
    #[must_use]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance(self, other: WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}
