use azalea::BlockPos;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================
// WORLD BORDER — Keep paths and placements inside the border
// ============================================================

/// Anything the host can hand us that has border bounds.
pub trait BorderBounds {
    fn min_x(&self) -> f64;
    fn max_x(&self) -> f64;
    fn min_z(&self) -> f64;
    fn max_z(&self) -> f64;
}

/// Axis-aligned XZ border. Movements must stay inside it and
/// block placements must stay one block clear of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBorder {
    min_x: f64,
    max_x: f64,
    min_z: f64,
    max_z: f64,
}

impl WorldBorder {
    pub fn new(min_x: f64, max_x: f64, min_z: f64, max_z: f64) -> Self {
        Self { min_x, max_x, min_z, max_z }
    }

    /// Corners may come in any order
    pub fn from_corners(a: BlockPos, b: BlockPos) -> Self {
        Self::new(
            a.x.min(b.x) as f64,
            a.x.max(b.x) as f64,
            a.z.min(b.z) as f64,
            a.z.max(b.z) as f64,
        )
    }

    pub fn from_bounds(border: &impl BorderBounds) -> Self {
        Self::new(border.min_x(), border.max_x(), border.min_z(), border.max_z())
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn min_z(&self) -> f64 {
        self.min_z
    }

    pub fn max_z(&self) -> f64 {
        self.max_z
    }

    /// The whole column at (x, z) is inside the border
    pub fn entirely_contains(&self, x: i32, z: i32) -> bool {
        let (x, z) = (x as f64, z as f64);
        x + 1.0 > self.min_x && x < self.max_x && z + 1.0 > self.min_z && z < self.max_z
    }

    pub fn entirely_contains_pos(&self, pos: BlockPos) -> bool {
        self.entirely_contains(pos.x, pos.z)
    }

    /// Like `entirely_contains` with one block of slack on the far edges
    pub fn contains_xz(&self, x: i32, z: i32) -> bool {
        let (x, z) = (x as f64, z as f64);
        x + 1.0 > self.min_x && x - 1.0 < self.max_x && z + 1.0 > self.min_z && z - 1.0 < self.max_z
    }

    pub fn contains_xz_pos(&self, pos: BlockPos) -> bool {
        self.contains_xz(pos.x, pos.z)
    }

    /// One block in on every side: a block on the edge can't be right
    /// clicked against a neighbour outside the border.
    pub fn can_place_at(&self, x: i32, z: i32) -> bool {
        let (x, z) = (x as f64, z as f64);
        x > self.min_x && x + 1.0 < self.max_x && z > self.min_z && z + 1.0 < self.max_z
    }

    pub fn can_place_at_pos(&self, pos: BlockPos) -> bool {
        self.can_place_at(pos.x, pos.z)
    }
}

impl BorderBounds for WorldBorder {
    fn min_x(&self) -> f64 {
        self.min_x
    }

    fn max_x(&self) -> f64 {
        self.max_x
    }

    fn min_z(&self) -> f64 {
        self.min_z
    }

    fn max_z(&self) -> f64 {
        self.max_z
    }
}

impl fmt::Display for WorldBorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?},{:?}]-[{:?},{:?}]", self.min_x, self.min_z, self.max_x, self.max_z)
    }
}
