//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for units (legions, the Emperor, the capital marker)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Game year counter (one year per settled round)
pub type Year = u32;

/// 1-indexed grid position: `x` is the column, `y` is the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoPos {
    pub x: i32,
    pub y: i32,
}

impl GeoPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 4 adjacent positions in fixed north, east, south, west order.
    ///
    /// Raid scanning depends on this enumeration order.
    pub fn neighbors(&self) -> [GeoPos; 4] {
        [
            GeoPos::new(self.x, self.y - 1),
            GeoPos::new(self.x + 1, self.y),
            GeoPos::new(self.x, self.y + 1),
            GeoPos::new(self.x - 1, self.y),
        ]
    }
}
