//! Location - per-cell territory state
//!
//! Each cell of the grid holds exactly one location. The variant decides
//! passability, hostility, movement cost, raid eligibility and tax; the
//! location also keeps the stationed units in arrival order.

use serde::{Deserialize, Serialize};

use crate::core::types::UnitId;

/// Territory variant of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationKind {
    /// Impassable water
    Water,
    /// Impassable neutral placeholder (unrecognized map characters)
    Neutral,
    /// Hostile land open for annexation and raid launches
    Unclaimed,
    /// Owned, taxable territory
    Province { tax: i64 },
}

impl LocationKind {
    /// Whether a legion may enter this location
    pub fn can_go(&self) -> bool {
        matches!(self, Self::Unclaimed | Self::Province { .. })
    }

    /// Whether entering this location resolves combat and annexation
    pub fn is_enemy(&self) -> bool {
        matches!(self, Self::Unclaimed)
    }

    /// Movement budget deducted when a legion enters
    pub fn move_cost(&self) -> u32 {
        match self {
            Self::Unclaimed | Self::Province { .. } => 1,
            Self::Water | Self::Neutral => 0,
        }
    }

    /// Whether barbarians can launch a raid from this location
    pub fn raid_eligible(&self) -> bool {
        matches!(self, Self::Unclaimed)
    }

    /// Yearly tax raised, if this is owned territory
    pub fn tax(&self) -> Option<i64> {
        match self {
            Self::Province { tax } => Some(*tax),
            _ => None,
        }
    }

    pub fn is_province(&self) -> bool {
        matches!(self, Self::Province { .. })
    }
}

/// Territory state of one cell plus the units stationed on it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub kind: LocationKind,
    /// Stationed units in arrival order
    pub units: Vec<UnitId>,
}

impl Location {
    pub fn new(kind: LocationKind) -> Self {
        Self {
            kind,
            units: Vec::new(),
        }
    }

    pub fn attach(&mut self, unit: UnitId) {
        self.units.push(unit);
    }

    pub fn detach(&mut self, unit: UnitId) {
        self.units.retain(|&u| u != unit);
    }
}
