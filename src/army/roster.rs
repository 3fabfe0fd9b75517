//! Roster - unit arena and the ordered army
//!
//! Units live in an id-indexed arena; the army is the ordered sequence of
//! legion ids (the capital marker is stationed but never marches). Order is
//! recruitment order and decides succession tie-breaks and which legion is
//! disbanded when the treasury runs dry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::army::unit::{Role, Unit};
use crate::core::types::UnitId;

/// Arena of all units in a session, indexed by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitArena {
    units: HashMap<UnitId, Unit>,
    next_id: u32,
}

impl UnitArena {
    pub fn new() -> Self {
        Self {
            units: HashMap::new(),
            next_id: 1,
        }
    }

    /// Generate a new unique UnitId
    pub fn next_id(&mut self) -> UnitId {
        let id = UnitId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, unit: Unit) {
        self.units.insert(unit.id, unit);
    }

    pub fn remove(&mut self, id: UnitId) -> Option<Unit> {
        self.units.remove(&id)
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// The ordered legion roster
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Army {
    order: Vec<UnitId>,
}

impl Army {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly recruited legion
    pub fn push(&mut self, id: UnitId) {
        self.order.push(id);
    }

    /// Remove and return the most recently added legion
    pub fn pop_last(&mut self) -> Option<UnitId> {
        self.order.pop()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Legion ids in recruitment order
    pub fn iter(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.order.iter().copied()
    }

    /// The current Emperor, if any
    pub fn emperor(&self, arena: &UnitArena) -> Option<UnitId> {
        self.iter()
            .find(|&id| arena.get(id).is_some_and(|u| u.is_emperor()))
    }

    /// Count of Emperor-role legions; exactly 1 whenever the army is
    /// non-empty and the game has started
    pub fn emperor_count(&self, arena: &UnitArena) -> usize {
        self.iter()
            .filter(|&id| arena.get(id).is_some_and(|u| u.is_emperor()))
            .count()
    }
}

/// Promote the most experienced legion to Emperor.
///
/// Ties break by army order, first match wins. Returns the promoted id, or
/// None when the army is empty. Callers run this only while no legion holds
/// the Emperor role.
pub fn promote_successor(army: &Army, arena: &mut UnitArena) -> Option<UnitId> {
    let mut best: Option<(UnitId, u32)> = None;

    for id in army.iter() {
        let Some(state) = arena.get(id).and_then(|u| u.legion_state()) else {
            continue;
        };
        // Strict comparison keeps the earliest legion on equal experience
        if best.map_or(true, |(_, exp)| state.experience > exp) {
            best = Some((id, state.experience));
        }
    }

    let (successor, _) = best?;
    if let Some(state) = arena.get_mut(successor).and_then(|u| u.legion_state_mut()) {
        state.role = Role::Emperor;
    }
    Some(successor)
}
