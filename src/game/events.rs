//! Events and history logging
//!
//! Every committed state transition the presentation layer might want to
//! animate or chronicle is recorded here. The raid event in particular
//! carries both coordinates so a collaborator can schedule the attack
//! animation after the reversion has already been committed.

use serde::{Deserialize, Serialize};

use crate::core::types::{GeoPos, UnitId, Year};

/// A recorded game event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub year: Year,
    pub kind: EventKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    // Founding
    CapitalFounded { pos: GeoPos },

    // Conquest
    Annexed { unit: UnitId, pos: GeoPos },
    LegionDied { unit: UnitId, pos: GeoPos },
    EmperorCrowned { unit: UnitId },

    // Economy
    LegionRecruited { unit: UnitId, pos: GeoPos },
    LegionDisbanded { unit: UnitId },
    RoundSettled { year: Year, taxes: i64, upkeep: i64 },

    // Barbarians
    RaidTriggered { from: GeoPos, to: GeoPos },
}

/// The complete event log
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<Event>,
    next_event_id: u32,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, kind: EventKind, year: Year) -> u32 {
        let id = self.next_event_id;
        self.next_event_id += 1;

        self.events.push(Event { id, year, kind });

        id
    }

    /// Hand the accumulated events to the presentation collaborator
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events_for_year(&self, year: Year) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.year == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ids_are_sequential() {
        let mut log = EventLog::new();
        let a = log.add_event(EventKind::CapitalFounded { pos: GeoPos::new(1, 1) }, 0);
        let b = log.add_event(EventKind::RoundSettled { year: 1, taxes: 5, upkeep: 5 }, 1);
        assert_eq!(a, 0);
        assert_eq!(b, 1);
    }

    #[test]
    fn test_drain_empties_the_log_but_keeps_numbering() {
        let mut log = EventLog::new();
        log.add_event(EventKind::CapitalFounded { pos: GeoPos::new(1, 1) }, 0);
        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(log.events.is_empty());

        let next = log.add_event(EventKind::EmperorCrowned { unit: UnitId(2) }, 1);
        assert_eq!(next, 1);
    }
}
