//! GameSession - the single explicit game-state container
//!
//! One session owns the grid, the unit arena, the army, the territory
//! ledger, the per-round action queue and the deterministic RNG. External
//! collaborators drive it through [`GameSession::submit_move`] and read it
//! back through the query methods; nothing here is global.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::army::{roman_label, Army, Role, Unit, UnitArena};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::{GeoPos, UnitId, Year};
use crate::game::events::{Event, EventKind, EventLog};
use crate::game::{movement, round};
use crate::map::{Grid, Location, LocationKind};

/// A full game session, generic over the random source so tests can
/// substitute a scripted one
pub struct GameSession<R: Rng = ChaCha8Rng> {
    pub config: GameConfig,
    pub grid: Grid,
    pub arena: UnitArena,
    pub army: Army,
    /// Action queue: legions that still have movement budget this round
    pub army_move: VecDeque<UnitId>,
    /// Territory ledger: owned provinces in annexation order
    pub provinces: Vec<GeoPos>,
    pub events: EventLog,
    pub rng: R,
    pub(crate) capital: Option<UnitId>,
    pub(crate) active: Option<UnitId>,
    pub(crate) year: Year,
    pub(crate) taxes: i64,
}

impl GameSession<ChaCha8Rng> {
    /// Convenience constructor with a seeded ChaCha8 random source
    pub fn from_seed(config: GameConfig, char_map: &[&str], seed: u64) -> Result<Self> {
        Self::new(config, char_map, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new(config: GameConfig, char_map: &[&str], rng: R) -> Result<Self> {
        config.validate()?;
        let grid = Grid::from_char_map(char_map)?;

        Ok(Self {
            config,
            grid,
            arena: UnitArena::new(),
            army: Army::new(),
            army_move: VecDeque::new(),
            provinces: Vec::new(),
            events: EventLog::new(),
            rng,
            capital: None,
            active: None,
            year: 0,
            taxes: 0,
        })
    }

    /// Whether a capital and an Emperor have been established
    pub fn started(&self) -> bool {
        self.capital.is_some()
    }

    /// Found the capital at `pos`: annex the cell, station the capital
    /// marker and the first Emperor legion there, then settle the opening
    /// round (the year advances to 1).
    pub fn found_capital(&mut self, pos: GeoPos) -> Result<()> {
        if self.started() {
            return Err(GameError::AlreadyStarted);
        }
        let passable = self
            .grid
            .location(pos)
            .is_some_and(|l| l.kind.can_go());
        if !passable {
            return Err(GameError::InvalidCapital(pos.x, pos.y));
        }

        self.annex(pos);
        self.events
            .add_event(EventKind::CapitalFounded { pos }, self.year);

        let capital_id = self.arena.next_id();
        self.arena
            .insert(Unit::capital(capital_id, pos, self.config.capital_tax));
        self.station(capital_id, pos);
        self.capital = Some(capital_id);

        let emperor_id = self.arena.next_id();
        let mut emperor = Unit::legion(
            emperor_id,
            roman_label(1),
            pos,
            self.config.move_budget,
            self.config.legion_upkeep,
        );
        if let Some(state) = emperor.legion_state_mut() {
            state.role = Role::Emperor;
        }
        self.arena.insert(emperor);
        self.station(emperor_id, pos);
        self.army.push(emperor_id);

        tracing::info!(x = pos.x, y = pos.y, "capital founded");

        round::settle_round(self);
        self.active = self.army_move.front().copied();
        Ok(())
    }

    /// Process one move command for the active legion.
    ///
    /// Invalid destinations are absorbed as no-ops; only commands issued
    /// before [`found_capital`](Self::found_capital) are errors. Runs to
    /// completion, including round settlement when the action queue
    /// empties.
    pub fn submit_move(&mut self, target: GeoPos) -> Result<()> {
        if !self.started() {
            return Err(GameError::NotStarted);
        }
        let Some(active) = self.active else {
            // Army wiped out by disbandment; nothing left to command
            return Ok(());
        };

        movement::resolve_move(self, active, target);

        let budget_spent = self
            .arena
            .get(active)
            .and_then(|u| u.legion_state())
            .map_or(true, |s| s.move_count == 0);
        if budget_spent {
            debug_assert_eq!(self.army_move.front(), Some(&active));
            self.army_move.pop_front();
        }

        if self.army_move.is_empty() {
            round::settle_round(self);
        }

        self.active = self.army_move.front().copied();
        Ok(())
    }

    // --- territory transitions -------------------------------------------

    /// Convert the cell at `pos` into an owned province, migrating any
    /// stationed units, and register it in the territory ledger.
    ///
    /// Callers only annex non-province destinations.
    pub fn annex(&mut self, pos: GeoPos) {
        self.grid.replace_location(
            pos,
            LocationKind::Province {
                tax: self.config.province_tax,
            },
        );
        self.provinces.push(pos);
    }

    /// Inverse of [`annex`](Self::annex): the province leaves the ledger
    /// and the cell becomes fresh unclaimed land, stationed units migrated.
    pub fn revert_to_land(&mut self, pos: GeoPos) {
        self.provinces.retain(|&p| p != pos);
        self.grid.replace_location(pos, LocationKind::Unclaimed);
    }

    /// Attach a unit to the location at `pos` (the unit must not be
    /// stationed anywhere else)
    pub(crate) fn station(&mut self, unit: UnitId, pos: GeoPos) {
        if let Some(location) = self.grid.location_mut(pos) {
            location.attach(unit);
        }
        if let Some(u) = self.arena.get_mut(unit) {
            u.pos = pos;
        }
    }

    /// Total yearly tax: capital tax plus one share per ledger province
    pub(crate) fn total_tax(&self) -> i64 {
        let capital_tax = self
            .capital
            .and_then(|id| self.arena.get(id))
            .map_or(0, |u| match u.kind {
                crate::army::UnitKind::Capital { tax } => tax,
                _ => 0,
            });
        let province_tax: i64 = self
            .provinces
            .iter()
            .filter_map(|&pos| self.grid.location(pos))
            .filter_map(|l| l.kind.tax())
            .sum();
        capital_tax + province_tax
    }

    // --- read-only queries for the presentation collaborator --------------

    pub fn location_at(&self, pos: GeoPos) -> Option<&Location> {
        self.grid.location(pos)
    }

    /// Units stationed at `pos` in arrival order
    pub fn units_at(&self, pos: GeoPos) -> Vec<&Unit> {
        self.grid
            .location(pos)
            .map(|l| l.units.iter().filter_map(|&id| self.arena.get(id)).collect())
            .unwrap_or_default()
    }

    /// The legion the turn cursor currently designates
    pub fn active_unit(&self) -> Option<&Unit> {
        self.active.and_then(|id| self.arena.get(id))
    }

    pub fn year(&self) -> Year {
        self.year
    }

    /// Taxes computed at the most recent round settlement
    pub fn taxes(&self) -> i64 {
        self.taxes
    }

    /// Army roster in recruitment order
    pub fn army_roster(&self) -> Vec<&Unit> {
        self.army
            .iter()
            .filter_map(|id| self.arena.get(id))
            .collect()
    }

    pub fn province_ledger(&self) -> &[GeoPos] {
        &self.provinces
    }

    /// Drain accumulated events for the presentation layer
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain()
    }

    /// Comparable, serializable view of the whole game state
    pub fn snapshot(&self) -> Snapshot {
        let mut ownership = Vec::with_capacity(self.grid.rows() as usize);
        for y in 1..=self.grid.rows() {
            let mut row = String::with_capacity(self.grid.cols() as usize);
            for x in 1..=self.grid.cols() {
                let ch = match self.grid.location(GeoPos::new(x, y)).map(|l| l.kind) {
                    Some(LocationKind::Water) => 'O',
                    Some(LocationKind::Neutral) => '#',
                    Some(LocationKind::Unclaimed) => 'L',
                    Some(LocationKind::Province { .. }) => 'P',
                    None => '?',
                };
                row.push(ch);
            }
            ownership.push(row);
        }

        let army = self
            .army_roster()
            .iter()
            .filter_map(|u| {
                u.legion_state().map(|s| LegionSnapshot {
                    label: u.label.clone(),
                    emperor: s.role == Role::Emperor,
                    experience: s.experience,
                    move_count: s.move_count,
                    pos: u.pos,
                })
            })
            .collect();

        Snapshot {
            year: self.year,
            taxes: self.taxes,
            ownership,
            provinces: self.provinces.clone(),
            army,
        }
    }
}

/// Serializable summary of session state, used for determinism checks and
/// the demo binary's final report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub year: Year,
    pub taxes: i64,
    pub ownership: Vec<String>,
    pub provinces: Vec<GeoPos>,
    pub army: Vec<LegionSnapshot>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegionSnapshot {
    pub label: String,
    pub emperor: bool,
    pub experience: u32,
    pub move_count: u32,
    pub pos: GeoPos,
}
