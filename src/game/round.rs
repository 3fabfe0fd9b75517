//! Round settlement
//!
//! Runs when the action queue empties: barbarian raids first (so provinces
//! annexed in the round just ended are already exposed), then budget reset,
//! economic settlement with recruitment or disbandment, and finally the
//! queue rebuild that opens the next round.

use rand::Rng;

use crate::army::{roman_label, Unit};
use crate::game::events::EventKind;
use crate::game::session::GameSession;
use crate::game::{movement, raids};

/// Settle the round and advance the year
pub fn settle_round<R: Rng>(session: &mut GameSession<R>) {
    raids::run_raids(session);

    // Restore movement budgets and total the army's upkeep
    let mut upkeep: i64 = 0;
    let move_budget = session.config.move_budget;
    for id in session.army.iter().collect::<Vec<_>>() {
        if let Some(state) = session.arena.get_mut(id).and_then(|u| u.legion_state_mut()) {
            state.move_count = move_budget;
            upkeep += state.upkeep;
        }
    }

    session.taxes = session.total_tax();

    let free = session.taxes - upkeep;
    if free < 0 {
        disband_newest(session);
    } else if free >= session.config.recruit_threshold {
        recruit_legion(session);
    }

    session.army_move = session.army.iter().collect();
    session.year += 1;

    session.events.add_event(
        EventKind::RoundSettled {
            year: session.year,
            taxes: session.taxes,
            upkeep,
        },
        session.year,
    );
    tracing::info!(
        year = session.year,
        taxes = session.taxes,
        upkeep,
        legions = session.army.len(),
        provinces = session.provinces.len(),
        "round settled"
    );
}

/// The treasury cannot pay everyone: the most recently added legion is
/// disbanded, deterministically and without player choice.
fn disband_newest<R: Rng>(session: &mut GameSession<R>) {
    let Some(id) = session.army.pop_last() else {
        return;
    };

    let removed = session.arena.remove(id);
    if let Some(unit) = &removed {
        if let Some(location) = session.grid.location_mut(unit.pos) {
            location.detach(id);
        }
    }

    session
        .events
        .add_event(EventKind::LegionDisbanded { unit: id }, session.year);
    tracing::info!(unit = id.0, "legion disbanded for lack of funds");

    // Disbanding the Emperor leaves a transient zero-Emperor state that
    // succession resolves before control returns
    let was_emperor = removed.is_some_and(|u| u.is_emperor());
    if was_emperor && !session.army.is_empty() {
        movement::crown_successor(session);
    }
}

/// Surplus covers another legion: recruit one at the capital
fn recruit_legion<R: Rng>(session: &mut GameSession<R>) {
    let Some(capital_pos) = session.capital.and_then(|id| session.arena.get(id)).map(|u| u.pos)
    else {
        return;
    };

    let id = session.arena.next_id();
    let label = roman_label(session.army.len() as u32 + 1);
    session.arena.insert(Unit::legion(
        id,
        label,
        capital_pos,
        session.config.move_budget,
        session.config.legion_upkeep,
    ));
    session.station(id, capital_pos);
    session.army.push(id);

    session.events.add_event(
        EventKind::LegionRecruited {
            unit: id,
            pos: capital_pos,
        },
        session.year,
    );
    tracing::info!(unit = id.0, "legion recruited at the capital");
}
