//! Movement and combat resolution
//!
//! One command moves the acting legion exactly one cell toward the target;
//! there is no multi-cell pathfinding. Entering hostile territory annexes
//! it and resolves the battle roll, which can kill the actor and trigger
//! Emperor succession.

use rand::Rng;

use crate::army::{promote_successor, Role};
use crate::core::types::{GeoPos, UnitId};
use crate::game::events::EventKind;
use crate::game::session::GameSession;

/// Greedy single-step destination toward `target`.
///
/// The axis with the larger remaining distance wins; ties go to the y axis.
/// Targeting the current cell yields the current cell.
pub fn step_toward(current: GeoPos, target: GeoPos) -> GeoPos {
    let dx = target.x - current.x;
    let dy = target.y - current.y;

    if dx.abs() > dy.abs() {
        GeoPos::new(current.x + dx.signum(), current.y)
    } else {
        GeoPos::new(current.x, current.y + dy.signum())
    }
}

/// Resolve one move command for `unit_id` toward `target`.
///
/// Out-of-grid or impassable destinations are absorbed without any state
/// change. A destination equal to the current cell forfeits the unit's
/// remaining budget for the round instead of looping in place.
pub fn resolve_move<R: Rng>(session: &mut GameSession<R>, unit_id: UnitId, target: GeoPos) {
    let Some(current) = session.arena.get(unit_id).map(|u| u.pos) else {
        return;
    };
    let dest = step_toward(current, target);

    let Some((can_go, hostile, cost)) = session
        .grid
        .location(dest)
        .map(|l| (l.kind.can_go(), l.kind.is_enemy(), l.kind.move_cost()))
    else {
        return;
    };
    if !can_go {
        return;
    }

    if dest == current {
        if let Some(state) = session.arena.get_mut(unit_id).and_then(|u| u.legion_state_mut()) {
            state.move_count = 0;
        }
        return;
    }

    // Atomic relocation: detach from the old location, attach to the new
    if let Some(location) = session.grid.location_mut(current) {
        location.detach(unit_id);
    }
    session.station(unit_id, dest);

    tracing::debug!(
        unit = unit_id.0,
        from_x = current.x,
        from_y = current.y,
        to_x = dest.x,
        to_y = dest.y,
        hostile,
        "legion moved"
    );

    if hostile {
        resolve_battle(session, unit_id, dest, cost);
    } else {
        // Marching through friendly territory is free for the Emperor
        let emperor = session.arena.get(unit_id).is_some_and(|u| u.is_emperor());
        if !emperor {
            deduct_cost(session, unit_id, cost);
        }
    }
}

/// Annex the conquered cell and roll for the actor's survival
fn resolve_battle<R: Rng>(session: &mut GameSession<R>, unit_id: UnitId, pos: GeoPos, cost: u32) {
    deduct_cost(session, unit_id, cost);
    session.annex(pos);
    session
        .events
        .add_event(EventKind::Annexed { unit: unit_id, pos }, session.year);

    let died = session.rng.gen::<f64>() < session.config.battle_death_chance;

    let mut was_emperor = false;
    if let Some(state) = session.arena.get_mut(unit_id).and_then(|u| u.legion_state_mut()) {
        if died {
            was_emperor = state.role == Role::Emperor;
            state.experience = 0;
            state.role = Role::Legion;
        } else {
            state.experience += 1;
        }
    }

    if died {
        session
            .events
            .add_event(EventKind::LegionDied { unit: unit_id, pos }, session.year);
        tracing::info!(unit = unit_id.0, x = pos.x, y = pos.y, "legion fell in battle");

        if was_emperor {
            crown_successor(session);
        }
    }
}

/// Re-establish the exactly-one-Emperor invariant after the role was lost
pub(crate) fn crown_successor<R: Rng>(session: &mut GameSession<R>) {
    if let Some(successor) = promote_successor(&session.army, &mut session.arena) {
        session
            .events
            .add_event(EventKind::EmperorCrowned { unit: successor }, session.year);
        tracing::info!(unit = successor.0, "succession: new emperor crowned");
    }
}

fn deduct_cost<R: Rng>(session: &mut GameSession<R>, unit_id: UnitId, cost: u32) {
    if let Some(state) = session.arena.get_mut(unit_id).and_then(|u| u.legion_state_mut()) {
        state.move_count = state.move_count.saturating_sub(cost);
    }
}
