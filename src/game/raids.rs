//! Barbarian raid process
//!
//! Each settlement pass scans the territory ledger in annexation order. An
//! undefended province draws one chance per raid-eligible neighbor, in the
//! fixed north-east-south-west order; the first triggering neighbor wins
//! and the rest are skipped. The reversion is committed synchronously; the
//! emitted event lets the presentation layer animate the attack afterwards.

use rand::Rng;

use crate::game::events::EventKind;
use crate::game::session::GameSession;

/// Run one raid pass over all owned provinces
pub fn run_raids<R: Rng>(session: &mut GameSession<R>) {
    let ledger: Vec<_> = session.provinces.clone();

    for pos in ledger {
        let Some(location) = session.grid.location(pos) else {
            continue;
        };
        if !location.kind.is_province() {
            continue;
        }

        let protected = location
            .units
            .iter()
            .any(|&id| session.arena.get(id).is_some_and(|u| u.protects));
        if protected {
            continue;
        }

        for neighbor in pos.neighbors() {
            let eligible = session
                .grid
                .location(neighbor)
                .is_some_and(|l| l.kind.raid_eligible());
            if !eligible {
                continue;
            }

            let roll: f64 = session.rng.gen();
            if roll < session.config.raid_chance {
                session.revert_to_land(pos);
                session.events.add_event(
                    EventKind::RaidTriggered {
                        from: neighbor,
                        to: pos,
                    },
                    session.year,
                );
                tracing::info!(
                    from_x = neighbor.x,
                    from_y = neighbor.y,
                    to_x = pos.x,
                    to_y = pos.y,
                    "barbarian raid: province reverts to unclaimed land"
                );
                break;
            }
        }
    }
}
