//! Aquila - Demo Entry Point
//!
//! Plays a seeded, scripted campaign on the classic 20x17 map and prints
//! the final state snapshot as JSON. The real consumers of this crate are
//! presentation layers driving [`GameSession`] directly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use aquila::core::config::GameConfig;
use aquila::core::error::Result;
use aquila::core::types::GeoPos;
use aquila::game::events::EventKind;
use aquila::game::session::GameSession;

const CAMPAIGN_MAP: [&str; 17] = [
    "LOLLLLLLLLLLLLLLLLLL",
    "LLLLLLLLLLLLLLLOLLLL",
    "LLLOOLLLLLLLLLOOOLLL",
    "LLLOLLLLLLLLLLLLOOLL",
    "LLOOLLOLLLLLLLLLLLLL",
    "LOOLLLOLLLLLLLLLLLLL",
    "LLOLLOOOLLLLLLLLLLLL",
    "LLLLLLLLLLLLLLLLOLLL",
    "LLLLLLLLLLLLLLLOOLLL",
    "LLLLLLLLLLLLLOOLLLLL",
    "LLLLLLLLOOOOOOOOOOOO",
    "LLLLLLLLLOOOOLLLLLLL",
    "LLLLLLLLLLLOOLLLLLLL",
    "LLLLLLLLLLLLLLLLLLLL",
    "LLLLLLLLLLLLLLLLLLLL",
    "LLOLLOOOLLLLLLLLLLLL",
    "LLLLOOOOOOOOOOOOOOOO",
];

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "aquila=info".to_string()),
        )
        .init();

    let seed = std::env::var("AQUILA_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(12345u64);

    tracing::info!(seed, "Aquila starting");

    let mut session = GameSession::from_seed(GameConfig::default(), &CAMPAIGN_MAP, seed)?;
    session.found_capital(GeoPos::new(3, 16))?;

    // Scripted campaign: each command sends the active legion toward a
    // random point of the map
    let mut director = ChaCha8Rng::seed_from_u64(seed ^ 0xA401_71A5);
    for _ in 0..400 {
        let target = GeoPos::new(
            director.gen_range(1..=session.grid.cols()),
            director.gen_range(1..=session.grid.rows()),
        );
        session.submit_move(target)?;

        for event in session.drain_events() {
            if let EventKind::RaidTriggered { from, to } = event.kind {
                tracing::info!(
                    year = event.year,
                    from = ?(from.x, from.y),
                    to = ?(to.x, to.y),
                    "raid committed, animation due"
                );
            }
        }
    }

    let snapshot = session.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    tracing::info!(
        year = snapshot.year,
        provinces = snapshot.provinces.len(),
        legions = snapshot.army.len(),
        "campaign finished"
    );
    Ok(())
}
