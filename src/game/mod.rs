//! Game state machine
//!
//! Command processing, round sequencing, combat and succession, economic
//! settlement and the barbarian raid process, all driven through one
//! [`GameSession`].

pub mod events;
pub mod movement;
pub mod raids;
pub mod round;
pub mod session;

pub use events::{Event, EventKind, EventLog};
pub use movement::step_toward;
pub use session::{GameSession, LegionSnapshot, Snapshot};
