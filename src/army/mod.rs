//! Army model: units, the id arena, and the ordered legion roster

pub mod roster;
pub mod unit;

pub use roster::{promote_successor, Army, UnitArena};
pub use unit::{roman_label, LegionState, Role, Unit, UnitKind};
