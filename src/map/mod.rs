//! Map model: the cell grid and per-cell territory state

pub mod grid;
pub mod location;

pub use grid::{Cell, Grid};
pub use location::{Location, LocationKind};
