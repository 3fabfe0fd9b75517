//! Aquila - Turn-Based Territorial Conquest Core

pub mod army;
pub mod core;
pub mod game;
pub mod map;
