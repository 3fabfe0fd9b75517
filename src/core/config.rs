//! Game configuration with documented constants
//!
//! All tuning numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};

/// Configuration for a game session
///
/// The defaults reproduce the classic balance: a lone Emperor on a fresh
/// capital breaks exactly even (capital tax 4 + province tax 1 = upkeep 5),
/// so the army neither grows nor shrinks until territory changes hands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Movement budget restored to every legion at the start of a round
    ///
    /// At 1, each legion takes exactly one paid step per round. The Emperor
    /// stretches this further because marches through owned territory are
    /// free for him.
    pub move_budget: u32,

    /// Yearly upkeep per legion, deducted from taxes at settlement
    pub legion_upkeep: i64,

    /// Tax raised by the capital marker each year
    pub capital_tax: i64,

    /// Tax raised by each owned province each year
    pub province_tax: i64,

    /// Surplus required before a new legion is recruited
    ///
    /// Recruitment happens when `taxes - upkeep >= recruit_threshold`. Set
    /// equal to `legion_upkeep` so a recruit never immediately bankrupts
    /// the treasury it was hired from.
    pub recruit_threshold: i64,

    /// Probability that a legion dies when it conquers a hostile cell
    pub battle_death_chance: f64,

    /// Probability, per eligible bordering land, that an undefended
    /// province is raided during settlement
    pub raid_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            move_budget: 1,
            legion_upkeep: 5,
            capital_tax: 4,
            province_tax: 1,
            recruit_threshold: 5,
            battle_death_chance: 0.25,
            raid_chance: 0.05,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a TOML document, falling back to defaults for
    /// missing keys, then validate it.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.move_budget == 0 {
            return Err(GameError::InvalidConfig(
                "move_budget must be at least 1".into(),
            ));
        }

        if self.province_tax < 1 {
            return Err(GameError::InvalidConfig(format!(
                "province_tax ({}) must be at least 1",
                self.province_tax
            )));
        }

        if !(0.0..=1.0).contains(&self.battle_death_chance) {
            return Err(GameError::InvalidConfig(format!(
                "battle_death_chance ({}) must be within [0, 1]",
                self.battle_death_chance
            )));
        }

        if !(0.0..=1.0).contains(&self.raid_chance) {
            return Err(GameError::InvalidConfig(format!(
                "raid_chance ({}) must be within [0, 1]",
                self.raid_chance
            )));
        }

        Ok(())
    }
}
