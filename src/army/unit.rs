//! Unit - mobile and static game objects stationed on the grid
//!
//! The Emperor is an ordinary legion carrying a role flag, not a separate
//! kind of object: death strips the flag and succession pins it on another
//! legion without the unit losing its identity.

use serde::{Deserialize, Serialize};

use crate::core::types::{GeoPos, UnitId};

/// Role held by a legion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Legion,
    Emperor,
}

/// Mutable combat state of a legion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegionState {
    pub role: Role,
    /// Remaining movement budget this round
    pub move_count: u32,
    /// Yearly upkeep deducted at settlement
    pub upkeep: i64,
    /// Battles survived since the last death
    pub experience: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    Legion(LegionState),
    /// Immobile capital marker; raises the base tax
    Capital { tax: i64 },
}

/// A game object stationed in exactly one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    /// Display label, Roman numeral for legions
    pub label: String,
    /// A province with at least one protecting unit cannot be raided
    pub protects: bool,
    pub pos: GeoPos,
    pub kind: UnitKind,
}

impl Unit {
    pub fn legion(id: UnitId, label: String, pos: GeoPos, move_budget: u32, upkeep: i64) -> Self {
        Self {
            id,
            label,
            protects: true,
            pos,
            kind: UnitKind::Legion(LegionState {
                role: Role::Legion,
                move_count: move_budget,
                upkeep,
                experience: 0,
            }),
        }
    }

    pub fn capital(id: UnitId, pos: GeoPos, tax: i64) -> Self {
        Self {
            id,
            label: "Capital".to_string(),
            protects: true,
            pos,
            kind: UnitKind::Capital { tax },
        }
    }

    pub fn legion_state(&self) -> Option<&LegionState> {
        match &self.kind {
            UnitKind::Legion(state) => Some(state),
            UnitKind::Capital { .. } => None,
        }
    }

    pub fn legion_state_mut(&mut self) -> Option<&mut LegionState> {
        match &mut self.kind {
            UnitKind::Legion(state) => Some(state),
            UnitKind::Capital { .. } => None,
        }
    }

    pub fn is_emperor(&self) -> bool {
        matches!(
            self.kind,
            UnitKind::Legion(LegionState {
                role: Role::Emperor,
                ..
            })
        )
    }
}

/// Roman numeral label for the `n`-th recruited legion, `n >= 1`
pub fn roman_label(n: u32) -> String {
    const VALUES: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut n = n;
    let mut out = String::new();
    for (value, digits) in VALUES {
        while n >= value {
            out.push_str(digits);
            n -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman_labels() {
        assert_eq!(roman_label(1), "I");
        assert_eq!(roman_label(4), "IV");
        assert_eq!(roman_label(9), "IX");
        assert_eq!(roman_label(14), "XIV");
        assert_eq!(roman_label(40), "XL");
        assert_eq!(roman_label(1987), "MCMLXXXVII");
    }

    #[test]
    fn test_emperor_is_a_role_not_a_kind() {
        let mut unit = Unit::legion(UnitId(1), "I".into(), GeoPos::new(1, 1), 1, 5);
        assert!(!unit.is_emperor());

        unit.legion_state_mut().unwrap().role = Role::Emperor;
        assert!(unit.is_emperor());

        // Demotion keeps the same unit
        unit.legion_state_mut().unwrap().role = Role::Legion;
        assert!(!unit.is_emperor());
        assert_eq!(unit.id, UnitId(1));
    }

    #[test]
    fn test_capital_has_no_legion_state() {
        let capital = Unit::capital(UnitId(2), GeoPos::new(3, 3), 4);
        assert!(capital.legion_state().is_none());
        assert!(capital.protects);
    }
}
