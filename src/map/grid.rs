//! Grid - fixed rectangular cell arena
//!
//! Cells are stored row-major and addressed by 1-indexed [`GeoPos`]
//! coordinates. Every cell holds exactly one location at all times;
//! replacing a location migrates the stationed units in the same operation.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::types::GeoPos;
use crate::map::location::{Location, LocationKind};

/// A single grid slot: its coordinate and the location it holds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub pos: GeoPos,
    pub location: Location,
}

/// The game map: `cols × rows` cells in row-major order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    cols: i32,
    rows: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from a rectangular character matrix, rows top to bottom.
    ///
    /// Recognized characters: `L` for unclaimed land, `O` for water; any
    /// other character becomes an impassable neutral placeholder.
    pub fn from_char_map(char_map: &[&str]) -> Result<Self> {
        if char_map.is_empty() || char_map[0].is_empty() {
            return Err(GameError::EmptyMap);
        }

        let cols = char_map[0].chars().count();
        let mut cells = Vec::with_capacity(cols * char_map.len());

        for (row_idx, row) in char_map.iter().enumerate() {
            let got = row.chars().count();
            if got != cols {
                return Err(GameError::RaggedMap {
                    row: row_idx + 1,
                    expected: cols,
                    got,
                });
            }

            for (col_idx, ch) in row.chars().enumerate() {
                let kind = match ch {
                    'L' => LocationKind::Unclaimed,
                    'O' => LocationKind::Water,
                    _ => LocationKind::Neutral,
                };
                cells.push(Cell {
                    pos: GeoPos::new(col_idx as i32 + 1, row_idx as i32 + 1),
                    location: Location::new(kind),
                });
            }
        }

        Ok(Self {
            cols: cols as i32,
            rows: char_map.len() as i32,
            cells,
        })
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    fn index(&self, pos: GeoPos) -> Option<usize> {
        if pos.x < 1 || pos.x > self.cols || pos.y < 1 || pos.y > self.rows {
            return None;
        }
        Some(((pos.y - 1) * self.cols + (pos.x - 1)) as usize)
    }

    /// Bounds-checked cell lookup
    pub fn cell(&self, pos: GeoPos) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, pos: GeoPos) -> Option<&mut Cell> {
        self.index(pos).map(move |i| &mut self.cells[i])
    }

    /// Shorthand for the location at `pos`
    pub fn location(&self, pos: GeoPos) -> Option<&Location> {
        self.cell(pos).map(|c| &c.location)
    }

    pub fn location_mut(&mut self, pos: GeoPos) -> Option<&mut Location> {
        self.cell_mut(pos).map(|c| &mut c.location)
    }

    /// Replace the location at `pos` with a fresh one of `kind`, migrating
    /// every stationed unit to the replacement. The old location is gone
    /// and the new one installed in a single operation.
    pub fn replace_location(&mut self, pos: GeoPos, kind: LocationKind) {
        if let Some(cell) = self.cell_mut(pos) {
            let units = std::mem::take(&mut cell.location.units);
            cell.location = Location { kind, units };
        }
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::UnitId;

    #[test]
    fn test_char_map_build() {
        let grid = Grid::from_char_map(&["LOL", "LLL"]).unwrap();
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(
            grid.location(GeoPos::new(2, 1)).unwrap().kind,
            LocationKind::Water
        );
        assert_eq!(
            grid.location(GeoPos::new(1, 2)).unwrap().kind,
            LocationKind::Unclaimed
        );
    }

    #[test]
    fn test_unrecognized_char_is_neutral() {
        let grid = Grid::from_char_map(&["LX"]).unwrap();
        assert_eq!(
            grid.location(GeoPos::new(2, 1)).unwrap().kind,
            LocationKind::Neutral
        );
    }

    #[test]
    fn test_empty_map_rejected() {
        assert!(matches!(Grid::from_char_map(&[]), Err(GameError::EmptyMap)));
        assert!(matches!(
            Grid::from_char_map(&[""]),
            Err(GameError::EmptyMap)
        ));
    }

    #[test]
    fn test_ragged_map_rejected() {
        let err = Grid::from_char_map(&["LLL", "LL"]).unwrap_err();
        assert!(matches!(
            err,
            GameError::RaggedMap {
                row: 2,
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_bounds_checked_lookup() {
        let grid = Grid::from_char_map(&["LL", "LL"]).unwrap();
        assert!(grid.cell(GeoPos::new(0, 1)).is_none());
        assert!(grid.cell(GeoPos::new(1, 0)).is_none());
        assert!(grid.cell(GeoPos::new(3, 1)).is_none());
        assert!(grid.cell(GeoPos::new(1, 3)).is_none());
        assert!(grid.cell(GeoPos::new(2, 2)).is_some());
    }

    #[test]
    fn test_replace_location_migrates_units() {
        let mut grid = Grid::from_char_map(&["L"]).unwrap();
        let pos = GeoPos::new(1, 1);
        grid.location_mut(pos).unwrap().attach(UnitId(1));
        grid.location_mut(pos).unwrap().attach(UnitId(2));

        grid.replace_location(pos, LocationKind::Province { tax: 1 });

        let location = grid.location(pos).unwrap();
        assert!(location.kind.is_province());
        assert_eq!(location.units, vec![UnitId(1), UnitId(2)]);
    }
}
