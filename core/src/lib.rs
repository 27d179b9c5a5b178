#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use gesture::*;
pub use hints::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod gesture;
mod hints;
mod session;
mod types;

/// RGB-ish color string as authored, e.g. `"#1a2b3c"`. Opaque to the engine.
pub type Color = String;

pub const DEFAULT_FILL_COLOR: &str = "#000000";
pub const DEFAULT_EMPTY_COLOR: &str = "#ffffff";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionCell {
    pub filled: bool,
    pub color: Color,
}

impl SolutionCell {
    pub const fn new(filled: bool, color: Color) -> Self {
        Self { filled, color }
    }
}

impl Default for SolutionCell {
    fn default() -> Self {
        Self::new(false, Color::new())
    }
}

/// The hidden picture a session is played against. Immutable once built;
/// swapping puzzles goes through [`PlaySession::replace_solution`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolutionGrid {
    cells: Array2<SolutionCell>,
    filled_count: CellCount,
}

impl SolutionGrid {
    pub fn from_cells(cells: Array2<SolutionCell>) -> Result<Self> {
        let (width, height) = cells.dim();
        if width == 0 || height == 0 {
            return Err(GameError::InvalidGridShape);
        }
        if width > Coord::MAX as usize || height > Coord::MAX as usize {
            return Err(GameError::InvalidGridShape);
        }

        let filled_count = cells
            .iter()
            .filter(|cell| cell.filled)
            .count()
            .try_into()
            .unwrap();
        Ok(Self {
            cells,
            filled_count,
        })
    }

    /// Builds a grid from row-major rows, top to bottom. Ragged or empty
    /// input is rejected as [`GameError::InvalidGridShape`].
    pub fn from_rows(rows: Vec<Vec<SolutionCell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(GameError::InvalidGridShape);
        }
        if height == 0
            || width == 0
            || width > Coord::MAX as usize
            || height > Coord::MAX as usize
        {
            return Err(GameError::InvalidGridShape);
        }

        let cells = Array2::from_shape_fn((width, height), |(x, y)| rows[y][x].clone());
        Self::from_cells(cells)
    }

    /// Monochrome helper: the listed cells are filled with the default ink,
    /// everything else stays empty.
    pub fn from_filled_coords(size: Coord2, filled: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidGridShape);
        }

        let mut mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in filled {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mask[coords.to_nd_index()] = true;
        }

        let cells = mask.mapv(|filled| {
            let color = if filled {
                DEFAULT_FILL_COLOR
            } else {
                DEFAULT_EMPTY_COLOR
            };
            SolutionCell::new(filled, color.into())
        });
        Self::from_cells(cells)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn filled_count(&self) -> CellCount {
        self.filled_count
    }

    pub fn is_filled(&self, coords: Coord2) -> bool {
        self[coords].filled
    }

    pub fn color_at(&self, coords: Coord2) -> &Color {
        &self[coords].color
    }
}

impl Index<Coord2> for SolutionGrid {
    type Output = SolutionCell;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cells[(x as usize, y as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ModeOutcome {
    NoChange,
    Changed,
    Blocked,
}

impl ModeOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
            Self::Blocked => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlayOutcome {
    NoChange,
    Placed,
    Mistake,
    Solved,
    GameOver,
}

impl PlayOutcome {
    pub const fn has_update(self) -> bool {
        use PlayOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Mistake => true,
            Solved => true,
            GameOver => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![
            vec![SolutionCell::default(), SolutionCell::default()],
            vec![SolutionCell::default()],
        ];

        assert_eq!(SolutionGrid::from_rows(rows), Err(GameError::InvalidGridShape));
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert_eq!(
            SolutionGrid::from_rows(Vec::new()),
            Err(GameError::InvalidGridShape)
        );
        assert_eq!(
            SolutionGrid::from_rows(vec![Vec::new()]),
            Err(GameError::InvalidGridShape)
        );
    }

    #[test]
    fn from_filled_coords_rejects_outside_cells() {
        assert_eq!(
            SolutionGrid::from_filled_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn from_rows_maps_row_major_input_to_xy_coords() {
        let ink = SolutionCell::new(true, DEFAULT_FILL_COLOR.into());
        let blank = SolutionCell::new(false, DEFAULT_EMPTY_COLOR.into());
        // 3 wide, 2 tall; only the top-right cell is filled
        let rows = vec![
            vec![blank.clone(), blank.clone(), ink.clone()],
            vec![blank.clone(), blank.clone(), blank.clone()],
        ];

        let grid = SolutionGrid::from_rows(rows).unwrap();

        assert_eq!(grid.size(), (3, 2));
        assert_eq!(grid.filled_count(), 1);
        assert!(grid.is_filled((2, 0)));
        assert!(!grid.is_filled((2, 1)));
    }

    #[test]
    fn filled_count_matches_listed_coords() {
        let grid = SolutionGrid::from_filled_coords((4, 3), &[(0, 0), (3, 2), (1, 1)]).unwrap();

        assert_eq!(grid.total_cells(), 12);
        assert_eq!(grid.filled_count(), 3);
        assert_eq!(grid.color_at((0, 0)), DEFAULT_FILL_COLOR);
        assert_eq!(grid.color_at((0, 1)), DEFAULT_EMPTY_COLOR);
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let grid = SolutionGrid::from_filled_coords((3, 2), &[(0, 0)]).unwrap();

        assert_eq!(grid.validate_coords((2, 1)), Ok((2, 1)));
        assert_eq!(grid.validate_coords((3, 0)), Err(GameError::OutOfBounds));
        assert_eq!(grid.validate_coords((0, 2)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn outcome_predicates_flag_renderable_changes() {
        assert!(!PlayOutcome::NoChange.has_update());
        assert!(PlayOutcome::Placed.has_update());
        assert!(PlayOutcome::Mistake.has_update());
        assert!(PlayOutcome::GameOver.is_terminal());
        assert!(!PlayOutcome::Mistake.is_terminal());
        assert!(ModeOutcome::Changed.has_update());
        assert!(!ModeOutcome::Blocked.has_update());
    }
}
