use serde::{Deserialize, Serialize};
use thiserror::Error;

use pikurosu_core::{Color, Coord, Coord2, GameError, SolutionCell, SolutionGrid};

pub use store::*;

mod store;

/// Storage-side identifier for a saved puzzle.
pub type PuzzleId = u32;

/// Grid sizes the authoring screen offers. Advisory only: the engine takes
/// any size from 1 up to `Coord::MAX` per axis.
pub const AUTHOR_SIZES: [Coord; 5] = [5, 10, 15, 20, 25];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Puzzle {0} not found")]
    NotFound(PuzzleId),
    #[error("Invalid puzzle: {0}")]
    Validation(&'static str),
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error(transparent)]
    Grid(#[from] GameError),
}

pub type Result<T> = core::result::Result<T, StoreError>;

/// One row of the puzzle listing. `size` is the row count of the stored
/// grid; authored puzzles are square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSummary {
    pub id: PuzzleId,
    pub name: String,
    pub size: Coord,
}

/// One cell of a stored puzzle as served over the wire: flat records in no
/// particular order, empty cells optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub x: Coord,
    pub y: Coord,
    pub filled: bool,
    pub color: Color,
}

/// A puzzle as authored: the painted color where the picture has ink,
/// `None` where it is background.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPuzzle {
    pub name: String,
    pub background: Color,
    pub rows: Vec<Vec<Option<Color>>>,
}

/// Read side of puzzle storage. Picking which puzzle to play is the
/// caller's business; `list` only supplies the candidates.
pub trait PuzzleRepository {
    fn list(&self) -> Result<Vec<PuzzleSummary>>;
    fn get(&self, id: PuzzleId) -> Result<SolutionGrid>;
}

/// Write side of puzzle storage: accepts newly authored puzzles.
pub trait PuzzleAuthoringSink {
    fn save(&mut self, puzzle: NewPuzzle) -> Result<PuzzleId>;
}

impl PuzzleSummary {
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        serde_json::from_str(json).map_err(|err| StoreError::Transport(err.to_string()))
    }
}

impl CellRecord {
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        serde_json::from_str(json).map_err(|err| StoreError::Transport(err.to_string()))
    }
}

impl NewPuzzle {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn painted_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Authored content is trusted as given; only the checks that keep the
    /// store coherent run here.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation("name must not be blank"));
        }
        if self.height() == 0 || self.width() == 0 {
            return Err(StoreError::Validation("drawing must not be empty"));
        }
        if self.rows.iter().any(|row| row.len() != self.width()) {
            return Err(StoreError::Validation("rows must form a rectangle"));
        }
        if self.width() > Coord::MAX as usize || self.height() > Coord::MAX as usize {
            return Err(StoreError::Validation("drawing is too large"));
        }
        if self.painted_count() == 0 {
            return Err(StoreError::Validation("drawing has no painted cells"));
        }
        Ok(())
    }

    pub fn to_solution(&self) -> Result<SolutionGrid> {
        self.validate()?;
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(color) => SolutionCell::new(true, color.clone()),
                        None => SolutionCell::new(false, self.background.clone()),
                    })
                    .collect()
            })
            .collect();
        Ok(SolutionGrid::from_rows(rows)?)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| StoreError::Transport(err.to_string()))
    }
}

/// Assembles the flat cell listing of one puzzle into a solution grid.
/// Cells without a record stay empty with the background color; records
/// outside `size` are rejected.
pub fn grid_from_records(
    size: Coord2,
    background: &str,
    records: &[CellRecord],
) -> Result<SolutionGrid> {
    if size.0 == 0 || size.1 == 0 {
        return Err(StoreError::Validation("size must be at least 1x1"));
    }

    let mut rows: Vec<Vec<SolutionCell>> = (0..size.1)
        .map(|_| {
            (0..size.0)
                .map(|_| SolutionCell::new(false, background.into()))
                .collect()
        })
        .collect();

    for record in records {
        if record.x >= size.0 || record.y >= size.1 {
            return Err(StoreError::Validation("cell record outside the grid"));
        }
        rows[record.y as usize][record.x as usize] =
            SolutionCell::new(record.filled, record.color.clone());
    }

    Ok(SolutionGrid::from_rows(rows)?)
}
