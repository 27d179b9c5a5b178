use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::*;

/// In-process puzzle storage for tests and hosts that bundle their own
/// puzzles. Ids are handed out sequentially from 1; listing order is
/// stable, ascending by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    puzzles: BTreeMap<PuzzleId, NewPuzzle>,
    next_id: PuzzleId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            puzzles: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl PuzzleRepository for MemoryStore {
    fn list(&self) -> Result<Vec<PuzzleSummary>> {
        Ok(self
            .puzzles
            .iter()
            .map(|(&id, puzzle)| PuzzleSummary {
                id,
                name: puzzle.name.clone(),
                // height fits Coord: save() bounds every drawing
                size: puzzle.height().try_into().unwrap(),
            })
            .collect())
    }

    fn get(&self, id: PuzzleId) -> Result<SolutionGrid> {
        let puzzle = self.puzzles.get(&id).ok_or(StoreError::NotFound(id))?;
        log::trace!("Serving puzzle {} ({:?})", id, puzzle.name);
        puzzle.to_solution()
    }
}

impl PuzzleAuthoringSink for MemoryStore {
    fn save(&mut self, puzzle: NewPuzzle) -> Result<PuzzleId> {
        puzzle.validate()?;

        let id = self.next_id;
        self.next_id += 1;
        log::debug!("Saved puzzle {:?} as id {}", puzzle.name, id);
        self.puzzles.insert(id, puzzle);
        Ok(id)
    }
}
