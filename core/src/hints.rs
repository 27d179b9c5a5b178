use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Length of one run of consecutive filled cells within a line.
pub type HintRun = u8;

/// Hint runs for a single row or column, in scan order. A line of length N
/// holds at most (N + 1) / 2 runs; the inline capacity covers lines up to
/// 16 cells without allocating.
pub type HintLine = SmallVec<[HintRun; 8]>;

/// Run-length clues for every line of a solution, rows top to bottom and
/// columns left to right. Lines without a single filled cell clue as `[0]`,
/// never as an empty list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintSet {
    row_hints: Vec<HintLine>,
    col_hints: Vec<HintLine>,
}

impl HintSet {
    /// Derives the clues for `grid`. Pure: equal grids produce equal sets.
    pub fn compute(grid: &SolutionGrid) -> Self {
        let (width, height) = grid.size();
        let row_hints = (0..height)
            .map(|y| scan_line((0..width).map(|x| grid.is_filled((x, y)))))
            .collect();
        let col_hints = (0..width)
            .map(|x| scan_line((0..height).map(|y| grid.is_filled((x, y)))))
            .collect();
        Self {
            row_hints,
            col_hints,
        }
    }

    pub fn row(&self, y: Coord) -> &[HintRun] {
        &self.row_hints[y as usize]
    }

    pub fn col(&self, x: Coord) -> &[HintRun] {
        &self.col_hints[x as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[HintRun]> {
        self.row_hints.iter().map(|line| line.as_slice())
    }

    pub fn cols(&self) -> impl Iterator<Item = &[HintRun]> {
        self.col_hints.iter().map(|line| line.as_slice())
    }

    /// Widest row clue, in runs. Renderers size the left hint band with this.
    pub fn max_row_runs(&self) -> usize {
        self.row_hints.iter().map(SmallVec::len).max().unwrap_or(0)
    }

    /// Tallest column clue, in runs. Renderers size the top hint band with this.
    pub fn max_col_runs(&self) -> usize {
        self.col_hints.iter().map(SmallVec::len).max().unwrap_or(0)
    }
}

fn scan_line(cells: impl Iterator<Item = bool>) -> HintLine {
    let mut runs = HintLine::new();
    let mut current: HintRun = 0;

    for filled in cells {
        if filled {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    if runs.is_empty() {
        runs.push(0);
    }
    runs
}
