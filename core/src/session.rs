use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

pub const STARTING_LIVES: u8 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Solved,
    GameOver,
}

impl SessionState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Solved | Self::GameOver)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Gameplay state machine for one picture.
///
/// Pointer-down opens a gesture and settles the anchor cell, pointer-move
/// settles every unknown cell entered while the gesture is live, pointer-up
/// closes the gesture. Each settle commits immediately: a correct guess
/// stays, a wrong one writes the solution's truth and spends a life.
/// `Solved` and `GameOver` are terminal; only [`PlaySession::reset`] or
/// [`PlaySession::replace_solution`] leave them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaySession {
    solution: SolutionGrid,
    hints: HintSet,
    board: Array2<CellMark>,
    placed_count: Saturating<CellCount>,
    lives: Saturating<u8>,
    state: SessionState,
    mode: InputMode,
    #[serde(skip)]
    gesture: Option<Gesture>,
}

impl PlaySession {
    pub fn new(solution: SolutionGrid) -> Self {
        let hints = HintSet::compute(&solution);
        let board = Array2::default(solution.size().to_nd_index());
        Self {
            solution,
            hints,
            board,
            placed_count: Saturating(0),
            lives: Saturating(STARTING_LIVES),
            state: Default::default(),
            mode: Default::default(),
            gesture: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.solution.size()
    }

    pub fn lives(&self) -> u8 {
        self.lives.0
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn hints(&self) -> &HintSet {
        &self.hints
    }

    pub fn solution(&self) -> &SolutionGrid {
        &self.solution
    }

    pub fn cell_at(&self, coords: Coord2) -> CellMark {
        self.board[coords.to_nd_index()]
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Cells still to paint before the picture is complete.
    pub fn remaining_count(&self) -> CellCount {
        self.solution.filled_count() - self.placed_count.0
    }

    pub fn pointer_down(&mut self, coords: Coord2, button: PointerButton) -> Result<PlayOutcome> {
        let coords = self.solution.validate_coords(coords)?;

        if !self.state.is_playing() || self.cell_at(coords).is_settled() {
            return Ok(PlayOutcome::NoChange);
        }

        log::trace!("Gesture opened at {:?} with {:?}", coords, button);
        self.gesture = Some(Gesture::open(coords, button));
        let intent = self.mode.intent_for(button);
        Ok(self.settle_cell(coords, intent))
    }

    pub fn pointer_move(&mut self, coords: Coord2) -> Result<PlayOutcome> {
        let coords = self.solution.validate_coords(coords)?;

        let Some(gesture) = &self.gesture else {
            return Ok(PlayOutcome::NoChange);
        };
        if !self.state.is_playing() || self.cell_at(coords).is_settled() {
            return Ok(PlayOutcome::NoChange);
        }

        let intent = self.mode.intent_for(gesture.button());
        Ok(self.settle_cell(coords, intent))
    }

    /// Valid anywhere, any time; the board never changes here. Returns the
    /// finished gesture, or `None` when no press was in flight.
    pub fn pointer_up(&mut self) -> Option<Gesture> {
        let gesture = self.gesture.take();
        if let Some(gesture) = &gesture {
            log::trace!(
                "Gesture finished: {} placed, mistake: {}",
                gesture.placed_count(),
                gesture.mistake_occurred()
            );
        }
        gesture
    }

    /// Rejected while a gesture is live: the held button keeps the meaning
    /// it had when the press started.
    pub fn set_mode(&mut self, mode: InputMode) -> ModeOutcome {
        if self.mode == mode {
            return ModeOutcome::NoChange;
        }
        if self.gesture.is_some() {
            return ModeOutcome::Blocked;
        }

        log::debug!("Input mode set to {:?}", mode);
        self.mode = mode;
        ModeOutcome::Changed
    }

    /// Back to the freshly constructed state; the solution and its hints
    /// stay as they are.
    pub fn reset(&mut self) {
        log::debug!("Session reset");
        self.board = Array2::default(self.solution.size().to_nd_index());
        self.placed_count = Saturating(0);
        self.lives = Saturating(STARTING_LIVES);
        self.state = Default::default();
        self.mode = Default::default();
        self.gesture = None;
    }

    /// Swaps in a new picture, recomputes the hints, and resets play.
    pub fn replace_solution(&mut self, solution: SolutionGrid) {
        self.hints = HintSet::compute(&solution);
        self.solution = solution;
        self.reset();
    }

    fn settle_cell(&mut self, coords: Coord2, intent: Intent) -> PlayOutcome {
        // caller guarantees: state Playing, coords valid, cell Unknown
        let truth = self.solution.is_filled(coords);
        let mistake = matches!(intent, Intent::Fill) != truth;

        // the losing guess still settles the cell with the solution's truth
        self.board[coords.to_nd_index()] = if truth {
            CellMark::Filled
        } else {
            CellMark::Crossed
        };
        if truth {
            self.placed_count += 1;
        }

        if mistake {
            self.lives -= 1;
            log::debug!("Mistake at {:?}, lives left: {}", coords, self.lives.0);
            if let Some(gesture) = &mut self.gesture {
                gesture.record_mistake();
            }
        } else if let Some(gesture) = &mut self.gesture {
            gesture.record_placement(coords);
        }

        // running out of lives wins the tie against completing the picture
        if self.lives.0 == 0 {
            self.state = SessionState::GameOver;
            log::debug!("Out of lives, game over");
            return PlayOutcome::GameOver;
        }
        if self.placed_count == Saturating(self.solution.filled_count()) {
            self.state = SessionState::Solved;
            log::debug!("Picture completed");
            return PlayOutcome::Solved;
        }

        if mistake {
            PlayOutcome::Mistake
        } else {
            PlayOutcome::Placed
        }
    }
}
