use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Marking tool the player has selected.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputMode {
    Fill,
    Mark,
}

impl InputMode {
    /// Meaning of a button press under this mode: the secondary button is a
    /// mark shortcut while filling, and mark mode marks with either button.
    pub const fn intent_for(self, button: PointerButton) -> Intent {
        match (self, button) {
            (Self::Fill, PointerButton::Primary) => Intent::Fill,
            (Self::Fill, PointerButton::Secondary) => Intent::Mark,
            (Self::Mark, _) => Intent::Mark,
        }
    }
}

impl Default for InputMode {
    fn default() -> Self {
        Self::Fill
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Resolved meaning of a press: paint the cell, or cross it out as empty.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    Fill,
    Mark,
}

/// One press-drag-release interaction. Opened by pointer-down on a live
/// unknown cell, closed by pointer-up, and never serialized: a restored
/// session always starts with no gesture in flight.
///
/// The preview records, in traversal order, the cells this gesture settled
/// without a mistake. Mistakes only raise [`Gesture::mistake_occurred`]; the
/// board itself carries their crosses.
#[derive(Clone, Debug, PartialEq)]
pub struct Gesture {
    anchor: Coord2,
    button: PointerButton,
    preview: Vec<Coord2>,
    mistake_occurred: bool,
}

impl Gesture {
    pub(crate) fn open(anchor: Coord2, button: PointerButton) -> Self {
        Self {
            anchor,
            button,
            preview: Vec::new(),
            mistake_occurred: false,
        }
    }

    pub(crate) fn record_placement(&mut self, coords: Coord2) {
        self.preview.push(coords);
    }

    pub(crate) fn record_mistake(&mut self) {
        self.mistake_occurred = true;
    }

    pub fn anchor(&self) -> Coord2 {
        self.anchor
    }

    pub fn button(&self) -> PointerButton {
        self.button
    }

    pub fn preview_cells(&self) -> &[Coord2] {
        &self.preview
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.preview.contains(&coords)
    }

    pub fn placed_count(&self) -> usize {
        self.preview.len()
    }

    pub fn mistake_occurred(&self) -> bool {
        self.mistake_occurred
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_mode_splits_intent_by_button() {
        assert_eq!(
            InputMode::Fill.intent_for(PointerButton::Primary),
            Intent::Fill
        );
        assert_eq!(
            InputMode::Fill.intent_for(PointerButton::Secondary),
            Intent::Mark
        );
    }

    #[test]
    fn mark_mode_marks_with_either_button() {
        assert_eq!(
            InputMode::Mark.intent_for(PointerButton::Primary),
            Intent::Mark
        );
        assert_eq!(
            InputMode::Mark.intent_for(PointerButton::Secondary),
            Intent::Mark
        );
    }

    #[test]
    fn preview_keeps_traversal_order() {
        let mut gesture = Gesture::open((1, 1), PointerButton::Primary);
        gesture.record_placement((1, 1));
        gesture.record_placement((2, 1));

        assert_eq!(gesture.anchor(), (1, 1));
        assert_eq!(gesture.preview_cells(), &[(1, 1), (2, 1)]);
        assert_eq!(gesture.placed_count(), 2);
        assert!(gesture.contains((2, 1)));
        assert!(!gesture.contains((0, 0)));
        assert!(!gesture.mistake_occurred());
    }
}
