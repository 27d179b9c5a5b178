use serde::{Deserialize, Serialize};

/// Player-visible mark stored for one board cell.
///
/// `Filled` is only ever written where the solution has a filled cell, and
/// `Crossed` only where it is empty; a wrong guess settles the cell with the
/// solution's truth and the life counter records the mistake.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellMark {
    Unknown,
    Filled,
    Crossed,
}

impl CellMark {
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Filled | Self::Crossed)
    }
}

impl Default for CellMark {
    fn default() -> Self {
        Self::Unknown
    }
}
