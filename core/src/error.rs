use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid must be rectangular and non-empty")]
    InvalidGridShape,
    #[error("Coordinates outside the grid")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
