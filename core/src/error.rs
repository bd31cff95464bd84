use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid size must be at least 1")]
    InvalidSize,
    #[error("Palette has no colors to choose from")]
    EmptyPalette,
    #[error("Coordinates lie outside the grid")]
    OutOfBoundsCoordinate,
    #[error("Board rows do not form a non-empty square")]
    InvalidBoardShape,
    #[error("Game already won, no new moves are accepted")]
    AlreadyEnded,
    #[error("Move limit reached before the game was won")]
    MoveLimitReached,
}

pub type Result<T> = core::result::Result<T, GameError>;
