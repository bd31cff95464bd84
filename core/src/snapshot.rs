use serde::{Deserialize, Serialize};

use crate::*;

/// One entry of a game's history: the board after a move and the color that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub grid: Grid,
    #[serde(default)]
    pub game_won: bool,
    pub color: Option<Color>,
}

impl GameState {
    /// First history entry, before any color was chosen.
    pub fn initial(grid: Grid) -> Self {
        Self {
            grid,
            game_won: false,
            color: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.game_won {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

/// Valid transitions:
/// - InProgress -> Won
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
}

impl GameStatus {
    /// Indicates no moves can change the board anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of applying a color to the board
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Repainted,
    Grew,
    Won,
}

impl MoveOutcome {
    /// Whether this outcome changed the board
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Repainted => true,
            Grew => true,
            Won => true,
        }
    }
}
