use flood_core::{Color, GameError, GameState, Grid, play_move};
use serde::{Deserialize, Serialize};

use crate::*;

/// Stored history of one game. Moves are only ever appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    pub id: String,
    moves: Vec<GameState>,
}

#[derive(Deserialize)]
struct GameRecord {
    id: String,
    moves: Vec<GameState>,
}

impl TryFrom<GameRecord> for Game {
    type Error = ProtocolError;

    fn try_from(record: GameRecord) -> Result<Self> {
        Self::from_moves(record.id, record.moves)
    }
}

impl Game {
    pub fn new(id: impl Into<String>, initial: GameState) -> Self {
        Self {
            id: id.into(),
            moves: vec![initial],
        }
    }

    /// Rebuilds a record read back from storage. A record without moves is malformed.
    pub fn from_moves(id: impl Into<String>, moves: Vec<GameState>) -> Result<Self> {
        let id = id.into();
        if moves.is_empty() {
            return Err(ProtocolError::EmptyHistory(id));
        }
        Ok(Self { id, moves })
    }

    pub fn moves(&self) -> &[GameState] {
        &self.moves
    }

    pub fn latest(&self) -> &GameState {
        // `new` and `from_moves` never leave the history empty
        &self.moves[self.moves.len() - 1]
    }

    pub fn latest_grid(&self) -> &Grid {
        &self.latest().grid
    }

    /// Number of moves played, the initial board excluded.
    pub fn steps(&self) -> usize {
        self.moves.len() - 1
    }

    pub fn is_won(&self) -> bool {
        self.latest().game_won
    }

    /// Sequence of colors played so far, in order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.moves.iter().filter_map(|state| state.color)
    }

    /// Applies `chosen` to a copy of the latest board and appends the result.
    pub fn play(&mut self, chosen: Color) -> Result<&GameState> {
        if self.is_won() {
            return Err(GameError::AlreadyEnded.into());
        }
        let state = play_move(self.latest_grid().clone(), chosen);
        log::debug!(
            "Game {} move {}: {} ({})",
            self.id,
            self.moves.len(),
            chosen,
            if state.game_won { "won" } else { "in progress" }
        );
        self.push(state);
        Ok(self.latest())
    }

    pub(crate) fn push(&mut self, state: GameState) {
        self.moves.push(state);
    }
}
