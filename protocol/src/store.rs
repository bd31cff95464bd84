use std::collections::BTreeMap;

use flood_core::GameState;

use crate::*;

/// Persistence collaborator keyed by game id. Implementations serialize writes per id.
pub trait GameStore {
    /// Stores a new game whose history starts with `initial`, assigning its id.
    fn create(&mut self, initial: GameState) -> Result<Game>;

    fn get(&self, id: &str) -> Result<Game>;

    /// Appends one snapshot to the end of a stored history.
    fn append(&mut self, id: &str, state: GameState) -> Result<Game>;

    fn delete(&mut self, id: &str) -> Result<()>;
}

/// Keeps every game in memory, with ids handed out in creation order.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    games: BTreeMap<String, Game>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStore for MemoryStore {
    fn create(&mut self, initial: GameState) -> Result<Game> {
        self.next_id += 1;
        let game = Game::new(self.next_id.to_string(), initial);
        log::debug!("Stored new game {}", game.id);
        self.games.insert(game.id.clone(), game.clone());
        Ok(game)
    }

    fn get(&self, id: &str) -> Result<Game> {
        self.games
            .get(id)
            .cloned()
            .ok_or_else(|| ProtocolError::UnknownGame(id.to_owned()))
    }

    fn append(&mut self, id: &str, state: GameState) -> Result<Game> {
        let game = self
            .games
            .get_mut(id)
            .ok_or_else(|| ProtocolError::UnknownGame(id.to_owned()))?;
        game.push(state);
        Ok(game.clone())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.games
            .remove(id)
            .map(|_| log::debug!("Deleted game {}", id))
            .ok_or_else(|| ProtocolError::UnknownGame(id.to_owned()))
    }
}
