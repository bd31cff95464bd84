use flood_core::create_game;
use rand::Rng;

use crate::*;

/// Request handling around a [`GameStore`]: start games and play moves on them.
#[derive(Debug)]
pub struct GameService<S> {
    store: S,
}

impl<S: GameStore> GameService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn new_game<R: Rng + ?Sized>(
        &mut self,
        request: NewGameRequest,
        rng: &mut R,
    ) -> Result<NewGameResponse> {
        let new_game = create_game(request.grid_size, request.number_of_colors, rng)?;
        let game = self.store.create(new_game.initial)?;
        log::info!(
            "Started game {} on a {}x{} grid with {} colors",
            game.id,
            request.grid_size,
            request.grid_size,
            new_game.palette.len()
        );
        Ok(NewGameResponse {
            game_state: game,
            chosen_colors: new_game.palette,
        })
    }

    pub fn make_move(&mut self, id: &str, request: MoveRequest) -> Result<MoveResponse> {
        let mut game = self.store.get(id)?;
        let state = game.play(request.color)?.clone();
        let game_state = self.store.append(id, state)?;
        if game_state.is_won() {
            log::info!("Game {} won in {} steps", id, game_state.steps());
        }
        Ok(MoveResponse { game_state })
    }

    pub fn game(&self, id: &str) -> Result<Game> {
        self.store.get(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
