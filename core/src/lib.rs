#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use bot::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod bot;
mod engine;
mod error;
mod generator;
mod grid;
mod snapshot;
mod tile;
mod types;

/// Board size and number of colors for a new game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub colors: usize,
}

impl GameConfig {
    pub const MIN_COLORS: usize = 2;

    pub const fn new_unchecked(size: Coord, colors: usize) -> Self {
        Self { size, colors }
    }

    /// Clamps to a playable board: at least one tile and two to six colors.
    pub fn new(size: Coord, colors: usize) -> Self {
        let clamped = Self::new_unchecked(size.max(1), colors.clamp(Self::MIN_COLORS, Color::COUNT));
        if clamped != Self::new_unchecked(size, colors) {
            log::warn!(
                "Clamped game config {}x{} with {} colors to {}x{} with {} colors",
                size,
                size,
                colors,
                clamped.size,
                clamped.size,
                clamped.colors
            );
        }
        clamped
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GameError::InvalidSize);
        }
        if self.colors == 0 {
            return Err(GameError::EmptyPalette);
        }
        Ok(())
    }

    pub fn palette(&self) -> &'static [Color] {
        Color::palette(self.colors)
    }

    pub const fn total_tiles(&self) -> usize {
        self.size.saturating_mul(self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(4, 4)
    }
}

/// A freshly generated game: its first history entry and the colors it is played with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub initial: GameState,
    pub palette: Vec<Color>,
}

/// Generates a board of `size` x `size` using the first `number_of_colors` master colors.
pub fn create_game<R: Rng + ?Sized>(
    size: Coord,
    number_of_colors: usize,
    rng: &mut R,
) -> Result<NewGame> {
    let config = GameConfig::new_unchecked(size, number_of_colors);
    config.validate()?;
    if number_of_colors > Color::COUNT {
        log::warn!(
            "Requested {} colors but only {} exist",
            number_of_colors,
            Color::COUNT
        );
    }

    let palette = config.palette();
    let grid = generate_grid(size, palette, rng)?;
    Ok(NewGame {
        initial: GameState::initial(grid),
        palette: palette.to_vec(),
    })
}

/// Plays `chosen` from the origin of the latest board.
pub fn play_move(latest: Grid, chosen: Color) -> GameState {
    // every grid holds at least the origin tile
    engine::apply_at(chosen, latest, ORIGIN).0
}

pub fn is_won(grid: &Grid) -> bool {
    grid.all_included()
}
