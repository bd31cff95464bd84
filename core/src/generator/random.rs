use alloc::collections::BTreeMap;
use rand::prelude::*;

use super::*;

/// Generation strategy that colors every tile independently and uniformly from the palette.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: &GameConfig) -> Result<Grid> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_grid(config.size, config.palette(), &mut rng)
    }
}

/// Builds a `size` x `size` board with no tile included yet.
pub fn generate_grid<R: Rng + ?Sized>(size: Coord, palette: &[Color], rng: &mut R) -> Result<Grid> {
    if size == 0 {
        return Err(GameError::InvalidSize);
    }
    if palette.is_empty() {
        return Err(GameError::EmptyPalette);
    }

    let grid = Grid::from_fn(size, |_| Tile::new(palette[rng.random_range(0..palette.len())]))?;
    log::debug!("Generated {}x{} grid from palette {:?}", size, size, palette);

    if log::log_enabled!(log::Level::Trace) {
        let mut counts: BTreeMap<Color, usize> = BTreeMap::new();
        for (_, tile) in grid.iter_tiles() {
            *counts.entry(tile.color).or_default() += 1;
        }
        log::trace!("Tile counts per color: {:?}", counts);
    }

    Ok(grid)
}

/// Picks one palette color uniformly.
pub fn random_color<R: Rng + ?Sized>(palette: &[Color], rng: &mut R) -> Result<Color> {
    if palette.is_empty() {
        return Err(GameError::EmptyPalette);
    }
    Ok(palette[rng.random_range(0..palette.len())])
}
