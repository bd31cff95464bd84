use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// Automated player: picks the next color to play on `grid`.
pub trait Strategy {
    fn choose(&mut self, grid: &Grid, palette: &[Color]) -> Result<Color>;
}

/// Plays any palette color, including ones that change nothing.
#[derive(Clone, Debug)]
pub struct RandomStrategy<R> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn choose(&mut self, _grid: &Grid, palette: &[Color]) -> Result<Color> {
        random_color(palette, &mut self.rng)
    }
}

/// Plays a random color among those touching the region, so every move absorbs something.
#[derive(Clone, Debug)]
pub struct FrontierStrategy<R> {
    rng: R,
}

impl<R: Rng> FrontierStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for FrontierStrategy<R> {
    fn choose(&mut self, grid: &Grid, palette: &[Color]) -> Result<Color> {
        let frontier = frontier_colors(grid);
        let region_color = grid.region_color();

        let candidates: Vec<Color> = palette
            .iter()
            .copied()
            .filter(|color| frontier.contains(color))
            .collect();
        if !candidates.is_empty() {
            return random_color(&candidates, &mut self.rng);
        }

        log::debug!("No frontier colors in palette, falling back to a random pick");
        let others: Vec<Color> = palette
            .iter()
            .copied()
            .filter(|&color| color != region_color)
            .collect();
        if others.is_empty() {
            random_color(palette, &mut self.rng)
        } else {
            random_color(&others, &mut self.rng)
        }
    }
}

/// Colors of the tiles orthogonally touching the region, the region's own color excluded.
///
/// Before the first move the region is just the origin, which every move seeds.
pub fn frontier_colors(grid: &Grid) -> BTreeSet<Color> {
    let mut region: Vec<Coord2> = grid.iter_included().collect();
    if region.is_empty() {
        region.push(ORIGIN);
    }
    let region_color = grid.region_color();

    region
        .iter()
        .flat_map(|&coords| grid.iter_neighbors(coords))
        .filter(|&pos| !grid[pos].included && pos != ORIGIN)
        .map(|pos| grid[pos].color)
        .filter(|&color| color != region_color)
        .collect()
}

/// Keeps asking `strategy` for colors until the board is won.
///
/// Returns the snapshots produced by each move, the starting one excluded.
pub fn autoplay<S: Strategy + ?Sized>(
    initial: &GameState,
    palette: &[Color],
    strategy: &mut S,
    max_moves: usize,
) -> Result<Vec<GameState>> {
    let mut moves = Vec::new();
    if initial.game_won {
        return Ok(moves);
    }

    let mut grid = initial.grid.clone();
    while moves.len() < max_moves {
        let color = strategy.choose(&grid, palette)?;
        let state = play_move(grid, color);
        grid = state.grid.clone();
        let won = state.game_won;
        moves.push(state);
        if won {
            log::debug!("Automated player won in {} moves", moves.len());
            return Ok(moves);
        }
    }

    log::warn!("Automated player gave up after {} moves", max_moves);
    Err(GameError::MoveLimitReached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    use Color::*;

    fn t(color: Color, included: bool) -> Tile {
        Tile { color, included }
    }

    #[test]
    fn frontier_before_first_move_is_around_origin() {
        let grid = Grid::from_rows(vec![
            vec![t(Red, false), t(Blue, false), t(Green, false)],
            vec![t(Yellow, false), t(Red, false), t(Green, false)],
            vec![t(Purple, false), t(Purple, false), t(Purple, false)],
        ])
        .unwrap();

        assert_eq!(frontier_colors(&grid), BTreeSet::from([Yellow, Blue]));
    }

    #[test]
    fn frontier_skips_region_color_and_included_tiles() {
        let grid = Grid::from_rows(vec![
            vec![t(Red, true), t(Red, true), t(Green, false)],
            vec![t(Red, false), t(Blue, false), t(Green, false)],
            vec![t(Orange, false), t(Orange, false), t(Orange, false)],
        ])
        .unwrap();

        assert_eq!(frontier_colors(&grid), BTreeSet::from([Blue, Green]));
    }

    #[test]
    fn frontier_strategy_only_plays_touching_colors() {
        let grid = Grid::from_rows(vec![
            vec![t(Red, true), t(Blue, false)],
            vec![t(Blue, false), t(Green, false)],
        ])
        .unwrap();
        let mut strategy = FrontierStrategy::new(SmallRng::seed_from_u64(5));

        for _ in 0..50 {
            assert_eq!(strategy.choose(&grid, Color::palette(4)).unwrap(), Blue);
        }
    }

    #[test]
    fn random_strategy_rejects_empty_palette() {
        let grid = Grid::from_fn(2, |_| Tile::new(Red)).unwrap();
        let mut strategy = RandomStrategy::new(SmallRng::seed_from_u64(5));

        assert_eq!(strategy.choose(&grid, &[]), Err(GameError::EmptyPalette));
    }

    #[test]
    fn automated_players_finish_generated_games() {
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let new_game = create_game(8, 4, &mut rng).unwrap();

            let mut frontier = FrontierStrategy::new(SmallRng::seed_from_u64(seed));
            let moves = autoplay(&new_game.initial, &new_game.palette, &mut frontier, 500).unwrap();
            assert!(moves.last().unwrap().game_won);
            assert!(moves.iter().rev().skip(1).all(|state| !state.game_won));

            let mut random = RandomStrategy::new(SmallRng::seed_from_u64(seed));
            let moves = autoplay(&new_game.initial, &new_game.palette, &mut random, 5_000).unwrap();
            assert!(moves.last().unwrap().game_won);
        }
    }

    #[test]
    fn autoplay_gives_up_on_unwinnable_board() {
        // a single-color board never grows past the origin
        let grid = Grid::from_fn(3, |_| Tile::new(Red)).unwrap();
        let mut strategy = RandomStrategy::new(SmallRng::seed_from_u64(1));

        assert_eq!(
            autoplay(&GameState::initial(grid), &[Red], &mut strategy, 10),
            Err(GameError::MoveLimitReached)
        );
    }

    #[test]
    fn autoplay_on_won_state_plays_nothing() {
        let state = GameState {
            grid: Grid::from_fn(2, |_| Tile::included(Red)).unwrap(),
            game_won: true,
            color: Some(Red),
        };
        let mut strategy = RandomStrategy::new(SmallRng::seed_from_u64(1));

        assert_eq!(autoplay(&state, &[Red, Blue], &mut strategy, 10), Ok(vec![]));
    }
}
