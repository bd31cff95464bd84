use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;

use crate::types::ORTHOGONAL;
use crate::*;

/// Grows the region from `origin` into every connected tile of `target` color.
///
/// An origin that is already included, or of another color, leaves the grid unchanged.
pub fn flood_fill(origin: Coord2, target: Color, mut grid: Grid) -> Result<Grid> {
    let origin = grid.validate_coords(origin)?;
    RegionFlood::new(&mut grid, target, ORTHOGONAL).fill(origin);
    Ok(grid)
}

/// Repaints the region with `chosen` and absorbs every newly matching neighbor.
///
/// Picking the color the region already has, or playing on a won board, is a no-op.
pub fn update_region(chosen: Color, mut grid: Grid) -> Grid {
    grow_region(&mut grid, chosen, ORTHOGONAL);
    grid
}

/// Plays one turn from `origin`, which is always seeded into the region first.
pub fn apply_move(chosen: Color, grid: Grid, origin: Coord2) -> Result<GameState> {
    apply_move_with_outcome(chosen, grid, origin).map(|(state, _)| state)
}

pub fn apply_move_with_outcome(
    chosen: Color,
    grid: Grid,
    origin: Coord2,
) -> Result<(GameState, MoveOutcome)> {
    let origin = grid.validate_coords(origin)?;
    Ok(apply_at(chosen, grid, origin))
}

/// `origin` must already be validated against `grid`.
pub(crate) fn apply_at(chosen: Color, mut grid: Grid, origin: Coord2) -> (GameState, MoveOutcome) {
    let was_won = grid.all_included();
    let seeded = !grid[origin].included;
    grid[origin].included = true;

    let growth = grow_region(&mut grid, chosen, ORTHOGONAL);
    let game_won = grid.all_included();

    let outcome = match growth {
        _ if was_won => MoveOutcome::NoChange,
        _ if game_won => MoveOutcome::Won,
        RegionGrowth::Unchanged if seeded => MoveOutcome::Grew,
        RegionGrowth::Unchanged => MoveOutcome::NoChange,
        RegionGrowth::Repainted => MoveOutcome::Repainted,
        RegionGrowth::Absorbed(_) => MoveOutcome::Grew,
    };
    log::debug!(
        "Applied {} from {:?}: {:?}, {} of {} tiles included",
        chosen,
        origin,
        outcome,
        grid.included_count(),
        grid.total_tiles()
    );

    let state = GameState {
        grid,
        game_won,
        color: Some(chosen),
    };
    (state, outcome)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RegionGrowth {
    Unchanged,
    Repainted,
    Absorbed(usize),
}

pub(crate) fn grow_region(grid: &mut Grid, chosen: Color, order: [Delta; 4]) -> RegionGrowth {
    // compare against the color before this move repaints anything
    let previous = grid.region_color();
    if grid.all_included() || chosen == previous {
        return RegionGrowth::Unchanged;
    }

    let region: Vec<Coord2> = grid.iter_included().collect();
    for &coords in &region {
        grid[coords].color = chosen;
    }

    let mut flood = RegionFlood::new(grid, chosen, order);
    for &coords in &region {
        flood.fill_neighbors(coords);
    }
    let absorbed = flood.absorbed;
    log::trace!(
        "Region of {} tiles repainted {} -> {}, absorbed {}",
        region.len(),
        previous,
        chosen,
        absorbed
    );

    if absorbed == 0 {
        RegionGrowth::Repainted
    } else {
        RegionGrowth::Absorbed(absorbed)
    }
}

/// Work-list flood fill that shares its visited set across seeds of the same move.
///
/// Sharing is sound because the target color is fixed: a visited tile is either included or
/// of another color, and neither changes for the rest of the move.
struct RegionFlood<'a> {
    grid: &'a mut Grid,
    target: Color,
    order: [Delta; 4],
    visited: BTreeSet<Coord2>,
    to_visit: VecDeque<Coord2>,
    absorbed: usize,
}

impl<'a> RegionFlood<'a> {
    fn new(grid: &'a mut Grid, target: Color, order: [Delta; 4]) -> Self {
        Self {
            grid,
            target,
            order,
            visited: BTreeSet::new(),
            to_visit: VecDeque::new(),
            absorbed: 0,
        }
    }

    fn fill_neighbors(&mut self, coords: Coord2) {
        let neighbors = self.grid.iter_neighbors_in_order(coords, self.order);
        self.to_visit
            .extend(neighbors.filter(|pos| !self.visited.contains(pos)));
        self.drain();
    }

    fn fill(&mut self, seed: Coord2) {
        self.to_visit.push_back(seed);
        self.drain();
    }

    fn drain(&mut self) {
        while let Some(coords) = self.to_visit.pop_front() {
            if !self.visited.insert(coords) {
                continue;
            }

            let tile = self.grid[coords];
            if tile.included || tile.color != self.target {
                continue;
            }

            self.grid[coords].included = true;
            self.absorbed += 1;
            log::trace!("Flood included tile at {:?}", coords);

            let neighbors = self.grid.iter_neighbors_in_order(coords, self.order);
            self.to_visit
                .extend(neighbors.filter(|pos| !self.visited.contains(pos)));
        }
    }
}
