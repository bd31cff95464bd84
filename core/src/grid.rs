use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square board of tiles. Always at least one tile, so the origin exists.
///
/// Serialized as a list of rows so stored games keep the `[[{color, included}]]` shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Grid {
    tiles: Array2<Tile>,
}

impl Grid {
    pub fn from_fn(size: Coord, mut f: impl FnMut(Coord2) -> Tile) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self {
            tiles: Array2::from_shape_fn((size, size), |coords| f(coords)),
        })
    }

    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return Err(GameError::InvalidBoardShape);
        }
        let tiles = rows.into_iter().flatten().collect();
        let tiles =
            Array2::from_shape_vec((size, size), tiles).map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { tiles })
    }

    pub fn size(&self) -> Coord {
        self.tiles.nrows()
    }

    pub fn total_tiles(&self) -> usize {
        self.tiles.len()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBoundsCoordinate)
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Option<Tile> {
        self.tiles.get(coords.to_nd_index()).copied()
    }

    /// Color of the origin tile, which the whole region shares after every move.
    pub fn region_color(&self) -> Color {
        self[ORIGIN].color
    }

    /// Win check: every tile belongs to the region.
    pub fn all_included(&self) -> bool {
        self.tiles.iter().all(|tile| tile.included)
    }

    pub fn included_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.included).count()
    }

    pub fn iter_tiles(&self) -> impl Iterator<Item = (Coord2, Tile)> + '_ {
        self.tiles.indexed_iter().map(|(coords, &tile)| (coords, tile))
    }

    pub fn iter_included(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_tiles()
            .filter(|(_, tile)| tile.included)
            .map(|(coords, _)| coords)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.bounds())
    }

    pub(crate) fn iter_neighbors_in_order(&self, coords: Coord2, order: [Delta; 4]) -> NeighborIter {
        NeighborIter::with_order(coords, self.bounds(), order)
    }

    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.tiles.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    fn bounds(&self) -> Coord2 {
        self.tiles.dim()
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.tiles[coords.to_nd_index()]
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Tile>> {
    fn from(grid: Grid) -> Self {
        grid.rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn uniform(size: Coord, included: bool) -> Grid {
        Grid::from_fn(size, |_| Tile {
            color: Color::Red,
            included,
        })
        .unwrap()
    }

    #[test]
    fn all_included_on_fully_claimed_board() {
        assert!(uniform(4, true).all_included());
    }

    #[test]
    fn all_included_false_with_unclaimed_tiles() {
        let mut grid = uniform(4, true);
        grid[(3, 0)].included = false;
        grid[(3, 1)].included = false;
        grid[(3, 2)].included = false;

        assert!(!grid.all_included());
        assert_eq!(grid.included_count(), 13);
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty_boards() {
        let ragged = vec![
            vec![Tile::new(Color::Red), Tile::new(Color::Blue)],
            vec![Tile::new(Color::Red)],
        ];
        assert_eq!(Grid::from_rows(ragged), Err(GameError::InvalidBoardShape));
        assert_eq!(Grid::from_rows(vec![]), Err(GameError::InvalidBoardShape));

        let wide = vec![vec![Tile::new(Color::Red), Tile::new(Color::Blue)]];
        assert_eq!(Grid::from_rows(wide), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn from_fn_rejects_zero_size() {
        assert_eq!(
            Grid::from_fn(0, |_| Tile::new(Color::Red)),
            Err(GameError::InvalidSize)
        );
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let grid = uniform(2, false);
        assert_eq!(grid.validate_coords((1, 1)), Ok((1, 1)));
        assert_eq!(
            grid.validate_coords((2, 0)),
            Err(GameError::OutOfBoundsCoordinate)
        );
        assert_eq!(
            grid.validate_coords((0, 2)),
            Err(GameError::OutOfBoundsCoordinate)
        );
        assert_eq!(grid.tile_at((5, 5)), None);
    }

    #[test]
    fn serializes_as_nested_rows() {
        let grid = Grid::from_rows(vec![
            vec![Tile::included(Color::Red), Tile::new(Color::Yellow)],
            vec![Tile::new(Color::Green), Tile::new(Color::Blue)],
        ])
        .unwrap();

        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                [{"color": "red", "included": true}, {"color": "yellow", "included": false}],
                [{"color": "green", "included": false}, {"color": "blue", "included": false}],
            ])
        );

        let back: Grid = serde_json::from_value(json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn deserializing_non_square_rows_fails() {
        let result: core::result::Result<Grid, _> =
            serde_json::from_str(r#"[[{"color":"red","included":false}],[]]"#);
        assert!(result.is_err());
    }
}
