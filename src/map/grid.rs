use serde::{Deserialize, Serialize};

use super::constants::TILE_EMPTY;
use super::types::{GridPos, TileId};

/// A rectangular grid of tile indices, stored row-major with row 0 at the
/// top of the map. Immutable after load in normal operation; `set` exists
/// for construction and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileId>,
}

impl TileGrid {
    /// Create a grid with every cell set to `fill`.
    pub fn filled(width: usize, height: usize, fill: TileId) -> Self {
        Self {
            width,
            height,
            tiles: vec![fill; width * height],
        }
    }

    /// Create a grid with every cell empty.
    pub fn empty(width: usize, height: usize) -> Self {
        Self::filled(width, height, TILE_EMPTY)
    }

    /// Build a grid from already-validated row data.
    /// Caller guarantees `tiles.len() == width * height`.
    pub(crate) fn from_raw(width: usize, height: usize, tiles: Vec<TileId>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Get the tile at a cell, or `None` out of bounds.
    pub fn get(&self, pos: GridPos) -> Option<TileId> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.tiles[pos.y as usize * self.width + pos.x as usize])
    }

    /// Set the tile at a cell. Returns false (and changes nothing) out of
    /// bounds.
    pub fn set(&mut self, pos: GridPos, tile: TileId) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        self.tiles[pos.y as usize * self.width + pos.x as usize] = tile;
        true
    }

    /// Iterate over every cell with its position.
    pub fn iter_cells(&self) -> impl Iterator<Item = (GridPos, TileId)> + '_ {
        self.tiles.iter().enumerate().map(|(i, &tile)| {
            let pos = GridPos::new((i % self.width) as i32, (i / self.width) as i32);
            (pos, tile)
        })
    }
}
