pub mod cache;
pub mod constants;
pub mod generator;
pub mod grid;
pub mod loader;
pub mod systems;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use grid::TileGrid;
pub use types::{GridPos, TileId};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plugin for map loading and layer rendering
pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapConfig>()
            .add_systems(Startup, (systems::load_map, systems::spawn_layer_tiles).chain());
    }
}

/// Where map data lives on disk
#[derive(Resource)]
pub struct MapConfig {
    /// Directory holding the CSV layer files
    pub map_dir: PathBuf,
    /// Compiled bundle written after a successful CSV load
    pub bundle_path: PathBuf,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            map_dir: PathBuf::from("assets/maps"),
            bundle_path: PathBuf::from("saves/map.bundle"),
        }
    }
}

/// The loaded map: three draw layers and a collision grid, all the same
/// size. Inserted once at startup and immutable afterwards.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct WorldMap {
    /// Draw layers indexed by LAYER_GROUND / LAYER_DECORATION / LAYER_OVERLAY
    pub layers: [TileGrid; NUM_LAYERS],
    /// Non-empty cells here cannot be walked onto
    pub collision: TileGrid,
}

impl WorldMap {
    pub fn width(&self) -> usize {
        self.collision.width()
    }

    pub fn height(&self) -> usize {
        self.collision.height()
    }

    /// Clamp a candidate cell into the map.
    pub fn clamp(&self, pos: GridPos) -> GridPos {
        pos.clamped(self.width(), self.height())
    }

    /// Whether a cell refuses the player. Out-of-bounds counts as blocked;
    /// callers clamp first, so this only matters for a zero-sized map.
    pub fn is_blocked(&self, pos: GridPos) -> bool {
        match self.collision.get(pos) {
            Some(tile) => tile != TILE_EMPTY,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> WorldMap {
        let mut collision = TileGrid::empty(2, 2);
        collision.set(GridPos::new(1, 1), 0);
        WorldMap {
            layers: [
                TileGrid::filled(2, 2, 3),
                TileGrid::empty(2, 2),
                TileGrid::empty(2, 2),
            ],
            collision,
        }
    }

    #[test]
    fn test_is_blocked() {
        let map = two_by_two();
        assert!(!map.is_blocked(GridPos::new(0, 0)));
        assert!(map.is_blocked(GridPos::new(1, 1)));

        // Out of bounds is blocked
        assert!(map.is_blocked(GridPos::new(2, 0)));
        assert!(map.is_blocked(GridPos::new(-1, 0)));
    }

    #[test]
    fn test_clamp() {
        let map = two_by_two();
        assert_eq!(map.clamp(GridPos::new(5, -3)), GridPos::new(1, 0));
    }
}
