use super::constants::{DEFAULT_MAP_SIZE, LAYER_GROUND, NUM_LAYERS};
use super::grid::TileGrid;
use super::types::GridPos;
use super::WorldMap;

/// Tileset indices used by the fallback map
const GROUND_TILE_A: i32 = 0;
const GROUND_TILE_B: i32 = 8;

/// Generate a fallback map for when neither the bundle nor the CSV layers
/// load: a checkerboard ground, empty upper layers, everything walkable.
pub fn generate_fallback_map() -> WorldMap {
    let size = DEFAULT_MAP_SIZE;
    let mut ground = TileGrid::empty(size, size);

    for y in 0..size {
        for x in 0..size {
            let tile = if (x + y) % 2 == 0 {
                GROUND_TILE_A
            } else {
                GROUND_TILE_B
            };
            ground.set(GridPos::new(x as i32, y as i32), tile);
        }
    }

    let mut layers: [TileGrid; NUM_LAYERS] = [
        TileGrid::empty(size, size),
        TileGrid::empty(size, size),
        TileGrid::empty(size, size),
    ];
    layers[LAYER_GROUND] = ground;

    WorldMap {
        layers,
        collision: TileGrid::empty(size, size),
    }
}
