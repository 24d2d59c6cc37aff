use bevy::prelude::*;

use super::constants::{layer_z_position, TILESET_COLS, TILESET_ROWS, TILE_EMPTY, TILE_SIZE};
use super::{cache, generator, loader, GridPos, MapConfig, WorldMap};

/// Marker component for spawned layer tiles
#[derive(Component, Debug, Clone, Copy)]
pub struct LayerTile {
    pub pos: GridPos,
    pub layer: usize,
}

/// Startup system: load the map through the bundle -> CSV -> generated
/// cascade and insert it as a resource.
pub fn load_map(mut commands: Commands, config: Res<MapConfig>) {
    let map = if cache::bundle_exists(&config.bundle_path) {
        match cache::load_bundle(&config.bundle_path) {
            Ok(map) => {
                info!("Loaded compiled map bundle from {:?}", config.bundle_path);
                map
            }
            Err(e) => {
                warn!("Failed to load map bundle: {}, falling back to CSV", e);
                load_from_csv(&config)
            }
        }
    } else {
        load_from_csv(&config)
    };

    info!("Map ready: {}x{} cells", map.width(), map.height());

    #[cfg(feature = "debug_grid")]
    log_collision_grid(&map);

    commands.insert_resource(map);
}

/// Load the CSV layers, compiling a bundle for next time on success, or
/// fall back to a generated map.
fn load_from_csv(config: &MapConfig) -> WorldMap {
    match loader::load_world_map(&config.map_dir) {
        Ok(map) => {
            info!("Loaded map layers from {:?}", config.map_dir);
            match cache::save_bundle(&map, &config.bundle_path) {
                Ok(()) => info!("Compiled map bundle to {:?}", config.bundle_path),
                Err(e) => warn!("Failed to write map bundle: {}", e),
            }
            map
        }
        Err(e) => {
            warn!("Failed to load map layers: {}, generating fallback map", e);
            generator::generate_fallback_map()
        }
    }
}

/// Startup system: spawn one sprite per non-empty cell of each draw layer.
/// The tile index is used directly as the tileset atlas index.
pub fn spawn_layer_tiles(
    mut commands: Commands,
    map: Res<WorldMap>,
    assets: Res<AssetServer>,
    mut texture_atlas_layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let texture = assets.load("tilesets/forest.png");
    let layout = TextureAtlasLayout::from_grid(
        UVec2::splat(TILE_SIZE as u32),
        TILESET_COLS,
        TILESET_ROWS,
        None,
        None,
    );
    let atlas_layout = texture_atlas_layouts.add(layout);

    let mut spawned = 0;
    for (layer_idx, grid) in map.layers.iter().enumerate() {
        let z = layer_z_position(layer_idx);
        for (pos, tile) in grid.iter_cells() {
            if tile == TILE_EMPTY {
                continue;
            }

            let world_pos = pos.to_world();
            commands.spawn((
                LayerTile {
                    pos,
                    layer: layer_idx,
                },
                Sprite::from_atlas_image(
                    texture.clone(),
                    TextureAtlas {
                        layout: atlas_layout.clone(),
                        index: tile as usize,
                    },
                ),
                Transform::from_xyz(world_pos.x, world_pos.y, z),
            ));
            spawned += 1;
        }
    }

    info!("Spawned {} layer tiles", spawned);
}

/// Print the collision grid to the log, one character per cell.
#[cfg(feature = "debug_grid")]
fn log_collision_grid(map: &WorldMap) {
    let mut grid = String::new();
    grid.push_str("\nCollision grid (# = blocked, . = walkable):\n");

    for y in 0..map.height() {
        for x in 0..map.width() {
            let blocked = map.is_blocked(GridPos::new(x as i32, y as i32));
            grid.push(if blocked { '#' } else { '.' });
        }
        grid.push('\n');
    }

    info!("{}", grid);
}
