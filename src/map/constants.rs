/// Pixel size of each map tile
pub const TILE_SIZE: f32 = 32.0;

/// Tileset grid dimensions (forest.png is 256x256 = 8x8 tiles of 32px)
pub const TILESET_COLS: u32 = 8;
pub const TILESET_ROWS: u32 = 8;

// Layer configuration
/// Number of draw layers per map
pub const NUM_LAYERS: usize = 3;

/// Layer indices
pub const LAYER_GROUND: usize = 0;      // Base terrain layer
pub const LAYER_DECORATION: usize = 1;  // Decorative tiles (bushes, rocks, etc.)
pub const LAYER_OVERLAY: usize = 2;     // Top layer (canopy, treetops, etc.)

/// Z-positions for each layer in world space
pub const LAYER_Z_GROUND: f32 = 0.0;
pub const LAYER_Z_DECORATION: f32 = 0.1;
pub const LAYER_Z_OVERLAY: f32 = 0.2;

/// Z-position of the player sprite (above all map layers)
pub const PLAYER_Z: f32 = 1.0;

/// Helper to get Z position for a layer index
pub const fn layer_z_position(layer: usize) -> f32 {
    match layer {
        LAYER_GROUND => LAYER_Z_GROUND,
        LAYER_DECORATION => LAYER_Z_DECORATION,
        LAYER_OVERLAY => LAYER_Z_OVERLAY,
        _ => LAYER_Z_GROUND,
    }
}

/// Tile value marking an empty cell (nothing drawn, nothing blocking)
pub const TILE_EMPTY: i32 = -1;

// Player sprite sheet configuration (hero_walk.png, 3x8 grid of 20x28 frames)
/// Pixel size of one player frame
pub const PLAYER_FRAME_WIDTH: u32 = 20;
pub const PLAYER_FRAME_HEIGHT: u32 = 28;

/// Columns in the player sheet: lead foot, neutral, trail foot
pub const PLAYER_SHEET_COLS: usize = 3;

/// Rows in the player sheet, one per facing
pub const PLAYER_SHEET_ROWS: usize = 8;

/// Draw scale for the player sprite
pub const PLAYER_SCALE: f32 = 2.5;

/// Vertical offset so the feet rest slightly below the cell centre
/// (half the scaled frame height minus a 14px sink)
pub const PLAYER_Y_OFFSET: f32 = PLAYER_FRAME_HEIGHT as f32 * PLAYER_SCALE / 2.0 - 14.0;

/// Fallback map dimensions when neither bundle nor CSV layers load
pub const DEFAULT_MAP_SIZE: usize = 16;
