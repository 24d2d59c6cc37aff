use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::constants::TILE_SIZE;

/// Type alias for tile indices. -1 marks an empty cell; everything else
/// indexes into the tileset atlas.
pub type TileId = i32;

/// Position of a cell in map coordinates. Row 0 is the top of the map
/// (CSV line order), so `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// World position of this cell's centre, in pixels.
    /// World y grows up, map y grows down, so y is negated here and
    /// nowhere else.
    pub fn to_world(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
            -(self.y as f32 * TILE_SIZE + TILE_SIZE / 2.0),
        )
    }

    /// This position shifted by a cell delta.
    pub fn offset(&self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }

    /// This position clamped into a `width` x `height` map.
    pub fn clamped(&self, width: usize, height: usize) -> Self {
        Self {
            x: self.x.clamp(0, width as i32 - 1),
            y: self.y.clamp(0, height as i32 - 1),
        }
    }

    /// World-space interpolation between two cell centres.
    pub fn lerp_world(&self, other: &GridPos, t: f32) -> Vec2 {
        self.to_world().lerp(other.to_world(), t)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<IVec2> for GridPos {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<GridPos> for IVec2 {
    fn from(pos: GridPos) -> Self {
        IVec2::new(pos.x, pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_world_is_cell_centre() {
        let pos = GridPos::new(0, 0);
        assert_eq!(pos.to_world(), Vec2::new(16.0, -16.0));

        // One cell right and two down
        let pos = GridPos::new(1, 2);
        assert_eq!(pos.to_world(), Vec2::new(48.0, -80.0));
    }

    #[test]
    fn test_clamped() {
        let inside = GridPos::new(3, 4).clamped(16, 16);
        assert_eq!(inside, GridPos::new(3, 4));

        let low = GridPos::new(-1, -5).clamped(16, 16);
        assert_eq!(low, GridPos::new(0, 0));

        let high = GridPos::new(16, 20).clamped(16, 16);
        assert_eq!(high, GridPos::new(15, 15));
    }

    #[test]
    fn test_lerp_world() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(1, 0);

        assert_eq!(a.lerp_world(&b, 0.0), a.to_world());
        assert_eq!(a.lerp_world(&b, 1.0), b.to_world());

        // Halfway between adjacent cells is half a tile over
        let mid = a.lerp_world(&b, 0.5);
        assert_eq!(mid, Vec2::new(32.0, -16.0));
    }
}
