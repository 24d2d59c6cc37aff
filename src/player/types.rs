use bevy::prelude::*;

use crate::map::constants::PLAYER_Y_OFFSET;
use crate::map::GridPos;

/// Marker component for the player character
#[derive(Component)]
pub struct Player;

/// Direction the player is facing. The discriminant doubles as the row
/// index in the walk sprite sheet.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Facing {
    /// Row index in the sprite sheet for this facing
    pub fn sprite_row(&self) -> usize {
        *self as usize
    }
}

impl Default for Facing {
    fn default() -> Self {
        Facing::South
    }
}

/// Discrete grid movement state: the occupied cell, the cell being walked
/// to, and how far along the step is. Idle is represented as
/// `cell == target` with `progress == 1.0`.
#[derive(Component, Debug, Clone, Copy)]
pub struct GridMover {
    pub cell: GridPos,
    pub target: GridPos,
    pub progress: f32,
}

impl GridMover {
    /// A mover standing still on `cell`.
    pub fn at_cell(cell: GridPos) -> Self {
        Self {
            cell,
            target: cell,
            progress: 1.0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.cell == self.target
    }

    /// Start walking towards an adjacent cell.
    pub fn begin_step(&mut self, target: GridPos) {
        self.target = target;
        self.progress = 0.0;
    }

    /// Advance the walk. Returns true if the step completed this call, in
    /// which case the mover lands on the target cell.
    pub fn advance(&mut self, amount: f32) -> bool {
        if self.is_idle() {
            return false;
        }
        self.progress += amount;
        if self.progress >= 1.0 {
            self.cell = self.target;
            self.progress = 1.0;
            return true;
        }
        false
    }

    /// World position interpolated between the source and target cells.
    pub fn world_pos(&self) -> Vec2 {
        self.cell.lerp_world(&self.target, self.progress.clamp(0.0, 1.0))
    }

    /// Where the player sprite centre goes for this mover (feet slightly
    /// below the cell centre).
    pub fn sprite_pos(&self) -> Vec2 {
        self.world_pos() + Vec2::new(0.0, PLAYER_Y_OFFSET)
    }
}
