use bevy::prelude::*;

use super::types::{Facing, GridMover, Player};
use crate::map::constants::PLAYER_SHEET_COLS;

/// Sheet columns for the walk cycle
const COL_LEAD_FOOT: usize = 0;
const COL_NEUTRAL: usize = 1;
const COL_TRAIL_FOOT: usize = 2;

/// Pick the walk-cycle column from the step progress: lead foot for the
/// first half of a step, trail foot for the second, neutral when idle.
pub fn foot_column(progress: f32) -> usize {
    if progress < 0.5 {
        COL_LEAD_FOOT
    } else if progress < 1.0 {
        COL_TRAIL_FOOT
    } else {
        COL_NEUTRAL
    }
}

/// Atlas index for a facing and step progress.
pub fn atlas_index(facing: Facing, progress: f32) -> usize {
    facing.sprite_row() * PLAYER_SHEET_COLS + foot_column(progress)
}

/// System: keep the player's atlas frame in sync with facing and walk
/// progress.
pub fn animate_player(mut query: Query<(&GridMover, &Facing, &mut Sprite), With<Player>>) {
    for (mover, facing, mut sprite) in &mut query {
        if let Some(atlas) = &mut sprite.texture_atlas {
            atlas.index = atlas_index(*facing, mover.progress);
        }
    }
}
