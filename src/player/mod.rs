pub mod animation;
pub mod movement;
pub mod types;

pub use types::{Facing, GridMover, Player};

use bevy::prelude::*;

use crate::map::constants::{
    PLAYER_FRAME_HEIGHT, PLAYER_FRAME_WIDTH, PLAYER_SCALE, PLAYER_SHEET_COLS, PLAYER_SHEET_ROWS,
    PLAYER_Z,
};
use crate::map::{GridPos, WorldMap};

/// Plugin for player spawning, grid movement, and walk animation
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementConfig>()
            .add_systems(Startup, spawn_player.after(crate::map::systems::load_map))
            .add_systems(
                Update,
                (
                    movement::read_walk_input,
                    movement::advance_walk,
                    movement::sync_player_transform,
                    animation::animate_player,
                )
                    .chain(),
            );
    }
}

/// Tuning for grid movement
#[derive(Resource)]
pub struct MovementConfig {
    /// Walk speed in cells per second
    pub walk_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self { walk_speed: 4.0 }
    }
}

/// Cell the player starts on
const PLAYER_START: GridPos = GridPos::new(7, 10);

/// Startup system: spawn the player sprite on its starting cell.
fn spawn_player(
    mut commands: Commands,
    map: Res<WorldMap>,
    assets: Res<AssetServer>,
    mut texture_atlas_layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let texture = assets.load("characters/hero_walk.png");
    let layout = TextureAtlasLayout::from_grid(
        UVec2::new(PLAYER_FRAME_WIDTH, PLAYER_FRAME_HEIGHT),
        PLAYER_SHEET_COLS as u32,
        PLAYER_SHEET_ROWS as u32,
        None,
        None,
    );
    let atlas_layout = texture_atlas_layouts.add(layout);

    let start = map.clamp(PLAYER_START);
    let mover = GridMover::at_cell(start);
    let facing = Facing::default();
    let sprite_pos = mover.sprite_pos();

    commands.spawn((
        Player,
        mover,
        facing,
        Sprite::from_atlas_image(
            texture,
            TextureAtlas {
                layout: atlas_layout,
                index: animation::atlas_index(facing, 1.0),
            },
        ),
        Transform::from_xyz(sprite_pos.x, sprite_pos.y, PLAYER_Z)
            .with_scale(Vec3::splat(PLAYER_SCALE)),
    ));

    info!("Player spawned at cell {:?}", start);
}
