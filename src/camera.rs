use bevy::prelude::*;

use crate::player::{GridMover, Player};

/// Plugin for the follow camera. The camera tracks the player's
/// interpolated position every frame, so the player stays at screen
/// centre while the map scrolls underneath.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, follow_player);
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(0.0, 0.0, 999.0)));
}

/// Keep the camera centred on the player's walk-interpolated cell centre.
fn follow_player(
    player_query: Query<&GridMover, With<Player>>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(mover) = player_query.single() else {
        return;
    };
    if let Ok(mut transform) = camera_query.single_mut() {
        let target = mover.world_pos();
        transform.translation.x = target.x;
        transform.translation.y = target.y;
    }
}
