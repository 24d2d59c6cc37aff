use bevy::prelude::*;
use bevy::window::WindowResolution;

mod camera;
mod map;
mod player;

use camera::CameraPlugin;
use map::MapPlugin;
use player::PlayerPlugin;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Forest Walk".to_string(),
                        resolution: WindowResolution::new(512, 512),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(Color::srgb_u8(5, 25, 75)))
        .add_plugins((MapPlugin, PlayerPlugin, CameraPlugin))
        .run();
}
