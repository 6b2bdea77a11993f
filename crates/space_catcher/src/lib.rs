//! Space Catcher: Galaxy. Steer a ship along the bottom of the screen, catch
//! the falling supplies and keep clear of the planets.

pub mod audio;
pub mod collision;
pub mod core;
pub mod difficulty;
pub mod effects;
pub mod falling;
pub mod game_over;
pub mod gameplay;
pub mod menu;
pub mod player;
pub mod visuals;

use bevy::prelude::*;

pub const TITLE: &str = "Space Catcher: Galaxy";

pub fn run() -> AppExit {
    game_helpers::get_default_app(TITLE)
        .add_plugins(gameplay::GameplayPlugin)
        .add_plugins(menu::MenuPlugin)
        .add_plugins(game_over::GameOverPlugin)
        .add_plugins(player::ShipControlsPlugin)
        .add_plugins(visuals::VisualsPlugin)
        .add_plugins(audio::SfxPlugin)
        .add_systems(Startup, setup_camera)
        .run()
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
