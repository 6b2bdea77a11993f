use std::env;
use std::path::PathBuf;

use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::{WindowMode, WindowResolution};

// Logical play field, fixed and not resizable
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Directory, relative to the asset root, that the asset server reads from.
pub const ASSET_DIR: &str = "assets";

/// Deep space background shared by every screen.
pub const BACKGROUND: Color = Color::srgb(10.0 / 255.0, 10.0 / 255.0, 30.0 / 255.0);

// Creates a Bevy app with the window, asset and pacing setup every screen relies on.
pub fn get_default_app(title: &str) -> App {
    let mut app = App::new();

    let asset_plugin = AssetPlugin {
        mode: bevy::asset::AssetMode::Unprocessed,
        file_path: ASSET_DIR.to_string(),
        processed_file_path: "imported_assets/Default".to_string(),
        watch_for_changes_override: None,
        meta_check: AssetMetaCheck::Never,
    };

    let resolution = WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: title.to_string(),
            present_mode: bevy::window::PresentMode::Fifo,
            resolution,
            resizable: false,
            mode: WindowMode::Windowed,
            ..default()
        }),
        ..default()
    };

    app.add_plugins(DefaultPlugins.set(asset_plugin).set(window_plugin));

    // https://github.com/aevyrie/bevy_framepace
    app.add_plugins(bevy_framepace::FramepacePlugin);

    app.insert_resource(ClearColor(BACKGROUND));

    app
}

/// Resolves the directory the asset server loads from.
///
/// Mirrors the file reader's own lookup so callers can check for files on disk
/// before handing paths to the asset server.
pub fn asset_root() -> PathBuf {
    let base = env::var_os("BEVY_ASSET_ROOT")
        .or_else(|| env::var_os("CARGO_MANIFEST_DIR"))
        .map(PathBuf::from)
        .or_else(|| {
            env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(PathBuf::from))
        })
        .unwrap_or_default();

    base.join(ASSET_DIR)
}
