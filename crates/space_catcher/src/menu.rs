use bevy::prelude::*;
use game_helpers::cleanup::despawn_all;
use game_helpers::text_screen::{ScreenLine, spawn_text_screen};
use strum::IntoEnumIterator;

use crate::core::config::STAR_COUNT;
use crate::core::{GameState, SoundCue, palette};
use crate::difficulty::Difficulty;
use crate::falling::{drift_stars, star_bundle};

/// Component marker for menu screen entities
#[derive(Component)]
pub struct MenuScreen;

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Menu), spawn_menu_screen)
            .add_systems(
                Update,
                choose_difficulty.run_if(in_state(GameState::Menu)),
            )
            // Star field behind the menu
            .add_systems(FixedUpdate, drift_stars.run_if(in_state(GameState::Menu)))
            .add_systems(OnExit(GameState::Menu), despawn_all::<MenuScreen>);
    }
}

fn spawn_menu_screen(mut commands: Commands) {
    for _ in 0..STAR_COUNT {
        commands.spawn((star_bundle(), MenuScreen));
    }

    let mut lines = vec![
        ScreenLine::new(crate::TITLE, 64.0, palette::BLUE),
        ScreenLine::new("Select Difficulty", 30.0, palette::WHITE),
    ];
    lines.extend(
        Difficulty::iter()
            .map(|difficulty| ScreenLine::new(difficulty.menu_label(), 30.0, difficulty.menu_color())),
    );
    lines.push(ScreenLine::new(
        "Arrow keys or A/D to steer",
        20.0,
        palette::GRAY,
    ));

    spawn_text_screen(&mut commands, MenuScreen, 24.0, &lines);
}

/// The chosen difficulty replaces the settings wholesale before the session
/// is built on entering `Playing`.
fn choose_difficulty(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut sounds: EventWriter<SoundCue>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(difficulty) = keys
        .get_just_pressed()
        .find_map(|key| Difficulty::from_key(*key))
    else {
        return;
    };

    info!("Difficulty selected: {difficulty}");
    commands.insert_resource(difficulty.settings());
    sounds.send(SoundCue::Select);
    next_state.set(GameState::Playing);
}
