use bevy::prelude::*;
use game_helpers::cleanup::despawn_all;
use game_helpers::text_screen::{ScreenLine, spawn_text_screen};

use crate::core::{FinalScore, GameState, palette};

/// Component marker for game over screen entities
#[derive(Component)]
pub struct GameOverScreen;

pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::GameOver), spawn_game_over_screen)
            .add_systems(
                Update,
                return_to_menu.run_if(in_state(GameState::GameOver)),
            )
            .add_systems(OnExit(GameState::GameOver), despawn_all::<GameOverScreen>);
    }
}

fn spawn_game_over_screen(mut commands: Commands, final_score: Res<FinalScore>) {
    spawn_text_screen(
        &mut commands,
        GameOverScreen,
        40.0,
        &[
            ScreenLine::new("GAME OVER", 64.0, palette::RED),
            ScreenLine::new(format!("Final Score: {}", final_score.0), 48.0, palette::YELLOW),
            ScreenLine::new("Press Any Key to Restart", 22.0, palette::WHITE),
        ],
    );
}

fn return_to_menu(keys: Res<ButtonInput<KeyCode>>, mut next_state: ResMut<NextState<GameState>>) {
    if keys.get_just_pressed().next().is_some() {
        next_state.set(GameState::Menu);
    }
}
