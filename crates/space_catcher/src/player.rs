use bevy::prelude::*;
use game_helpers::{WINDOW_HEIGHT, WINDOW_WIDTH};
use leafwing_input_manager::plugin::InputManagerSystem;
use leafwing_input_manager::prelude::*;

use crate::collision::Bounds;
use crate::core::config::{FLAME_LENGTH, PLAYER_BOTTOM_MARGIN, PLAYER_SIZE, PLAYER_Z};
use crate::core::SessionEntity;
use crate::difficulty::Settings;

#[derive(Component, Debug)]
pub struct Player {
    /// Exhaust length in pixels, re-rolled every tick for the flicker.
    pub flame_length: f32,
}

/// Held steering keys for the current tick.
#[derive(Component, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PilotInput {
    pub left: bool,
    pub right: bool,
}

// This is the list of "things in the game I want to be able to do based on input"
#[derive(Actionlike, PartialEq, Eq, Hash, Clone, Copy, Debug, Reflect)]
pub enum ShipAction {
    Left,
    Right,
}

pub fn create_input_map() -> InputMap<ShipAction> {
    let mut input_map = InputMap::default();

    input_map.insert(ShipAction::Left, KeyCode::ArrowLeft);
    input_map.insert(ShipAction::Left, KeyCode::KeyA);
    input_map.insert(ShipAction::Right, KeyCode::ArrowRight);
    input_map.insert(ShipAction::Right, KeyCode::KeyD);

    input_map
}

/// Hooks keyboard steering up to the ship. The simulation itself only reads
/// [`PilotInput`], so it runs without this plugin in headless tests.
pub struct ShipControlsPlugin;

impl Plugin for ShipControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<ShipAction>::default())
            .add_systems(Update, attach_controls)
            // Ahead of the fixed loop so each tick sees this frame's keys
            .add_systems(
                PreUpdate,
                read_pilot_input.after(InputManagerSystem::Update),
            );
    }
}

fn attach_controls(mut commands: Commands, ships: Query<Entity, Added<Player>>) {
    for ship in &ships {
        commands.entity(ship).insert(InputManagerBundle::<ShipAction> {
            input_map: create_input_map(),
            ..default()
        });
    }
}

fn read_pilot_input(mut query: Query<(&ActionState<ShipAction>, &mut PilotInput)>) {
    for (action_state, mut input) in &mut query {
        input.left = action_state.pressed(&ShipAction::Left);
        input.right = action_state.pressed(&ShipAction::Right);
    }
}

pub fn player_bundle() -> impl Bundle {
    let top_left = Vec2::new(
        (WINDOW_WIDTH - PLAYER_SIZE.x) / 2.0,
        WINDOW_HEIGHT - PLAYER_BOTTOM_MARGIN - PLAYER_SIZE.y,
    );
    let bounds = Bounds::from_top_left(top_left, PLAYER_SIZE);
    (
        Name::new("Player"),
        Player {
            flame_length: *FLAME_LENGTH.start() as f32,
        },
        PilotInput::default(),
        bounds,
        bounds.transform(PLAYER_Z),
        Visibility::default(),
        SessionEntity,
    )
}

/// Horizontal step for one tick, clamped to the window. Right wins when both
/// keys are held.
pub fn steer(x: f32, input: PilotInput, speed: f32) -> f32 {
    let velocity = if input.right {
        speed
    } else if input.left {
        -speed
    } else {
        0.0
    };
    (x + velocity).clamp(0.0, WINDOW_WIDTH - PLAYER_SIZE.x)
}

pub fn fly_player(
    settings: Res<Settings>,
    mut query: Query<(&mut Player, &mut Bounds, &PilotInput)>,
) {
    for (mut player, mut bounds, input) in &mut query {
        let x = steer(bounds.top_left().x, *input, settings.player_speed as f32);
        let top = bounds.top();
        bounds.move_to(Vec2::new(x, top));
        player.flame_length = fastrand::u32(FLAME_LENGTH) as f32;
    }
}
