use bevy::prelude::*;
use game_helpers::{WINDOW_HEIGHT, WINDOW_WIDTH};
use sfx_synth::SoundAsset;
use strum::{Display, EnumIter};

/// Game states that control the flow of the application
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Tags every entity owned by one play session so it can be torn down at once
#[derive(Component)]
pub struct SessionEntity;

/// Points accumulated in the current session
#[derive(Resource, Default, Debug)]
pub struct Score(pub u32);

/// Score recorded at the moment the ship was destroyed
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore(pub u32);

/// Sound effects requested by gameplay. Whether they are audible is up to the
/// audio plugin.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum SoundCue {
    Coin,
    Explosion,
    Select,
}

impl SoundCue {
    pub const fn asset(self) -> SoundAsset {
        match self {
            Self::Coin => SoundAsset::Coin,
            Self::Explosion => SoundAsset::Explosion,
            Self::Select => SoundAsset::Select,
        }
    }
}

/// Converts a screen-space point (origin top-left, y down) to world space
/// (origin centre, y up).
pub fn to_world(screen: Vec2) -> Vec2 {
    Vec2::new(screen.x - WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0 - screen.y)
}

/// Game configuration constants. Distances are pixels, speeds are pixels per tick.
pub mod config {
    use core::ops::{Range, RangeInclusive};

    use bevy::prelude::Vec2;

    pub const TICK_RATE: f64 = 60.0;

    // Pools
    pub const STAR_COUNT: usize = 50;
    pub const SUPPLY_COUNT: usize = 3;

    // Ship
    pub const SHIP_WIDTH: f32 = 50.0;
    pub const SHIP_HEIGHT: f32 = 60.0;
    pub const FLAME_SPACE: f32 = 30.0; // Room under the hull for the exhaust
    pub const PLAYER_SIZE: Vec2 = Vec2::new(SHIP_WIDTH, SHIP_HEIGHT + FLAME_SPACE);
    pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;
    pub const FLAME_LENGTH: RangeInclusive<u32> = 10..=25;

    // Falling objects
    pub const SUPPLY_GLOW: f32 = 2.0;
    pub const SUPPLY_SPAWN_Y: Range<i32> = -300..-50;
    pub const PLANET_RADIUS: RangeInclusive<u32> = 35..=65;
    pub const PLANET_SPAWN_Y: Range<i32> = -1000..-100;

    // Background
    pub const STAR_SIZE: RangeInclusive<u32> = 1..=3;
    pub const STAR_SPEED: Range<u32> = 1..4;
    pub const STAR_MIN_ALPHA: f32 = 0.3;
    pub const STAR_ALPHA_SPREAD: f32 = 0.5;

    // Effects
    pub const EXPLOSION_FRAMES: u32 = 10;
    pub const EXPLOSION_FRAME_TICKS: u32 = 3; // ~50ms per frame
    pub const SPARKLE_COUNT: usize = 8;
    pub const SPARKLE_MAX_SPEED: f32 = 3.0;
    pub const SPARKLE_SHRINK: f32 = 0.95;

    /// Ticks the play field stays frozen on the final frame after a crash (500ms)
    pub const CRASH_PAUSE_TICKS: u32 = 30;

    // Draw order
    pub const STAR_Z: f32 = 0.0;
    pub const PLANET_Z: f32 = 1.0;
    pub const SUPPLY_Z: f32 = 2.0;
    pub const PLAYER_Z: f32 = 3.0;
    pub const EXPLOSION_Z: f32 = 4.0;
    pub const SPARKLE_Z: f32 = 5.0;
}

pub mod palette {
    use bevy::prelude::Color;

    const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::srgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const WHITE: Color = Color::WHITE;
    pub const YELLOW: Color = rgb(255, 215, 0);
    pub const RED: Color = rgb(255, 50, 50);
    pub const BLUE: Color = rgb(50, 150, 255);
    pub const GRAY: Color = rgb(100, 100, 100);
    pub const GREEN: Color = rgb(0, 255, 100);
    pub const ORANGE: Color = rgb(255, 128, 0);
    pub const CYAN: Color = rgb(0, 255, 255);

    pub const GLOW: Color = Color::srgba(1.0, 1.0, 1.0, 100.0 / 255.0);
    pub const CRATER: Color = Color::srgba(0.0, 0.0, 0.0, 80.0 / 255.0);

    pub const PLANET_TINTS: [Color; 3] = [rgb(139, 0, 0), rgb(75, 0, 130), rgb(50, 50, 50)];
}
