use bevy::prelude::*;
use strum::{Display, EnumIter};

use crate::core::palette;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Difficulty {
    Trainee,
    Pilot,
    Commander,
}

impl Difficulty {
    pub const fn settings(self) -> Settings {
        match self {
            Self::Trainee => Settings {
                player_speed: 6,
                supply_speed_min: 2,
                supply_speed_max: 5,
                planet_speed_min: 2,
                planet_speed_max: 4,
                planet_count: 1,
            },
            Self::Pilot => Settings {
                player_speed: 9,
                supply_speed_min: 4,
                supply_speed_max: 8,
                planet_speed_min: 3,
                planet_speed_max: 7,
                planet_count: 3,
            },
            Self::Commander => Settings {
                player_speed: 12,
                supply_speed_min: 6,
                supply_speed_max: 12,
                planet_speed_min: 6,
                planet_speed_max: 10,
                planet_count: 5,
            },
        }
    }

    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Trainee => "1. TRAINEE (Easy)",
            Self::Pilot => "2. PILOT (Normal)",
            Self::Commander => "3. COMMANDER (Hard)",
        }
    }

    pub const fn menu_color(self) -> Color {
        match self {
            Self::Trainee => palette::GREEN,
            Self::Pilot => palette::YELLOW,
            Self::Commander => palette::RED,
        }
    }

    /// Menu shortcut: the top-row digits and the numeric keypad both work.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Digit1 | KeyCode::Numpad1 => Some(Self::Trainee),
            KeyCode::Digit2 | KeyCode::Numpad2 => Some(Self::Pilot),
            KeyCode::Digit3 | KeyCode::Numpad3 => Some(Self::Commander),
            _ => None,
        }
    }
}

/// Tuning for the running session. Speeds are pixels per tick; the `max`
/// bounds are exclusive.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub player_speed: u32,
    pub supply_speed_min: u32,
    pub supply_speed_max: u32,
    pub planet_speed_min: u32,
    pub planet_speed_max: u32,
    pub planet_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_speed: 8,
            supply_speed_min: 3,
            supply_speed_max: 7,
            planet_speed_min: 2,
            planet_speed_max: 5,
            planet_count: 2,
        }
    }
}

impl Settings {
    pub fn roll_supply_speed(&self) -> f32 {
        roll_speed(self.supply_speed_min, self.supply_speed_max)
    }

    pub fn roll_planet_speed(&self) -> f32 {
        roll_speed(self.planet_speed_min, self.planet_speed_max)
    }
}

fn roll_speed(min: u32, max: u32) -> f32 {
    // An empty range would panic inside fastrand
    if max > min {
        fastrand::u32(min..max) as f32
    } else {
        min as f32
    }
}
