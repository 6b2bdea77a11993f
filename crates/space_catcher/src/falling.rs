//! Everything that drifts down the screen: supplies, planets and background stars.

use bevy::prelude::*;
use game_helpers::{WINDOW_HEIGHT, WINDOW_WIDTH};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::collision::Bounds;
use crate::core::config::{
    PLANET_RADIUS, PLANET_SPAWN_Y, PLANET_Z, STAR_ALPHA_SPREAD, STAR_MIN_ALPHA, STAR_SIZE,
    STAR_SPEED, STAR_Z, SUPPLY_GLOW, SUPPLY_SPAWN_Y, SUPPLY_Z,
};
use crate::core::{SessionEntity, palette};
use crate::difficulty::Settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum SupplyTier {
    Small,
    Medium,
    Large,
}

impl SupplyTier {
    pub fn random() -> Self {
        fastrand::choice(Self::iter()).unwrap_or(Self::Small)
    }

    pub const fn radius(self) -> f32 {
        match self {
            Self::Small => 15.0,
            Self::Medium => 20.0,
            Self::Large => 25.0,
        }
    }

    pub const fn score(self) -> u32 {
        match self {
            Self::Small => 10,
            Self::Medium => 20,
            Self::Large => 30,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Small => palette::GREEN,
            Self::Medium => palette::CYAN,
            Self::Large => palette::YELLOW,
        }
    }

    /// Side of the square box around the supply and its glow ring.
    pub fn box_side(self) -> f32 {
        self.radius().mul_add(2.0, SUPPLY_GLOW * 2.0)
    }
}

#[derive(Component, Debug)]
pub struct Supply {
    pub tier: SupplyTier,
    pub speed: f32,
}

#[derive(Component, Debug)]
pub struct Planet {
    pub radius: f32,
    pub speed: f32,
    pub tint: Color,
}

#[derive(Component, Debug)]
pub struct Star {
    pub size: f32,
    pub speed: f32,
    pub alpha: f32,
}

/// Random x that keeps a box of width `side` fully on screen.
fn random_x(side: f32) -> f32 {
    fastrand::u32(0..(WINDOW_WIDTH - side) as u32) as f32
}

fn random_y(range: core::ops::Range<i32>) -> f32 {
    fastrand::i32(range) as f32
}

fn supply_spawn_point(tier: SupplyTier) -> Vec2 {
    Vec2::new(random_x(tier.box_side()), random_y(SUPPLY_SPAWN_Y))
}

pub fn supply_bundle(settings: &Settings) -> impl Bundle {
    let tier = SupplyTier::random();
    let bounds = Bounds::from_top_left(supply_spawn_point(tier), Vec2::splat(tier.box_side()));
    (
        Name::new("Supply"),
        Supply {
            tier,
            speed: settings.roll_supply_speed(),
        },
        bounds,
        bounds.transform(SUPPLY_Z),
        Visibility::default(),
        SessionEntity,
    )
}

pub fn planet_bundle(settings: &Settings) -> impl Bundle {
    let radius = fastrand::u32(PLANET_RADIUS) as f32;
    let side = radius * 2.0;
    let top_left = Vec2::new(random_x(side), random_y(PLANET_SPAWN_Y));
    let bounds = Bounds::from_top_left(top_left, Vec2::splat(side));
    let tint = fastrand::choice(palette::PLANET_TINTS).unwrap_or(palette::GRAY);
    (
        Name::new("Planet"),
        Planet {
            radius,
            speed: settings.roll_planet_speed(),
            tint,
        },
        bounds,
        bounds.transform(PLANET_Z),
        Visibility::default(),
        SessionEntity,
    )
}

/// A background star. Carries no cleanup marker since both the menu and the
/// session draw a star field; the caller tags it.
pub fn star_bundle() -> impl Bundle {
    let size = fastrand::u32(STAR_SIZE) as f32;
    let top_left = Vec2::new(random_x(0.0), fastrand::u32(0..WINDOW_HEIGHT as u32) as f32);
    let bounds = Bounds::from_top_left(top_left, Vec2::splat(size));
    (
        Star {
            size,
            speed: fastrand::u32(STAR_SPEED) as f32,
            alpha: fastrand::f32().mul_add(STAR_ALPHA_SPREAD, STAR_MIN_ALPHA),
        },
        bounds,
        bounds.transform(STAR_Z),
        Visibility::default(),
    )
}

/// Supplies that fall past the bottom edge come back above the screen with a
/// new position and speed. The tier is kept.
pub fn fall_supplies(settings: Res<Settings>, mut supplies: Query<(&mut Supply, &mut Bounds)>) {
    for (mut supply, mut bounds) in &mut supplies {
        bounds.translate(Vec2::new(0.0, supply.speed));
        if bounds.top() > WINDOW_HEIGHT {
            bounds.move_to(supply_spawn_point(supply.tier));
            supply.speed = settings.roll_supply_speed();
        }
    }
}

pub fn fall_planets(settings: Res<Settings>, mut planets: Query<(&mut Planet, &mut Bounds)>) {
    for (mut planet, mut bounds) in &mut planets {
        bounds.translate(Vec2::new(0.0, planet.speed));
        if bounds.top() > WINDOW_HEIGHT {
            let side = bounds.size().x;
            bounds.move_to(Vec2::new(random_x(side), random_y(PLANET_SPAWN_Y)));
            planet.speed = settings.roll_planet_speed();
        }
    }
}

pub fn drift_stars(mut stars: Query<(&Star, &mut Bounds)>) {
    for (star, mut bounds) in &mut stars {
        bounds.translate(Vec2::new(0.0, star.speed));
        if bounds.top() > WINDOW_HEIGHT {
            bounds.move_to(Vec2::new(random_x(0.0), 0.0));
        }
    }
}
