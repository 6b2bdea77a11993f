//! Short-lived effects that remove themselves: crash explosions and pickup sparkles.

use bevy::prelude::*;

use crate::collision::Bounds;
use crate::core::SessionEntity;
use crate::core::config::{
    EXPLOSION_FRAME_TICKS, EXPLOSION_FRAMES, EXPLOSION_Z, SPARKLE_COUNT, SPARKLE_MAX_SPEED,
    SPARKLE_SHRINK, SPARKLE_Z,
};

#[derive(Component, Debug)]
pub struct Explosion {
    /// Diameter of the fully grown burst.
    pub size: f32,
    pub frame: u32,
    /// Ticks spent on the current frame.
    pub ticks: u32,
}

impl Explosion {
    pub const fn new(size: f32) -> Self {
        Self {
            size,
            frame: 0,
            ticks: 0,
        }
    }

    /// The disc grows linearly with the frame counter.
    pub fn radius(&self) -> f32 {
        self.size / 2.0 * self.frame as f32 / EXPLOSION_FRAMES as f32
    }

    /// Advances one tick. Returns false once the frame budget is spent.
    fn advance(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= EXPLOSION_FRAME_TICKS {
            self.ticks = 0;
            self.frame += 1;
        }
        self.frame <= EXPLOSION_FRAMES
    }
}

#[derive(Component, Debug)]
pub struct Sparkle {
    pub velocity: Vec2,
    pub life: f32,
    pub decay: f32,
    pub size: f32,
    pub color: Color,
}

pub fn explosion_bundle(center: Vec2, size: f32) -> impl Bundle {
    let bounds = Bounds::from_center(center, Vec2::splat(size));
    (
        Name::new("Explosion"),
        Explosion::new(size),
        bounds,
        bounds.transform(EXPLOSION_Z),
        Visibility::default(),
        SessionEntity,
    )
}

fn sparkle_bundle(center: Vec2, color: Color) -> impl Bundle {
    let spread = || (fastrand::f32() - 0.5) * 2.0 * SPARKLE_MAX_SPEED;
    let size = fastrand::f32().mul_add(3.0, 2.0);
    let bounds = Bounds::from_center(center, Vec2::splat(size));
    (
        Sparkle {
            velocity: Vec2::new(spread(), spread()),
            life: 1.0,
            decay: fastrand::f32().mul_add(0.03, 0.01),
            size,
            color,
        },
        bounds,
        bounds.transform(SPARKLE_Z),
        Visibility::default(),
        SessionEntity,
    )
}

pub fn sparkle_burst(commands: &mut Commands, center: Vec2, color: Color) {
    for _ in 0..SPARKLE_COUNT {
        commands.spawn(sparkle_bundle(center, color));
    }
}

pub fn animate_explosions(
    mut commands: Commands,
    mut explosions: Query<(Entity, &mut Explosion)>,
) {
    for (entity, mut explosion) in &mut explosions {
        if !explosion.advance() {
            commands.entity(entity).despawn_recursive();
        }
    }
}

pub fn fade_sparkles(
    mut commands: Commands,
    mut sparkles: Query<(Entity, &mut Sparkle, &mut Bounds)>,
) {
    for (entity, mut sparkle, mut bounds) in &mut sparkles {
        let center = bounds.center() + sparkle.velocity;
        sparkle.life -= sparkle.decay;
        sparkle.size *= SPARKLE_SHRINK;
        *bounds = Bounds::from_center(center, Vec2::splat(sparkle.size));
        if sparkle.life <= 0.0 {
            commands.entity(entity).despawn_recursive();
        }
    }
}
