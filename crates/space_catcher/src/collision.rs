//! Screen-space boxes and the two overlap tests used by gameplay.
//!
//! Supplies are caught with a plain rectangle test. Planets use circles so the
//! ship is not destroyed by a planet's empty corners.

use bevy::prelude::*;

use crate::core::to_world;

/// Axis-aligned box in screen space: origin at the top-left corner of the
/// window, y growing downward.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Bounds(pub Rect);

impl Bounds {
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self(Rect::from_corners(top_left, top_left + size))
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self(Rect::from_center_size(center, size))
    }

    pub fn top_left(&self) -> Vec2 {
        self.0.min
    }

    pub fn top(&self) -> f32 {
        self.0.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.0.size()
    }

    pub fn center(&self) -> Vec2 {
        self.0.center()
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.0.min += offset;
        self.0.max += offset;
    }

    pub fn move_to(&mut self, top_left: Vec2) {
        *self = Self::from_top_left(top_left, self.size());
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        rects_overlap(self.0, other.0)
    }

    /// World transform placing an entity at the centre of this box.
    pub fn transform(&self, z: f32) -> Transform {
        Transform::from_translation(to_world(self.center()).extend(z))
    }
}

/// Strict overlap: boxes that only share an edge do not touch.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

/// Inclusive circle test: circles exactly touching count as a hit.
pub fn circles_collide(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance_squared(b) <= (a_radius + b_radius).powi(2)
}

/// Radius of the circle through the corners of a box, half its diagonal.
pub fn bounding_radius(size: Vec2) -> f32 {
    size.length() / 2.0
}
