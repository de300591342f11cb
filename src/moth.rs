use crate::config::*;
use bevy::prelude::*;
use rand::Rng;

/// Binary coloration of a moth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coloration {
    Light,
    Dark,
}

impl Coloration {
    /// Fair coin flip between light and dark
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            Coloration::Light
        } else {
            Coloration::Dark
        }
    }

    /// Fixed brightness of this coloration on the 0-255 scale
    pub fn brightness(self) -> i32 {
        match self {
            Coloration::Light => LIGHT_BRIGHTNESS,
            Coloration::Dark => DARK_BRIGHTNESS,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Coloration::Light => Coloration::Dark,
            Coloration::Dark => Coloration::Light,
        }
    }

    /// Absolute difference between this coloration and a background brightness
    pub fn contrast(self, background: i32) -> u32 {
        self.brightness().abs_diff(background)
    }
}

/// The bounded drawing area. Coordinates run over `[0, width) x [0, height)`,
/// origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub width: f32,
    pub height: f32,
}

impl Area {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Uniformly random point inside the area
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(rng.gen_range(0.0..self.width), rng.gen_range(0.0..self.height))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }

    /// Area point to a world position, with the area centred on the world origin (y up)
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    /// Inverse of [`Area::to_world`]
    pub fn from_world(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x + self.width / 2.0, self.height / 2.0 - world.y)
    }
}

/// A single moth: a position in the area and a coloration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moth {
    pub position: Vec2,
    pub coloration: Coloration,
}

impl Moth {
    pub fn new(position: Vec2, coloration: Coloration) -> Self {
        Self {
            position,
            coloration,
        }
    }

    /// Moth with a random coloration at a random point of the area
    pub fn random(area: &Area, rng: &mut impl Rng) -> Self {
        Self::new(area.random_point(rng), Coloration::random(rng))
    }

    /// True when the moth blends into the given background
    pub fn is_camouflaged(&self, background: i32) -> bool {
        self.coloration.contrast(background) < CAMOUFLAGE_THRESHOLD
    }
}
