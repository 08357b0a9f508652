//! A single circular body and its kinematics

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::arena::Arena;
use crate::consts::*;

/// How bodies look, decided once at startup.
///
/// With a sprite every body shares the sprite's size, otherwise each body
/// gets its own random radius and is drawn as a filled circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    Sprite { width: u32, height: u32 },
    #[default]
    Procedural,
}

impl Appearance {
    /// Pick a radius for a new body
    pub fn sample_radius<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        match *self {
            Appearance::Sprite { width, .. } => (width / 2) as f32,
            Appearance::Procedural => {
                rng.random_range(FALLBACK_MIN_RADIUS..=FALLBACK_MAX_RADIUS) as f32
            }
        }
    }
}

/// A moving circle.
///
/// Fields are private: radius and color are fixed at construction, and
/// position/velocity only change through [`Body::integrate`] and the
/// collision resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(super) pos: Vec2,
    pub(super) vel: Vec2,
    radius: f32,
    color: [u8; 3],
}

impl Body {
    /// Create a body with random velocity and color.
    ///
    /// When `position` is `None` the center is sampled uniformly so the body
    /// starts fully inside the arena.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        arena: Arena,
        appearance: &Appearance,
        position: Option<Vec2>,
    ) -> Self {
        let radius = appearance.sample_radius(rng);

        let pos = position.unwrap_or_else(|| {
            let x = sample_axis(rng, radius, arena.width);
            let y = sample_axis(rng, radius, arena.height);
            Vec2::new(x, y)
        });

        let speed = rng.random_range(MIN_SPAWN_SPEED..=MAX_SPAWN_SPEED);
        let angle = rng.random_range(0.0..TAU);
        let vel = Vec2::new(angle.cos(), angle.sin()) * speed;

        let color = [
            rng.random_range(MIN_COLOR_CHANNEL..=MAX_COLOR_CHANNEL),
            rng.random_range(MIN_COLOR_CHANNEL..=MAX_COLOR_CHANNEL),
            rng.random_range(MIN_COLOR_CHANNEL..=MAX_COLOR_CHANNEL),
        ];

        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Build a body from explicit state (scripted scenarios, tests)
    pub fn from_parts(pos: Vec2, vel: Vec2, radius: f32, color: [u8; 3]) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// Kinetic energy with unit mass
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.vel.length_squared()
    }

    /// Advance by `vel * dt`, then bounce off the arena walls.
    ///
    /// Each axis is handled independently: a body past a wall is clamped
    /// back onto it and that velocity component is negated.
    pub fn integrate(&mut self, dt: f32, arena: Arena) {
        self.pos += self.vel * dt;

        reflect_axis(&mut self.pos.x, &mut self.vel.x, self.radius, arena.width);
        reflect_axis(&mut self.pos.y, &mut self.vel.y, self.radius, arena.height);
    }
}

fn reflect_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32) {
    if *pos > extent - radius {
        *pos = extent - radius;
        *vel = -*vel;
    } else if *pos < radius {
        *pos = radius;
        *vel = -*vel;
    }
}

/// Uniform sample in `[radius, extent - radius]`.
/// Falls back to the midpoint when the body is wider than the arena.
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, radius: f32, extent: f32) -> f32 {
    let hi = extent - radius;
    if hi < radius {
        extent / 2.0
    } else {
        rng.random_range(radius..=hi)
    }
}
