//! Body-body collision detection and response
//!
//! Every pair of bodies is checked each frame (O(n²)). Overlapping pairs are
//! pushed apart along the line between their centers and exchange the
//! velocity components along that line, which is the equal-mass elastic
//! collision.

use glam::Vec2;
use rand::Rng;

use super::body::Body;

/// Result of a pair check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the bodies overlap
    pub hit: bool,
    /// Unit vector from the first body's center toward the second's
    pub normal: Vec2,
    /// Overlap depth (sum of radii minus center distance)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check two bodies for overlap.
///
/// Coincident centers have no defined normal, so a random nonzero direction
/// is drawn from `rng` instead.
pub fn body_body_collision<R: Rng + ?Sized>(a: &Body, b: &Body, rng: &mut R) -> CollisionResult {
    let mut delta = b.pos - a.pos;
    let mut dist = delta.length();

    if dist == 0.0 {
        delta = random_displacement(rng);
        dist = delta.length();
    }

    let min_dist = a.radius() + b.radius();
    if dist >= min_dist {
        return CollisionResult::miss();
    }

    CollisionResult {
        hit: true,
        normal: delta / dist,
        penetration: min_dist - dist,
    }
}

/// Separate a colliding pair and exchange their normal velocities
pub fn resolve_contact(a: &mut Body, b: &mut Body, contact: &CollisionResult) {
    if !contact.hit {
        return;
    }

    let n = contact.normal;
    let half = contact.penetration / 2.0;
    a.pos -= n * half;
    b.pos += n * half;

    let (va, vb) = exchange_normal_velocity(a.vel, b.vel, n);
    a.vel = va;
    b.vel = vb;
}

/// Detect and resolve in one go. Returns true if the pair was in contact.
pub fn collide_and_bounce<R: Rng + ?Sized>(a: &mut Body, b: &mut Body, rng: &mut R) -> bool {
    let contact = body_body_collision(a, b, rng);
    resolve_contact(a, b, &contact);
    contact.hit
}

/// Resolve every unique pair `(i, j)`, `i < j`, in slice order.
///
/// Resolution mutates in place, so in dense clusters the result depends on
/// this order. Returns the number of contacts.
pub fn resolve_all<R: Rng + ?Sized>(bodies: &mut [Body], rng: &mut R) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if collide_and_bounce(a, b, rng) {
                contacts += 1;
            }
        }
    }
    contacts
}

/// Swap the components of `v1` and `v2` along unit normal `n`.
///
/// v1' = v1 + (v2·n - v1·n) n
/// v2' = v2 + (v1·n - v2·n) n
#[inline]
pub fn exchange_normal_velocity(v1: Vec2, v2: Vec2, n: Vec2) -> (Vec2, Vec2) {
    let v1n = v1.dot(n);
    let v2n = v2.dot(n);
    (v1 + (v2n - v1n) * n, v2 + (v1n - v2n) * n)
}

fn random_displacement<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    loop {
        let d = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        if d != Vec2::ZERO {
            return d;
        }
    }
}
