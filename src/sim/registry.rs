//! Ordered collection of live bodies and the spawn timer

use glam::Vec2;
use rand::Rng;

use super::arena::Arena;
use super::body::{Appearance, Body};
use super::collision::resolve_all;

/// Owns every body in the simulation.
///
/// Append-only: bodies are never removed, so the collection grows for the
/// life of the process. Insertion order is also pair-processing order.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Create a random body and append it
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        arena: Arena,
        appearance: &Appearance,
        position: Option<Vec2>,
    ) -> &Body {
        let body = Body::spawn(rng, arena, appearance, position);
        self.push(body)
    }

    /// Append an already-built body
    pub fn push(&mut self, body: Body) -> &Body {
        self.bodies.push(body);
        &self.bodies[self.bodies.len() - 1]
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance every body by `dt`
    pub fn integrate_all(&mut self, dt: f32, arena: Arena) {
        for body in &mut self.bodies {
            body.integrate(dt, arena);
        }
    }

    /// Run the pair resolver over all bodies, returning the contact count
    pub fn resolve_collisions<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        resolve_all(&mut self.bodies, rng)
    }

    /// Sum of kinetic energy with unit masses
    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

/// Elapsed-time accumulator that fires at most once per check
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTimer {
    interval_ms: f32,
    accumulated_ms: f32,
}

impl SpawnTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            accumulated_ms: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f32 {
        self.interval_ms
    }

    pub fn accumulated_ms(&self) -> f32 {
        self.accumulated_ms
    }

    /// Add elapsed time. Returns true once the accumulator reaches the
    /// interval (`>=`, so a frame landing exactly on it fires, as a periodic
    /// timer event would), and restarts it from zero. Any excess beyond one
    /// interval is dropped, so a long frame never spawns twice.
    pub fn advance(&mut self, elapsed_ms: f32) -> bool {
        self.accumulated_ms += elapsed_ms.max(0.0);
        if self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms = 0.0;
            true
        } else {
            false
        }
    }
}
