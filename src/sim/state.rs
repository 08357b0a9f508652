//! Simulation context
//!
//! Everything a frame needs lives in [`SimState`], owned by the main loop
//! and handed to [`super::tick`] explicitly.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::arena::Arena;
use super::body::{Appearance, Body};
use super::registry::{BodyRegistry, SpawnTimer};
use crate::consts::SPAWN_INTERVAL_MS;

/// Lifecycle of the simulation. The only transition is Running -> Stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    Running,
    Stopped,
}

/// Construction parameters for a simulation
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub seed: u64,
    pub arena: Arena,
    pub spawn_interval_ms: f32,
    pub appearance: Appearance,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            arena: Arena::default(),
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            appearance: Appearance::Procedural,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub arena: Arena,
    pub appearance: Appearance,
    pub registry: BodyRegistry,
    pub spawn_timer: SpawnTimer,
    pub phase: SimPhase,
    /// Steps taken while running
    pub time_ticks: u64,
    /// Pair contacts resolved over the whole run
    pub total_contacts: u64,
    pub(super) rng: Pcg32,
}

impl SimState {
    /// Create a running simulation with one randomly placed body
    pub fn new(config: SimConfig) -> Self {
        let mut state = Self::empty(config);
        state.spawn_body();
        state
    }

    /// Create a running simulation with no bodies
    pub fn empty(config: SimConfig) -> Self {
        Self {
            seed: config.seed,
            arena: config.arena,
            appearance: config.appearance,
            registry: BodyRegistry::new(),
            spawn_timer: SpawnTimer::new(config.spawn_interval_ms),
            phase: SimPhase::Running,
            time_ticks: 0,
            total_contacts: 0,
            rng: Pcg32::seed_from_u64(config.seed),
        }
    }

    /// Append one random body to the registry
    pub fn spawn_body(&mut self) -> &Body {
        self.registry
            .spawn(&mut self.rng, self.arena, &self.appearance, None)
    }

    pub fn bodies(&self) -> &[Body] {
        self.registry.bodies()
    }

    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    pub fn stop(&mut self) {
        if self.phase == SimPhase::Running {
            log::info!(
                "Simulation stopped after {} ticks with {} bodies",
                self.time_ticks,
                self.registry.len()
            );
            self.phase = SimPhase::Stopped;
        }
    }
}
