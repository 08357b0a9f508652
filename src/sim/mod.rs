//! Simulation module
//!
//! Pure and deterministic given a seed:
//! - Fixed logical timestep
//! - Seeded RNG only
//! - Stable iteration order (registry insertion order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod body;
pub mod collision;
pub mod registry;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use body::{Appearance, Body};
pub use collision::{
    CollisionResult, body_body_collision, collide_and_bounce, exchange_normal_velocity,
    resolve_all, resolve_contact,
};
pub use registry::{BodyRegistry, SpawnTimer};
pub use state::{SimConfig, SimPhase, SimState};
pub use tick::{TickInput, TickOutcome, tick};
