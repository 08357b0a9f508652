//! Bouncing Balls - circles that spawn on a timer and bounce off each other
//!
//! Core modules:
//! - `sim`: Simulation (bodies, collisions, registry, per-frame step)
//! - `renderer`: Draw batches built from the current bodies
//! - `platform`: Event polling, presentation and frame pacing
//! - `asset`: Optional ball sprite loading
//! - `settings`: Runtime configuration
//! - `cli`: Command line arguments

pub mod asset;
pub mod cli;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use asset::{AssetError, BallSprite};
pub use settings::{Settings, SettingsError};

/// Simulation configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Frame cap
    pub const TARGET_FPS: u32 = 120;

    /// A new body appears every this many milliseconds
    pub const SPAWN_INTERVAL_MS: f32 = 125.0;

    /// Logical integration step, independent of wall-clock frame time
    pub const STEP_DT: f32 = 1.0;

    /// Initial speed range (units per step)
    pub const MIN_SPAWN_SPEED: f32 = 0.9;
    pub const MAX_SPAWN_SPEED: f32 = 1.9;

    /// Radius range used when no sprite is available (inclusive)
    pub const FALLBACK_MIN_RADIUS: u32 = 12;
    pub const FALLBACK_MAX_RADIUS: u32 = 14;

    /// Per-channel color range (inclusive)
    pub const MIN_COLOR_CHANNEL: u8 = 50;
    pub const MAX_COLOR_CHANNEL: u8 = 200;

    /// Window title prefix, followed by the live body count
    pub const TITLE_PREFIX: &str = "Bouncing balls - Total: ";
}

/// Window title for the given number of live bodies
pub fn window_title(body_count: usize) -> String {
    format!("{}{}", consts::TITLE_PREFIX, body_count)
}
