//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::Settings;

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "BOUNCING_BALLS_SETTINGS";

/// Auto-spawning bouncing balls
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about)]
pub struct Args {
    /// JSON settings file
    #[arg(short, long, env = SETTINGS_ENV)]
    pub settings: Option<PathBuf>,

    /// RNG seed, overrides the settings file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Quit after this many frames, overrides the settings file
    #[arg(short, long)]
    pub frames: Option<u64>,
}

impl Args {
    /// Apply command line overrides on top of loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(frames) = self.frames {
            settings.max_frames = Some(frames);
        }
    }
}
