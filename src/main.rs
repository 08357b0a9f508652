//! Bouncing Balls entry point
//!
//! Loads settings and the optional sprite, then runs the simulation on the
//! headless platform until its frame limit is reached.

use clap::Parser;

use bouncing_balls::Settings;
use bouncing_balls::asset::load_appearance;
use bouncing_balls::cli::Args;
use bouncing_balls::platform::{FrameClock, HeadlessPlatform, run};
use bouncing_balls::sim::SimState;

fn main() {
    let args = Args::parse();
    env_logger::init();
    log::info!("Bouncing balls starting...");

    let mut settings = Settings::load(args.settings.as_deref());
    args.apply(&mut settings);
    let seed = settings.resolve_seed();
    log::info!("Simulation seed: {}", seed);

    let appearance = load_appearance(settings.sprite_path.as_deref());
    let mut state = SimState::new(settings.sim_config(seed, appearance));

    let mut platform = HeadlessPlatform::new(settings.max_frames);
    let mut clock = FrameClock::new(settings.target_fps);

    log::info!(
        "Arena {}x{}, spawning every {} ms at up to {} fps",
        settings.arena_width,
        settings.arena_height,
        settings.spawn_interval_ms,
        settings.target_fps
    );

    let summary = run(&mut state, &mut platform, &mut clock);

    log::info!(
        "Finished after {} frames: {} bodies, {} contacts resolved",
        summary.frames,
        summary.bodies,
        summary.contacts
    );
}
