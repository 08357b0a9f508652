//! Platform abstraction layer
//!
//! The simulation talks to the outside world through [`Platform`]:
//! - Input events (quit)
//! - Presenting a frame batch
//! - Window title updates
//!
//! [`FrameClock`] paces the loop and [`run`] ties everything together.

pub mod clock;
pub mod headless;

pub use clock::FrameClock;
pub use headless::HeadlessPlatform;

use crate::consts::STEP_DT;
use crate::renderer::{FrameBatch, build_frame};
use crate::sim::{SimState, TickInput, tick};
use crate::window_title;

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    Quit,
}

/// Window/input backend
pub trait Platform {
    /// Drain pending input events
    fn poll_events(&mut self) -> Vec<PlatformEvent>;
    /// Draw a frame
    fn present(&mut self, batch: &FrameBatch);
    /// Replace the window title
    fn set_title(&mut self, title: &str);
}

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub bodies: usize,
    pub contacts: u64,
}

/// How often frame stats are logged at debug level
const STATS_EVERY_FRAMES: u64 = 120;

/// Run the simulation until the platform asks to quit
pub fn run<P: Platform>(state: &mut SimState, platform: &mut P, clock: &mut FrameClock) -> RunSummary {
    let mut frames = 0;

    while state.is_running() {
        let elapsed = clock.tick();

        let quit = platform
            .poll_events()
            .iter()
            .any(|e| *e == PlatformEvent::Quit);

        let input = TickInput {
            elapsed_ms: elapsed.as_secs_f32() * 1000.0,
            quit,
        };
        let outcome = tick(state, &input, STEP_DT);
        if !state.is_running() {
            break;
        }

        if outcome.spawned {
            log::trace!("Spawned body #{}", state.registry.len());
        }

        let batch = build_frame(state.bodies(), &state.appearance);
        platform.present(&batch);
        platform.set_title(&window_title(state.registry.len()));

        frames += 1;
        if frames % STATS_EVERY_FRAMES == 0 {
            log::debug!(
                "frame {}: {} bodies, {} contacts this frame, {:.1} ms",
                frames,
                state.registry.len(),
                outcome.contacts,
                input.elapsed_ms
            );
        }
    }

    RunSummary {
        frames,
        bodies: state.registry.len(),
        contacts: state.total_contacts,
    }
}
