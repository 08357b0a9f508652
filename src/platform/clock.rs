//! Frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a target frame rate.
///
/// Sleeps away whatever is left of the frame budget; frames that run long
/// are not compensated.
#[derive(Debug)]
pub struct FrameClock {
    frame_budget: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last: Instant::now(),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Wait out the rest of the frame and return the time since the last call
    pub fn tick(&mut self) -> Duration {
        let busy = self.last.elapsed();
        if busy < self.frame_budget {
            thread::sleep(self.frame_budget - busy);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}
