//! Windowless platform
//!
//! Stands in for a real window: it never receives user input, asks to quit
//! after an optional frame limit, and keeps just enough of what it was
//! given to be inspected.

use super::{Platform, PlatformEvent};
use crate::renderer::FrameBatch;

#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    frame_limit: Option<u64>,
    frames_presented: u64,
    title: String,
    last_batch_bytes: usize,
}

impl HeadlessPlatform {
    /// `frame_limit` of `None` runs until the process is killed
    pub fn new(frame_limit: Option<u64>) -> Self {
        Self {
            frame_limit,
            ..Default::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn last_batch_bytes(&self) -> usize {
        self.last_batch_bytes
    }
}

impl Platform for HeadlessPlatform {
    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        match self.frame_limit {
            Some(limit) if self.frames_presented >= limit => vec![PlatformEvent::Quit],
            _ => Vec::new(),
        }
    }

    fn present(&mut self, batch: &FrameBatch) {
        self.frames_presented += 1;
        self.last_batch_bytes = batch.byte_len();
    }

    fn set_title(&mut self, title: &str) {
        if self.title != title {
            log::debug!("title: {}", title);
            self.title.clear();
            self.title.push_str(title);
        }
    }
}
