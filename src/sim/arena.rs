//! The rectangular playfield bodies are confined to

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Arena bounds. The playable rectangle spans `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True if a circle of `radius` at `pos` lies entirely inside the arena
    pub fn contains(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let arena = Arena::new(100.0, 50.0);
        assert!(arena.contains(Vec2::new(50.0, 25.0), 10.0));
        assert!(arena.contains(Vec2::new(10.0, 10.0), 10.0));
        assert!(arena.contains(Vec2::new(90.0, 40.0), 10.0));
        assert!(!arena.contains(Vec2::new(9.9, 25.0), 10.0));
        assert!(!arena.contains(Vec2::new(50.0, 40.5), 10.0));
    }
}
