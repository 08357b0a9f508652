//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Flat-colored vertex for procedural balls
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn at(pos: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: pos.to_array(),
            color,
        }
    }
}

/// Textured vertex for sprite quads
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl SpriteVertex {
    pub fn at(pos: Vec2, uv: Vec2) -> Self {
        Self {
            position: pos.to_array(),
            uv: uv.to_array(),
        }
    }
}

/// Opaque normalized color from a body's 8-bit RGB
pub fn rgb8_to_rgba([r, g, b]: [u8; 3]) -> [f32; 4] {
    let [r, g, b] = [r, g, b].map(|c| f32::from(c) / 255.0);
    [r, g, b, 1.0]
}

pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
