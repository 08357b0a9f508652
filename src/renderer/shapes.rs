//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{SpriteVertex, Vertex};

/// Triangle fan for a filled procedural ball.
///
/// The rim is sampled once and shared by neighbouring triangles, so adjacent
/// fan slices meet exactly.
pub fn disc(center: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let segments = circle_segments(radius) as usize;
    let step = TAU / segments as f32;
    let rim: Vec<Vec2> = (0..segments)
        .map(|i| center + Vec2::from_angle(i as f32 * step) * radius)
        .collect();

    let hub = Vertex::at(center, color);
    let mut vertices = Vec::with_capacity(segments * 3);
    for (i, &a) in rim.iter().enumerate() {
        let b = rim[(i + 1) % segments];
        vertices.extend([hub, Vertex::at(a, color), Vertex::at(b, color)]);
    }
    vertices
}

/// Two triangles covering a `size` sprite centered on `center`
pub fn sprite_quad(center: Vec2, size: Vec2) -> [SpriteVertex; 6] {
    let min = center - size / 2.0;
    let corner = |uv: Vec2| SpriteVertex::at(min + size * uv, uv);

    [
        corner(Vec2::ZERO),
        corner(Vec2::X),
        corner(Vec2::Y),
        corner(Vec2::Y),
        corner(Vec2::X),
        corner(Vec2::ONE),
    ]
}

/// Segment count that keeps circle edges smooth at the given radius
pub fn circle_segments(radius: f32) -> u32 {
    (radius * 1.5).clamp(12.0, 64.0) as u32
}
