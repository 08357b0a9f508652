//! Rendering module
//!
//! Builds per-frame vertex batches from the live bodies. Uploading and
//! drawing them is the platform's job; both vertex types are `Pod`, so a GPU
//! backend can `bytemuck::cast_slice` them straight into buffers.

pub mod shapes;
pub mod vertex;

pub use vertex::{SpriteVertex, Vertex, colors};

use glam::Vec2;

use crate::sim::{Appearance, Body};

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default)]
pub struct FrameBatch {
    pub clear_color: [f32; 4],
    /// Procedural bodies as triangle fans
    pub circles: Vec<Vertex>,
    /// Sprite bodies as textured quads
    pub sprites: Vec<SpriteVertex>,
    pub body_count: usize,
}

impl FrameBatch {
    /// Total vertex payload in bytes
    pub fn byte_len(&self) -> usize {
        bytemuck::cast_slice::<Vertex, u8>(&self.circles).len()
            + bytemuck::cast_slice::<SpriteVertex, u8>(&self.sprites).len()
    }
}

/// Build the draw batch for the current bodies
pub fn build_frame(bodies: &[Body], appearance: &Appearance) -> FrameBatch {
    let mut batch = FrameBatch {
        clear_color: colors::BACKGROUND,
        body_count: bodies.len(),
        ..Default::default()
    };

    match *appearance {
        Appearance::Sprite { width, height } => {
            let size = Vec2::new(width as f32, height as f32);
            batch.sprites.reserve(bodies.len() * 6);
            for body in bodies {
                batch.sprites.extend(shapes::sprite_quad(body.pos(), size));
            }
        }
        Appearance::Procedural => {
            for body in bodies {
                let color = vertex::rgb8_to_rgba(body.color());
                batch
                    .circles
                    .extend(shapes::disc(body.pos(), body.radius(), color));
            }
        }
    }

    batch
}
