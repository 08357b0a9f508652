//! Ball sprite loading
//!
//! The sprite is fully decoded so a damaged file is rejected rather than
//! half-loaded. Only its dimensions reach the simulation (they fix every
//! body's radius). Any failure is reported as an [`AssetError`] and the
//! caller falls back to procedurally colored circles.

use std::path::{Path, PathBuf};

use crate::sim::Appearance;

/// Errors from sprite loading
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to load {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The sprite must be at least 2 pixels wide so the radius is positive
    #[error("sprite is too small ({width}x{height})")]
    TooSmall { width: u32, height: u32 },
}

/// A loaded ball sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallSprite {
    pub width: u32,
    pub height: u32,
}

impl BallSprite {
    /// Decode the image at `path`
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let image = image::open(path).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_dimensions(image.width(), image.height())
    }

    fn from_dimensions(width: u32, height: u32) -> Result<Self, AssetError> {
        if width < 2 || height < 2 {
            return Err(AssetError::TooSmall { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn appearance(&self) -> Appearance {
        Appearance::Sprite {
            width: self.width,
            height: self.height,
        }
    }
}

/// Try to load the sprite at `path`, falling back to procedural circles.
///
/// `None` means no sprite was configured at all.
pub fn load_appearance(path: Option<&Path>) -> Appearance {
    let Some(path) = path else {
        log::info!("No sprite configured, drawing procedural circles");
        return Appearance::Procedural;
    };

    match BallSprite::load(path) {
        Ok(sprite) => {
            log::info!(
                "Loaded sprite {} ({}x{})",
                path.display(),
                sprite.width,
                sprite.height
            );
            sprite.appearance()
        }
        Err(e) => {
            log::warn!("Sprite unavailable ({}), drawing procedural circles", e);
            Appearance::Procedural
        }
    }
}
