// src/models/tile.rs
//
// A tile is one positioned instance of a source image on the wall.
// Several tiles may share one source when the grid needs more cells
// than there are distinct images.

use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Direction {
    pub x: f32,
    pub y: f32,
}

impl Direction {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    // exactly one component is nonzero
    pub fn is_axis_aligned(&self) -> bool {
        (self.x != 0.0) != (self.y != 0.0)
    }

    pub fn is_horizontal(&self) -> bool {
        self.x != 0.0 && self.y == 0.0
    }

    pub fn is_vertical(&self) -> bool {
        self.x == 0.0 && self.y != 0.0
    }

    pub fn magnitude(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// A loaded image keyed by the URL it came from. `image` is `None` when the
/// loader could not produce a handle; such tiles are skipped at draw time.
#[derive(Debug)]
pub struct TileSource<I> {
    pub url: String,
    pub image: Option<I>,
}

impl<I> TileSource<I> {
    pub fn new(url: impl Into<String>, image: Option<I>) -> Self {
        Self {
            url: url.into(),
            image,
        }
    }
}

pub struct Tile<I> {
    pub source: Arc<TileSource<I>>,
    pub x: f32, // top-left, pixels
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub direction: Direction,
}

impl<I> Tile<I> {
    pub fn new(source: Arc<TileSource<I>>, size: f32) -> Self {
        Self {
            source,
            x: 0.0,
            y: 0.0,
            width: size,
            height: size,
            direction: Direction::default(),
        }
    }

    pub fn url(&self) -> &str {
        &self.source.url
    }

    pub fn image(&self) -> Option<&I> {
        self.source.image.as_ref()
    }
}

impl<I> Clone for Tile<I> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            direction: self.direction,
        }
    }
}

impl<I> fmt::Debug for Tile<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tile")
            .field("url", &self.source.url)
            .field("loaded", &self.source.image.is_some())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("direction", &self.direction)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_classification() {
        assert!(Direction::new(1.0, 0.0).is_horizontal());
        assert!(Direction::new(0.0, -1.0).is_vertical());
        assert!(Direction::new(-0.5, 0.0).is_axis_aligned());
        assert!(!Direction::new(0.9, 1.0).is_axis_aligned());
        assert!(!Direction::new(0.0, 0.0).is_axis_aligned());
    }

    #[test]
    fn test_duplicate_tiles_share_source() {
        let source = Arc::new(TileSource::new("a.jpg", Some(7u8)));
        let first = Tile::new(Arc::clone(&source), 100.0);
        let mut second = first.clone();
        second.x = 50.0;

        assert!(Arc::ptr_eq(&first.source, &second.source));
        assert_eq!(first.x, 0.0);
        assert_eq!(second.image(), Some(&7));
        assert_eq!(second.width, 100.0);
    }
}
