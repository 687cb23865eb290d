// src/render/mod.rs
// The tile drawing seam.
// The wall decides what to draw and where; a TileRenderer does the drawing.

pub mod tile_draw;

pub use tile_draw::{rounded_rect_points, NannouTileRenderer};

use crate::models::{Tile, Viewport};

/// Top-left anchored rectangle in viewport pixels, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub trait TileRenderer<I> {
    /// Clips to a rounded rectangle and fills it with `image`.
    fn draw(&mut self, image: &I, rect: TileRect, corner_radius: f32);
}

/// Slack around the viewport within which a moving tile still counts as
/// visible, so tiles never pop in at the edges.
pub fn render_buffer<I>(tile: &Tile<I>, cell_size: f32, scroll_speed: f32) -> f32 {
    let speed = (tile.direction.x * scroll_speed).hypot(tile.direction.y * scroll_speed);
    cell_size + speed * 10.0
}

pub fn is_visible<I>(tile: &Tile<I>, viewport: &Viewport, cell_size: f32, buffer: f32) -> bool {
    tile.x + cell_size >= -buffer
        && tile.x <= viewport.width + buffer
        && tile.y + cell_size >= -buffer
        && tile.y <= viewport.height + buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, TileSource};
    use std::sync::Arc;

    fn tile_at(x: f32, y: f32, direction: Direction) -> Tile<()> {
        let mut tile = Tile::new(Arc::new(TileSource::new("t", Some(()))), 100.0);
        tile.x = x;
        tile.y = y;
        tile.direction = direction;
        tile
    }

    #[test]
    fn test_render_buffer_scales_with_speed() {
        let still = tile_at(0.0, 0.0, Direction::new(0.0, 0.0));
        assert_eq!(render_buffer(&still, 100.0, 2.0), 100.0);

        let moving = tile_at(0.0, 0.0, Direction::new(0.6, 0.8));
        assert!((render_buffer(&moving, 100.0, 5.0) - 150.0).abs() < 1e-4);
    }

    #[test]
    fn test_visibility_culling() {
        let viewport = Viewport::new(800.0, 600.0);
        let d = Direction::new(1.0, 0.0);

        assert!(is_visible(&tile_at(0.0, 0.0, d), &viewport, 100.0, 0.0));
        assert!(is_visible(&tile_at(-100.0, 0.0, d), &viewport, 100.0, 0.0));
        assert!(!is_visible(&tile_at(-101.0, 0.0, d), &viewport, 100.0, 0.0));
        assert!(!is_visible(&tile_at(801.0, 0.0, d), &viewport, 100.0, 0.0));
        assert!(is_visible(&tile_at(801.0, 0.0, d), &viewport, 100.0, 20.0));
        assert!(!is_visible(&tile_at(0.0, 650.0, d), &viewport, 100.0, 20.0));
    }
}
