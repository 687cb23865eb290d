// src/animation/wrap.rs
//
// Per-tick movement. Every tile advances by direction * speed, then any
// tile that left the band [-cell_size, extent) re-enters from the opposite
// edge. Wrapping shifts by whole grid periods, so a wrapped tile lands
// exactly where its grid neighbours expect it and no seam opens up, for
// axis-aligned and diagonal motion alike.

use crate::config::EngineConfig;
use crate::models::{GridDims, Tile};

pub struct WrapEngine {
    scroll_speed: f32,
    round_to_pixel: bool,
}

impl WrapEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            scroll_speed: config.animation.scroll_speed,
            round_to_pixel: config.grid.round_to_pixel,
        }
    }

    /// Runs one tick for every tile, in collection order.
    pub fn advance<I>(&self, tiles: &mut [Tile<I>], grid: &GridDims) {
        for tile in tiles.iter_mut() {
            self.advance_tile(tile, grid);
        }
    }

    fn advance_tile<I>(&self, tile: &mut Tile<I>, grid: &GridDims) {
        let mut x = tile.x + tile.direction.x * self.scroll_speed;
        let mut y = tile.y + tile.direction.y * self.scroll_speed;
        if self.round_to_pixel {
            x = x.round();
            y = y.round();
        }

        // an axis the tile does not move along never wraps
        if tile.direction.x != 0.0 {
            x = wrap_axis(x, grid.cell_size, grid.extent_x(), grid.period_x());
        }
        if tile.direction.y != 0.0 {
            y = wrap_axis(y, grid.cell_size, grid.extent_y(), grid.period_y());
        }

        tile.x = x;
        tile.y = y;
    }
}

/// Folds `position` back into `[-cell_size, extent)`. `period` must equal
/// `extent + cell_size`. Positions already inside the band are untouched.
pub fn wrap_axis(position: f32, cell_size: f32, extent: f32, period: f32) -> f32 {
    if position >= -cell_size && position < extent {
        return position;
    }

    let wrapped = (position + cell_size).rem_euclid(period) - cell_size;
    // rem_euclid can round up to `period` for values just below a multiple
    if wrapped >= extent {
        wrapped - period
    } else {
        wrapped
    }
}
