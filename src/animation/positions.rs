// src/animation/positions.rs
//
// Lays tiles out on the grid in fill order and assigns each its direction.
// Positions are always recomputed from scratch, so this is safe to rerun
// between ticks after a resize.

use crate::config::AnimationConfig;
use crate::models::{Direction, GridDims, Tile};

/// Places tile `i` at column `i % columns`, row `i / columns`, shifted one
/// cell up-left so the off-screen margin is populated from the first frame.
/// Tiles beyond the cell count stack onto the grid again from row 0.
pub fn initialize_positions<I>(
    tiles: &mut [Tile<I>],
    grid: &GridDims,
    config: &AnimationConfig,
) {
    let columns = grid.columns.max(1) as usize;
    let rows = grid.rows.max(1) as usize;

    for (i, tile) in tiles.iter_mut().enumerate() {
        let col = i % columns;
        let row = (i / columns) % rows;

        tile.x = (col as f32 - 1.0) * grid.cell_size;
        tile.y = (row as f32 - 1.0) * grid.cell_size;
        tile.direction = direction_for(col, row, config);
    }
}

/// Alternation only applies to axis-aligned motion: horizontal scrolling
/// flips every other row, vertical scrolling every other column.
pub fn direction_for(col: usize, row: usize, config: &AnimationConfig) -> Direction {
    let base = config.direction;
    if !config.alternating_columns || !base.is_axis_aligned() {
        return base;
    }

    if base.is_horizontal() {
        let sign = if (row + 1) % 2 == 0 { 1.0 } else { -1.0 };
        Direction::new(sign * base.x, 0.0)
    } else {
        let sign = if (col + 1) % 2 == 0 { 1.0 } else { -1.0 };
        Direction::new(0.0, sign * base.y)
    }
}
