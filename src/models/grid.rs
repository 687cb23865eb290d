// src/models/grid.rs
//
// Grid sizing. The grid is never stored as cells, only as the number of
// columns and rows needed to keep the viewport covered while tiles move.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    // negative or NaN sizes collapse to zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDims {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: f32,
}

impl GridDims {
    /// Cells needed to cover `viewport`, plus `margin_cells` per axis so the
    /// grid stays gap-free while it scrolls. `cell_size` must be positive.
    pub fn for_viewport(viewport: Viewport, cell_size: f32, margin_cells: u32) -> Self {
        Self {
            columns: cells_along(viewport.width, cell_size) + margin_cells,
            rows: cells_along(viewport.height, cell_size) + margin_cells,
            cell_size,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Upper bound of the horizontal wrap band `[-cell_size, extent_x)`.
    /// With one margin cell this is `ceil(width / cell_size) * cell_size`.
    pub fn extent_x(&self) -> f32 {
        self.columns.saturating_sub(1) as f32 * self.cell_size
    }

    pub fn extent_y(&self) -> f32 {
        self.rows.saturating_sub(1) as f32 * self.cell_size
    }

    // one full cycle of the band: every column passes through once
    pub fn period_x(&self) -> f32 {
        self.columns as f32 * self.cell_size
    }

    pub fn period_y(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }
}

fn cells_along(extent: f32, cell_size: f32) -> u32 {
    if extent <= 0.0 {
        0
    } else {
        (extent / cell_size).ceil() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_grid() {
        let grid = GridDims::for_viewport(Viewport::new(800.0, 600.0), 400.0, 1);
        assert_eq!((grid.columns, grid.rows), (3, 3));
        assert_eq!(grid.cell_count(), 9);
        assert_eq!(grid.extent_x(), 800.0);
        assert_eq!(grid.extent_y(), 800.0);
        assert_eq!(grid.period_x(), 1200.0);
    }

    #[test]
    fn test_zero_viewport_yields_margin_only() {
        let grid = GridDims::for_viewport(Viewport::new(0.0, 0.0), 400.0, 1);
        assert_eq!((grid.columns, grid.rows), (1, 1));

        let grid = GridDims::for_viewport(Viewport::new(-20.0, f32::NAN), 50.0, 2);
        assert_eq!((grid.columns, grid.rows), (2, 2));
    }

    #[test]
    fn test_grid_always_covers_viewport() {
        let cell_sizes = [1.0, 37.5, 100.0, 333.0, 400.0, 1024.0];
        let sizes = [1.0, 99.0, 100.0, 101.0, 599.5, 800.0, 1919.0, 4096.0];

        for &cell in &cell_sizes {
            for &w in &sizes {
                for &h in &sizes {
                    let grid = GridDims::for_viewport(Viewport::new(w, h), cell, 1);
                    assert!(
                        (grid.columns - 1) as f32 * cell >= w,
                        "columns fail for w:{}, cell:{}",
                        w,
                        cell
                    );
                    assert!(
                        (grid.rows - 1) as f32 * cell >= h,
                        "rows fail for h:{}, cell:{}",
                        h,
                        cell
                    );
                }
            }
        }
    }

    #[test]
    fn test_extra_margin_widens_band() {
        let grid = GridDims::for_viewport(Viewport::new(800.0, 600.0), 400.0, 2);
        assert_eq!((grid.columns, grid.rows), (4, 4));
        assert_eq!(grid.extent_x(), 1200.0);
        assert_eq!(grid.period_x(), 1600.0);
    }
}
