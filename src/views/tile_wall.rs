// src/views/tile_wall.rs
//
// The TileWall is the animation instance. It owns its config, the source
// images, the tile collection and the frame scheduler, and exposes the
// operations the host drives: tick, render, resize.

use rand::Rng;
use std::sync::Arc;

use crate::{
    animation::{
        initialize_positions, FrameScheduler, StopToken, TickSource, TileSetBuilder, WrapEngine,
    },
    config::EngineConfig,
    error::TileWallError,
    models::{GridDims, Tile, TileSource, Viewport},
    render::{is_visible, render_buffer, TileRect, TileRenderer},
};

pub struct TileWall<I> {
    config: EngineConfig,
    viewport: Viewport,
    grid: GridDims,

    // deduped, possibly shuffled, in fill order
    sources: Vec<Arc<TileSource<I>>>,
    tiles: Vec<Tile<I>>,

    builder: TileSetBuilder,
    wrap: WrapEngine,
    scheduler: FrameScheduler,
}

impl<I> TileWall<I> {
    pub fn new<R>(
        config: EngineConfig,
        sources: Vec<TileSource<I>>,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self, TileWallError>
    where
        R: Rng + ?Sized,
    {
        config.validate()?;

        let builder = TileSetBuilder::new(&config.animation);
        let sources = builder.prepare(sources, rng);
        let grid = GridDims::for_viewport(
            viewport,
            config.animation.cell_size(),
            config.grid.margin_cells,
        );
        let tiles = builder.fill(&sources, grid.cell_count())?;

        let mut wall = Self {
            wrap: WrapEngine::new(&config),
            scheduler: FrameScheduler::new(&config.scheduler),
            builder,
            config,
            viewport,
            grid,
            sources,
            tiles,
        };
        initialize_positions(&mut wall.tiles, &wall.grid, &wall.config.animation);

        log::info!(
            "Tile wall ready: {} tiles from {} covers on a {}x{} grid, {:.1} ms per frame",
            wall.tiles.len(),
            wall.sources.len(),
            wall.grid.columns,
            wall.grid.rows,
            wall.scheduler.frame_interval_ms()
        );
        Ok(wall)
    }

    /************************** Re-initialisation ***************************** */

    /// Re-sizes the grid for `viewport` and lays every tile out again from
    /// scratch. The source order is kept; nothing is reshuffled.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), TileWallError> {
        let viewport = Viewport::new(viewport.width, viewport.height);
        if viewport == self.viewport {
            return Ok(());
        }

        let grid = GridDims::for_viewport(
            viewport,
            self.config.animation.cell_size(),
            self.config.grid.margin_cells,
        );
        self.tiles = self.builder.fill(&self.sources, grid.cell_count())?;
        self.viewport = viewport;
        self.grid = grid;
        initialize_positions(&mut self.tiles, &self.grid, &self.config.animation);

        log::info!(
            "Resized to {}x{}: {} tiles on a {}x{} grid",
            viewport.width,
            viewport.height,
            self.tiles.len(),
            grid.columns,
            grid.rows
        );
        Ok(())
    }

    /// Swaps in a new image set. On error the current set stays in place.
    pub fn replace_sources<R>(
        &mut self,
        sources: Vec<TileSource<I>>,
        rng: &mut R,
    ) -> Result<(), TileWallError>
    where
        R: Rng + ?Sized,
    {
        let sources = self.builder.prepare(sources, rng);
        let mut tiles = self.builder.fill(&sources, self.grid.cell_count())?;
        initialize_positions(&mut tiles, &self.grid, &self.config.animation);

        self.sources = sources;
        self.tiles = tiles;
        log::info!("Replaced covers: {} unique", self.sources.len());
        Ok(())
    }

    /************************** Animation ***************************** */

    /// Advances every tile by one tick, wrapping at the band edges.
    pub fn step(&mut self) {
        self.wrap.advance(&mut self.tiles, &self.grid);
    }

    /// Host tick entry point. Steps only when a frame interval has passed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.scheduler.offer(now_ms) {
            self.step();
            true
        } else {
            false
        }
    }

    /// Draws every visible tile that has an image. Returns the number drawn.
    pub fn render<R>(&self, renderer: &mut R) -> usize
    where
        R: TileRenderer<I> + ?Sized,
    {
        if self.viewport.is_empty() {
            return 0;
        }

        let cell_size = self.grid.cell_size;
        let overlap = self.config.grid.overlap;
        let mut drawn = 0;

        for tile in &self.tiles {
            let buffer = render_buffer(tile, cell_size, self.config.animation.scroll_speed);
            if !is_visible(tile, &self.viewport, cell_size, buffer) {
                continue;
            }
            let image = match tile.image() {
                Some(image) => image,
                None => {
                    log::trace!("No image for {}, skipping", tile.url());
                    continue;
                }
            };

            let rect = TileRect {
                x: tile.x,
                y: tile.y,
                width: tile.width + overlap,
                height: tile.height + overlap,
            };
            renderer.draw(image, rect, self.config.animation.border_radius);
            drawn += 1;
        }
        drawn
    }

    /// Drives the wall from `ticks` until the source ends or `stop` is
    /// raised: every tick that clears the frame gate steps and renders once.
    pub fn run<T, R>(&mut self, ticks: &mut T, stop: &StopToken, renderer: &mut R) -> u64
    where
        T: TickSource + ?Sized,
        R: TileRenderer<I> + ?Sized,
    {
        let mut scheduler = self.scheduler.clone();
        let passes = scheduler.run(ticks, stop, |_| {
            self.step();
            let drawn = self.render(renderer);
            log::trace!("Pass drew {} tiles", drawn);
        });
        self.scheduler = scheduler;
        passes
    }

    /************************** Accessors ***************************** */

    pub fn tiles(&self) -> &[Tile<I>] {
        &self.tiles
    }

    pub fn sources(&self) -> &[Arc<TileSource<I>>] {
        &self.sources
    }

    pub fn grid(&self) -> &GridDims {
        &self.grid
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
