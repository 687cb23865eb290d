// src/animation/tile_set.rs
//
// Turns the supplied source images into the tile collection:
// dedupe by URL, optionally shuffle, then repeat sources until every
// grid cell has a tile.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::AnimationConfig;
use crate::error::TileWallError;
use crate::models::{Tile, TileSource};

pub struct TileSetBuilder {
    tile_size: f32,
    should_shuffle: bool,
}

impl TileSetBuilder {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            tile_size: config.tile_size,
            should_shuffle: config.should_shuffle,
        }
    }

    /// Dedupes `sources` (first occurrence of a URL wins), drops sources
    /// without a loaded image, and shuffles the result when shuffling is
    /// enabled. The returned order is the fill order.
    pub fn prepare<I, R>(
        &self,
        sources: Vec<TileSource<I>>,
        rng: &mut R,
    ) -> Vec<Arc<TileSource<I>>>
    where
        R: Rng + ?Sized,
    {
        let mut unique = dedupe(sources);
        unique.retain(|source| {
            if source.image.is_none() {
                log::warn!("No image for {}, leaving it off the wall", source.url);
            }
            source.image.is_some()
        });
        if self.should_shuffle {
            // Fisher-Yates
            unique.shuffle(rng);
        }
        unique
    }

    /// One tile per prepared source, then cycles through the sources until
    /// `cell_count` tiles exist. Never truncates.
    pub fn fill<I>(
        &self,
        sources: &[Arc<TileSource<I>>],
        cell_count: usize,
    ) -> Result<Vec<Tile<I>>, TileWallError> {
        if sources.is_empty() {
            return if cell_count == 0 {
                Ok(Vec::new())
            } else {
                Err(TileWallError::EmptySource)
            };
        }

        let total = sources.len().max(cell_count);
        let tiles = (0..total)
            .map(|i| Tile::new(Arc::clone(&sources[i % sources.len()]), self.tile_size))
            .collect();
        Ok(tiles)
    }
}

fn dedupe<I>(sources: Vec<TileSource<I>>) -> Vec<Arc<TileSource<I>>> {
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .filter(|source| seen.insert(source.url.clone()))
        .map(Arc::new)
        .collect()
}
