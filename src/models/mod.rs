pub mod catalog;
pub mod grid;
pub mod tile;

pub use catalog::CoverManifest;
pub use grid::{GridDims, Viewport};
pub use tile::{Direction, Tile, TileSource};
