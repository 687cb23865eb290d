// src/views/mod.rs

pub mod tile_wall;

pub use tile_wall::TileWall;
