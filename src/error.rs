// src/error.rs
//
// Errors surfaced by the tile wall

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TileWallError {
    /// No usable source images while the grid still needs cells filled.
    EmptySource,
    InvalidConfig(String),
    Manifest(String),
}

impl fmt::Display for TileWallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileWallError::EmptySource => write!(f, "no source images to fill the grid with"),
            TileWallError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            TileWallError::Manifest(msg) => write!(f, "unreadable cover manifest: {}", msg),
        }
    }
}

impl std::error::Error for TileWallError {}
