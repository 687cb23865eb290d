// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

use crate::error::TileWallError;
use crate::models::Direction;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            title: "tilewall".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PathConfig {
    pub cover_manifest: String,
    pub cover_directory: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            cover_manifest: "covers.json".to_string(),
            cover_directory: "covers".to_string(),
        }
    }
}

/************************* Animation Configs ********************/

/// Immutable per run. `tile_size + spacing` is the grid period.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub scroll_speed: f32, // pixels per tick at direction magnitude 1
    pub tile_size: f32,
    pub spacing: f32,
    pub border_radius: f32,
    pub direction: Direction,
    pub alternating_columns: bool,
    pub should_shuffle: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            scroll_speed: 2.0,
            tile_size: 400.0,
            spacing: 0.0,
            border_radius: 10.0,
            direction: Direction::new(0.9, 1.0),
            alternating_columns: false,
            should_shuffle: true,
        }
    }
}

impl AnimationConfig {
    pub fn cell_size(&self) -> f32 {
        self.tile_size + self.spacing
    }

    pub fn validate(&self) -> Result<(), TileWallError> {
        let cell_size = self.cell_size();
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(TileWallError::InvalidConfig(format!(
                "tile_size + spacing must be positive, got {}",
                cell_size
            )));
        }
        if self.tile_size <= 0.0 || self.spacing < 0.0 {
            return Err(TileWallError::InvalidConfig(format!(
                "tile_size must be positive and spacing non-negative, got {} and {}",
                self.tile_size, self.spacing
            )));
        }
        if !(self.scroll_speed.is_finite() && self.scroll_speed >= 0.0) {
            return Err(TileWallError::InvalidConfig(format!(
                "scroll_speed must be finite and non-negative, got {}",
                self.scroll_speed
            )));
        }
        let in_range = |v: f32| (-1.0..=1.0).contains(&v);
        if !in_range(self.direction.x) || !in_range(self.direction.y) {
            return Err(TileWallError::InvalidConfig(format!(
                "direction components must lie in [-1, 1], got ({}, {})",
                self.direction.x, self.direction.y
            )));
        }
        if self.border_radius < 0.0 {
            return Err(TileWallError::InvalidConfig(format!(
                "border_radius must be non-negative, got {}",
                self.border_radius
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub margin_cells: u32, // off-screen cells beyond the viewport, per axis
    pub overlap: f32,      // bleed in pixels against hairline seams
    pub round_to_pixel: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            margin_cells: 1,
            overlap: 0.0,
            round_to_pixel: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SchedulerConfig {
    pub target_fps: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { target_fps: 60.0 }
    }
}

impl SchedulerConfig {
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }
}

/// Everything a `TileWall` needs, split out of the file-level `Config`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub animation: AnimationConfig,
    pub grid: GridConfig,
    pub scheduler: SchedulerConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), TileWallError> {
        self.animation.validate()?;
        if self.grid.margin_cells < 1 {
            return Err(TileWallError::InvalidConfig(
                "margin_cells must be at least 1".to_string(),
            ));
        }
        if !(self.grid.overlap.is_finite() && self.grid.overlap >= 0.0) {
            return Err(TileWallError::InvalidConfig(format!(
                "overlap must be finite and non-negative, got {}",
                self.grid.overlap
            )));
        }
        if !(self.scheduler.target_fps.is_finite() && self.scheduler.target_fps > 0.0) {
            return Err(TileWallError::InvalidConfig(format!(
                "target_fps must be positive, got {}",
                self.scheduler.target_fps
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.animation.cell_size(), 400.0);
        assert!((config.scheduler.frame_interval_ms() - 1000.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_zero_cell_size() {
        let mut config = EngineConfig::default();
        config.animation.tile_size = 0.0;
        config.animation.spacing = 0.0;
        assert!(matches!(
            config.validate(),
            Err(TileWallError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_direction() {
        let mut config = EngineConfig::default();
        config.animation.direction = Direction::new(1.5, 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_margin_and_fps() {
        let mut config = EngineConfig::default();
        config.grid.margin_cells = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.scheduler.target_fps = 0.0;
        assert!(config.validate().is_err());
    }
}
