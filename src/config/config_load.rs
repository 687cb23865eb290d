// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{
    AnimationConfig, EngineConfig, GridConfig, PathConfig, SchedulerConfig, WindowConfig,
};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub paths: PathConfig,
    pub animation: AnimationConfig,
    pub grid: GridConfig,
    pub scheduler: SchedulerConfig,
}

impl Config {
    /// Loads from `explicit` when given, otherwise from beside the executable,
    /// otherwise from the working directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from(Path::new("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, Box<dyn Error>> {
        let config: Config = toml::from_str(content)?;
        config.engine_config().validate()?;
        Ok(config)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("Ignoring {}: {}", config_path.display(), e);
                    None
                }
            }
        } else {
            None
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            animation: self.animation.clone(),
            grid: self.grid.clone(),
            scheduler: self.scheduler.clone(),
        }
    }

    pub fn resolve_manifest_path(&self) -> PathBuf {
        resolve_path(&self.paths.cover_manifest)
    }

    pub fn resolve_cover_dir(&self) -> PathBuf {
        resolve_path(&self.paths.cover_directory)
    }
}

// Relative paths resolve against the executable's directory
fn resolve_path(raw: &str) -> PathBuf {
    if Path::new(raw).is_absolute() {
        PathBuf::from(raw)
    } else {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .map(|exe_dir| exe_dir.join(raw))
            .unwrap_or_else(|| PathBuf::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
            [window]
            width = 800
            height = 600

            [animation]
            scroll_speed = 3.0
            tile_size = 300.0
            spacing = 10.0
            direction = { x = 1.0, y = 0.0 }
            alternating_columns = true
            should_shuffle = false

            [grid]
            overlap = 1.0

            [scheduler]
            target_fps = 30.0
        "#;
        let config = Config::parse(content).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.animation.cell_size(), 310.0);
        assert_eq!(config.animation.direction, Direction::new(1.0, 0.0));
        assert!(config.animation.alternating_columns);
        assert!(!config.animation.should_shuffle);
        assert_eq!(config.grid.overlap, 1.0);
        assert_eq!(config.grid.margin_cells, 1);
        assert_eq!(config.scheduler.target_fps, 30.0);
        // untouched fields keep their defaults
        assert_eq!(config.animation.border_radius, 10.0);
        assert_eq!(config.paths.cover_directory, "covers");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let content = r#"
            [animation]
            tile_size = 0.0
        "#;
        assert!(Config::parse(content).is_err());
    }
}
