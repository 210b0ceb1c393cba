use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// Configuration for one play session
///
/// The board is derived from a display area and a fixed tile size: every
/// whole tile that fits in the area is a cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the display area in pixels
    pub area_width: u32,
    /// Height of the display area in pixels
    pub area_height: u32,
    /// Side of one tile in pixels
    pub tile_size: u32,
    /// Pixels left blank on the right and bottom of each drawn tile
    pub tile_gap: u32,
    /// Tiles travelled per tick
    pub speed: i32,
    /// Delay between two ticks in milliseconds
    pub tick_delay_ms: u64,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            area_width: 400,
            area_height: 400,
            tile_size: 20,
            tile_gap: 2,
            speed: 1,
            tick_delay_ms: 150,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration whose area holds exactly `tiles_x` by `tiles_y` tiles
    pub fn with_board(tiles_x: u32, tiles_y: u32) -> Self {
        let defaults = Self::default();
        Self {
            area_width: tiles_x * defaults.tile_size,
            area_height: tiles_y * defaults.tile_size,
            ..defaults
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::with_board(10, 10)
    }

    /// Parses a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Reads and validates a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.tile_size > 0, "tile_size must be positive");
        ensure!(
            self.tile_gap < self.tile_size,
            "tile_gap ({}) must be smaller than tile_size ({})",
            self.tile_gap,
            self.tile_size
        );
        ensure!(self.speed > 0, "speed must be positive");
        ensure!(self.tick_delay_ms > 0, "tick_delay_ms must be positive");
        ensure!(
            self.tile_count_x() > 0 && self.tile_count_y() > 0,
            "a {}x{} area holds no {}px tile",
            self.area_width,
            self.area_height,
            self.tile_size
        );
        ensure!(
            self.fits_pixel_range(self.tile_count_x()) && self.fits_pixel_range(self.tile_count_y()),
            "a {}x{} tile board at speed {} overflows 32-bit pixel coordinates",
            self.tile_count_x(),
            self.tile_count_y(),
            self.speed
        );
        Ok(())
    }

    /// A head can sit up to `speed` tiles past either edge; its pixel
    /// position must still fit in an `i32`.
    fn fits_pixel_range(&self, tiles: u32) -> bool {
        let reach = (i128::from(tiles) + i128::from(self.speed)) * i128::from(self.tile_size);
        reach <= i128::from(i32::MAX)
    }

    /// Number of whole tiles across the area
    pub fn tile_count_x(&self) -> u32 {
        self.area_width.checked_div(self.tile_size).unwrap_or(0)
    }

    /// Number of whole tiles down the area
    pub fn tile_count_y(&self) -> u32 {
        self.area_height.checked_div(self.tile_size).unwrap_or(0)
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }
}
