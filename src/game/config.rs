use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the game
///
/// The playfield is described in pixels plus a cell size, the way the
/// rendering surface sees it. Grid dimensions are derived, truncating any
/// partial cell at the right and bottom edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Edge length of one grid cell in pixels. A zero cell size yields an
    /// empty grid rather than a panic.
    pub cell_size: u32,
    /// Milliseconds between game ticks. The mode loops feed this to a
    /// tokio interval, which requires a nonzero period.
    pub tick_interval_ms: u64,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded per food item
    pub food_points: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 400,
            cell_size: 20,
            tick_interval_ms: 150,
            initial_snake_length: 3,
            food_points: 10,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom canvas geometry
    pub fn new(canvas_width: u32, canvas_height: u32, cell_size: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            cell_size,
            ..Default::default()
        }
    }

    /// Number of whole cells across the canvas
    pub fn grid_width(&self) -> usize {
        self.canvas_width.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    /// Number of whole cells down the canvas
    pub fn grid_height(&self) -> usize {
        self.canvas_height.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    /// Tick cadence as a duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Small 10x10 board for testing
    pub fn small() -> Self {
        Self::new(200, 200, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width(), 30);
        assert_eq!(config.grid_height(), 20);
        assert_eq!(config.tick_interval(), Duration::from_millis(150));
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_points, 10);
    }

    #[test]
    fn test_partial_cells_truncate() {
        let config = GameConfig::new(610, 415, 20);
        assert_eq!(config.grid_width(), 30);
        assert_eq!(config.grid_height(), 20);
    }

    #[test]
    fn test_small_config() {
        let config = GameConfig::small();
        assert_eq!(config.grid_width(), 10);
        assert_eq!(config.grid_height(), 10);
    }

    #[test]
    fn test_zero_cell_size_yields_empty_grid() {
        let config = GameConfig::new(600, 400, 0);
        assert_eq!(config.grid_width(), 0);
        assert_eq!(config.grid_height(), 0);
    }
}
