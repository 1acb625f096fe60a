use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use super::{action::Direction, grid::Grid, state::Position};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Milliseconds between two ticks
    pub tick_millis: u64,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Head cell of a fresh snake
    pub start_head: Position,
    /// Heading of a fresh snake; the body trails the other way
    pub start_direction: Direction,
    /// Food cell at the start of every game
    pub initial_food: Position,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            tick_millis: 100,
            initial_snake_length: 3,
            start_head: Position::new(7, 5),
            start_direction: Direction::Right,
            initial_food: Position::new(10, 10),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Size the grid from a board in pixels, e.g. a 600x400 canvas of 20px cells
    pub fn from_pixels(board_width_px: usize, board_height_px: usize, cell_px: usize) -> Self {
        let grid = Grid::from_pixels(board_width_px, board_height_px, cell_px);
        Self::new(grid.width(), grid.height())
    }

    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Check that a game built from this config starts in a playable state
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width >= 3 && self.grid_height >= 3,
            "grid must be at least 3x3, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.grid_width <= i32::MAX as usize && self.grid_height <= i32::MAX as usize,
            "grid dimensions are too large"
        );
        ensure!(self.tick_millis > 0, "tick_millis must be positive");
        ensure!(
            self.initial_snake_length >= 1,
            "initial_snake_length must be at least 1"
        );

        let grid = self.grid();
        let back = self.start_direction.opposite();
        let mut segment = self.start_head;
        for index in 0..self.initial_snake_length {
            ensure!(
                grid.in_bounds(segment),
                "initial snake segment {} at ({}, {}) is outside the {}x{} grid",
                index,
                segment.x,
                segment.y,
                self.grid_width,
                self.grid_height
            );
            segment = segment.moved_in_direction(back);
        }

        ensure!(
            grid.in_bounds(self.initial_food),
            "initial food at ({}, {}) is outside the {}x{} grid",
            self.initial_food.x,
            self.initial_food.y,
            self.grid_width,
            self.grid_height
        );
        ensure!(
            !grid.is_border(self.initial_food),
            "initial food at ({}, {}) sits on the border of the {}x{} grid",
            self.initial_food.x,
            self.initial_food.y,
            self.grid_width,
            self.grid_height
        );

        Ok(())
    }
}
