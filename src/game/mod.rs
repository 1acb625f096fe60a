//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A front end drives it by calling [`GameEngine::tick`] on its own timer and
//! reading [`Snapshot`]s back.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::GameEngine;
pub use food::Food;
pub use grid::Grid;
pub use state::{Advance, CollisionType, GameState, Phase, Position, Snake, Snapshot};
