//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The field is a torus; the grid is recomputed from the snake and food every tick.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use collision::{detect_food_eaten, detect_self_collision};
pub use config::{ConfigFile, GameConfig};
pub use engine::{GameEngine, StepResult};
pub use food::FoodSpawner;
pub use grid::{CellMark, Grid, GridPoint};
pub use snake::Snake;
pub use state::{GameState, Phase};
