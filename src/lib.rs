//! Terminal Snake - a snake game on a toroidal field
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, food, collisions, engine
//! - Screen projection and TUI rendering (render module)
//! - Keyboard mapping (input module)
//! - Audio cue sinks (audio module)
//! - Session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
