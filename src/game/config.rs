use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Smallest field that fits the starting snake and its food
pub const MIN_FIELD_SIZE: usize = 8;

/// Narrowest info panel to the right of the field
pub const MIN_PANEL_WIDTH: usize = 30;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square field, in cells
    pub field_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Width of the side info panel, in columns
    pub panel_width: usize,
    /// Time between ticks
    pub tick_interval_ms: u64,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
    /// Emit audio cues
    pub sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_size: 20,
            initial_snake_length: 5,
            panel_width: 40,
            tick_interval_ms: 20,
            seed: None,
            sound: true,
        }
    }
}

/// A config file as written on disk.
///
/// The field size is kept apart because leaving it out means "fit the
/// terminal", which only the caller can measure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigFile {
    pub field_size: Option<usize>,
    #[serde(flatten)]
    pub game: GameConfig,
}

impl ConfigFile {
    /// Load from a JSON file. Missing keys take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let file: ConfigFile = serde_json::from_str(&json).context("Failed to parse config")?;
        Ok(file)
    }
}

impl GameConfig {
    /// Create a new configuration with a custom field size
    pub fn new(field_size: usize) -> Self {
        Self {
            field_size,
            ..Default::default()
        }
    }

    /// Create a small field for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Reject settings the game cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.field_size < MIN_FIELD_SIZE {
            bail!(
                "Field size {} is too small (minimum {})",
                self.field_size,
                MIN_FIELD_SIZE
            );
        }
        if self.panel_width < MIN_PANEL_WIDTH {
            bail!(
                "Panel width {} is too small (minimum {})",
                self.panel_width,
                MIN_PANEL_WIDTH
            );
        }
        if self.initial_snake_length == 0 {
            bail!("Initial snake length must be at least 1");
        }
        if self.initial_snake_length + 2 >= self.field_size {
            bail!(
                "Initial snake length {} does not fit a field of size {}",
                self.initial_snake_length,
                self.field_size
            );
        }
        if self.tick_interval_ms == 0 {
            bail!("Tick interval must be positive");
        }
        Ok(())
    }
}
