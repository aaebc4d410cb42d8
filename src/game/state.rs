use super::action::Direction;
use super::grid::{Grid, GridPoint};
use super::snake::Snake;

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// The snake ran into itself
    GameOver,
    /// No free cell left for food
    Won,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }
}

/// Complete game state, owned by the game loop
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: GridPoint,
    /// Last committed direction, kept when a tick has no input
    pub direction: Direction,
    pub field_size: usize,
    pub score: u32,
    /// Best score this process run; survives restarts
    pub high_score: u32,
    pub phase: Phase,
    pub ticks: u64,
}

impl GameState {
    /// Create a new running game state with score 0
    pub fn new(snake: Snake, food: GridPoint, field_size: usize, high_score: u32) -> Self {
        Self {
            snake,
            food,
            direction: Direction::Right,
            field_size,
            score: 0,
            high_score,
            phase: Phase::Running,
            ticks: 0,
        }
    }

    /// Lengthen the snake and count the point
    pub fn grow(&mut self) {
        self.snake.grow();
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Current field as cell marks
    pub fn grid(&self) -> Grid {
        Grid::project(&self.snake, self.food, self.field_size)
    }
}
