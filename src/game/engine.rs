use super::{
    action::{Action, Direction},
    collision::{detect_food_eaten, detect_self_collision},
    config::GameConfig,
    food::FoodSpawner,
    grid::GridPoint,
    snake::Snake,
    state::{GameState, Phase},
};
use crate::audio::AudioCue;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

/// Outcome of a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Phase after the tick
    pub phase: Phase,
    /// One-shot cues for the audio collaborator
    pub cues: Vec<AudioCue>,
}

impl StepResult {
    fn idle(phase: Phase) -> Self {
        Self {
            ate_food: false,
            phase,
            cues: Vec::new(),
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    spawner: FoodSpawner<R>,
}

impl GameEngine<StdRng> {
    /// Create a new game engine, seeding food placement from the config
    /// when a seed is set
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            spawner: FoodSpawner::new(rng),
        }
    }

    /// Build a fresh running game carrying over `high_score`
    pub fn new_game(&mut self, high_score: u32) -> GameState {
        let snake = Snake::new(self.config.initial_snake_length);
        let food = self.initial_food(&snake);

        GameState::new(snake, food, self.config.field_size, high_score)
    }

    /// Start over: new snake and food, score back to 0, record kept
    pub fn restart(&mut self, state: &mut GameState) {
        *state = self.new_game(state.high_score);
        info!(high_score = state.high_score, "Game restarted");
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.phase.is_running() {
            return StepResult::idle(state.phase);
        }

        if let Action::Move(direction) = action {
            state.direction = direction;
        }

        state.snake.advance(state.direction, state.field_size);
        state.ticks += 1;

        let mut cues = Vec::new();
        let ate_food = detect_food_eaten(&state.snake, state.food);

        if ate_food {
            state.grow();
            cues.push(AudioCue::FoodCollected);
            debug!(score = state.score, length = state.snake.len(), "Food eaten");

            match self
                .spawner
                .respawn(state.field_size, &state.snake, state.food)
            {
                Some(food) => state.food = food,
                None => {
                    state.phase = Phase::Won;
                    info!(score = state.score, "Board full, game won");
                }
            }
        }

        if state.phase.is_running() && detect_self_collision(&state.snake) {
            state.phase = Phase::GameOver;
            cues.push(AudioCue::GameOver);
            info!(
                score = state.score,
                high_score = state.high_score,
                ticks = state.ticks,
                "Game over"
            );
        }

        StepResult {
            ate_food,
            phase: state.phase,
            cues,
        }
    }

    /// Step with the latest pending intent, if any
    pub fn tick(&mut self, state: &mut GameState, intent: Option<Direction>) -> StepResult {
        self.step(state, Action::from(intent))
    }

    /// Food starts five cells in from the bottom-right corner unless the
    /// snake is already there
    fn initial_food(&mut self, snake: &Snake) -> GridPoint {
        let size = self.config.field_size;
        let preferred = GridPoint::new(size as i32 - 5, size as i32 - 5);

        if preferred.is_within(size) && !snake.occupies(preferred) {
            return preferred;
        }

        self.spawner
            .respawn(size, snake, preferred)
            .unwrap_or(preferred)
    }
}
