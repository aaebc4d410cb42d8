use super::grid::GridPoint;
use super::snake::Snake;

/// True iff the head sits on the food
pub fn detect_food_eaten(snake: &Snake, food: GridPoint) -> bool {
    snake.head() == food
}

/// True iff any non-head segment shares the head's cell
pub fn detect_self_collision(snake: &Snake) -> bool {
    snake.body_segments().contains(&snake.head())
}
