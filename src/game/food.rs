use rand::Rng;

use super::grid::GridPoint;
use super::snake::Snake;

/// Places food on a uniformly chosen free cell
pub struct FoodSpawner<R: Rng> {
    rng: R,
}

impl<R: Rng> FoodSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a new food cell on a `size`×`size` field.
    ///
    /// Candidates are every cell not covered by the snake and not the current
    /// food cell, scanned column by column. Returns `None` when the board has
    /// no free cell left.
    pub fn respawn(
        &mut self,
        size: usize,
        snake: &Snake,
        current_food: GridPoint,
    ) -> Option<GridPoint> {
        let size = size as i32;
        let candidates: Vec<GridPoint> = (0..size)
            .flat_map(|x| (0..size).map(move |y| GridPoint::new(x, y)))
            .filter(|&p| p != current_food && !snake.occupies(p))
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let next = self.rng.gen_range(0..candidates.len());
        Some(candidates[next])
    }
}
