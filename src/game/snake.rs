use super::action::Direction;
use super::grid::GridPoint;

/// Row the snake starts on after every (re)initialization
const START_ROW: i32 = 5;

/// Column of the last body segment at start
const START_TAIL_COLUMN: i32 = 2;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Segments with the head at index 0, then body from head to tail
    segments: Vec<GridPoint>,
}

impl Snake {
    /// Create the starting snake: a horizontal line on row 5 facing right,
    /// with its tail at column 2.
    pub fn new(length: usize) -> Self {
        let length = length.max(1) as i32;
        let head_x = START_TAIL_COLUMN + length - 1;

        let segments = (0..length)
            .map(|i| GridPoint::new(head_x - i, START_ROW))
            .collect();

        Self { segments }
    }

    /// Build a snake from explicit segments, head first.
    /// Returns `None` for an empty list.
    pub fn from_segments(segments: Vec<GridPoint>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// Get the head position
    pub fn head(&self) -> GridPoint {
        self.segments[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> GridPoint {
        self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[GridPoint] {
        &self.segments
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[GridPoint] {
        &self.segments[1..]
    }

    /// Check if position is occupied by any segment, head included
    pub fn occupies(&self, pos: GridPoint) -> bool {
        self.segments.contains(&pos)
    }

    /// Advance one cell in `direction` on a square torus of `size` cells.
    ///
    /// Every body segment takes its predecessor's pre-move position. If the
    /// head would land on the second segment's old cell the requested turn is
    /// dropped and the head steps sideways instead: each axis on which it is
    /// aligned with the second segment gets incremented.
    pub fn advance(&mut self, direction: Direction, size: usize) {
        let head = self.head();
        let second = self.segments.get(1).copied();

        // Tail first, so every read sees the predecessor before it is written
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }

        let (dx, dy) = direction.delta();
        let target = head.moved_by(dx, dy).wrapped(size);

        self.segments[0] = match second {
            Some(second) if target == second => {
                let mut shifted = head;
                if shifted.x == second.x {
                    shifted.x += 1;
                }
                if shifted.y == second.y {
                    shifted.y += 1;
                }
                shifted.wrapped(size)
            }
            _ => target,
        };
    }

    /// Append a segment on top of the current tail; it gets pulled into
    /// place by the next move.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.segments.push(tail);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a snake has at least its head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(head: GridPoint, length: i32) -> Snake {
        Snake::from_segments((0..length).map(|i| head.moved_by(-i, 0)).collect()).unwrap()
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(5);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), GridPoint::new(6, 5));
        assert_eq!(snake.body_segments()[0], GridPoint::new(5, 5));
        assert_eq!(snake.tail(), GridPoint::new(2, 5));
    }

    #[test]
    fn test_from_empty_segments() {
        assert!(Snake::from_segments(vec![]).is_none());
    }

    #[test]
    fn test_follow_the_leader() {
        let mut snake = Snake::new(5);
        let before = snake.segments().to_vec();

        snake.advance(Direction::Down, 20);

        assert_eq!(snake.head(), GridPoint::new(6, 6));
        assert_eq!(&snake.segments()[1..], &before[..4]);
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn test_wrap_left_edge() {
        let mut snake = Snake::from_segments(vec![
            GridPoint::new(0, 5),
            GridPoint::new(0, 4),
            GridPoint::new(0, 3),
        ])
        .unwrap();

        snake.advance(Direction::Left, 20);

        assert_eq!(snake.head(), GridPoint::new(19, 5));
    }

    #[test]
    fn test_wrap_all_edges() {
        let mut snake = Snake::from_segments(vec![GridPoint::new(19, 0)]).unwrap();
        snake.advance(Direction::Right, 20);
        assert_eq!(snake.head(), GridPoint::new(0, 0));
        snake.advance(Direction::Up, 20);
        assert_eq!(snake.head(), GridPoint::new(0, 19));
        snake.advance(Direction::Down, 20);
        assert_eq!(snake.head(), GridPoint::new(0, 0));
        snake.advance(Direction::Left, 20);
        assert_eq!(snake.head(), GridPoint::new(19, 0));
    }

    #[test]
    fn test_wrap_invariant_over_many_ticks() {
        let mut snake = Snake::new(5);
        let turns = [
            Direction::Up,
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Right,
            Direction::Left,
        ];

        for tick in 0..500 {
            snake.advance(turns[tick % turns.len()], 12);
            if tick % 50 == 0 {
                snake.grow();
            }
            assert!(snake.segments().iter().all(|s| s.is_within(12)));
        }
    }

    #[test]
    fn test_reversal_is_rejected() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut snake = Snake::from_segments(vec![GridPoint::new(10, 10)]).unwrap();
            snake.grow();
            // Lay the body out behind the head
            snake.advance(direction, 20);
            let second_before = snake.segments()[1];

            snake.advance(direction.opposite(), 20);

            assert_ne!(snake.head(), second_before, "reversed from {direction:?}");
        }
    }

    #[test]
    fn test_reversal_shifts_sideways() {
        let mut snake = horizontal(GridPoint::new(6, 5), 5);

        snake.advance(Direction::Left, 20);

        // Same row as the neck, so the row is bumped
        assert_eq!(snake.head(), GridPoint::new(6, 6));
        assert_eq!(snake.segments()[1], GridPoint::new(6, 5));
    }

    #[test]
    fn test_reversal_across_wrap_edge() {
        let mut snake = Snake::from_segments(vec![
            GridPoint::new(0, 5),
            GridPoint::new(19, 5),
            GridPoint::new(18, 5),
        ])
        .unwrap();

        snake.advance(Direction::Left, 20);

        assert_ne!(snake.head(), GridPoint::new(19, 5));
        assert_eq!(snake.head(), GridPoint::new(0, 6));
    }

    #[test]
    fn test_sideways_shift_wraps() {
        let mut snake = Snake::from_segments(vec![
            GridPoint::new(4, 19),
            GridPoint::new(3, 19),
        ])
        .unwrap();

        snake.advance(Direction::Left, 20);

        assert_eq!(snake.head(), GridPoint::new(4, 0));
    }

    #[test]
    fn test_grow() {
        let mut snake = Snake::new(5);
        let tail = snake.tail();

        snake.grow();
        assert_eq!(snake.len(), 6);
        assert_eq!(snake.tail(), tail);

        // The new segment is pulled along, not left behind
        snake.advance(Direction::Right, 20);
        assert_eq!(snake.len(), 6);
        assert_eq!(snake.tail(), tail);
        assert_eq!(snake.segments()[4], GridPoint::new(3, 5));
    }
}
