use super::snake::Snake;

/// A coordinate on the playing field, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move point by delta, without any bounds handling
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Fold the point back onto a square field of the given size.
    ///
    /// The field is a torus: anything past the last index continues at 0 and
    /// anything below 0 continues at the last index.
    pub fn wrapped(&self, size: usize) -> Self {
        let size = size as i32;
        Self {
            x: self.x.rem_euclid(size),
            y: self.y.rem_euclid(size),
        }
    }

    pub fn is_within(&self, size: usize) -> bool {
        let size = size as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

/// Classification of a single field cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellMark {
    #[default]
    Empty,
    Food,
    Body,
    Head,
}

/// The logical playing field.
///
/// A grid is always derived from the snake and the food via [`Grid::project`];
/// it is never the source of truth for where things are.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellMark>,
}

impl Grid {
    /// Create an all-empty square grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellMark::Empty; size * size],
        }
    }

    /// Build the grid for the current snake and food.
    ///
    /// Segments are written in order so a later segment overwrites an earlier
    /// one sharing its cell. Food goes last and is never hidden.
    pub fn project(snake: &Snake, food: GridPoint, size: usize) -> Self {
        let mut grid = Self::new(size);

        for (i, segment) in snake.segments().iter().enumerate() {
            let mark = if i == 0 { CellMark::Head } else { CellMark::Body };
            grid.set(*segment, mark);
        }

        grid.set(food, CellMark::Food);
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, point: GridPoint) -> CellMark {
        self.index(point)
            .map(|i| self.cells[i])
            .unwrap_or(CellMark::Empty)
    }

    /// Write a mark; points outside the field are ignored
    pub fn set(&mut self, point: GridPoint, mark: CellMark) {
        if let Some(i) = self.index(point) {
            self.cells[i] = mark;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(CellMark::Empty);
    }

    /// Count cells carrying a given mark
    pub fn count(&self, mark: CellMark) -> usize {
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    fn index(&self, point: GridPoint) -> Option<usize> {
        if point.is_within(self.size) {
            Some(point.y as usize * self.size + point.x as usize)
        } else {
            None
        }
    }
}
