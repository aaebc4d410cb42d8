//! Projection of game state onto a fixed-size character buffer
//!
//! Each field cell takes two adjacent columns so the square field looks
//! square in a terminal. The info panel sits to the right of a two-column
//! divider.

use crate::game::{CellMark, GameState, Grid, GridPoint, Phase};

pub const FOOD_GLYPH: char = '░';
pub const BODY_GLYPH: char = '█';
pub const HEAD_GLYPH: char = '▓';
pub const DIVIDER_GLYPH: char = '▒';

/// Columns taken by the divider between field and panel
pub const DIVIDER_WIDTH: usize = 2;

/// Row of the first info panel line
const PANEL_ROW: usize = 13;

/// Gap between the divider and the panel text
const PANEL_INDENT: usize = 1;

/// Character grid handed to the terminal. `None` means nothing is drawn there.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenBuffer {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl ScreenBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        self.index(col, row).and_then(|i| self.cells[i])
    }

    /// Write one slot; anything off the buffer is clipped
    pub fn set(&mut self, col: usize, row: usize, ch: Option<char>) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = ch;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Place literal text starting at (col, row), clipped at the right edge
    pub fn put_str(&mut self, col: usize, row: usize, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            self.set(col + offset, row, Some(ch));
        }
    }

    pub fn row(&self, row: usize) -> &[Option<char>] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Rows as printable strings, undrawn slots as spaces
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(|row| self.row(row).iter().map(|c| c.unwrap_or(' ')).collect())
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.width && row < self.height).then(|| row * self.width + col)
    }
}

/// Screen geometry derived from the field size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub field_size: usize,
    pub panel_width: usize,
}

impl ScreenLayout {
    pub fn new(field_size: usize, panel_width: usize) -> Self {
        Self {
            field_size,
            panel_width,
        }
    }

    pub fn width(&self) -> usize {
        self.divider_column() + DIVIDER_WIDTH + self.panel_width
    }

    pub fn height(&self) -> usize {
        self.field_size
    }

    /// First column right of the double-width field
    pub fn divider_column(&self) -> usize {
        self.field_size * 2
    }

    pub fn panel_column(&self) -> usize {
        self.divider_column() + DIVIDER_WIDTH + PANEL_INDENT
    }

    pub fn buffer(&self) -> ScreenBuffer {
        ScreenBuffer::new(self.width(), self.height())
    }
}

/// Turns game state into screen contents
pub struct ScreenProjector {
    layout: ScreenLayout,
}

impl ScreenProjector {
    pub fn new(layout: ScreenLayout) -> Self {
        Self { layout }
    }

    /// Draw whatever the phase calls for: the field with its panel while
    /// running, a message screen otherwise
    pub fn project(&self, state: &GameState, buffer: &mut ScreenBuffer) {
        match state.phase {
            Phase::Running => {
                self.project_field(&state.grid(), buffer);
                self.project_info(state.score, state.high_score, buffer);
            }
            Phase::GameOver => self.project_message("Game over!", buffer),
            Phase::Won => self.project_message("You won!", buffer),
        }
    }

    /// Rewrite the whole field region, two columns per cell
    pub fn project_field(&self, grid: &Grid, buffer: &mut ScreenBuffer) {
        let size = grid.size() as i32;

        for y in 0..size {
            for x in 0..size {
                let glyph = glyph_for(grid.get(GridPoint::new(x, y)));
                let col = x as usize * 2;
                buffer.set(col, y as usize, glyph);
                buffer.set(col + 1, y as usize, glyph);
            }
        }
    }

    /// Blank the panel, draw the divider and the labels
    pub fn project_info(&self, score: u32, high_score: u32, buffer: &mut ScreenBuffer) {
        let divider = self.layout.divider_column();

        for row in 0..buffer.height() {
            for col in divider + 1..buffer.width() {
                buffer.set(col, row, Some(' '));
            }
            buffer.set(divider, row, Some(DIVIDER_GLYPH));
            buffer.set(divider + 1, row, Some(DIVIDER_GLYPH));
        }

        let lines = [
            format!("Score: {score}"),
            format!("Record: {high_score}"),
            "Controls: Arrows ║ ↑ ║ ↓ ║ ← ║ → ║".to_string(),
            "Controls: C to toggle cursor".to_string(),
            "Controls: ESC to exit".to_string(),
        ];

        // Short screens pull the labels up so the score stays visible
        let top = PANEL_ROW.min(buffer.height().saturating_sub(lines.len()));
        let col = self.layout.panel_column();
        for (i, line) in lines.iter().enumerate() {
            buffer.put_str(col, top + i, line);
        }
    }

    /// Clear the screen and show `headline` with restart and exit hints
    pub fn project_message(&self, headline: &str, buffer: &mut ScreenBuffer) {
        buffer.clear();

        let col = (buffer.width() / 2).saturating_sub(10);
        let row = (buffer.height() / 2).saturating_sub(1);

        buffer.put_str(col, row, headline);
        buffer.put_str(col, row + 1, "Press R to restart!");
        buffer.put_str(col, row + 2, "Press ESC to exit!");
    }
}

fn glyph_for(mark: CellMark) -> Option<char> {
    match mark {
        CellMark::Empty => None,
        CellMark::Food => Some(FOOD_GLYPH),
        CellMark::Body => Some(BODY_GLYPH),
        CellMark::Head => Some(HEAD_GLYPH),
    }
}
