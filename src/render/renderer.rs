use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::screen::{BODY_GLYPH, DIVIDER_GLYPH, FOOD_GLYPH, HEAD_GLYPH, ScreenBuffer};

/// Paints a [`ScreenBuffer`] at the terminal origin
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, buffer: &ScreenBuffer, cursor_visible: bool) {
        let area = frame.area();
        let target = Rect::new(
            area.x,
            area.y,
            area.width.min(buffer.width() as u16),
            area.height.min(buffer.height() as u16),
        );

        frame.render_widget(Paragraph::new(self.lines(buffer)), target);

        if cursor_visible {
            frame.set_cursor_position((area.x, area.y));
        }
    }

    /// One line per buffer row, with runs of equally styled glyphs merged
    /// into a single span
    fn lines(&self, buffer: &ScreenBuffer) -> Vec<Line<'static>> {
        (0..buffer.height())
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut run_style = Style::default();

                for cell in buffer.row(row) {
                    let ch = cell.unwrap_or(' ');
                    let style = style_for(ch);

                    if style != run_style && !run.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut run), run_style));
                    }
                    run_style = style;
                    run.push(ch);
                }

                if !run.is_empty() {
                    spans.push(Span::styled(run, run_style));
                }

                Line::from(spans)
            })
            .collect()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn style_for(ch: char) -> Style {
    match ch {
        HEAD_GLYPH => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        BODY_GLYPH => Style::default().fg(Color::Green),
        FOOD_GLYPH => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        DIVIDER_GLYPH => Style::default().fg(Color::DarkGray),
        _ => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(buffer: &ScreenBuffer, width: u16, height: u16, cursor: bool) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, buffer, cursor))
            .unwrap();
        terminal
    }

    #[test]
    fn test_buffer_painted_at_origin() {
        let mut buffer = ScreenBuffer::new(6, 2);
        buffer.put_str(0, 0, "▓▓██");
        buffer.put_str(2, 1, "░░");

        let terminal = draw(&buffer, 10, 3, false);
        let painted = terminal.backend().buffer();

        assert_eq!(painted.cell((0, 0)).unwrap().symbol(), "▓");
        assert_eq!(painted.cell((3, 0)).unwrap().symbol(), "█");
        assert_eq!(painted.cell((2, 1)).unwrap().symbol(), "░");
        assert_eq!(painted.cell((0, 1)).unwrap().symbol(), " ");
        assert_eq!(painted.cell((0, 0)).unwrap().fg, Color::Cyan);
        assert_eq!(painted.cell((2, 1)).unwrap().fg, Color::Red);
    }

    #[test]
    fn test_clipped_to_small_terminal() {
        let mut buffer = ScreenBuffer::new(20, 5);
        buffer.put_str(0, 0, "Score: 12");

        let terminal = draw(&buffer, 5, 2, false);
        let painted = terminal.backend().buffer();

        assert_eq!(painted.cell((4, 0)).unwrap().symbol(), "e");
    }

    #[test]
    fn test_style_runs() {
        let mut buffer = ScreenBuffer::new(5, 1);
        buffer.put_str(0, 0, "██░ a");

        let lines = Renderer::new().lines(&buffer);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 3);
        assert_eq!(lines[0].spans[0].content, "██");
        assert_eq!(lines[0].spans[2].content, " a");
    }
}
