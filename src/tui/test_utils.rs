//! Buffer-level rendering assertions over ratatui's `TestBackend`.
//!
//! Widget and view tests render into an off-screen buffer and assert on
//! its flattened text, so they stay independent of any real terminal.

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

/// An off-screen terminal that records what a render pass produced.
pub struct TestTerminal {
    width: u16,
    height: u16,
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24, the size most panel tests assume.
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("test backend terminal");
        Self {
            width,
            height,
            terminal,
        }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Run one full draw pass, e.g. `term.draw_with(|frame| view(frame, &mut state))`.
    pub fn draw_with(&mut self, render: impl FnOnce(&mut Frame)) {
        self.terminal.draw(render).expect("draw pass");
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    pub fn render_stateful_widget<W: StatefulWidget>(
        &mut self,
        widget: W,
        area: Rect,
        state: &mut W::State,
    ) {
        self.draw_with(|frame| frame.render_stateful_widget(widget, area, state));
    }

    /// The rendered buffer as text, one string row per terminal row.
    pub fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let mut rows = Vec::with_capacity(self.height as usize);
        for y in 0..buffer.area.height {
            let mut row = String::new();
            for x in 0..buffer.area.width {
                row.push_str(buffer[(x, y)].symbol());
            }
            rows.push(row);
        }
        rows.join("\n")
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{LogRecord, RecordKind};
    use crate::tui::widgets::ConsolePanel;

    #[test]
    fn test_default_size_is_80x24() {
        let term = TestTerminal::new();
        assert_eq!(term.area(), Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn test_buffer_contains_rendered_markup() {
        let records = vec![LogRecord::new(
            RecordKind::Error,
            "panel offline",
            "09:15:00",
        )];
        let mut term = TestTerminal::with_size(60, 8);
        term.render_widget(ConsolePanel::new(&records), term.area());

        assert!(term.buffer_contains("[09:15:00] [ERROR] - panel offline"));
        assert!(!term.buffer_contains("never rendered"));
    }

    #[test]
    fn test_content_keeps_row_structure() {
        let records = vec![
            LogRecord::new(RecordKind::Info, "first", "09:15:00"),
            LogRecord::new(RecordKind::Info, "second", "09:15:01"),
        ];
        let mut term = TestTerminal::with_size(60, 8);
        term.render_widget(ConsolePanel::new(&records), term.area());

        let content = term.content();
        let first_row = content.lines().position(|row| row.contains("first"));
        let second_row = content.lines().position(|row| row.contains("second"));
        assert!(first_row.is_some() && second_row.is_some());
        assert!(first_row < second_row, "rows must keep render order");
    }
}
