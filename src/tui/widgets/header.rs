//! Title bar with the key binding legend.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const BINDINGS: [(&str, &str); 6] = [
    ("w", "Wrap"),
    ("c", "Collapse"),
    ("x", "Clear"),
    ("p", "Pause"),
    ("1-5", "Samples"),
    ("q", "Quit"),
];

/// App title plus one `[key] Action` legend entry per binding.
#[derive(Default)]
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().fg(Color::DarkGray);
        let key = Style::default().fg(Color::Yellow);

        let mut spans = vec![
            Span::styled(
                " termcon",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        for (binding, label) in BINDINGS {
            spans.push(Span::styled("[", dim));
            spans.push(Span::styled(binding, key));
            spans.push(Span::styled(format!("] {}  ", label), dim));
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_every_binding() {
        let mut term = TestTerminal::new();
        term.render_widget(Header::new(), term.area());

        assert!(term.buffer_contains("termcon"));
        for (binding, label) in BINDINGS {
            assert!(
                term.buffer_contains(&format!("[{}] {}", binding, label)),
                "missing legend entry for {}",
                binding
            );
        }
    }
}
