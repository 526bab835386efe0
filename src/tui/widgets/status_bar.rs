//! Bottom status line: traffic, overlay readiness, capture and scroll state.

use crate::app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// One-line summary of the app state, drawn under a top border.
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn traffic_indicator(&self) -> Span<'static> {
        if self.state.traffic_paused {
            Span::styled("⏸ Paused", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "● Emitting",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        }
    }

    fn overlay_indicator(&self) -> Span<'static> {
        if self.state.console.is_ready() {
            Span::styled("Overlay ready", Style::default().fg(Color::Cyan))
        } else {
            Span::styled("Overlay loading", Style::default().fg(Color::DarkGray))
        }
    }

    fn record_count(&self) -> Span<'static> {
        let count = self.state.console.buffer().len();
        let text = if count == 1 {
            "1 record".to_string()
        } else {
            format!("{} records", count)
        };
        Span::styled(text, Style::default().fg(Color::Gray))
    }

    fn follow_indicator(&self) -> Span<'static> {
        if self.state.panel.auto_scroll {
            Span::styled("⬇ Follow", Style::default().fg(Color::Green))
        } else {
            Span::styled("⬆ Hold", Style::default().fg(Color::Yellow))
        }
    }

    /// 1-based visible line range over the total, `0/0` while empty.
    fn scroll_position(&self) -> String {
        let panel = &self.state.panel;
        if panel.total_lines == 0 {
            return "0/0".to_string();
        }
        let first = panel.offset + 1;
        let last = (panel.offset + panel.visible_lines).min(panel.total_lines);
        format!("{}-{}/{}", first, last, panel.total_lines)
    }

    /// Segment groups joined by `│`, padded one cell on each side.
    fn build_segments(&self) -> Vec<Span<'static>> {
        let sep = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
        let position = Span::styled(
            self.scroll_position(),
            Style::default().fg(Color::DarkGray),
        );

        let groups: Vec<Vec<Span<'static>>> = vec![
            vec![self.traffic_indicator()],
            vec![self.overlay_indicator()],
            vec![self.record_count()],
            vec![self.follow_indicator(), Span::raw(" "), position],
        ];

        let mut spans = vec![Span::raw(" ")];
        for (i, group) in groups.into_iter().enumerate() {
            if i > 0 {
                spans.push(sep.clone());
            }
            spans.extend(group);
        }
        spans.push(Span::raw(" "));
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.build_segments()))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}
