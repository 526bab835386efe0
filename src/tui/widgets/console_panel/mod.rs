//! Scrollable console panel widget with per-kind formatting
//!
//! Renders captured records as `[HH:MM:SS] [KIND] - message` rows inside a
//! bordered panel. Wrapping is done by hand (fixed-width chunking) so the
//! row count reported to [`PanelState`] always matches what is on screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
        Widget,
    },
};

use crate::console::DisplayState;
use crate::record::{LogRecord, RecordKind};
use crate::template::PanelTemplate;
use crate::tui::panel_state::PanelState;

/// Console panel widget.
pub struct ConsolePanel<'a> {
    records: &'a [LogRecord],
    display: DisplayState,
    /// Chrome overrides loaded from a template file
    template: Option<&'a PanelTemplate>,
}

impl<'a> ConsolePanel<'a> {
    pub fn new(records: &'a [LogRecord]) -> Self {
        Self {
            records,
            display: DisplayState::default(),
            template: None,
        }
    }

    pub fn display(mut self, display: DisplayState) -> Self {
        self.display = display;
        self
    }

    pub fn template(mut self, template: &'a PanelTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Get style for record kind - returns (tag_style, message_style)
    fn kind_style(kind: RecordKind) -> (Style, Style) {
        match kind {
            RecordKind::Error => (
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::LightRed),
            ),
            RecordKind::Warn => (
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Yellow),
            ),
            RecordKind::Info => (
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White),
            ),
            RecordKind::Debug => (
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::DarkGray),
            ),
            RecordKind::Log => (
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Gray),
            ),
        }
    }

    /// Format a record as styled lines.
    ///
    /// The first line carries the timestamp and kind tag; multi-line
    /// messages (pretty-printed objects) continue on bare lines in the
    /// message style.
    fn format_record(record: &LogRecord) -> Vec<Line<'static>> {
        let (tag_style, msg_style) = Self::kind_style(record.kind);

        let mut message_lines = record.message.lines();
        let first = message_lines.next().unwrap_or("");

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("[{}] ", record.timestamp),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!("[{}] - ", record.kind.tag()), tag_style),
            Span::styled(first.to_string(), msg_style),
        ])];

        for continuation in message_lines {
            lines.push(Line::from(Span::styled(continuation.to_string(), msg_style)));
        }

        lines
    }

    /// Width of a line in character cells
    fn line_width(line: &Line) -> usize {
        line.spans.iter().map(|s| s.content.chars().count()).sum()
    }

    /// Flatten a line into one styled cell per character.
    fn styled_cells(line: &Line) -> Vec<(char, Style)> {
        line.spans
            .iter()
            .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
            .collect()
    }

    /// Rebuild a line from cells, merging same-style runs into spans.
    fn cells_to_line(cells: &[(char, Style)]) -> Line<'static> {
        let mut run_style = match cells.first() {
            Some(&(_, style)) => style,
            None => return Line::default(),
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();
        for &(c, style) in cells {
            if style != run_style {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
                run_style = style;
            }
            run.push(c);
        }
        spans.push(Span::styled(run, run_style));

        Line::from(spans)
    }

    /// Break a line into fixed-width rows, preserving span styles.
    ///
    /// Paragraph's own Wrap breaks at word boundaries, which makes the
    /// wrapped row count unpredictable; scroll math needs exact rows.
    fn hard_wrap(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
        if width == 0 || Self::line_width(&line) <= width {
            return vec![line];
        }

        Self::styled_cells(&line)
            .chunks(width)
            .map(Self::cells_to_line)
            .collect()
    }

    /// Window a line by the horizontal offset, marking clipped sides.
    fn clip_columns(line: Line<'static>, h_offset: usize, visible_width: usize) -> Line<'static> {
        if h_offset == 0 && Self::line_width(&line) <= visible_width {
            return line;
        }

        let cells = Self::styled_cells(&line);
        if h_offset >= cells.len() {
            return Line::default();
        }

        let clipped_left = h_offset > 0;
        let window_end = (h_offset + visible_width).min(cells.len());
        let clipped_right = window_end < cells.len();

        // The ← → markers take one cell out of the window on their side
        let start = h_offset + usize::from(clipped_left);
        let width = visible_width
            .saturating_sub(usize::from(clipped_left))
            .saturating_sub(usize::from(clipped_right));
        let end = (start + width).min(cells.len());

        let marker = Style::default().fg(Color::DarkGray);
        let mut spans: Vec<Span<'static>> = Vec::new();
        if clipped_left {
            spans.push(Span::styled("←", marker));
        }
        if start < end {
            spans.extend(Self::cells_to_line(&cells[start..end]).spans);
        }
        if clipped_right {
            spans.push(Span::styled("→", marker));
        }

        Line::from(spans)
    }

    /// Generate the title line with affordance hints
    fn build_title(&self, chrome: &PanelTemplate) -> Line<'static> {
        let mut spans = vec![Span::raw(format!(" {} ", chrome.title.trim()))];

        if self.display.wrap_enabled {
            spans.push(Span::styled(
                format!("[{}] ", chrome.affordances.wrap_label),
                Style::default().fg(Color::Green),
            ));
        } else {
            spans.push(Span::styled(
                format!("[{}] ", chrome.affordances.scroll_label),
                Style::default().fg(Color::Blue),
            ));
        }

        let collapse_hint = if self.display.collapsed {
            &chrome.affordances.expand_title
        } else {
            &chrome.affordances.collapse_title
        };
        spans.push(Span::styled(
            format!("[{}] ", collapse_hint),
            Style::default().fg(Color::DarkGray),
        ));

        Line::from(spans)
    }

    fn panel_block(&self, chrome: &PanelTemplate) -> Block<'static> {
        Block::default()
            .title(self.build_title(chrome))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
    }

    /// Render empty state with a centered hint
    fn render_empty(&self, chrome: &PanelTemplate, area: Rect, buf: &mut Buffer) {
        let block = self.panel_block(chrome);
        let inner = block.inner(area);
        block.render(area, buf);

        let hint = vec![
            Line::default(),
            Line::styled(
                "No console output",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(
                "Captured log records will appear here",
                Style::default().fg(Color::DarkGray),
            ),
        ];

        Paragraph::new(hint).centered().render(inner, buf);
    }
}

impl<'a> StatefulWidget for ConsolePanel<'a> {
    type State = PanelState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let fallback = PanelTemplate::default();
        let chrome = self.template.unwrap_or(&fallback);

        if self.display.collapsed {
            // Title bar only
            self.panel_block(chrome).render(area, buf);
            return;
        }

        if self.records.is_empty() {
            self.render_empty(chrome, area, buf);
            return;
        }

        let block = self.panel_block(chrome);
        let inner = block.inner(area);
        block.render(area, buf);

        let visible_width = inner.width as usize;

        // Build the full flat list of rendered rows
        let mut all_lines: Vec<Line> = Vec::new();
        for record in self.records {
            for line in Self::format_record(record) {
                if self.display.wrap_enabled {
                    all_lines.extend(Self::hard_wrap(line, visible_width));
                } else {
                    all_lines.push(line);
                }
            }
        }

        let total_lines = all_lines.len();
        let visible_lines = inner.height as usize;

        // Update state with content dimensions
        state.update_content_size(total_lines, visible_lines);

        // Calculate max line width for horizontal scroll bounds. Wrapped
        // rows never exceed the visible width, so the bound collapses to 0.
        let max_line_width = all_lines.iter().map(Self::line_width).max().unwrap_or(0);
        state.update_horizontal_size(max_line_width, visible_width);

        let visible_rows: Vec<Line> = all_lines
            .into_iter()
            .skip(state.offset)
            .take(visible_lines)
            .map(|line| {
                if self.display.wrap_enabled {
                    line
                } else {
                    Self::clip_columns(line, state.h_offset, visible_width)
                }
            })
            .collect();

        // Render content WITHOUT Paragraph wrapping (rows are pre-shaped)
        Paragraph::new(visible_rows).render(inner, buf);

        // Scrollbar only once the scrollback outgrows the viewport
        if total_lines > visible_lines {
            let mut vscroll = ScrollbarState::new(total_lines).position(state.offset);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .render(area, buf, &mut vscroll);
        }

        // Horizontal scrollbar only makes sense in scroll mode
        if !self.display.wrap_enabled && max_line_width > visible_width {
            let mut hscroll = ScrollbarState::new(max_line_width).position(state.h_offset);
            Scrollbar::new(ScrollbarOrientation::HorizontalBottom)
                .begin_symbol(Some("◄"))
                .end_symbol(Some("►"))
                .track_symbol(Some("─"))
                .thumb_symbol("█")
                .render(area, buf, &mut hscroll);
        }
    }
}

// Stateless render path, used when scroll position does not matter
impl Widget for ConsolePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = PanelState::new();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}
