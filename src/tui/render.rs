//! Frame composition

use super::{layout, widgets};
use crate::app::state::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one full frame.
///
/// Reads the app state without mutating it, except for the panel scroll
/// state the console widget measures during render.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let display = state.console.display();
    let show_console = state.console.is_ready();
    let areas = layout::create(area, show_console, display.collapsed);

    frame.render_widget(widgets::Header, areas.header);

    render_host_content(frame, areas.content, state);

    // The console overlay stays hidden until its template has loaded
    if show_console {
        let records = state.console.buffer().snapshot();
        let mut panel = widgets::ConsolePanel::new(&records).display(display);
        if let Some(template) = state.console.template() {
            panel = panel.template(template);
        }
        frame.render_stateful_widget(panel, areas.console, &mut state.panel);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

/// Render the simulated host application area
fn render_host_content(frame: &mut Frame, area: Rect, state: &AppState) {
    let traffic_line = if state.traffic_paused {
        Line::from(Span::styled(
            "  Traffic generator paused. Press [p] to resume.",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::raw(
            "  A background task is emitting log traffic. Press [p] to pause it.",
        ))
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Simulated host application",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        traffic_line,
        Line::from(Span::raw(
            "  Press [1]-[5] to emit a single sample record by hand.",
        )),
    ];

    if !state.console.is_ready() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Loading console template...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Host ");

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
