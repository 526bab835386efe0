//! Vertical split of the screen into bands

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the console panel when expanded
pub const CONSOLE_HEIGHT: u16 = 12;

/// Height of the console panel when collapsed (border bar with title)
pub const CONSOLE_BAR_HEIGHT: u16 = 2;

/// One band per region, top to bottom
pub struct ScreenAreas {
    pub header: Rect,
    pub content: Rect,
    pub console: Rect,
    pub status: Rect,
}

/// Split the screen.
///
/// The console band is zero-height until the overlay is ready, and shrinks
/// to a title bar while collapsed.
pub fn create(area: Rect, console_visible: bool, console_collapsed: bool) -> ScreenAreas {
    let console_height = match (console_visible, console_collapsed) {
        (false, _) => 0,
        (true, true) => CONSOLE_BAR_HEIGHT,
        (true, false) => CONSOLE_HEIGHT,
    };

    let chunks = Layout::vertical([
        Constraint::Length(3),              // Header
        Constraint::Min(5),                 // Host content
        Constraint::Length(console_height), // Console overlay
        Constraint::Length(2),              // Status bar (1 for border + 1 for content)
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        console: chunks[2],
        status: chunks[3],
    }
}
