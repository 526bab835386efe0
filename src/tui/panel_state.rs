//! Panel scroll state - vertical and horizontal position tracking
//!
//! Offsets are in rendered rows: with wrap enabled one record can span
//! several rows, so the widget reports row counts back here during render.

/// Scroll state for the console panel.
#[derive(Debug)]
pub struct PanelState {
    /// Vertical offset from the top, in rendered rows.
    pub offset: usize,
    /// Horizontal offset from the left, in columns.
    pub h_offset: usize,
    /// Stick the viewport to the newest rows.
    pub auto_scroll: bool,

    // Geometry reported by the widget on each render pass.
    pub total_lines: usize,
    pub visible_lines: usize,
    pub max_line_width: usize,
    pub visible_width: usize,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            offset: 0,
            h_offset: 0,
            auto_scroll: true,
            total_lines: 0,
            visible_lines: 0,
            max_line_width: 0,
            visible_width: 0,
        }
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    fn max_h_offset(&self) -> usize {
        self.max_line_width.saturating_sub(self.visible_width)
    }

    /// A page is one viewport with two rows of overlap, never less than 1.
    fn page_len(&self) -> usize {
        self.visible_lines.saturating_sub(2).max(1)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.auto_scroll = false;
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
        // Reaching the last row re-engages follow mode
        if self.offset == self.max_offset() {
            self.auto_scroll = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_scroll = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_scroll = true;
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_len());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_len());
    }

    /// Take the row counts the widget measured for this frame.
    ///
    /// In follow mode the viewport pins to the tail; a manual offset is
    /// kept but clamped, content may have shrunk under it (clear, wrap
    /// toggle).
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        if self.auto_scroll || self.offset > self.max_offset() {
            self.offset = self.max_offset();
        }
    }

    pub fn scroll_left(&mut self, n: usize) {
        self.h_offset = self.h_offset.saturating_sub(n);
    }

    pub fn scroll_right(&mut self, n: usize) {
        self.h_offset = (self.h_offset + n).min(self.max_h_offset());
    }

    /// Snap back to column 0 (wrap re-enabled)
    pub fn reset_horizontal(&mut self) {
        self.h_offset = 0;
    }

    /// Take the column widths the widget measured for this frame.
    pub fn update_horizontal_size(&mut self, max_width: usize, visible_width: usize) {
        self.max_line_width = max_width;
        self.visible_width = visible_width;
        self.h_offset = self.h_offset.min(self.max_h_offset());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
