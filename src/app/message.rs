//! Messages driving the update loop
//!
//! Every input source (keyboard, signals, background tasks) funnels into
//! this one enum; `app::update` is the only consumer.

use crate::template::PanelTemplate;
use crossterm::event::KeyEvent;

/// Unified input for `update`
#[derive(Debug, Clone)]
pub enum Message {
    /// Key press forwarded from the event poll
    Key(KeyEvent),

    /// Event poll timed out with nothing pending
    Tick,

    /// Tear down the UI and exit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Console overlay
    // ─────────────────────────────────────────────────────────
    /// One-shot template load finished; the overlay may appear
    TemplateReady(PanelTemplate),
    /// Flip line wrapping in the console panel
    ToggleWrap,
    /// Collapse or expand the console panel
    ToggleCollapse,
    /// Empty the console buffer
    ClearConsole,
    /// Emit one sample record through the structured append path
    EmitSample(SampleKind),

    // ─────────────────────────────────────────────────────────
    // Viewport
    // ─────────────────────────────────────────────────────────
    /// Scroll console panel up one line
    ScrollUp,
    /// Scroll console panel down one line
    ScrollDown,
    /// Scroll to top of console panel
    ScrollToTop,
    /// Scroll to bottom of console panel
    ScrollToBottom,
    /// Page up in console panel
    PageUp,
    /// Page down in console panel
    PageDown,
    /// Scroll left by n columns (wrap off only)
    ScrollLeft(usize),
    /// Scroll right by n columns (wrap off only)
    ScrollRight(usize),

    // ─────────────────────────────────────────────────────────
    // Demo traffic
    // ─────────────────────────────────────────────────────────
    /// Pause or resume the demo traffic generator
    ToggleTraffic,
}

/// Which sample record the number keys emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Log,
    Info,
    Warn,
    Error,
    Debug,
}
