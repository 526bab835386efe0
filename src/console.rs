//! The console overlay component
//!
//! Ties together the capture side (buffer + facade interception) and the
//! display side (toggle state + panel chrome). Capture starts at
//! construction; the panel itself stays invisible until a template is
//! applied.

use serde_json::Value;

use crate::buffer::LogBuffer;
use crate::error::Result;
use crate::intercept::{self, InterceptGuard};
use crate::record::{format_args, LogRecord, RecordKind};
use crate::template::PanelTemplate;

/// Toggleable display configuration for the overlay panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    /// When true entries wrap at the panel width; when false they overflow
    /// horizontally and the scroll affordance takes over.
    pub wrap_enabled: bool,
    /// When true the panel is reduced to its title bar.
    pub collapsed: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            wrap_enabled: true,
            collapsed: false,
        }
    }
}

/// Debug console overlay: captured history plus its display configuration.
///
/// Dropping a capturing console releases its capture guard; facade calls
/// keep flowing to the prior handler afterwards.
#[derive(Debug)]
pub struct Console {
    buffer: LogBuffer,
    display: DisplayState,
    template: Option<PanelTemplate>,
    ready: bool,
    _guard: Option<InterceptGuard>,
}

impl Console {
    /// Build the overlay and start capturing immediately.
    ///
    /// Interception is live from this point on, before any visual setup;
    /// records captured while the panel is still invisible show up once
    /// the template arrives.
    pub fn new() -> Result<Self> {
        let buffer = LogBuffer::new();
        let guard = intercept::install(buffer.clone())?;
        Ok(Self {
            buffer,
            display: DisplayState::default(),
            template: None,
            ready: false,
            _guard: Some(guard),
        })
    }

    /// Build the overlay without touching the `log` facade.
    ///
    /// Records only arrive through [`Console::append`]. Used by embedders
    /// that feed records themselves.
    pub fn detached() -> Self {
        Self {
            buffer: LogBuffer::new(),
            display: DisplayState::default(),
            template: None,
            ready: false,
            _guard: None,
        }
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    pub fn display(&self) -> DisplayState {
        self.display
    }

    pub fn template(&self) -> Option<&PanelTemplate> {
        self.template.as_ref()
    }

    /// Whether the panel chrome has arrived and the overlay may be drawn.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Structured append: stringify the arguments, stamp the current local
    /// time, push the record. Total over any argument list.
    pub fn append(&self, kind: RecordKind, args: &[Value]) {
        self.buffer.push(LogRecord::now(kind, format_args(args)));
    }

    /// Empty the history. The next draw shows an empty panel.
    pub fn clear(&self) {
        self.buffer.clear();
    }

    /// Flip between wrapped entries and horizontal overflow.
    pub fn toggle_scroll_mode(&mut self) {
        self.display.wrap_enabled = !self.display.wrap_enabled;
    }

    /// Collapse the panel to its title bar, or expand it again.
    pub fn toggle_collapse(&mut self) {
        self.display.collapsed = !self.display.collapsed;
    }

    /// Display-ready hook: attach the loaded chrome, honor its initial
    /// collapsed flag and mark the panel visible.
    pub fn apply_template(&mut self, template: PanelTemplate) {
        self.display.collapsed = template.start_collapsed;
        self.template = Some(template);
        self.ready = true;
    }
}
