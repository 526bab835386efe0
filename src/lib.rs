//! # termcon - Terminal Console Overlay
//!
//! An embeddable debug console for terminal apps. Installs an interceptor on
//! the `log` facade, captures every record into a shared buffer, and renders
//! that buffer as a ratatui overlay panel with scrollback, wrapping, and
//! collapse controls.
//!
//! ## Public API
//!
//! ### Capture (`intercept`)
//! - [`install()`] - Route facade records into a [`LogBuffer`], forwarding to the prior logger
//! - [`install_with_forward()`] - Same, with an explicit downstream logger
//! - [`InterceptGuard`] - Uninstall handle; dropping it stops capture
//!
//! ### Records (`record`)
//! - [`LogRecord`] - A captured record with kind, message, and timestamp
//! - [`RecordKind`] - Record severity (Log, Info, Warn, Error, Debug)
//! - [`format_args()`] - Join JSON arguments into a single display string
//!
//! ### Storage (`buffer`)
//! - [`LogBuffer`] - Shared append-only record store
//!
//! ### Console (`console`)
//! - [`Console`] - Capture, display state, and template behind one handle
//! - [`DisplayState`] - Wrap and collapse flags for the overlay panel
//!
//! ### Templates (`template`)
//! - [`PanelTemplate`] - Overlay chrome loaded from a TOML file
//! - [`Affordances`] - Labels for the panel's toggle controls
//!
//! ### Errors (`error`)
//! - [`Error`] - What can fail, split into fatal and recoverable cases
//! - [`Result`] - Crate-wide result alias
//! - [`ResultExt`] - Log-and-continue context helpers
//!
//! ## Prelude
//!
//! The prelude pulls in the error types and tracing macros:
//! ```rust
//! use termcon::prelude::*;
//! ```

pub mod app;
pub mod buffer;
pub mod console;
pub mod error;
pub mod intercept;
pub mod logging;
pub mod record;
pub mod template;
pub mod tui;

/// Error types and tracing macros, imported everywhere
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Flat re-exports so embedders rarely need the module paths
pub use app::{run, RunOptions};
pub use buffer::LogBuffer;
pub use console::{Console, DisplayState};
pub use error::{Error, Result, ResultExt};
pub use intercept::{install, install_with_forward, InterceptGuard};
pub use record::{format_args, LogRecord, RecordKind};
pub use template::{Affordances, PanelTemplate};
pub use tui::panel_state::PanelState;
pub use tui::widgets::ConsolePanel;
