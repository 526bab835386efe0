//! Custom widget components

mod console_panel;
mod header;
mod status_bar;

pub use console_panel::ConsolePanel;
pub use header::Header;
pub use status_bar::StatusBar;
