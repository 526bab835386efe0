//! Terminal lifecycle guard
//!
//! Raw mode and the alternate screen must be released on every exit path,
//! including a panic inside the draw closure.

use std::sync::Once;

use ratatui::DefaultTerminal;

static HOOK: Once = Once::new();

/// Owns the terminal while the UI runs. Restores on drop.
pub struct TerminalSession {
    term: DefaultTerminal,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen.
    ///
    /// The first session chains a panic hook that restores the terminal
    /// before the default handler prints its report.
    pub fn enter() -> Self {
        HOOK.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                ratatui::restore();
                previous(info);
            }));
        });
        Self {
            term: ratatui::init(),
        }
    }

    pub fn terminal_mut(&mut self) -> &mut DefaultTerminal {
        &mut self.term
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
