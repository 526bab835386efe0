//! Shared mutable state of the demo app

use crate::console::Console;
use crate::tui::panel_state::PanelState;

/// Whether the event loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    Running,
    Quitting,
}

/// Everything `update` mutates and `view` reads
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// The console overlay under demonstration
    pub console: Console,

    /// Console panel scroll state
    pub panel: PanelState,

    /// Whether the demo traffic generator is paused
    pub traffic_paused: bool,
}

impl AppState {
    pub fn new(console: Console) -> Self {
        Self {
            phase: AppPhase::Running,
            console,
            panel: PanelState::new(),
            traffic_paused: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_running() {
        let state = AppState::new(Console::detached());
        assert_eq!(state.phase, AppPhase::Running);
        assert!(!state.should_quit());
        assert!(!state.traffic_paused);
    }

    #[test]
    fn test_should_quit_after_phase_change() {
        let mut state = AppState::new(Console::detached());
        state.phase = AppPhase::Quitting;
        assert!(state.should_quit());
    }
}
