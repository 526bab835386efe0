//! Application lifecycle
//!
//! [`run`] wires interception, the terminal guard and the background
//! tasks, then drives [`run_loop`] until a quit message lands.

use tokio::sync::{mpsc, watch};

use crate::app::message::Message;
use crate::app::state::AppState;
use crate::app::{self, signals, tasks, RunOptions};
use crate::console::Console;
use crate::prelude::*;

use super::{event, render, terminal};

/// Run the TUI application
pub async fn run(options: RunOptions) -> Result<()> {
    // Interception must be active before the first traffic record is emitted
    let console = Console::new()?;

    // Raw mode is held by the guard until `run` returns
    let mut session = terminal::TerminalSession::enter();

    let mut state = AppState::new(console);
    state.traffic_paused = options.quiet;

    // Create unified message channel (for signal handler, tasks, etc.)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // SIGINT/SIGTERM arrive as ordinary quit messages
    signals::spawn_signal_handler(msg_tx.clone());

    // One-shot template load; the overlay is revealed when it lands
    tasks::spawn_template_load(msg_tx.clone(), options.template.clone());

    // Background traffic generator with a pause switch
    let (pause_tx, pause_rx) = watch::channel(options.quiet);
    let traffic = tasks::spawn_traffic(pause_rx, options.interval_ms);

    let result = run_loop(session.terminal_mut(), &mut state, msg_rx, &pause_tx);

    // Stop background traffic
    traffic.abort();

    result
}

/// Draw, poll, drain, until the state says quit
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    pause_tx: &watch::Sender<bool>,
) -> Result<()> {
    while !state.should_quit() {
        // Drain whatever the signal handler and tasks queued up
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }

        // Propagate the pause flag to the traffic task
        if *pause_tx.borrow() != state.traffic_paused {
            let _ = pause_tx.send(state.traffic_paused);
        }
    }

    Ok(())
}

/// Process a message and any follow-ups it produces
fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = app::update(state, msg).message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppPhase;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_quit_key_chains_to_quitting_phase() {
        let mut state = AppState::new(Console::detached());

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        process_message(&mut state, Message::Key(key));

        assert_eq!(state.phase, AppPhase::Quitting);
        assert!(state.should_quit());
    }

    #[test]
    fn test_sample_key_chains_to_record_append() {
        let mut state = AppState::new(Console::detached());

        let key = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE);
        process_message(&mut state, Message::Key(key));

        let records = state.console.buffer().snapshot();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut state = AppState::new(Console::detached());

        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        process_message(&mut state, Message::Key(key));

        assert_eq!(state.phase, AppPhase::Running);
        assert!(state.console.buffer().is_empty());
    }
}
