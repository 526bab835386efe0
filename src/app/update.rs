//! State transitions
//!
//! Every mutation of [`AppState`] goes through [`update`]; input handling
//! and background tasks only ever hand it messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;

use super::message::{Message, SampleKind};
use super::state::{AppPhase, AppState};
use crate::record::RecordKind;

/// Outcome of one `update` step
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Follow-up to feed back into `update`, if the step produced one
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}

/// Advance the app by one message.
///
/// Key presses are not acted on directly; they map to a follow-up
/// message so every mutation has a single write path.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::TemplateReady(template) => {
            state.console.apply_template(template);
            UpdateResult::none()
        }

        Message::ToggleWrap => {
            state.console.toggle_scroll_mode();
            // Re-enabling wrap snaps the view back to column 0
            if state.console.display().wrap_enabled {
                state.panel.reset_horizontal();
            }
            UpdateResult::none()
        }

        Message::ToggleCollapse => {
            state.console.toggle_collapse();
            UpdateResult::none()
        }

        Message::ClearConsole => {
            state.console.clear();
            UpdateResult::none()
        }

        Message::EmitSample(kind) => {
            emit_sample(state, kind);
            UpdateResult::none()
        }

        Message::ToggleTraffic => {
            state.traffic_paused = !state.traffic_paused;
            UpdateResult::none()
        }

        Message::ScrollUp => {
            state.panel.scroll_up(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            state.panel.scroll_down(1);
            UpdateResult::none()
        }

        Message::ScrollToTop => {
            state.panel.scroll_to_top();
            UpdateResult::none()
        }

        Message::ScrollToBottom => {
            state.panel.scroll_to_bottom();
            UpdateResult::none()
        }

        Message::PageUp => {
            state.panel.page_up();
            UpdateResult::none()
        }

        Message::PageDown => {
            state.panel.page_down();
            UpdateResult::none()
        }

        Message::ScrollLeft(n) => {
            if !state.console.display().wrap_enabled {
                state.panel.scroll_left(n);
            }
            UpdateResult::none()
        }

        Message::ScrollRight(n) => {
            if !state.console.display().wrap_enabled {
                state.panel.scroll_right(n);
            }
            UpdateResult::none()
        }
    }
}

/// Emit one sample record through the structured append path
fn emit_sample(state: &mut AppState, kind: SampleKind) {
    match kind {
        SampleKind::Log => state
            .console
            .append(RecordKind::Log, &[json!("checkpoint"), json!(42)]),
        SampleKind::Info => state
            .console
            .append(RecordKind::Info, &[json!("session established")]),
        SampleKind::Warn => state
            .console
            .append(RecordKind::Warn, &[json!("latency"), json!(250), json!("ms")]),
        SampleKind::Error => state.console.append(
            RecordKind::Error,
            &[json!({"code": 500, "message": "backend unavailable"})],
        ),
        SampleKind::Debug => state
            .console
            .append(RecordKind::Debug, &[json!(["retries", 3])]),
    }
}

/// Translate a key press into its bound message
pub fn handle_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        // Session
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),

        // Console toggles
        KeyCode::Char('w') => Some(Message::ToggleWrap),
        KeyCode::Char('c') => Some(Message::ToggleCollapse),
        KeyCode::Char('x') => Some(Message::ClearConsole),
        KeyCode::Char('p') => Some(Message::ToggleTraffic),

        // Sample records
        KeyCode::Char('1') => Some(Message::EmitSample(SampleKind::Log)),
        KeyCode::Char('2') => Some(Message::EmitSample(SampleKind::Info)),
        KeyCode::Char('3') => Some(Message::EmitSample(SampleKind::Warn)),
        KeyCode::Char('4') => Some(Message::EmitSample(SampleKind::Error)),
        KeyCode::Char('5') => Some(Message::EmitSample(SampleKind::Debug)),

        // Viewport
        KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp),
        KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::PageDown => Some(Message::PageDown),
        KeyCode::Home => Some(Message::ScrollToTop),
        KeyCode::End => Some(Message::ScrollToBottom),
        KeyCode::Left => Some(Message::ScrollLeft(10)),
        KeyCode::Right => Some(Message::ScrollRight(10)),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use crate::template::PanelTemplate;

    fn test_state() -> AppState {
        AppState::new(Console::detached())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_enters_quitting_phase() {
        let mut state = test_state();
        assert_ne!(state.phase, AppPhase::Quitting);

        update(&mut state, Message::Quit);

        assert!(state.should_quit());
    }

    #[test]
    fn test_q_and_esc_map_to_quit() {
        assert!(matches!(handle_key(press(KeyCode::Char('q'))), Some(Message::Quit)));
        assert!(matches!(handle_key(press(KeyCode::Esc)), Some(Message::Quit)));
    }

    #[test]
    fn test_ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(handle_key(key), Some(Message::Quit)));
    }

    #[test]
    fn test_plain_c_toggles_collapse() {
        let result = handle_key(press(KeyCode::Char('c')));
        assert!(matches!(result, Some(Message::ToggleCollapse)));
    }

    #[test]
    fn test_key_message_forwards_mapped_message() {
        let mut state = test_state();

        let result = update(&mut state, Message::Key(press(KeyCode::Char('x'))));

        assert!(matches!(result.message, Some(Message::ClearConsole)));
    }

    #[test]
    fn test_unmapped_key_produces_nothing() {
        assert!(handle_key(press(KeyCode::Char('z'))).is_none());
    }

    #[test]
    fn test_toggle_wrap_is_involution() {
        let mut state = test_state();
        let before = state.console.display();

        update(&mut state, Message::ToggleWrap);
        assert_ne!(state.console.display().wrap_enabled, before.wrap_enabled);

        update(&mut state, Message::ToggleWrap);
        assert_eq!(state.console.display(), before);
    }

    #[test]
    fn test_reenabling_wrap_resets_horizontal_offset() {
        let mut state = test_state();
        state.panel.update_horizontal_size(200, 80);

        // Wrap off, scroll right, wrap back on
        update(&mut state, Message::ToggleWrap);
        update(&mut state, Message::ScrollRight(30));
        assert_eq!(state.panel.h_offset, 30);

        update(&mut state, Message::ToggleWrap);
        assert_eq!(state.panel.h_offset, 0);
    }

    #[test]
    fn test_toggle_collapse_is_involution() {
        let mut state = test_state();
        assert!(!state.console.display().collapsed);

        update(&mut state, Message::ToggleCollapse);
        assert!(state.console.display().collapsed);

        update(&mut state, Message::ToggleCollapse);
        assert!(!state.console.display().collapsed);
    }

    #[test]
    fn test_clear_console_empties_buffer() {
        let mut state = test_state();
        update(&mut state, Message::EmitSample(SampleKind::Info));
        assert_eq!(state.console.buffer().len(), 1);

        update(&mut state, Message::ClearConsole);
        assert!(state.console.buffer().is_empty());
    }

    #[test]
    fn test_emit_sample_error_is_pretty_json() {
        let mut state = test_state();
        update(&mut state, Message::EmitSample(SampleKind::Error));

        let records = state.console.buffer().snapshot();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, RecordKind::Error);
        assert!(
            records[0].message.contains("{\n"),
            "Message was: {}",
            records[0].message
        );
        assert!(records[0].message.contains("\"code\": 500"));
    }

    #[test]
    fn test_emit_sample_joins_args_with_spaces() {
        let mut state = test_state();
        update(&mut state, Message::EmitSample(SampleKind::Warn));

        let records = state.console.buffer().snapshot();
        assert_eq!(records[0].message, "latency 250 ms");
    }

    #[test]
    fn test_scroll_messages_move_panel() {
        let mut state = test_state();
        state.panel.update_content_size(100, 10);
        assert_eq!(state.panel.offset, 90);

        update(&mut state, Message::ScrollUp);
        assert_eq!(state.panel.offset, 89);
        assert!(!state.panel.auto_scroll);

        update(&mut state, Message::ScrollToBottom);
        assert_eq!(state.panel.offset, 90);
        assert!(state.panel.auto_scroll);
    }

    #[test]
    fn test_horizontal_scroll_ignored_while_wrap_enabled() {
        let mut state = test_state();
        state.panel.update_horizontal_size(200, 80);
        assert!(state.console.display().wrap_enabled);

        update(&mut state, Message::ScrollRight(30));
        assert_eq!(state.panel.h_offset, 0);
    }

    #[test]
    fn test_template_ready_applies_template() {
        let mut state = test_state();
        assert!(!state.console.is_ready());

        let template = PanelTemplate {
            start_collapsed: true,
            ..PanelTemplate::default()
        };
        update(&mut state, Message::TemplateReady(template));

        assert!(state.console.is_ready());
        assert!(state.console.display().collapsed);
    }

    #[test]
    fn test_toggle_traffic_flips_pause() {
        let mut state = test_state();
        update(&mut state, Message::ToggleTraffic);
        assert!(state.traffic_paused);

        update(&mut state, Message::ToggleTraffic);
        assert!(!state.traffic_paused);
    }
}
